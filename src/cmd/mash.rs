//! Mash and boil commands: infusions, strike water and DME additions

use anyhow::Result;
use std::io::Write;

use brew_tools::convert::{c_to_f, f_to_c, kg_to_lbs, l_to_g, oz_to_g};
use brew_tools::process;

use super::{prompt, Context};

/// Hot water needed to step the mash up to a new temperature
///
/// Values are used in the user's own units. Infusion water already at the
/// target temperature reports no addition.
pub fn cmd_infuse(
    ctx: &Context,
    temp: Option<f64>,
    target: Option<f64>,
    ratio: Option<f64>,
    grain: Option<f64>,
    water: Option<f64>,
    out: &mut impl Write,
) -> Result<()> {
    let labels = ctx.labels();
    let temp = prompt::unit_number(temp, "temp", "Current temperature of mash", labels.temp)?;
    let target = prompt::unit_number(target, "target", "Target temperature of mash", labels.temp)?;
    let ratio = prompt::unit_number(ratio, "ratio", "Grist/water ratio", labels.ratio)?;
    let grain = prompt::unit_number(grain, "grain", "Weight of grain in mash", labels.lrg_weight)?;
    let water = prompt::unit_number(water, "water", "Temperature of infusion water", labels.temp)?;

    let infusion = match process::infusion(ratio, temp, target, water, grain) {
        Ok(volume) => volume,
        Err(err) => {
            tracing::warn!(error = %err, "no infusion possible, reporting zero");
            0.0
        }
    };

    writeln!(
        out,
        "Infuse with {:.2} {} @ {:.1}{}",
        infusion, labels.infusion_vol, water, labels.temp
    )?;
    Ok(())
}

/// Strike water temperature for a grain bill and water volume
pub fn cmd_strike(
    ctx: &Context,
    grain: Option<f64>,
    vol: Option<f64>,
    temp: Option<f64>,
    out: &mut impl Write,
) -> Result<()> {
    let labels = ctx.labels();
    let mut grain = prompt::unit_number(grain, "grain", "Weight of grains", labels.lrg_weight)?;
    let mut vol = prompt::unit_number(vol, "vol", "Volume of water", labels.vol)?;
    let mut temp = prompt::unit_number(temp, "temp", "Desired mash temp", labels.temp)?;

    if ctx.is_metric() {
        grain = kg_to_lbs(grain);
        vol = l_to_g(vol);
        temp = c_to_f(temp);
    }

    let mut strike = process::strike_temp(grain, vol, temp);
    if ctx.is_metric() {
        strike = f_to_c(strike);
    }

    writeln!(
        out,
        "Strike water temp should be {:.3}{}",
        strike, labels.temp
    )?;
    Ok(())
}

/// DME needed to raise the wort gravity by a number of points
pub fn cmd_dme(
    ctx: &Context,
    points: Option<f64>,
    vol: Option<f64>,
    out: &mut impl Write,
) -> Result<()> {
    let labels = ctx.labels();
    let points = prompt::number(points, "points", "Points needed to achieve target gravity")?;
    let mut vol = prompt::unit_number(vol, "vol", "Current volume of the wort", labels.vol)?;

    if ctx.is_metric() {
        vol = l_to_g(vol);
    }

    let mut amount = process::pre_boil_dme(points, vol);
    if ctx.is_metric() {
        amount = oz_to_g(amount);
    }

    writeln!(
        out,
        "Add {:.2}{} of DME to raise the wort gravity by {} points",
        amount, labels.weight, points
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::testing::{capture, imperial, metric};

    #[test]
    fn test_infuse_metric() {
        let output = capture(|out| {
            cmd_infuse(
                &metric(),
                Some(66.0),
                Some(70.0),
                Some(1.0),
                Some(5.0),
                Some(100.0),
                out,
            )
        });
        assert_eq!(output, "Infuse with 0.80 liters @ 100.0C\n");
    }

    #[test]
    fn test_infuse_imperial() {
        let output = capture(|out| {
            cmd_infuse(
                &imperial(),
                Some(152.0),
                Some(168.0),
                Some(1.5),
                Some(10.0),
                Some(212.0),
                out,
            )
        });
        assert_eq!(output, "Infuse with 6.18 quarts @ 212.0F\n");
    }

    #[test]
    fn test_infuse_water_at_target_reports_zero() {
        let output = capture(|out| {
            cmd_infuse(
                &metric(),
                Some(62.0),
                Some(72.0),
                Some(3.0),
                Some(5.0),
                Some(72.0),
                out,
            )
        });
        assert_eq!(output, "Infuse with 0.00 liters @ 72.0C\n");
    }

    #[test]
    fn test_strike_imperial() {
        let output =
            capture(|out| cmd_strike(&imperial(), Some(10.0), Some(3.5), Some(152.0), out));
        assert_eq!(output, "Strike water temp should be 167.143F\n");
    }

    #[test]
    fn test_strike_metric() {
        let output = capture(|out| cmd_strike(&metric(), Some(5.0), Some(15.0), Some(66.0), out));
        assert_eq!(output, "Strike water temp should be 74.142C\n");
    }

    #[test]
    fn test_dme_imperial() {
        let output = capture(|out| cmd_dme(&imperial(), Some(5.0), Some(3.25), out));
        assert_eq!(
            output,
            "Add 5.91oz of DME to raise the wort gravity by 5 points\n"
        );
    }

    #[test]
    fn test_dme_metric() {
        let output = capture(|out| cmd_dme(&metric(), Some(5.0), Some(20.0), out));
        assert_eq!(
            output,
            "Add 272.33g of DME to raise the wort gravity by 5 points\n"
        );
    }
}

//! Gravity and volume adjustment commands

use anyhow::Result;
use std::io::Write;

use brew_tools::convert::c_to_f;
use brew_tools::gravity;
use brew_tools::validation::check_gravity;

use super::{prompt, Context};

/// Boil off or dilution needed to move the wort to a new gravity
pub fn cmd_adjust_gravity(
    ctx: &Context,
    og: Option<f64>,
    vol: Option<f64>,
    ng: Option<f64>,
    out: &mut impl Write,
) -> Result<()> {
    let labels = ctx.labels();
    let og = prompt::gravity(og, "og", "Original Gravity")?;
    let ng = prompt::gravity(ng, "ng", "Desired Gravity")?;
    let vol = prompt::unit_number(vol, "vol", "Current volume of wort", labels.vol)?;
    check_gravity(og)?;
    check_gravity(ng)?;

    let new_vol = gravity::adjust_gravity_volume(vol, og, ng);
    let diff = vol - new_vol;

    if !ctx.quiet {
        writeln!(out)?;
    }
    writeln!(out, "New volume of wort will be {:.2}", new_vol)?;
    if diff >= 0.0 {
        writeln!(out, "Boil off {:.2} {} of wort", diff, labels.vol)?;
    } else {
        writeln!(out, "Dilute wort with {:.2} {} of water", -diff, labels.vol)?;
    }
    Ok(())
}

/// Gravity after the wort volume changes
pub fn cmd_adjust_volume(
    ctx: &Context,
    og: Option<f64>,
    vol: Option<f64>,
    newvol: Option<f64>,
    out: &mut impl Write,
) -> Result<()> {
    let labels = ctx.labels();
    let og = prompt::gravity(og, "og", "Original Gravity")?;
    let vol = prompt::unit_number(vol, "vol", "Current volume of wort", labels.vol)?;
    let newvol = prompt::unit_number(newvol, "newvol", "New volume of wort", labels.vol)?;
    check_gravity(og)?;

    let new_grav = gravity::adjust_volume_gravity(vol, og, newvol);

    writeln!(out, "The new gravity will be {:.3}", new_grav)?;
    Ok(())
}

/// Hydrometer reading corrected for the temperature of the sample
pub fn cmd_adjust_sg(
    ctx: &Context,
    sg: Option<f64>,
    temp: Option<f64>,
    caltemp: Option<f64>,
    out: &mut impl Write,
) -> Result<()> {
    let labels = ctx.labels();
    let sg = prompt::gravity(sg, "sg", "Original gravity")?;
    let temp = prompt::unit_number(temp, "temp", "Temp of wort", labels.temp)?;
    let caltemp = prompt::unit_number(caltemp, "caltemp", "Calibration temp", labels.temp)?;
    check_gravity(sg)?;

    let (temp_f, caltemp_f) = if ctx.is_metric() {
        (c_to_f(temp), c_to_f(caltemp))
    } else {
        (temp, caltemp)
    };
    let adjusted = gravity::gravity_temperature_correct(sg, temp_f, caltemp_f);

    writeln!(
        out,
        "Adjusted gravity at {:.3}{} is: {:.3}",
        temp, labels.temp, adjusted
    )?;
    Ok(())
}

//! Packaging commands: keg carbonation pressure and bottle priming

use anyhow::Result;
use std::io::Write;

use brew_tools::convert::{c_to_f, g_to_oz, l_to_g};
use brew_tools::process::{self, PrimingSugars};

use super::{prompt, Context};

/// Regulator pressure for a CO2 volume at the keg temperature
pub fn cmd_kegpsi(
    ctx: &Context,
    vol: Option<f64>,
    temp: Option<f64>,
    out: &mut impl Write,
) -> Result<()> {
    let vol = prompt::number(vol, "vol", "Desired volumes of CO2")?;
    let mut temp = prompt::unit_number(temp, "temp", "Temperature of keg", ctx.labels().temp)?;

    if ctx.is_metric() {
        temp = c_to_f(temp);
    }

    let psi = process::keg_psi(temp, vol);
    tracing::debug!(temp_f = temp, co2 = vol, psi, "computed keg pressure");

    writeln!(out, "Keg pressure required: {:.2}psi", psi)?;
    Ok(())
}

/// Priming sugar for a batch, in table sugar, corn sugar and DME
pub fn cmd_prime(
    ctx: &Context,
    beer: Option<f64>,
    vol: Option<f64>,
    temp: Option<f64>,
    out: &mut impl Write,
) -> Result<()> {
    let labels = ctx.labels();
    let mut beer = prompt::unit_number(beer, "beer", "Volume of beer to prime", labels.vol)?;
    let vol = prompt::number(vol, "vol", "Desired volumes of CO2")?;
    let mut temp = prompt::unit_number(temp, "temp", "Temperature of beer", labels.temp)?;

    if ctx.is_metric() {
        temp = c_to_f(temp);
        beer = l_to_g(beer);
    }

    let mut sugar = process::priming(temp, beer, vol);
    if ctx.is_imperial() {
        sugar = g_to_oz(sugar);
    }
    let sugars = PrimingSugars::from_table_sugar(sugar);

    if !ctx.quiet {
        writeln!(out)?;
        writeln!(out, "Use only one of the following:")?;
    }
    writeln!(out, "Table sugar: {:.2}{}", sugars.table, labels.weight)?;
    writeln!(out, "Corn Sugar: {:.2}{}", sugars.corn, labels.weight)?;
    writeln!(out, "DME: {:.2}{}", sugars.dme, labels.weight)?;
    Ok(())
}

//! The `convert` command: one value shown in every related unit

use anyhow::Result;
use std::io::Write;

use brew_tools::convert::*;
use brew_tools::gravity::{to_brix, to_plato, to_sg};

use crate::cli::Measure;

pub fn cmd_convert(what: Measure, value: f64, out: &mut impl Write) -> Result<()> {
    tracing::debug!(?what, value, "converting");

    match what {
        Measure::Mass => print_mass(value, out),
        Measure::Vol => print_volume(value, out),
        Measure::Temp => print_temperature(value, out),
        Measure::Grav => print_gravity(value, out),
        Measure::Col => print_colour(value, out),
    }
}

fn print_mass(value: f64, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{} kg => {:.3} lbs", value, kg_to_lbs(value))?;
    writeln!(out, "{} g => {:.3} oz", value, g_to_oz(value))?;
    writeln!(out, "{} lbs => {:.3} kg", value, lbs_to_kg(value))?;
    writeln!(out, "{} oz => {:.3} g", value, oz_to_g(value))?;
    Ok(())
}

fn print_volume(value: f64, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{} l => {:.3} gal", value, l_to_g(value))?;
    writeln!(out, "{} l => {:.3} qt", value, l_to_q(value))?;
    writeln!(out, "{} gal => {:.3} l", value, g_to_l(value))?;
    Ok(())
}

fn print_temperature(value: f64, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{} C => {:.3} F", value, c_to_f(value))?;
    writeln!(out, "{} F => {:.3} C", value, f_to_c(value))?;
    Ok(())
}

fn print_gravity(value: f64, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{} SG => {:.3} Plato", value, to_plato(value))?;
    writeln!(out, "{} SG => {:.3} Brix", value, to_brix(value))?;
    writeln!(out, "{} Plato => {:.3} SG", value, to_sg(value))?;
    Ok(())
}

fn print_colour(value: f64, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "{} L => {:.3} EBC => {:.3} SRM",
        value,
        l_to_ebc(value),
        l_to_srm(value)
    )?;
    writeln!(
        out,
        "{} EBC => {:.3} L => {:.3} SRM",
        value,
        ebc_to_l(value),
        ebc_to_srm(value)
    )?;
    writeln!(
        out,
        "{} SRM => {:.3} EBC => {:.3} L",
        value,
        srm_to_ebc(value),
        srm_to_l(value)
    )?;
    Ok(())
}

//! Fermentation commands: ABV, attenuation and gravity at an attenuation

use anyhow::Result;
use std::io::Write;

use brew_tools::gravity;
use brew_tools::validation::{check_gravity, check_gravity_pair};

use super::{prompt, Context};

/// Estimate ABV from original and final gravity
pub fn cmd_abv(
    _ctx: &Context,
    og: Option<f64>,
    fg: Option<f64>,
    adjust: bool,
    out: &mut impl Write,
) -> Result<()> {
    let og = prompt::gravity(og, "og", "Original Gravity")?;
    let fg = prompt::gravity(fg, "fg", "Final Gravity")?;
    check_gravity_pair(og, fg)?;

    let abv = gravity::abv(og, fg, adjust);
    tracing::debug!(og, fg, adjust, abv, "computed abv");

    writeln!(out, "Estimated ABV: {:.2}%", abv)?;
    Ok(())
}

/// Apparent and real attenuation, printed as percentages
pub fn cmd_attenuation(
    _ctx: &Context,
    og: Option<f64>,
    fg: Option<f64>,
    out: &mut impl Write,
) -> Result<()> {
    let og = prompt::gravity(og, "og", "Original Gravity")?;
    let fg = prompt::gravity(fg, "fg", "Current Gravity")?;
    check_gravity_pair(og, fg)?;

    let apparent = gravity::apparent_attenuation(og, fg) * 100.0;
    let real = gravity::real_attenuation(og, fg) * 100.0;

    writeln!(out, "Apparent attenuation: {:.2}%", apparent)?;
    writeln!(out, "Real attenuation: {:.2}%", real)?;
    Ok(())
}

/// Gravity at which `att` percent apparent attenuation is reached
pub fn cmd_fg_from_att(
    _ctx: &Context,
    og: Option<f64>,
    att: Option<f64>,
    out: &mut impl Write,
) -> Result<()> {
    let og = prompt::gravity(og, "og", "Original Gravity")?;
    let att = prompt::number(att, "att", "Desired attenuation in %")?;
    check_gravity(og)?;

    let fg = gravity::fg_from_attenuation(og, att);

    writeln!(out, "FG for {}% attenuation: {:.3}", att, fg)?;
    Ok(())
}

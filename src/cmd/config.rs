//! Preference commands and unit system resolution

use anyhow::{Context as _, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

use brew_tools::config::{config_path, Config};
use brew_tools::ui::colors;
use brew_tools::UnitSystem;

fn require_config_path() -> Result<PathBuf> {
    config_path().context("Unable to determine the user config directory")
}

/// Pick the unit system for this run.
///
/// Precedence: `--unit`, then the stored preference. With no stored
/// preference the user is asked once and the answer saved; off a terminal
/// metric is used without saving.
pub fn resolve_unit_system(requested: Option<UnitSystem>) -> Result<UnitSystem> {
    if let Some(units) = requested {
        tracing::debug!(%units, "unit system from --unit");
        return Ok(units);
    }

    let Some(path) = config_path() else {
        tracing::warn!("no config directory available, defaulting to metric");
        return Ok(UnitSystem::Metric);
    };

    if !path.exists() {
        if atty::is(atty::Stream::Stdin) {
            return first_run(&path);
        }
        tracing::warn!(path = %path.display(), "no config file, defaulting to metric");
        return Ok(UnitSystem::Metric);
    }

    Ok(stored_unit_system(&path))
}

/// The unit system stored at `path`, or metric if it cannot be read
pub fn stored_unit_system(path: &Path) -> UnitSystem {
    match Config::load_from(path) {
        Ok(config) => config.unit(),
        Err(err) => {
            tracing::debug!(error = %format!("{:#}", err), "config load failed");
            eprintln!(
                "{} Error with config file {}. Defaulting to metric.",
                colors::warning("⚠"),
                path.display()
            );
            UnitSystem::Metric
        }
    }
}

fn first_run(path: &Path) -> Result<UnitSystem> {
    println!("This is the first time you are running brew tools.");
    println!("Please select your preferred units.");

    let choices: Vec<&str> = UnitSystem::ALL.iter().map(|u| u.as_str()).collect();
    let selection = dialoguer::Select::new()
        .with_prompt("Enter selection")
        .items(&choices)
        .default(1)
        .interact()?;
    let units = UnitSystem::ALL[selection];

    Config::new(units).save_to(path).with_context(|| {
        format!(
            "Unable to write to {}. Check permission and try again.",
            path.display()
        )
    })?;

    Ok(units)
}

/// Show the stored preferences
pub fn cmd_config_show(out: &mut impl Write) -> Result<()> {
    show_config(&require_config_path()?, out)
}

pub fn show_config(path: &Path, out: &mut impl Write) -> Result<()> {
    if !path.exists() {
        writeln!(
            out,
            "{} No config file at {} (using metric)",
            colors::secondary("○"),
            colors::identifier(&path.display().to_string())
        )?;
        return Ok(());
    }

    let config = Config::load_from(path)?;
    writeln!(out, "{}", colors::heading("Preferences"))?;
    writeln!(
        out,
        "  {} {}",
        colors::secondary("file:"),
        colors::identifier(&path.display().to_string())
    )?;
    writeln!(out, "  {} {}", colors::secondary("unit:"), config.unit())?;
    Ok(())
}

/// Store the preferred unit system
pub fn cmd_config_set_unit(unit: UnitSystem, out: &mut impl Write) -> Result<()> {
    set_unit(&require_config_path()?, unit, out)
}

pub fn set_unit(path: &Path, unit: UnitSystem, out: &mut impl Write) -> Result<()> {
    Config::new(unit).save_to(path)?;
    writeln!(out, "{} Unit system set to {}", colors::success("✓"), unit)?;
    Ok(())
}

/// Print the config file location
pub fn cmd_config_path(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", require_config_path()?.display())?;
    Ok(())
}

//! Utility commands (version, man page generation, completion).

use anyhow::{Context as _, Result};
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::cli::Cli;

const BIN_NAME: &str = "brew-tools";
const MAN_PAGE: &str = "brew-tools.1";

/// Show version information
pub fn cmd_version(verbose: bool, out: &mut impl Write) -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    writeln!(out, "{} {}", BIN_NAME, VERSION)?;

    if verbose {
        const GIT_SHA: &str = env!("GIT_SHA");
        const BUILD_DATE: &str = env!("BUILD_DATE");
        writeln!(out, "commit: {}", GIT_SHA)?;
        writeln!(out, "built: {}", BUILD_DATE)?;
    }

    Ok(())
}

/// Write the `brew-tools.1` man page into `out_dir` (default: current dir)
pub fn cmd_man(out_dir: Option<&PathBuf>, out: &mut impl Write) -> Result<()> {
    let mut page = Vec::new();
    clap_mangen::Man::new(Cli::command()).render(&mut page)?;

    let dir = out_dir.cloned().unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let man_path = dir.join(MAN_PAGE);
    fs::write(&man_path, page)
        .with_context(|| format!("Unable to write to {}", man_path.display()))?;

    writeln!(out, "Man page written to: {}", man_path.display())?;
    Ok(())
}

/// Print a completion script for `shell`
pub fn cmd_completion(shell: Shell, out: &mut impl Write) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, out);
    Ok(())
}

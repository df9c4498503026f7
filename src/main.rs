//! CLI entry point for brew-tools.
//!
//! Parses arguments, sets up logging, works out the unit system and hands
//! off to the command handlers in [`cmd`].

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

use brew_tools::ui;
use cli::{Cli, Commands, ConfigCommands};
use cmd::Context;

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "BREWTOOLS_LOG";

fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "brew_tools=debug"
    } else {
        "brew_tools=warn"
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));

    // Logs go to stderr so results on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Only the calculators need the unit system; resolving it may prompt
    let requested = cli.unit;
    let quiet = cli.quiet || ui::is_quiet();
    let ctx = || -> Result<Context> {
        let units = cmd::config::resolve_unit_system(requested)?;
        tracing::debug!(%units, quiet, "resolved unit system");
        Ok(Context::new(units).with_quiet(quiet))
    };

    match cli.command {
        Commands::Abv { og, fg, adjust } => {
            cmd::fermentation::cmd_abv(&ctx()?, og, fg, adjust, &mut out)
        }
        Commands::Kegpsi { vol, temp } => cmd::packaging::cmd_kegpsi(&ctx()?, vol, temp, &mut out),
        Commands::Prime { beer, vol, temp } => {
            cmd::packaging::cmd_prime(&ctx()?, beer, vol, temp, &mut out)
        }
        Commands::Infuse {
            temp,
            target,
            ratio,
            grain,
            water,
        } => cmd::mash::cmd_infuse(&ctx()?, temp, target, ratio, grain, water, &mut out),
        Commands::Dme { points, vol } => cmd::mash::cmd_dme(&ctx()?, points, vol, &mut out),
        Commands::Attenuation { og, fg } => {
            cmd::fermentation::cmd_attenuation(&ctx()?, og, fg, &mut out)
        }
        Commands::FgFromAtt { og, att } => {
            cmd::fermentation::cmd_fg_from_att(&ctx()?, og, att, &mut out)
        }
        Commands::AdjustGravity { og, vol, ng } => {
            cmd::adjust::cmd_adjust_gravity(&ctx()?, og, vol, ng, &mut out)
        }
        Commands::AdjustVolume { og, vol, newvol } => {
            cmd::adjust::cmd_adjust_volume(&ctx()?, og, vol, newvol, &mut out)
        }
        Commands::Strike { grain, vol, temp } => {
            cmd::mash::cmd_strike(&ctx()?, grain, vol, temp, &mut out)
        }
        Commands::AdjustSg { sg, temp, caltemp } => {
            cmd::adjust::cmd_adjust_sg(&ctx()?, sg, temp, caltemp, &mut out)
        }
        Commands::Convert { what, value } => cmd::convert::cmd_convert(what, value, &mut out),
        Commands::Config { command } => match command {
            ConfigCommands::Show => cmd::config::cmd_config_show(&mut out),
            ConfigCommands::SetUnit { system } => {
                cmd::config::cmd_config_set_unit(system, &mut out)
            }
            ConfigCommands::Path => cmd::config::cmd_config_path(&mut out),
        },
        Commands::Version => cmd::util::cmd_version(cli.verbose, &mut out),
        Commands::Completion { shell } => cmd::util::cmd_completion(shell, &mut out),
        Commands::Man { out_dir } => cmd::util::cmd_man(out_dir.as_ref(), &mut out),
    }
}

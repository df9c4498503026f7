//! CLI argument definitions for brew-tools.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use brew_tools::UnitSystem;

#[derive(Parser)]
#[command(name = "brew-tools")]
#[command(version)]
#[command(about = "Calculators and unit conversions for homebrewers", long_about = None)]
#[command(
    after_help = "All values and calculations are provided as guidelines only.\nbrew-tools should not be used for professional brewing. No warranty or\nguarantee of accuracy is provided on the information it produces.\n\nAny value not given as an option is prompted for interactively."
)]
pub struct Cli {
    /// Ignore the stored preference and use this unit system
    #[arg(long, global = true, value_name = "metric|imperial")]
    pub unit: Option<UnitSystem>,

    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log debug information to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate ABV from original and final gravity
    ///
    /// The wort and alcohol correction is not applied by default. Add
    /// --adjust when the final gravity was read with a refractometer.
    Abv {
        /// Original gravity, between 1.000 and 1.200
        #[arg(long)]
        og: Option<f64>,
        /// Final gravity, between 1.000 and 1.200
        #[arg(long)]
        fg: Option<f64>,
        /// Apply the wort and alcohol correction to the final gravity
        #[arg(long)]
        adjust: bool,
    },
    /// Regulator pressure needed to reach a CO2 volume in a keg
    Kegpsi {
        /// Desired volumes of CO2
        #[arg(long)]
        vol: Option<f64>,
        /// Temperature of the keg
        #[arg(long)]
        temp: Option<f64>,
    },
    /// Table sugar, corn sugar or DME needed for bottle priming
    Prime {
        /// Volume of beer to prime
        #[arg(long)]
        beer: Option<f64>,
        /// Desired volumes of CO2
        #[arg(long)]
        vol: Option<f64>,
        /// Highest temperature of the beer after fermentation
        #[arg(long)]
        temp: Option<f64>,
    },
    /// Hot water needed to raise the mash to a new temperature
    Infuse {
        /// Current temperature of the mash
        #[arg(long)]
        temp: Option<f64>,
        /// Target temperature of the mash
        #[arg(long)]
        target: Option<f64>,
        /// Water to grist ratio (Quarts/lbs or Liters/kg)
        #[arg(long)]
        ratio: Option<f64>,
        /// Weight of grain in the mash
        #[arg(long)]
        grain: Option<f64>,
        /// Temperature of the infusion water
        #[arg(long)]
        water: Option<f64>,
    },
    /// Dry malt extract needed to raise the wort gravity
    Dme {
        /// Gravity points to add (current 1.045, target 1.050: 5 points)
        #[arg(long)]
        points: Option<f64>,
        /// Current volume of the wort
        #[arg(long)]
        vol: Option<f64>,
    },
    /// Apparent and real attenuation from original and current gravity
    Attenuation {
        /// Original gravity, between 1.000 and 1.200
        #[arg(long)]
        og: Option<f64>,
        /// Final or current gravity, between 1.000 and 1.200
        #[arg(long)]
        fg: Option<f64>,
    },
    /// Gravity reached at a given apparent attenuation
    FgFromAtt {
        /// Original gravity, between 1.000 and 1.200
        #[arg(long)]
        og: Option<f64>,
        /// Desired attenuation in percent
        #[arg(long)]
        att: Option<f64>,
    },
    /// Wort to boil off or water to add to reach a target gravity
    AdjustGravity {
        /// Current gravity, between 1.000 and 1.200
        #[arg(long)]
        og: Option<f64>,
        /// Current wort volume
        #[arg(long)]
        vol: Option<f64>,
        /// Desired gravity, between 1.000 and 1.200
        #[arg(long)]
        ng: Option<f64>,
    },
    /// New gravity after boil off or dilution to a new volume
    AdjustVolume {
        /// Current gravity, between 1.000 and 1.200
        #[arg(long)]
        og: Option<f64>,
        /// Current wort volume
        #[arg(long)]
        vol: Option<f64>,
        /// New wort volume
        #[arg(long)]
        newvol: Option<f64>,
    },
    /// Strike water temperature for a target mash temperature
    Strike {
        /// Weight of grain
        #[arg(long)]
        grain: Option<f64>,
        /// Volume of strike water
        #[arg(long)]
        vol: Option<f64>,
        /// Target mash temperature
        #[arg(long)]
        temp: Option<f64>,
    },
    /// Correct a hydrometer reading for wort temperature
    AdjustSg {
        /// Measured gravity
        #[arg(long)]
        sg: Option<f64>,
        /// Temperature of the measured wort
        #[arg(long)]
        temp: Option<f64>,
        /// Calibration temperature of the hydrometer
        #[arg(long)]
        caltemp: Option<f64>,
    },
    /// Convert a value between units of one kind
    Convert {
        /// What kind of value to convert
        what: Measure,
        /// The value to convert
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Show or change stored preferences
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Show version information (with -v, also the commit and build date)
    Version,
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Generate man page
    #[command(hide = true)]
    Man {
        /// Output directory for the man page
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

/// Kinds of value `convert` understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Measure {
    /// kg, lbs, g and oz
    Mass,
    /// Liters, US gallons and quarts
    Vol,
    /// Celsius and Fahrenheit
    Temp,
    /// SG, Plato and Brix
    Grav,
    /// Lovibond, EBC and SRM
    Col,
}

/// Subcommands for preference management
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the stored preferences
    Show,
    /// Store the preferred unit system
    SetUnit {
        /// metric or imperial
        #[arg(value_name = "UNIT")]
        system: UnitSystem,
    },
    /// Print the config file location
    Path,
}

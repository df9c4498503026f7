//! Command module structure for the brew-tools CLI

use brew_tools::units::{UnitLabels, UnitSystem};

pub mod adjust;
pub mod config;
pub mod convert;
pub mod fermentation;
pub mod mash;
pub mod packaging;
pub mod prompt;
pub mod util;

/// Settings shared by every calculator command
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub units: UnitSystem,
    /// Drop the blank lines and headers around results
    pub quiet: bool,
}

impl Context {
    pub fn new(units: UnitSystem) -> Self {
        Self {
            units,
            quiet: false,
        }
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn is_metric(&self) -> bool {
        self.units.is_metric()
    }

    pub fn is_imperial(&self) -> bool {
        self.units.is_imperial()
    }

    pub fn labels(&self) -> UnitLabels {
        self.units.labels()
    }
}

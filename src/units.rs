//! Unit systems and the unit labels shown for each

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The measurement system values are entered and displayed in
///
/// The formulas work in imperial units; in metric mode the command layer
/// converts on the way in and out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// All systems, in the order offered on first run
    pub const ALL: [UnitSystem; 2] = [UnitSystem::Imperial, UnitSystem::Metric];

    pub fn is_metric(&self) -> bool {
        matches!(self, UnitSystem::Metric)
    }

    pub fn is_imperial(&self) -> bool {
        !self.is_metric()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    pub fn labels(&self) -> UnitLabels {
        match self {
            UnitSystem::Metric => UnitLabels::METRIC,
            UnitSystem::Imperial => UnitLabels::IMPERIAL,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            other => anyhow::bail!("Unknown unit system '{}' (metric or imperial)", other),
        }
    }
}

/// Labels for each kind of quantity in one unit system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitLabels {
    /// Temperature ("C" / "F")
    pub temp: &'static str,
    /// Small weights such as sugar or DME
    pub weight: &'static str,
    /// Large weights such as grain
    pub lrg_weight: &'static str,
    /// Wort and beer volumes
    pub vol: &'static str,
    /// Mash water to grist ratio
    pub ratio: &'static str,
    /// Infusion water volume, in the ratio's volume unit
    pub infusion_vol: &'static str,
}

impl UnitLabels {
    pub const METRIC: UnitLabels = UnitLabels {
        temp: "C",
        weight: "g",
        lrg_weight: "kg",
        vol: "liter",
        ratio: "Liters/kg",
        infusion_vol: "liters",
    };

    pub const IMPERIAL: UnitLabels = UnitLabels {
        temp: "F",
        weight: "oz",
        lrg_weight: "lbs",
        vol: "US Gal",
        ratio: "Quarts/lbs",
        infusion_vol: "quarts",
    };
}

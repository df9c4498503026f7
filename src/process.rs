//! Brew-day process formulas
//!
//! Carbonation, priming, mash infusion, extract additions and strike water.
//! All temperatures are Fahrenheit and volumes US gallons unless a function
//! says otherwise.

use crate::convert::lbs_to_oz;
use crate::error::FormulaError;

/// Corn sugar mass per unit of table sugar for the same carbonation
pub const CORN_SUGAR_RATIO: f64 = 1.099421965317919;
/// Dry malt extract mass per unit of table sugar for the same carbonation
pub const DME_RATIO: f64 = 1.4705202312138728;
/// Extract potential of DME in gravity points per pound per gallon
pub const DME_PPG: f64 = 44.0;
/// Assumed temperature of dry grain before mashing in
pub const GRAIN_TEMP_F: f64 = 70.0;
/// Allowance added to the strike target for heat lost to the tun
pub const THERMAL_LOSS_F: f64 = 3.0;

/// Regulator pressure in PSI needed to hold `co2` volumes of CO2 in beer at
/// `temp_f`.
///
/// Solves `V = (P + 14.695) * (0.01821 + 0.09011 * exp(-(T - 32) / 43.11)) - 0.003342`
/// for `P`. Out-of-range temperatures give meaningless pressures rather than
/// an error.
pub fn keg_psi(temp_f: f64, co2: f64) -> f64 {
    let henry_coeff = 0.01821 + 0.09011 * (-(temp_f - 32.0) / 43.11).exp();
    (co2 + 0.003342) / henry_coeff - 14.695
}

/// Table sugar in grams to prime `beer_vol` gallons of beer to `co2` volumes
///
/// `temp_f` should be the warmest temperature the beer held for any length
/// of time after fermentation, since that sets the residual CO2.
pub fn priming(temp_f: f64, beer_vol: f64, co2: f64) -> f64 {
    15.195 * beer_vol * (co2 - 3.0378 + 0.050062 * temp_f - 0.00026555 * temp_f.powi(2))
}

/// Masses of the usual priming sugars equivalent to a table sugar mass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimingSugars {
    pub table: f64,
    pub corn: f64,
    pub dme: f64,
}

impl PrimingSugars {
    pub fn from_table_sugar(table: f64) -> Self {
        Self {
            table,
            corn: table * CORN_SUGAR_RATIO,
            dme: table * DME_RATIO,
        }
    }
}

/// Volume of water at `water_temp` to add to a mash at `curr_temp` to bring
/// it to `new_temp`.
///
/// `ratio` is the water to grist ratio and `grain` the dry grain weight; the
/// result is in the ratio's volume unit. Uses
/// `Wa = (T2 - T1)(0.2G + Wm) / (Tw - T2)`.
///
/// Returns [`FormulaError::InfusionAtTarget`] when `water_temp == new_temp`.
pub fn infusion(
    ratio: f64,
    curr_temp: f64,
    new_temp: f64,
    water_temp: f64,
    grain: f64,
) -> Result<f64, FormulaError> {
    if water_temp == new_temp {
        return Err(FormulaError::InfusionAtTarget { water_temp });
    }

    let mash_water = grain * ratio;
    Ok(((new_temp - curr_temp) * (0.2 * grain + mash_water)) / (water_temp - new_temp))
}

/// [`infusion`] with the at-target fault resolved to no addition
pub fn infusion_or_zero(
    ratio: f64,
    curr_temp: f64,
    new_temp: f64,
    water_temp: f64,
    grain: f64,
) -> f64 {
    infusion(ratio, curr_temp, new_temp, water_temp, grain).unwrap_or(0.0)
}

/// Ounces of DME to raise `cur_vol` gallons of wort by `points` gravity points
pub fn pre_boil_dme(points: f64, cur_vol: f64) -> f64 {
    lbs_to_oz(points * cur_vol / DME_PPG)
}

/// Strike water temperature for `grain` lbs mashed into `vol` gallons to
/// land at `temp_f`.
///
/// `W = (0.2 / R)(T2 - T1) + T2` with `R` in quarts per pound, `T1` the
/// grain temperature and `T2` the target plus the thermal loss allowance.
pub fn strike_temp(grain: f64, vol: f64, temp_f: f64) -> f64 {
    let ratio = (vol * 4.0) / grain;
    let target = temp_f + THERMAL_LOSS_F;

    (0.2 / ratio) * (target - GRAIN_TEMP_F) + target
}

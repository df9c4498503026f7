//! Unit conversions
//!
//! Mass, volume, temperature and colour conversions used by the brewing
//! formulas. Every function is a plain multiplicative or affine mapping with
//! an inverse provided alongside it.
//!
//! The constants are rounded approximations, so a forward conversion
//! followed by its inverse returns the input only to within floating-point
//! error.

// ============================================================================
// Conversion Constants
// ============================================================================

/// Grams per ounce (avoirdupois)
pub const G_PER_OZ: f64 = 28.34952;
/// Ounces per pound
pub const OZ_PER_LB: f64 = 16.0;
/// Pounds per kilogram
pub const LBS_PER_KG: f64 = 2.204623;
/// US gallons per liter
pub const GAL_PER_L: f64 = 0.26417;
/// US quarts per liter
pub const QT_PER_L: f64 = 1.056688;
/// Fahrenheit degrees per Celsius degree
pub const F_PER_C: f64 = 1.8;
/// Fahrenheit value of the water freezing point
pub const F_FREEZING: f64 = 32.0;
/// SRM per EBC unit
pub const SRM_PER_EBC: f64 = 0.508;
/// Slope of the Lovibond to SRM relation
pub const SRM_LOVIBOND_SLOPE: f64 = 1.3546;
/// Offset of the Lovibond to SRM relation
pub const SRM_LOVIBOND_OFFSET: f64 = 0.76;

// ============================================================================
// Mass
// ============================================================================

/// Convert ounces to grams
pub fn oz_to_g(oz: f64) -> f64 {
    oz * G_PER_OZ
}

/// Convert grams to ounces
pub fn g_to_oz(g: f64) -> f64 {
    g / G_PER_OZ
}

/// Convert pounds to ounces
pub fn lbs_to_oz(lbs: f64) -> f64 {
    lbs * OZ_PER_LB
}

/// Convert kilograms to pounds
pub fn kg_to_lbs(kg: f64) -> f64 {
    kg * LBS_PER_KG
}

/// Convert pounds to kilograms
pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs / LBS_PER_KG
}

// ============================================================================
// Volume
// ============================================================================

/// Convert liters to US gallons
pub fn l_to_g(liter: f64) -> f64 {
    liter * GAL_PER_L
}

/// Convert US gallons to liters
pub fn g_to_l(gallon: f64) -> f64 {
    gallon / GAL_PER_L
}

/// Convert liters to US quarts
pub fn l_to_q(liter: f64) -> f64 {
    liter * QT_PER_L
}

// ============================================================================
// Temperature
// ============================================================================

/// Convert Celsius to Fahrenheit
pub fn c_to_f(c: f64) -> f64 {
    c * F_PER_C + F_FREEZING
}

/// Convert Fahrenheit to Celsius
pub fn f_to_c(f: f64) -> f64 {
    (f - F_FREEZING) / F_PER_C
}

// ============================================================================
// Colour
//
// Lovibond is the common unit: EBC reaches it through SRM.
// ============================================================================

/// Convert EBC to SRM
pub fn ebc_to_srm(ebc: f64) -> f64 {
    ebc * SRM_PER_EBC
}

/// Convert SRM to EBC
pub fn srm_to_ebc(srm: f64) -> f64 {
    srm / SRM_PER_EBC
}

/// Convert SRM to degrees Lovibond
pub fn srm_to_l(srm: f64) -> f64 {
    (srm + SRM_LOVIBOND_OFFSET) / SRM_LOVIBOND_SLOPE
}

/// Convert degrees Lovibond to SRM
pub fn l_to_srm(lovibond: f64) -> f64 {
    SRM_LOVIBOND_SLOPE * lovibond - SRM_LOVIBOND_OFFSET
}

/// Convert EBC to degrees Lovibond
pub fn ebc_to_l(ebc: f64) -> f64 {
    srm_to_l(ebc_to_srm(ebc))
}

/// Convert degrees Lovibond to EBC
pub fn l_to_ebc(lovibond: f64) -> f64 {
    srm_to_ebc(l_to_srm(lovibond))
}

//! Gravity scales and fermentation formulas
//!
//! Conversions between specific gravity, Brix and Plato, and the formulas
//! derived from gravity readings: ABV, attenuation, volume/gravity
//! adjustment and hydrometer temperature correction.
//!
//! None of these functions validate their inputs. Gravities are expected in
//! the open interval (1.0, 1.2) and `fg <= og`; see [`crate::validation`].

/// ABV per unit of specific-gravity drop
pub const ABV_FACTOR: f64 = 131.25;

/// Convert specific gravity to degrees Brix
pub fn to_brix(sg: f64) -> f64 {
    ((182.4601 * sg - 775.6821) * sg + 1262.7794) * sg - 669.5622
}

/// Convert specific gravity to degrees Plato
pub fn to_plato(sg: f64) -> f64 {
    -616.868 + 1111.14 * sg - 630.272 * sg.powi(2) + 135.997 * sg.powi(3)
}

/// Convert degrees Plato to specific gravity
///
/// This is the usual brewing approximation and only an approximate inverse
/// of [`to_plato`]: round trips drift by up to ~0.002 SG at the top of the
/// range.
pub fn to_sg(plato: f64) -> f64 {
    1.0 + plato / (258.6 - (plato / 258.2) * 227.1)
}

/// Gravity points: `(sg - 1) * 1000`
pub fn points(sg: f64) -> f64 {
    (sg - 1.0) * 1000.0
}

/// Correct a final gravity reading for wort and alcohol (refractometer
/// readings), working in Brix.
pub fn adjust_gravity(og: f64, fg: f64) -> f64 {
    (1.0 - 0.00085683 * to_brix(og)) + 0.0034941 * to_brix(fg)
}

/// Alcohol by volume, in percent
///
/// With `adjust` set the final gravity is first passed through
/// [`adjust_gravity`].
pub fn abv(og: f64, fg: f64, adjust: bool) -> f64 {
    let fg = if adjust { adjust_gravity(og, fg) } else { fg };
    (og - fg) * ABV_FACTOR
}

/// Apparent attenuation as a decimal fraction: `1 - AE / OE`
pub fn apparent_attenuation(og: f64, fg: f64) -> f64 {
    1.0 - to_plato(fg) / to_plato(og)
}

/// Real attenuation as a decimal fraction
///
/// Real extract is estimated as `0.1808 * OE + 0.8192 * AE`, which accounts
/// for the alcohol lowering the apparent reading.
pub fn real_attenuation(og: f64, fg: f64) -> f64 {
    let oe = to_plato(og);
    let ae = to_plato(fg);

    1.0 - (0.1808 * oe + 0.8192 * ae) / oe
}

/// Gravity reached once `attenuation` percent apparent attenuation is hit
pub fn fg_from_attenuation(og: f64, attenuation: f64) -> f64 {
    let extract = (1.0 - attenuation / 100.0) * to_plato(og);
    to_sg(extract)
}

/// Volume needed to move wort of gravity `og` to the gravity `ng`
///
/// Unit independent; the result is in whatever unit `vol` is in. `ng` must
/// not be 1.0.
pub fn adjust_gravity_volume(vol: f64, og: f64, ng: f64) -> f64 {
    (vol * points(og)) / points(ng)
}

/// Gravity after boiling off or diluting `vol` of wort at `og` to `new_vol`
pub fn adjust_volume_gravity(vol: f64, og: f64, new_vol: f64) -> f64 {
    1.0 + ((vol * points(og)) / new_vol) / 1000.0
}

/// Density curve of water relative to its value at 0°F, cubic in °F
fn hydrometer_curve(temp_f: f64) -> f64 {
    1.00130346 - 0.000134722124 * temp_f + 0.00000204052596 * temp_f * temp_f
        - 0.00000000232820948 * temp_f * temp_f * temp_f
}

/// Correct a hydrometer reading taken at `temp_f` for a hydrometer
/// calibrated at `cal_temp_f`.
pub fn gravity_temperature_correct(gravity: f64, temp_f: f64, cal_temp_f: f64) -> f64 {
    gravity * (hydrometer_curve(temp_f) / hydrometer_curve(cal_temp_f))
}

//! # Brew Tools - calculators for homebrewers
//!
//! Unit conversions and the empirical formulas brewers reach for on brew
//! day: ABV, attenuation, keg carbonation pressure, priming sugar, mash
//! infusions, strike water and gravity/volume adjustments.
//!
//! ## Modules
//!
//! - [`convert`] - Mass, volume, temperature and colour conversions
//! - [`gravity`] - SG/Brix/Plato scales and gravity-based formulas
//! - [`process`] - Carbonation, priming, mash and extract formulas
//! - [`units`] - Metric and imperial unit systems
//! - [`validation`] - Input domain checks applied before the formulas
//! - [`config`] - Stored user preferences
//!
//! The formula modules are pure functions over `f64` with no validation of
//! their own. Results are guidance only and are not intended for
//! professional brewing.
//!
//! ## Example
//!
//! ```
//! use brew_tools::{convert, gravity, process};
//!
//! let abv = gravity::abv(1.050, 1.010, false);
//! assert!((abv - 5.25).abs() < 1e-9);
//!
//! let psi = process::keg_psi(convert::c_to_f(4.0), 2.5);
//! assert!(psi > 0.0);
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod gravity;
pub mod process;
pub mod ui;
pub mod units;
pub mod validation;

pub use error::{FormulaError, InputError};
pub use units::UnitSystem;

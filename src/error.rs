//! Error types for the formula library and input validation

use thiserror::Error;

/// Faults raised by the formulas themselves
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FormulaError {
    /// Infusion water at the target temperature can never raise the mash to it
    #[error("infusion water temperature {water_temp} equals the target mash temperature")]
    InfusionAtTarget { water_temp: f64 },
}

/// Caller-side domain violations, raised before a formula is invoked
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InputError {
    #[error("Value must be between {min:.1} and {max:.1}, got {value}")]
    OutOfRange { value: f64, min: f64, max: f64 },

    #[error("Final gravity cannot be higher than original gravity")]
    FinalAboveOriginal { og: f64, fg: f64 },
}

//! Domain checks applied before values reach the formulas.
//!
//! The formulas accept any float; these checks enforce the brewing domain
//! on user input.

use crate::error::InputError;

/// Lower bound (exclusive) of an acceptable specific gravity
pub const MIN_GRAVITY: f64 = 1.0;
/// Upper bound (exclusive) of an acceptable specific gravity
pub const MAX_GRAVITY: f64 = 1.2;

/// An open interval `(min, max)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Between {
    pub min: f64,
    pub max: f64,
}

impl Between {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min < value && value < self.max
    }

    pub fn check(&self, value: f64) -> Result<f64, InputError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(InputError::OutOfRange {
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Range of specific gravity readings accepted from the user
pub const GRAVITY_RANGE: Between = Between::new(MIN_GRAVITY, MAX_GRAVITY);

/// Check a specific gravity reading lies in (1.0, 1.2)
pub fn check_gravity(sg: f64) -> Result<f64, InputError> {
    GRAVITY_RANGE.check(sg)
}

/// Check a pair of readings: both in range and `fg <= og`
pub fn check_gravity_pair(og: f64, fg: f64) -> Result<(), InputError> {
    check_gravity(og)?;
    check_gravity(fg)?;

    if fg > og {
        return Err(InputError::FinalAboveOriginal { og, fg });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_range_is_open() {
        assert!(check_gravity(1.050).is_ok());
        assert!(check_gravity(1.0).is_err());
        assert!(check_gravity(1.2).is_err());
        assert!(check_gravity(2.0).is_err());
        assert!(check_gravity(0.998).is_err());
    }

    #[test]
    fn test_out_of_range_message() {
        let err = check_gravity(2.0).unwrap_err();
        assert_eq!(
            err,
            InputError::OutOfRange {
                value: 2.0,
                min: 1.0,
                max: 1.2
            }
        );
        let message = err.to_string();
        assert!(message.starts_with("Value must be between 1.0 and 1.2"));
    }

    #[test]
    fn test_gravity_pair() {
        assert!(check_gravity_pair(1.05, 1.01).is_ok());
        assert!(check_gravity_pair(1.05, 1.05).is_ok());
        assert_eq!(
            check_gravity_pair(1.05, 1.06),
            Err(InputError::FinalAboveOriginal { og: 1.05, fg: 1.06 })
        );
        assert!(matches!(
            check_gravity_pair(2.0, 1.06),
            Err(InputError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_custom_between() {
        let percent = Between::new(-1.0, 101.0);
        assert!(percent.contains(0.0));
        assert!(percent.contains(100.0));
        assert!(!percent.contains(101.0));
    }
}

//! Filling in values the user did not pass as options.
//!
//! Missing values are prompted for when stdin is a terminal. Otherwise the
//! command fails and names the option that was left out.

use anyhow::{Context as _, Result};

use brew_tools::validation::check_gravity;

fn interactive() -> bool {
    atty::is(atty::Stream::Stdin)
}

/// Return `value`, or prompt for a number when it is absent
pub fn number(value: Option<f64>, flag: &str, prompt: &str) -> Result<f64> {
    if let Some(value) = value {
        return Ok(value);
    }

    if !interactive() {
        anyhow::bail!("Missing value for --{} ({})", flag, prompt);
    }

    dialoguer::Input::<f64>::new()
        .with_prompt(prompt)
        .interact_text()
        .with_context(|| format!("Failed to read {}", prompt))
}

/// Like [`number`], with the unit appended to the prompt
pub fn unit_number(value: Option<f64>, flag: &str, prompt: &str, unit: &str) -> Result<f64> {
    if value.is_some() {
        return number(value, flag, prompt);
    }

    number(None, flag, &format!("{} ({})", prompt, unit))
}

/// Return `value`, or prompt for a gravity until one in (1.0, 1.2) is given
///
/// Values passed as options are returned as-is; range checks for those
/// happen in the command so every input is checked the same way.
pub fn gravity(value: Option<f64>, flag: &str, prompt: &str) -> Result<f64> {
    if let Some(value) = value {
        return Ok(value);
    }

    if !interactive() {
        anyhow::bail!("Missing value for --{} ({})", flag, prompt);
    }

    dialoguer::Input::<f64>::new()
        .with_prompt(prompt)
        .validate_with(|sg: &f64| check_gravity(*sg).map(|_| ()))
        .interact_text()
        .with_context(|| format!("Failed to read {}", prompt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_given_values_pass_through() {
        assert_eq!(number(Some(2.5), "vol", "Volume").unwrap(), 2.5);
        assert_eq!(unit_number(Some(20.0), "temp", "Temp", "C").unwrap(), 20.0);
        // Out of range values are returned untouched for the command to reject
        assert_eq!(gravity(Some(2.0), "og", "Original Gravity").unwrap(), 2.0);
    }
}

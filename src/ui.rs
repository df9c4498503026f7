//! Terminal color helpers shared by the command handlers

/// Environment variable that enables quiet mode, same as `--quiet`
pub const QUIET_ENV: &str = "BREWTOOLS_QUIET";

/// Check if quiet mode is enabled via environment variable
pub fn is_quiet() -> bool {
    std::env::var(QUIET_ENV)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Color scheme for command output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Yellow for warnings
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Cyan for paths and other identifiers
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }
}

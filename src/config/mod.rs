//! User preference storage.
//!
//! The only stored preference is the unit system. The file lives in the
//! platform config directory (`~/.config/brewtools/brewtools.yaml` on Linux)
//! unless `BREWTOOLS_CONFIG` points elsewhere.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::units::UnitSystem;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "BREWTOOLS_CONFIG";
/// Directory name under the platform config directory
pub const APP_NAME: &str = "brewtools";
/// Config file name
pub const FILENAME: &str = "brewtools.yaml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub general: GeneralConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub unit: UnitSystem,
}

impl Config {
    pub fn new(unit: UnitSystem) -> Self {
        Self {
            general: GeneralConfig { unit },
        }
    }

    pub fn unit(&self) -> UnitSystem {
        self.general.unit
    }

    /// Whether a config file exists at the default location
    pub fn exists() -> bool {
        config_path().is_some_and(|path| path.exists())
    }

    /// Load the config from the default location
    pub fn load() -> Result<Self> {
        let path = config_path().context("Unable to determine the user config directory")?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), unit = %config.unit(), "loaded config");

        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse config")
    }

    /// Write the config to the default location, returning the path written
    pub fn save(&self) -> Result<PathBuf> {
        let path = config_path().context("Unable to determine the user config directory")?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config directory {}", parent.display())
                })?;
            }
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Unable to write to {}", path.display()))?;
        tracing::debug!(path = %path.display(), unit = %self.unit(), "saved config");

        Ok(())
    }
}

/// Path of the config file: `$BREWTOOLS_CONFIG`, else
/// `<config dir>/brewtools/brewtools.yaml`
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }

    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(FILENAME))
}

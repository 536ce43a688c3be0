//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the roster
//! configuration from a YAML file.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::EpochAssignment;

use super::types::RosterConfig;

/// Loads and provides access to the roster configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── roster.yaml   # Epoch, shift rate and storage key
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_voucher::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Shift rate: {}", loader.shift_rate());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RosterConfig,
}

impl ConfigLoader {
    /// Loads `roster.yaml` from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file is not valid YAML for a [`RosterConfig`] (`ConfigParseError`)
    /// - The shift rate is not positive or the storage key is empty (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let roster_path = path.as_ref().join("roster.yaml");
        let config = Self::load_yaml::<RosterConfig>(&roster_path)?;
        Self::validate(&config)?;
        Ok(Self { config })
    }

    /// A loader holding the built-in configuration.
    pub fn standard() -> Self {
        Self {
            config: RosterConfig::default(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(config: &RosterConfig) -> EngineResult<()> {
        if config.shift_rate <= Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "shift_rate".to_string(),
                message: format!("must be positive, got {}", config.shift_rate),
            });
        }

        if config.storage_key.trim().is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "storage_key".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> RosterConfig {
        self.config
    }

    /// Returns the epoch assignment.
    pub fn epoch(&self) -> &EpochAssignment {
        &self.config.epoch
    }

    /// Returns the voucher amount per duty day.
    pub fn shift_rate(&self) -> Decimal {
        self.config.shift_rate
    }
}

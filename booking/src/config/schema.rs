//! Configuration schema definitions.
//!
//! This module defines the YAML configuration structure and how it
//! resolves into the runtime settings of the database, the logger, and
//! the validator.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::database::{resolve_database_path, DatabaseConfig};
use crate::error::Result;
use crate::logging::LogLevel;
use crate::validation::ValidationRules;

/// Complete configuration structure.
///
/// Every field is optional so that sources can be layered; unset values
/// fall back to built-in defaults when resolved.
///
/// # Examples
///
/// ```
/// use booking::config::{Config, RulesConfig};
///
/// let config = Config {
///     rules: Some(RulesConfig { max_party: Some(8), max_message_length: None }),
///     ..Default::default()
/// };
/// assert_eq!(config.validation_rules().max_party, 8);
/// assert_eq!(config.validation_rules().max_message_length, 1000);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database location and connection settings.
    pub database: Option<DatabaseSettings>,

    /// Log verbosity: `quiet`, `normal`, or `verbose`.
    pub log_mode: Option<String>,

    /// Reservation validation limits.
    pub rules: Option<RulesConfig>,
}

/// Database settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DatabaseSettings {
    /// Path to the database file.
    pub path: Option<PathBuf>,

    /// Busy timeout in milliseconds.
    pub busy_timeout_ms: Option<u64>,
}

/// Validation limit overrides.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    /// Largest bookable party.
    pub max_party: Option<u32>,

    /// Longest accepted note, in characters.
    pub max_message_length: Option<usize>,
}

impl Config {
    /// Resolves the database connection configuration.
    ///
    /// Without an explicit path, the database lives in the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no path is configured and the data directory
    /// cannot be resolved.
    pub fn database_config(&self) -> Result<DatabaseConfig> {
        let settings = self.database.clone().unwrap_or_default();
        let path = match settings.path {
            Some(path) => path,
            None => resolve_database_path()?,
        };

        let mut config = DatabaseConfig::new(path);
        if let Some(ms) = settings.busy_timeout_ms {
            config = config.with_busy_timeout(Duration::from_millis(ms));
        }
        Ok(config)
    }

    /// Resolves the log level, defaulting to `Normal`.
    ///
    /// Unknown modes are rejected earlier by the validator, so they fall
    /// back to the default here.
    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        self.log_mode
            .as_deref()
            .and_then(|mode| LogLevel::parse(mode).ok())
            .unwrap_or_default()
    }

    /// Resolves the validation limits over the built-in defaults.
    #[must_use]
    pub fn validation_rules(&self) -> ValidationRules {
        let defaults = ValidationRules::default();
        let rules = self.rules.unwrap_or_default();
        ValidationRules {
            max_party: rules.max_party.unwrap_or(defaults.max_party),
            max_message_length: rules
                .max_message_length
                .unwrap_or(defaults.max_message_length),
        }
    }
}

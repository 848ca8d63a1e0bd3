//! Environment variable handling for configuration overrides.
//!
//! Every `BOOKING_*` variable overrides the matching configuration file
//! value.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Overrides `database.path`.
pub const DATABASE_PATH_ENV: &str = "BOOKING_DATABASE_PATH";
/// Overrides `database.busy_timeout_ms`.
pub const BUSY_TIMEOUT_ENV: &str = "BOOKING_BUSY_TIMEOUT_MS";
/// Overrides `rules.max_party`.
pub const MAX_PARTY_ENV: &str = "BOOKING_MAX_PARTY";
/// Overrides `rules.max_message_length`.
pub const MAX_MESSAGE_LENGTH_ENV: &str = "BOOKING_MAX_MESSAGE_LENGTH";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use booking::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(path) = env::var(DATABASE_PATH_ENV) {
            config.database.get_or_insert_with(Default::default).path = Some(PathBuf::from(path));
        }

        if let Ok(ms) = env::var(BUSY_TIMEOUT_ENV) {
            config
                .database
                .get_or_insert_with(Default::default)
                .busy_timeout_ms = Some(Self::parse_number(BUSY_TIMEOUT_ENV, &ms)?);
        }

        // BOOKING_LOG_MODE
        if let Ok(mode) = env::var(crate::logging::LOG_MODE_ENV) {
            config.log_mode = Some(mode);
        }

        if let Ok(party) = env::var(MAX_PARTY_ENV) {
            config.rules.get_or_insert_with(Default::default).max_party =
                Some(Self::parse_number(MAX_PARTY_ENV, &party)?);
        }

        if let Ok(length) = env::var(MAX_MESSAGE_LENGTH_ENV) {
            config
                .rules
                .get_or_insert_with(Default::default)
                .max_message_length = Some(Self::parse_number(MAX_MESSAGE_LENGTH_ENV, &length)?);
        }

        Ok(())
    }

    fn parse_number<T: FromStr>(field: &str, s: &str) -> Result<T> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Must be a non-negative integer, got '{s}'"),
        })
    }
}

//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::LogLevel;

/// Validates merged configuration before it is resolved.
///
/// # Examples
///
/// ```
/// use booking::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a zero busy timeout, an empty
    /// database path, a zero party limit, or an unknown log mode.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref database) = config.database {
            if database.busy_timeout_ms == Some(0) {
                return Err(Error::Validation {
                    field: "database.busy_timeout_ms".into(),
                    message: "Must be greater than zero".into(),
                });
            }
            if database
                .path
                .as_ref()
                .is_some_and(|path| path.as_os_str().is_empty())
            {
                return Err(Error::Validation {
                    field: "database.path".into(),
                    message: "Cannot be empty".into(),
                });
            }
        }

        if let Some(ref mode) = config.log_mode {
            LogLevel::parse(mode).map_err(|message| Error::Validation {
                field: "log_mode".into(),
                message,
            })?;
        }

        if let Some(rules) = config.rules {
            if rules.max_party == Some(0) {
                return Err(Error::Validation {
                    field: "rules.max_party".into(),
                    message: "Must allow at least one guest".into(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{DatabaseSettings, RulesConfig};

    fn field_of(config: &Config) -> String {
        ConfigValidator::validate(config)
            .unwrap_err()
            .field()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_zero_busy_timeout_rejected() {
        let config = Config {
            database: Some(DatabaseSettings {
                path: None,
                busy_timeout_ms: Some(0),
            }),
            ..Default::default()
        };
        assert_eq!(field_of(&config), "database.busy_timeout_ms");
    }

    #[test]
    fn test_unknown_log_mode_rejected() {
        let config = Config {
            log_mode: Some("chatty".into()),
            ..Default::default()
        };
        assert_eq!(field_of(&config), "log_mode");
    }

    #[test]
    fn test_zero_party_rejected() {
        let config = Config {
            rules: Some(RulesConfig {
                max_party: Some(0),
                max_message_length: None,
            }),
            ..Default::default()
        };
        assert_eq!(field_of(&config), "rules.max_party");
    }

    #[test]
    fn test_valid_config_accepted() {
        let config = Config {
            log_mode: Some("Verbose".into()),
            rules: Some(RulesConfig {
                max_party: Some(12),
                max_message_length: Some(0),
            }),
            ..Default::default()
        };
        ConfigValidator::validate(&config).unwrap();
    }
}

//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, DatabaseSettings, RulesConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use booking::config::{Config, ConfigMerger};
///
/// let low = Config { log_mode: Some("quiet".to_string()), ..Default::default() };
/// let high = Config { log_mode: Some("verbose".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.log_mode, Some("verbose".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge configuration sources, lowest precedence first.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target; set fields in `source` win.
    ///
    /// Nested sections merge field by field.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.log_mode.is_some() {
            target.log_mode.clone_from(&source.log_mode);
        }

        if let Some(ref database) = source.database {
            Self::merge_database(target.database.get_or_insert_with(Default::default), database);
        }

        if let Some(ref rules) = source.rules {
            Self::merge_rules(target.rules.get_or_insert_with(Default::default), rules);
        }
    }

    fn merge_database(target: &mut DatabaseSettings, source: &DatabaseSettings) {
        if source.path.is_some() {
            target.path.clone_from(&source.path);
        }
        if source.busy_timeout_ms.is_some() {
            target.busy_timeout_ms = source.busy_timeout_ms;
        }
    }

    fn merge_rules(target: &mut RulesConfig, source: &RulesConfig) {
        if source.max_party.is_some() {
            target.max_party = source.max_party;
        }
        if source.max_message_length.is_some() {
            target.max_message_length = source.max_message_length;
        }
    }
}

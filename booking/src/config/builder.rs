//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a [`Config`] from defaults, the data-directory file, the
/// environment, and programmatic overrides, in rising precedence.
///
/// # Examples
///
/// ```
/// use booking::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { log_mode: Some("verbose".into()), ..Default::default() })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.log_mode.as_deref(), Some("verbose"));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `booking.yaml` from `dir` instead of the resolved data directory.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Skips configuration files.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips `BOOKING_*` environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Layers `config` over every other source; later calls win.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Merges and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a file or environment variable cannot be
    /// parsed, or if the merged configuration is invalid.
    pub fn build(self) -> Result<Config> {
        let mut sources = Vec::new();
        if !self.skip_files {
            if let Some(source) = ConfigLoader::load_data_dir_config(self.data_dir.as_deref())? {
                log::debug!("loaded configuration from {}", source.path.display());
                sources.push(source);
            }
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for overlay in &self.overrides {
            ConfigMerger::merge_into(&mut config, overlay);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

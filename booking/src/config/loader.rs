//! Configuration file discovery and loading.

use crate::config::schema::Config;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "booking.yaml";

/// A loaded configuration file.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use booking::config::ConfigLoader;
/// use std::path::Path;
///
/// let source = ConfigLoader::load_data_dir_config(Some(Path::new("/etc/booking"))).unwrap();
/// println!("Found config: {}", source.is_some());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads `booking.yaml` from the data directory, if present.
    ///
    /// If `data_dir` is `None`, the resolved default data directory is used.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if no data directory can be resolved.
    pub fn load_data_dir_config(data_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match data_dir {
            Some(dir) => dir.join(CONFIG_FILE_NAME),
            None => crate::database::resolve_data_dir()?.join(CONFIG_FILE_NAME),
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            config,
        }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the file cannot be read and
    /// [`crate::Error::Configuration`] if the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }
}

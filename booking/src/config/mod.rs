//! Configuration system for booking.
//!
//! Configuration is merged from these sources, highest precedence first:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`BOOKING_*`)
//! 3. `booking.yaml` in the data directory
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use booking::config::ConfigBuilder;
//! use booking::database::Database;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let db = Database::open(config.database_config().unwrap()).unwrap();
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, CONFIG_FILE_NAME};
pub use merger::ConfigMerger;
pub use schema::{Config, DatabaseSettings, RulesConfig};
pub use validator::ConfigValidator;

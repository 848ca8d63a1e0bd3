//! Database layer for persistent storage of reservations.
//!
//! This module provides a SQLite-based storage layer: connection
//! management, schema versioning, and the [`Table`] query executor the
//! reservation store inserts through.
//!
//! # Examples
//!
//! ```no_run
//! use booking::database::{Database, DatabaseConfig, RESERVATIONS_TABLE};
//! use booking::query::QueryExecutor;
//!
//! let db = Database::open(DatabaseConfig::new("/tmp/booking.db")).unwrap();
//! let table = db.table(RESERVATIONS_TABLE).unwrap();
//! for row in table.select().unwrap() {
//!     println!("{row:?}");
//! }
//! db.close().unwrap();
//! ```

mod config;
mod connection;
pub mod migrations;
mod schema;
mod table;

pub use config::{
    default_data_dir, resolve_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE_NAME,
    DATA_DIR_ENV, DEFAULT_BUSY_TIMEOUT,
};
pub use connection::Database;
pub use schema::{CURRENT_SCHEMA_VERSION, RESERVATIONS_TABLE};
pub use table::Table;

pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};

#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # booking
//!
//! A single-table persistence layer for restaurant reservations.
//!
//! The crate validates booking requests and stores them in SQLite through
//! a small query-executor abstraction. Every collaborator of the
//! reservation store (executor, validator, diagnostics sink) is injected,
//! so each can be replaced by a test double.
//!
//! ## Core Types
//!
//! - [`Reservation`]: the booking value record
//! - [`Reservations`] and [`ReservationStore`]: fetch, save, validate, create
//! - [`ReservationValidator`] and [`Validate`]: shape checks
//! - [`Database`] and [`database::Table`]: the SQLite handle and executor
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use booking::database::{Database, RESERVATIONS_TABLE};
//! use booking::{Logger, Reservation, ReservationStore, ReservationValidator, Reservations};
//!
//! let db = Database::open_in_memory().unwrap();
//! let store = Reservations::new(
//!     db.table(RESERVATIONS_TABLE).unwrap(),
//!     ReservationValidator::default(),
//!     Logger::default(),
//! );
//!
//! let invalid = Reservation::builder()
//!     .date("2017/06/10")
//!     .time("06:02 AM")
//!     .party(4)
//!     .name("family")
//!     .email("username.example.com")
//!     .build();
//!
//! assert!(store.create(Some(invalid)).is_err());
//! assert!(store.fetch().unwrap().is_empty());
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod query;
pub mod reservation;
pub mod reservations;
pub mod validation;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use logging::{init_logger, Diagnostics, LogLevel, Logger};
pub use query::{QueryExecutor, Record};
pub use reservation::{Reservation, ReservationBuilder, StoredReservation};
pub use reservations::{ReservationStore, Reservations};
pub use validation::{ReservationValidator, Validate, ValidationRules};

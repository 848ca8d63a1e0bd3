//! The reservation store: fetch, save, validate, and create.
//!
//! [`Reservations`] composes three collaborators, each injected by the
//! caller:
//!
//! - a [`QueryExecutor`] bound to the reservations table,
//! - a [`Validate`] implementation checking reservation shape,
//! - a [`Diagnostics`] sink traced once per save.
//!
//! `create` validates first and persists only on success. Errors from
//! the validator and the executor are returned exactly as produced.
//!
//! # Examples
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
//! let reservation = Reservation::builder()
//!     .date("2017/06/10")
//!     .time("06:02 AM")
//!     .party(4)
//!     .name("family")
//!     .email("username@example.com")
//!     .build();
//!
//! let ids = store.create(Some(reservation.clone())).unwrap();
//! assert_eq!(ids, vec![1]);
//!
//! let stored = store.fetch().unwrap();
//! assert_eq!(stored[0].reservation, reservation);
//! ```

use crate::error::Result;
use crate::logging::Diagnostics;
use crate::query::{QueryExecutor, Record};
use crate::reservation::StoredReservation;
use crate::validation::Validate;
use crate::Reservation;

/// The operations the rest of an application books through.
#[cfg_attr(test, mockall::automock)]
pub trait ReservationStore {
    /// Returns every stored reservation, oldest first.
    ///
    /// # Errors
    ///
    /// Returns the executor's error, or [`crate::Error::Record`] if a row
    /// cannot be read back as a reservation.
    fn fetch(&self) -> Result<Vec<StoredReservation>>;

    /// Inserts `record` unmodified and returns the generated identifiers.
    ///
    /// # Errors
    ///
    /// Returns the executor's error unchanged.
    fn save(&self, record: &Record) -> Result<Vec<i64>>;

    /// Returns the reservation unchanged if it is present and well-formed.
    ///
    /// # Errors
    ///
    /// Returns the validator's error unchanged.
    fn validate(&self, reservation: Option<Reservation>) -> Result<Reservation>;

    /// Validates the reservation, then saves it.
    ///
    /// # Errors
    ///
    /// Returns the validation error without attempting persistence, or
    /// the save error.
    fn create(&self, reservation: Option<Reservation>) -> Result<Vec<i64>>;
}

/// Reservation store over injected collaborators.
#[derive(Debug)]
pub struct Reservations<E, V, D> {
    executor: E,
    validator: V,
    diagnostics: D,
}

impl<E, V, D> Reservations<E, V, D>
where
    E: QueryExecutor,
    V: Validate,
    D: Diagnostics,
{
    /// Creates a store from its collaborators.
    pub const fn new(executor: E, validator: V, diagnostics: D) -> Self {
        Self {
            executor,
            validator,
            diagnostics,
        }
    }

    /// Returns the validator in use.
    pub const fn validator(&self) -> &V {
        &self.validator
    }
}

impl<E, V, D> ReservationStore for Reservations<E, V, D>
where
    E: QueryExecutor,
    V: Validate,
    D: Diagnostics,
{
    fn fetch(&self) -> Result<Vec<StoredReservation>> {
        self.executor
            .select()?
            .iter()
            .map(StoredReservation::from_record)
            .collect()
    }

    fn save(&self, record: &Record) -> Result<Vec<i64>> {
        self.diagnostics
            .trace(&format!("saving reservation record with {} field(s)", record.len()));
        self.executor.insert(record)
    }

    fn validate(&self, reservation: Option<Reservation>) -> Result<Reservation> {
        self.validator.validate(reservation)
    }

    fn create(&self, reservation: Option<Reservation>) -> Result<Vec<i64>> {
        let reservation = self.validate(reservation)?;
        let record = reservation.to_record()?;
        self.save(&record)
    }
}

//! Error types for the booking library.
//!
//! This module provides the error hierarchy shared by the reservation
//! store, the query executor, and the configuration layer, using
//! `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a booking error.
///
/// # Examples
///
/// ```
/// use booking::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(1)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the booking library.
#[derive(Debug, Error)]
pub enum Error {
    /// A reservation field is missing or malformed.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// No reservation was supplied to an operation that requires one.
    #[error("missing reservation: no reservation was provided")]
    MissingReservation,

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A record could not be converted to or from a reservation.
    #[error("record error: {0}")]
    Record(#[from] serde_json::Error),

    /// A table or column name is not a plain SQL identifier.
    #[error("invalid identifier '{name}'")]
    InvalidIdentifier {
        /// The rejected identifier.
        name: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error is a field validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use booking::Error;
    ///
    /// let err = Error::Validation { field: "email".into(), message: "bad".into() };
    /// assert!(err.is_validation());
    /// assert!(!Error::MissingReservation.is_validation());
    /// ```
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns the offending field for validation errors.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }
}

//! Query executor abstraction.
//!
//! A query executor is bound to one table and knows how to insert a
//! [`Record`] and read every row back. The SQLite implementation lives in
//! [`crate::database::Table`]; tests substitute a mock.

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// An untyped row: column name to value.
pub type Record = Map<String, Value>;

/// Longest accepted table or column name.
pub const MAX_IDENTIFIER_LENGTH: usize = 64;

/// Inserts and selects rows of a single table.
#[cfg_attr(test, mockall::automock)]
pub trait QueryExecutor {
    /// Inserts `record` as one row and returns the generated identifiers.
    ///
    /// # Errors
    ///
    /// Returns the underlying database error unchanged.
    fn insert(&self, record: &Record) -> Result<Vec<i64>>;

    /// Returns every row of the table in insertion order.
    ///
    /// # Errors
    ///
    /// Returns the underlying database error unchanged.
    fn select(&self) -> Result<Vec<Record>>;
}

/// Checks that `name` is a plain SQL identifier safe to splice into a
/// statement.
///
/// # Errors
///
/// Returns [`Error::InvalidIdentifier`] unless `name` matches
/// `[A-Za-z_][A-Za-z0-9_]*` and is at most 64 characters long.
///
/// # Examples
///
/// ```
/// use booking::query::validate_identifier;
///
/// assert!(validate_identifier("reservations").is_ok());
/// assert!(validate_identifier("reservations; DROP TABLE x").is_err());
/// ```
pub fn validate_identifier(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let well_formed = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if well_formed && name.len() <= MAX_IDENTIFIER_LENGTH {
        Ok(())
    } else {
        Err(Error::InvalidIdentifier {
            name: name.to_string(),
        })
    }
}

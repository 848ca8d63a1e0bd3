//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the booking library.

use std::path::Path;

use booking::database::{Database, DatabaseConfig};
use booking::Reservation;

/// Opens a fresh database file inside `dir`.
#[allow(dead_code)]
pub fn open_database(dir: &Path) -> Database {
    Database::open(DatabaseConfig::new(dir.join("booking.db"))).unwrap()
}

/// Builder for creating test reservations with sensible defaults.
///
/// Defaults describe the canonical "family of four" booking.
#[allow(dead_code)]
pub struct ReservationFixture {
    date: String,
    time: String,
    party: u32,
    name: String,
    email: String,
    phone: Option<String>,
    message: Option<String>,
}

#[allow(dead_code)]
impl ReservationFixture {
    /// Creates a new fixture builder with default values.
    pub fn new() -> Self {
        Self {
            date: "2017/06/10".to_string(),
            time: "06:02 AM".to_string(),
            party: 4,
            name: "family".to_string(),
            email: "username@example.com".to_string(),
            phone: None,
            message: None,
        }
    }

    /// Sets the party size.
    pub fn with_party(mut self, party: u32) -> Self {
        self.party = party;
        self
    }

    /// Sets the booking name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the contact phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the note.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Builds the reservation.
    pub fn build(self) -> Reservation {
        Reservation::builder()
            .date(self.date)
            .time(self.time)
            .party(self.party)
            .name(self.name)
            .email(self.email)
            .phone(self.phone)
            .message(self.message)
            .build()
    }
}

impl Default for ReservationFixture {
    fn default() -> Self {
        Self::new()
    }
}

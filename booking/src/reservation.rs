//! Reservation types for restaurant bookings.
//!
//! A [`Reservation`] is a plain value record. Constructing one never
//! validates it; see [`crate::validation`] for the shape checks applied
//! before persistence.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::query::Record;

/// A booking request for a party at a given date and time.
///
/// # Examples
///
/// ```
/// use booking::Reservation;
///
/// let reservation = Reservation::builder()
///     .date("2017/06/10")
///     .time("06:02 AM")
///     .party(4)
///     .name("family")
///     .email("username@example.com")
///     .build();
///
/// assert_eq!(reservation.party(), 4);
/// assert_eq!(reservation.phone(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Reservation {
    date: String,
    time: String,
    party: u32,
    name: String,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl Reservation {
    /// Creates a new reservation builder with every field unset.
    #[must_use]
    pub fn builder() -> ReservationBuilder {
        ReservationBuilder::default()
    }

    /// Builds a reservation from a field mapping.
    ///
    /// Missing fields are left empty so that validation, not parsing,
    /// reports them. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Record`] if a present field has the wrong type,
    /// such as a negative or textual `party`.
    ///
    /// # Examples
    ///
    /// ```
    /// use booking::Reservation;
    /// use serde_json::json;
    ///
    /// let fields = json!({ "name": "family", "party": 2 });
    /// let reservation = Reservation::from_record(fields.as_object().unwrap()).unwrap();
    /// assert_eq!(reservation.name(), "family");
    /// assert_eq!(reservation.email(), "");
    /// ```
    pub fn from_record(record: &Record) -> Result<Self> {
        Ok(serde_json::from_value(Value::Object(record.clone()))?)
    }

    /// Converts the reservation into a column-to-value record for insertion.
    ///
    /// Absent optional fields are omitted rather than written as `null`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization does not produce an object.
    pub fn to_record(&self) -> Result<Record> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(Error::Validation {
                field: "reservation".into(),
                message: format!("expected an object, serialized to {other}"),
            }),
        }
    }

    /// Returns the calendar date string.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the clock time string.
    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Returns the number of guests.
    #[must_use]
    pub const fn party(&self) -> u32 {
        self.party
    }

    /// Returns the name the booking is held under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the optional contact phone number.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Returns the optional note left with the booking.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Builder for creating `Reservation` instances.
///
/// Values are stored exactly as given; nothing is trimmed or checked.
#[derive(Debug, Default)]
pub struct ReservationBuilder {
    inner: Reservation,
}

impl ReservationBuilder {
    /// Sets the calendar date, e.g. `2017/06/10`.
    #[must_use]
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.inner.date = date.into();
        self
    }

    /// Sets the clock time, e.g. `06:02 AM`.
    #[must_use]
    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.inner.time = time.into();
        self
    }

    /// Sets the number of guests.
    #[must_use]
    pub const fn party(mut self, party: u32) -> Self {
        self.inner.party = party;
        self
    }

    /// Sets the name the booking is held under.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.inner.name = name.into();
        self
    }

    /// Sets the contact email.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.inner.email = email.into();
        self
    }

    /// Sets the optional contact phone number.
    #[must_use]
    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.inner.phone = phone;
        self
    }

    /// Sets the optional note.
    #[must_use]
    pub fn message(mut self, message: Option<String>) -> Self {
        self.inner.message = message;
        self
    }

    /// Builds the reservation.
    #[must_use]
    pub fn build(self) -> Reservation {
        self.inner
    }
}

/// A reservation read back from storage, with its generated identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredReservation {
    /// Generated primary key.
    pub id: i64,
    /// The stored booking.
    #[serde(flatten)]
    pub reservation: Reservation,
}

impl StoredReservation {
    /// Builds a stored reservation from a selected row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Record`] if the row lacks an integer `id` or a field
    /// has the wrong type.
    pub fn from_record(record: &Record) -> Result<Self> {
        Ok(serde_json::from_value(Value::Object(record.clone()))?)
    }
}

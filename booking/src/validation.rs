//! Reservation shape validation.
//!
//! [`ReservationValidator`] checks that the required fields of a
//! [`Reservation`] are present and well-formed. Validation is a pure
//! pass-through: on success the same value is handed back untouched.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::Reservation;

#[cfg(test)]
mod proptests;

/// Accepted calendar date layouts.
pub const DATE_FORMATS: [&str; 2] = ["%Y/%m/%d", "%Y-%m-%d"];

/// Accepted clock time layouts.
pub const TIME_FORMATS: [&str; 2] = ["%I:%M %p", "%H:%M"];

/// Longest accepted `name`.
pub const MAX_NAME_LENGTH: usize = 255;

/// Longest accepted `email` (RFC 5321 path limit).
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Limits applied by [`ReservationValidator`].
///
/// # Examples
///
/// ```
/// use booking::ValidationRules;
///
/// let rules = ValidationRules::default();
/// assert_eq!(rules.max_party, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationRules {
    /// Largest party that can be booked in one reservation.
    pub max_party: u32,
    /// Longest accepted note, in characters.
    pub max_message_length: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            max_party: 20,
            max_message_length: 1000,
        }
    }
}

/// Checks a possibly absent reservation before it is persisted.
#[cfg_attr(test, mockall::automock)]
pub trait Validate {
    /// Returns the reservation unchanged when it is present and well-formed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingReservation`] for absent input and
    /// [`Error::Validation`] naming the first offending field otherwise.
    fn validate(&self, reservation: Option<Reservation>) -> Result<Reservation>;
}

/// Rule-based reservation validator.
///
/// # Examples
///
/// ```
/// use booking::{Reservation, ReservationValidator, Validate};
///
/// let validator = ReservationValidator::default();
/// let reservation = Reservation::builder()
///     .date("2017/06/10")
///     .time("06:02 AM")
///     .party(4)
///     .name("family")
///     .email("username.example.com")
///     .build();
///
/// let err = validator.validate(Some(reservation)).unwrap_err();
/// assert!(err.is_validation());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ReservationValidator {
    rules: ValidationRules,
}

impl ReservationValidator {
    /// Creates a validator enforcing the given limits.
    #[must_use]
    pub const fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    /// Returns the limits in force.
    #[must_use]
    pub const fn rules(&self) -> ValidationRules {
        self.rules
    }

    fn check(&self, reservation: &Reservation) -> Result<()> {
        validate_date(reservation.date())?;
        validate_time(reservation.time())?;
        self.validate_party(reservation.party())?;
        validate_name(reservation.name())?;
        validate_email(reservation.email())?;
        if let Some(phone) = reservation.phone() {
            validate_phone(phone)?;
        }
        if let Some(message) = reservation.message() {
            self.validate_message(message)?;
        }
        Ok(())
    }

    fn validate_party(&self, party: u32) -> Result<()> {
        if party == 0 {
            return Err(invalid("party", "is required and must be at least 1"));
        }
        if party > self.rules.max_party {
            return Err(invalid(
                "party",
                format!("cannot exceed {} guests", self.rules.max_party),
            ));
        }
        Ok(())
    }

    fn validate_message(&self, message: &str) -> Result<()> {
        if message.chars().count() > self.rules.max_message_length {
            return Err(invalid(
                "message",
                format!(
                    "cannot exceed {} characters",
                    self.rules.max_message_length
                ),
            ));
        }
        Ok(())
    }
}

impl Validate for ReservationValidator {
    fn validate(&self, reservation: Option<Reservation>) -> Result<Reservation> {
        let reservation = reservation.ok_or(Error::MissingReservation)?;
        self.check(&reservation)?;
        Ok(reservation)
    }
}

fn invalid(field: &str, message: impl Into<String>) -> Error {
    Error::Validation {
        field: field.into(),
        message: message.into(),
    }
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid(field, "is required"));
    }
    Ok(trimmed)
}

fn validate_date(date: &str) -> Result<()> {
    let date = required("date", date)?;
    if DATE_FORMATS
        .iter()
        .any(|format| NaiveDate::parse_from_str(date, format).is_ok())
    {
        Ok(())
    } else {
        Err(invalid("date", format!("'{date}' is not a calendar date")))
    }
}

fn validate_time(time: &str) -> Result<()> {
    let time = required("time", time)?;
    if TIME_FORMATS
        .iter()
        .any(|format| NaiveTime::parse_from_str(time, format).is_ok())
    {
        Ok(())
    } else {
        Err(invalid("time", format!("'{time}' is not a clock time")))
    }
}

fn validate_name(name: &str) -> Result<()> {
    let name = required("name", name)?;
    if name.contains('\0') {
        return Err(invalid("name", "cannot contain null bytes"));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(invalid(
            "name",
            format!("cannot exceed {MAX_NAME_LENGTH} characters"),
        ));
    }
    Ok(())
}

/// Checks that `email` has the shape `local@domain.tld`.
///
/// # Errors
///
/// Returns [`Error::Validation`] for the `email` field when the value is
/// empty, lacks exactly one `@`, or has a malformed domain.
///
/// # Examples
///
/// ```
/// use booking::validation::validate_email;
///
/// assert!(validate_email("username@example.com").is_ok());
/// assert!(validate_email("username.example.com").is_err());
/// ```
pub fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() {
        return Err(invalid("email", "is required"));
    }
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(invalid(
            "email",
            format!("cannot exceed {MAX_EMAIL_LENGTH} characters"),
        ));
    }
    if email.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(invalid("email", "cannot contain whitespace"));
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(invalid("email", "must contain '@'"));
    };
    if local.is_empty() || domain.contains('@') {
        return Err(invalid("email", "must have the form local@domain"));
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return Err(invalid("email", "local part has misplaced dots"));
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err(invalid("email", "domain must contain a '.'"));
    }
    for label in &labels {
        let well_formed = !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
        if !well_formed {
            return Err(invalid("email", format!("invalid domain label '{label}'")));
        }
    }

    let tld = labels.last().copied().unwrap_or_default();
    if tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(invalid("email", format!("invalid top-level domain '{tld}'")));
    }

    Ok(())
}

fn validate_phone(phone: &str) -> Result<()> {
    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')' | '.'))
    {
        return Err(invalid("phone", "may only contain digits and + - ( ) ."));
    }
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if !(7..=15).contains(&digits) {
        return Err(invalid("phone", "must contain 7 to 15 digits"));
    }
    Ok(())
}

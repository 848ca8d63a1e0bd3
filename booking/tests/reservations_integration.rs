//! Integration tests for the reservation store over a real database.

mod common;

use booking::database::RESERVATIONS_TABLE;
use booking::{
    Diagnostics, Error, Logger, LogLevel, Reservation, ReservationStore, ReservationValidator,
    Reservations, Result, Validate, ValidationRules,
};
use common::{open_database, ReservationFixture};
use mockall::mock;
use mockall::predicate::eq;
use serde_json::json;
use tempfile::tempdir;

mock! {
    Validator {}
    impl Validate for Validator {
        fn validate(&self, reservation: Option<Reservation>) -> Result<Reservation>;
    }
}

mock! {
    Trace {}
    impl Diagnostics for Trace {
        fn trace(&self, message: &str);
    }
}

#[test]
fn test_create_then_fetch() {
    let dir = tempdir().unwrap();
    let db = open_database(dir.path());
    let store = Reservations::new(
        db.table(RESERVATIONS_TABLE).unwrap(),
        ReservationValidator::default(),
        Logger::new(LogLevel::Quiet),
    );

    let first = ReservationFixture::new().build();
    let second = ReservationFixture::new()
        .with_name("anniversary")
        .with_party(2)
        .with_phone("555-010-0199")
        .with_message("Window seat")
        .build();

    assert_eq!(store.create(Some(first.clone())).unwrap(), vec![1]);
    assert_eq!(store.create(Some(second.clone())).unwrap(), vec![2]);

    let stored = store.fetch().unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].id, 1);
    assert_eq!(stored[0].reservation, first);
    assert_eq!(stored[1].id, 2);
    assert_eq!(stored[1].reservation, second);
}

#[test]
fn test_invalid_email_is_never_persisted() {
    let db = booking::Database::open_in_memory().unwrap();
    let store = Reservations::new(
        db.table(RESERVATIONS_TABLE).unwrap(),
        ReservationValidator::default(),
        Logger::new(LogLevel::Quiet),
    );

    let invalid = ReservationFixture::new()
        .with_email("username.example.com")
        .build();
    let err = store.create(Some(invalid)).unwrap_err();

    assert_eq!(err.field(), Some("email"));
    assert!(store.fetch().unwrap().is_empty());
}

#[test]
fn test_missing_reservation_is_explicit() {
    let db = booking::Database::open_in_memory().unwrap();
    let store = Reservations::new(
        db.table(RESERVATIONS_TABLE).unwrap(),
        ReservationValidator::default(),
        Logger::new(LogLevel::Quiet),
    );

    let err = store.create(None).unwrap_err();
    assert!(matches!(err, Error::MissingReservation));
    assert!(err.to_string().contains("missing reservation"));
}

#[test]
fn test_save_is_not_idempotent() {
    let db = booking::Database::open_in_memory().unwrap();
    let mut trace = MockTrace::new();
    trace.expect_trace().times(2).return_const(());
    let store = Reservations::new(
        db.table(RESERVATIONS_TABLE).unwrap(),
        ReservationValidator::default(),
        trace,
    );

    let record = ReservationFixture::new().build().to_record().unwrap();
    assert_eq!(store.save(&record).unwrap(), vec![1]);
    assert_eq!(store.save(&record).unwrap(), vec![2]);
    assert_eq!(store.fetch().unwrap().len(), 2);
}

#[test]
fn test_save_unknown_shape_propagates_database_error() {
    let db = booking::Database::open_in_memory().unwrap();
    let store = Reservations::new(
        db.table(RESERVATIONS_TABLE).unwrap(),
        ReservationValidator::default(),
        Logger::new(LogLevel::Quiet),
    );

    let record = json!({ "foo": "bar" }).as_object().cloned().unwrap();
    let err = store.save(&record).unwrap_err();
    assert!(matches!(err, Error::Database(_)));
}

#[test]
fn test_injected_validator_error_is_returned_as_is() {
    let db = booking::Database::open_in_memory().unwrap();
    let reservation = ReservationFixture::new().build();

    let mut validator = MockValidator::new();
    validator
        .expect_validate()
        .with(eq(Some(reservation.clone())))
        .times(1)
        .returning(|_| {
            Err(Error::Validation {
                field: "reservation".into(),
                message: "fail".into(),
            })
        });
    let mut trace = MockTrace::new();
    trace.expect_trace().never();

    let store = Reservations::new(db.table(RESERVATIONS_TABLE).unwrap(), validator, trace);
    let err = store.create(Some(reservation)).unwrap_err();

    assert_eq!(err.to_string(), "validation error for 'reservation': fail");
    assert!(store.fetch().unwrap().is_empty());
}

#[test]
fn test_rules_come_from_configuration() {
    let db = booking::Database::open_in_memory().unwrap();
    let store = Reservations::new(
        db.table(RESERVATIONS_TABLE).unwrap(),
        ReservationValidator::new(ValidationRules {
            max_party: 2,
            ..ValidationRules::default()
        }),
        Logger::new(LogLevel::Quiet),
    );

    let err = store
        .create(Some(ReservationFixture::new().with_party(3).build()))
        .unwrap_err();
    assert_eq!(err.field(), Some("party"));
    assert_eq!(store.validator().rules().max_party, 2);
}

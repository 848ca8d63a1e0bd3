//! Property-based tests for reservation validation.

use super::{validate_email, ReservationValidator, Validate};
use crate::Reservation;
use proptest::prelude::*;

fn reservation_with_email(email: String) -> Reservation {
    Reservation::builder()
        .date("2017/06/10")
        .time("06:02 AM")
        .party(4)
        .name("family")
        .email(email)
        .build()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Anything without an '@' is never an email
    #[test]
    fn email_without_at_is_rejected(email in "[^@]{0,64}") {
        prop_assert!(validate_email(&email).is_err());
    }

    // Simple local@label.tld addresses always pass
    #[test]
    fn simple_addresses_are_accepted(
        local in "[a-z0-9][a-z0-9._+]{0,15}[a-z0-9]",
        label in "[a-z0-9]([a-z0-9-]{0,20}[a-z0-9])?",
        tld in "[a-z]{2,6}",
    ) {
        prop_assume!(!local.contains(".."));
        let email = format!("{local}@{label}.{tld}");
        prop_assert!(validate_email(&email).is_ok(), "{} rejected", email);
    }

    // Successful validation hands back an identical value
    #[test]
    fn validation_is_a_pass_through(
        local in "[a-z]{1,10}",
        party in 1u32..=20,
        name in "[A-Za-z][A-Za-z ]{0,30}",
    ) {
        let reservation = Reservation::builder()
            .date("2017/06/10")
            .time("06:02 AM")
            .party(party)
            .name(name)
            .email(format!("{local}@example.com"))
            .build();
        let validated = ReservationValidator::default()
            .validate(Some(reservation.clone()))
            .unwrap();
        prop_assert_eq!(validated, reservation);
    }

    // Emails failing the shape check also fail full validation on that field
    #[test]
    fn malformed_email_fails_on_email_field(email in "[a-z.]{1,30}") {
        let err = ReservationValidator::default()
            .validate(Some(reservation_with_email(email)))
            .unwrap_err();
        prop_assert_eq!(err.field(), Some("email"));
    }
}

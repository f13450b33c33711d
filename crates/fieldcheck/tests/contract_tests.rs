//! Contract-level tests: behavior shared by every validator.

use chrono::{DateTime, TimeZone, Utc};
use fieldcheck::prelude::*;

fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

#[test]
fn validate_is_idempotent() {
    let mut email = Email::new();
    let first = Validator::<str>::validate(&mut email, Some("a..b@example.com"), None).unwrap();
    let first_message = Validator::<str>::last_error(&email).map(str::to_owned);
    let second = Validator::<str>::validate(&mut email, Some("a..b@example.com"), None).unwrap();
    let second_message = Validator::<str>::last_error(&email).map(str::to_owned);

    assert_eq!(first, second);
    assert_eq!(first_message, second_message);

    let mut range = DateBetween::new().between(date(2024, 1, 1), date(2024, 12, 31));
    let value = DateInput::Date(date(2030, 1, 1));
    let first = range.validate(Some(&value), None).unwrap();
    let second = range.validate(Some(&value), None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn context_is_accepted_and_ignored() {
    let ctx = Context::new().with("sibling_field", "2024-01-01");

    let mut email = Email::new();
    assert!(Validator::<str>::validate(&mut email, Some("dev@example.com"), Some(&ctx)).unwrap());

    let mut range = DateBetween::new().between(date(2024, 1, 1), date(2024, 12, 31));
    let value = DateInput::Date(date(2024, 6, 1));
    assert!(range.validate(Some(&value), Some(&ctx)).unwrap());
}

#[test]
fn validators_work_as_trait_objects() {
    let mut rules: Vec<Box<dyn Validator<str>>> = vec![
        Box::new(Email::new()),
        Box::new(
            DateBetween::new()
                .between(date(2024, 1, 1), date(2024, 12, 31))
                .date_format("%Y-%m-%d"),
        ),
    ];

    let names: Vec<&str> = rules.iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["email", "date_between"]);

    assert!(rules[0].validate(Some("dev@example.com"), None).unwrap());
    assert!(rules[1].validate(Some("2024-06-15"), None).unwrap());
}

#[test]
fn rejection_and_failure_channels_stay_separate() {
    // Rejection: a boolean false with a readable reason.
    let mut email = Email::new();
    let outcome = Validator::<str>::validate(&mut email, Some("a@b@c.com"), None);
    assert_eq!(outcome, Ok(false));
    assert!(Validator::<str>::last_error(&email).is_some());

    // Failure: missing configuration is never coerced into false.
    let mut range = DateBetween::new().allow_missing(false);
    let err = Validator::<DateInput>::validate(&mut range, None, None).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Misconfigured);
    assert_eq!(Validator::<DateInput>::last_error(&range), None);
}

#[test]
fn last_error_matches_the_configured_message_exactly() {
    let mut range = DateBetween::new()
        .between(date(2024, 1, 1), date(2024, 12, 31))
        .with_message("outside the booking window");
    let value = DateInput::Date(date(2030, 1, 1));
    range.validate(Some(&value), None).unwrap();
    assert_eq!(
        Validator::<DateInput>::last_error(&range),
        Some("outside the booking window")
    );

    // Default message when no override is configured.
    let mut plain = DateBetween::new().between(date(2024, 1, 1), date(2024, 12, 31));
    plain.validate(Some(&value), None).unwrap();
    assert_eq!(
        Validator::<DateInput>::last_error(&plain),
        Some("given date is not between predefined dates")
    );
}

#[test]
fn reusing_a_configured_rule_across_inputs() {
    let mut range = DateBetween::new()
        .between(date(2024, 1, 1), date(2024, 12, 31))
        .date_format("%Y-%m-%d");

    let inputs = [
        ("2024-02-01", true),
        ("2023-12-31", false),
        ("2024-12-31", true),
        ("2025-01-01", false),
    ];
    for (text, expected) in inputs {
        let outcome = Validator::<str>::validate(&mut range, Some(text), None).unwrap();
        assert_eq!(outcome, expected, "input {text}");
    }
}

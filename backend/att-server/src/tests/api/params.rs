use crate::ApiError;
use crate::api::params::{parse_date, parse_id, parse_optional_id};

use chrono::NaiveDate;
use googletest::prelude::*;

#[test]
fn given_positive_integer_when_parsed_then_returns_id() {
    assert_eq!(parse_id("courseID", " 42 ").unwrap(), 42);
}

#[test]
fn given_zero_or_garbage_when_parsed_then_names_field() {
    for raw in ["0", "-3", "abc", ""] {
        match parse_id("lectureID", raw) {
            Err(ApiError::Validation { field, .. }) => {
                assert_eq!(field.as_deref(), Some("lectureID"))
            }
            other => panic!("expected validation error for {raw:?}, got {other:?}"),
        }
    }
}

#[test]
fn given_blank_optional_when_parsed_then_none() {
    assert_that!(parse_optional_id("lecture_id", None).unwrap(), none());
    assert_that!(parse_optional_id("lecture_id", Some("  ")).unwrap(), none());
    assert_that!(parse_optional_id("lecture_id", Some("9")).unwrap(), some(eq(9)));
}

#[test]
fn given_iso_date_when_parsed_then_returns_day() {
    let expected = NaiveDate::from_ymd_opt(2026, 10, 5).unwrap();

    assert_eq!(parse_date("date", "2026-10-05").unwrap(), expected);
    assert!(parse_date("date", "05/10/2026").is_err());
}

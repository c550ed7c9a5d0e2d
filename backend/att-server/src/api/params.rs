//! Parsing of path and query parameters into domain ids.

use crate::ApiError;

use chrono::NaiveDate;

/// Parse a positive integer id, naming `field` on failure.
#[track_caller]
pub fn parse_id(field: &str, raw: &str) -> Result<i64, ApiError> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::validation(
            field,
            format!("{field} must be a positive integer, got '{raw}'"),
        )),
    }
}

#[track_caller]
pub fn parse_optional_id(field: &str, raw: Option<&str>) -> Result<Option<i64>, ApiError> {
    match raw.map(str::trim).filter(|r| !r.is_empty()) {
        Some(raw) => parse_id(field, raw).map(Some),
        None => Ok(None),
    }
}

/// `YYYY-MM-DD`
#[track_caller]
pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ApiError::validation(field, format!("{field} must be YYYY-MM-DD, got '{raw}'")))
}

use crate::{Client, ClientError};

use error_location::ErrorLocation;
use std::panic::Location;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8000/", None);
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_session_token_stored() {
    let client = Client::new("http://localhost:8000", Some("jwt-abc"));
    assert_eq!(client.session_token.as_deref(), Some("jwt-abc"));
}

#[test]
fn test_session_token_none() {
    let client = Client::new("http://localhost:8000", None);
    assert!(client.session_token.is_none());
}

#[test]
fn test_rejection_exposes_code_and_status() {
    let err = ClientError::Rejected {
        status: 403,
        code: "FORBIDDEN".into(),
        message: "Access denied".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    assert_eq!(err.code(), Some("FORBIDDEN"));
    assert_eq!(err.status(), Some(403));
    assert!(err.to_string().contains("403"));
}

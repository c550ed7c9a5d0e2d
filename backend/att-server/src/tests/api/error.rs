use crate::ApiError;

use att_auth::AuthError;
use att_core::{Role, StudentStatus};
use att_db::DbError;
use att_token::TokenError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_forbidden_hides_reason_from_body() {
    let error = ApiError::Forbidden {
        reason: "student 4 may not mark_attendance students:7:9".into(),
        location: here(),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
    assert_eq!(json["error"]["message"], "Access denied");
    assert!(!json.to_string().contains("students:7:9"));
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) = body_json(ApiError::validation("courseID", "must be positive")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "courseID");
}

#[tokio::test]
async fn test_not_found_omits_field() {
    let error = ApiError::NotFound {
        message: "No matching attendance record".into(),
        location: here(),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].get("field").is_none());
}

#[test]
fn test_auth_errors_map_to_401_or_403() {
    let cases = [
        (
            AuthError::Unauthenticated {
                message: "missing".into(),
                location: here(),
            },
            StatusCode::UNAUTHORIZED,
        ),
        (AuthError::TokenExpired { location: here() }, StatusCode::UNAUTHORIZED),
        (
            AuthError::TenantMismatch {
                identity_tenant: 7,
                requested_tenant: 8,
                location: here(),
            },
            StatusCode::FORBIDDEN,
        ),
        (
            AuthError::InsufficientRole {
                role: Role::Student,
                allowed: vec![Role::Admin],
                location: here(),
            },
            StatusCode::FORBIDDEN,
        ),
        (
            AuthError::ProfileNotFound {
                tenant_id: 7,
                principal_id: "kratos-1".into(),
                location: here(),
            },
            StatusCode::FORBIDDEN,
        ),
        (
            AuthError::ProfileInactive {
                student_id: 1,
                status: StudentStatus::Frozen,
                location: here(),
            },
            StatusCode::FORBIDDEN,
        ),
        (
            AuthError::PermissionDenied {
                subject: "kratos-1".into(),
                action: "mark_attendance".into(),
                resource: "students:7:2".into(),
                location: here(),
            },
            StatusCode::FORBIDDEN,
        ),
    ];

    for (auth_error, expected) in cases {
        let description = auth_error.to_string();
        assert_eq!(ApiError::from(auth_error).status(), expected, "{description}");
    }
}

#[test]
fn test_session_upstream_failure_maps_to_502() {
    let error = ApiError::from(AuthError::Upstream {
        service: "identity provider",
        message: "connection refused".into(),
        location: here(),
    });

    assert_eq!(error.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(error.code(), "UPSTREAM_ERROR");
}

#[test]
fn test_collaborator_timeout_maps_to_504() {
    let error = ApiError::from(AuthError::Timeout {
        operation: "session validation",
        timeout_ms: 100,
        location: here(),
    });

    assert_eq!(error.status(), StatusCode::GATEWAY_TIMEOUT);
}

#[test]
fn test_token_errors_map_to_distinct_codes() {
    let malformed = ApiError::from(TokenError::Malformed {
        reason: "missing separator".into(),
        location: here(),
    });
    let expired = ApiError::from(TokenError::Expired {
        expires_at: 0,
        location: here(),
    });
    let forged = ApiError::from(TokenError::InvalidSignature { location: here() });
    let foreign = ApiError::from(TokenError::TenantMismatch {
        token_tenant: 8,
        redeemer_tenant: 7,
        location: here(),
    });

    assert_eq!(malformed.code(), "MALFORMED_TOKEN");
    assert_eq!(expired.code(), "EXPIRED_TOKEN");
    assert_eq!(forged.code(), "INVALID_TOKEN_SIGNATURE");
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
    assert_eq!(expired.status(), StatusCode::BAD_REQUEST);
    assert_eq!(forged.status(), StatusCode::BAD_REQUEST);
    assert_eq!(foreign.status(), StatusCode::FORBIDDEN);
}

#[test]
fn test_invalid_ttl_maps_to_validation_on_ttl_field() {
    let error = ApiError::from(TokenError::InvalidTtl {
        message: "ttl must be positive".into(),
        location: here(),
    });

    match error {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("ttl_secs")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_database_error_does_not_leak_sqlx_text() {
    let error = ApiError::from(DbError::Migration {
        message: "no such table: attendance".into(),
        location: here(),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!json.to_string().contains("no such table"));
}

#[test]
fn test_db_not_found_maps_to_404() {
    let error = ApiError::from(DbError::NotFound {
        entity: "attendance",
        key: "7/1/10/55".into(),
        location: here(),
    });

    assert_eq!(error.status(), StatusCode::NOT_FOUND);
}

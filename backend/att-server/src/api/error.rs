//! REST API error types
//!
//! Every failure leaves the server as `{"error": {"code", "message", "field?"}}`.
//! Authorization denials are reported generically; the typed reason is
//! only logged.

use att_auth::AuthError;
use att_db::DbError;
use att_token::TokenError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "FORBIDDEN", "EXPIRED_TOKEN")
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthenticated: {message} {location}")]
    Unauthenticated {
        message: String,
        location: ErrorLocation,
    },

    #[error("Forbidden: {reason} {location}")]
    Forbidden {
        /// Logged, never returned
        reason: String,
        location: ErrorLocation,
    },

    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed token: {message} {location}")]
    MalformedToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Expired token {location}")]
    ExpiredToken { location: ErrorLocation },

    #[error("Invalid token signature {location}")]
    InvalidTokenSignature { location: ErrorLocation },

    #[error("Upstream failure: {message} {location}")]
    Upstream {
        message: String,
        location: ErrorLocation,
    },

    #[error("Timed out: {message} {location}")]
    Timeout {
        message: String,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. }
            | Self::BadRequest { .. }
            | Self::MalformedToken { .. }
            | Self::ExpiredToken { .. }
            | Self::InvalidTokenSignature { .. } => StatusCode::BAD_REQUEST,
            Self::Upstream { .. } => StatusCode::BAD_GATEWAY,
            Self::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthenticated { .. } => "UNAUTHENTICATED",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::BadRequest { .. } => "BAD_REQUEST",
            Self::MalformedToken { .. } => "MALFORMED_TOKEN",
            Self::ExpiredToken { .. } => "EXPIRED_TOKEN",
            Self::InvalidTokenSignature { .. } => "INVALID_TOKEN_SIGNATURE",
            Self::Upstream { .. } => "UPSTREAM_ERROR",
            Self::Timeout { .. } => "TIMEOUT",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Shorthand for a field-level validation failure
    #[track_caller]
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let code = self.code().to_string();
        let (message, field) = match self {
            ApiError::Unauthenticated { message, .. } => (message, None),
            ApiError::Forbidden { .. } => ("Access denied".to_string(), None),
            ApiError::NotFound { message, .. } => (message, None),
            ApiError::Validation { message, field, .. } => (message, field),
            ApiError::BadRequest { message, .. } => (message, None),
            ApiError::MalformedToken { message, .. } => (message, None),
            ApiError::ExpiredToken { .. } => ("Token has expired".to_string(), None),
            ApiError::InvalidTokenSignature { .. } => {
                ("Token signature is invalid".to_string(), None)
            }
            ApiError::Upstream { message, .. } => (message, None),
            ApiError::Timeout { message, .. } => (message, None),
            ApiError::Internal { message, .. } => (message, None),
        };

        (
            status,
            Json(ApiErrorResponse {
                error: ApiErrorBody {
                    code,
                    message,
                    field,
                },
            }),
        )
            .into_response()
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if e.is_unauthenticated() {
            return ApiError::Unauthenticated {
                message: "Missing or invalid session".to_string(),
                location,
            };
        }
        if e.is_forbidden() {
            return ApiError::Forbidden {
                reason: e.to_string(),
                location,
            };
        }

        match e {
            AuthError::Upstream { service, .. } => {
                log::error!("Collaborator failure: {}", e);
                ApiError::Upstream {
                    message: format!("{service} unavailable"),
                    location,
                }
            }
            AuthError::Timeout { operation, .. } => ApiError::Timeout {
                message: format!("{operation} timed out"),
                location,
            },
            _ => {
                log::error!("Authorization failure: {}", e);
                ApiError::Internal {
                    message: "Authorization could not be completed".to_string(),
                    location,
                }
            }
        }
    }
}

impl From<TokenError> for ApiError {
    #[track_caller]
    fn from(e: TokenError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            TokenError::Malformed { .. } => ApiError::MalformedToken {
                message: "Token could not be decoded".to_string(),
                location,
            },
            TokenError::Expired { .. } => ApiError::ExpiredToken { location },
            TokenError::InvalidSignature { .. } => ApiError::InvalidTokenSignature { location },
            TokenError::TenantMismatch { .. } => ApiError::Forbidden {
                reason: e.to_string(),
                location,
            },
            TokenError::InvalidTtl { message, .. } => ApiError::Validation {
                message,
                field: Some("ttl_secs".to_string()),
                location,
            },
            TokenError::QrRender { .. } => {
                log::error!("QR rendering failed: {}", e);
                ApiError::Internal {
                    message: "Could not render QR code".to_string(),
                    location,
                }
            }
        }
    }
}

/// Persistence internals never reach the caller
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            DbError::NotFound { entity, .. } => ApiError::NotFound {
                message: format!("No matching {entity} record"),
                location,
            },
            _ => {
                log::error!("Database error: {}", e);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location,
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

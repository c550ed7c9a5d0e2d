use att_auth::{SESSION_HEADER, TENANT_HEADER};
use att_core::TenantId;

use crate::ApiError;

use axum::http::HeaderMap;

/// Session token from the `X-Session-Token` header, if present and readable.
pub fn session_token(headers: &HeaderMap) -> Option<&str> {
    headers.get(SESSION_HEADER).and_then(|v| v.to_str().ok())
}

/// Tenant a request explicitly targets via `X-College-Id`.
///
/// Absent means "the caller's own tenant"; an unparsable value is a bad request.
#[track_caller]
pub fn requested_tenant(headers: &HeaderMap) -> Result<Option<TenantId>, ApiError> {
    let Some(value) = headers.get(TENANT_HEADER) else {
        return Ok(None);
    };

    value
        .to_str()
        .ok()
        .and_then(|v| v.trim().parse::<TenantId>().ok())
        .map(Some)
        .ok_or_else(|| ApiError::validation(TENANT_HEADER, "college id must be an integer"))
}

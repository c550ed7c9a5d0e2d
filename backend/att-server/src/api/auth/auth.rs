//! Login hand-off and session callback

use crate::api::extractors::session_token::session_token;
use crate::{ApiResult, AppState, CallbackQuery, IdentityResponse, LoginResponse};

use axum::{
    Json,
    extract::{Query, State},
    http::HeaderMap,
};
use log::info;

/// GET /auth/login
pub async fn login(State(state): State<AppState>) -> Json<LoginResponse> {
    Json(LoginResponse {
        login_url: state.login_url.clone(),
    })
}

/// GET /auth/callback
///
/// The header wins over the query parameter when both are sent.
pub async fn callback(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<CallbackQuery>,
) -> ApiResult<Json<IdentityResponse>> {
    let token = session_token(&headers).or(query.session_token.as_deref());
    let identity = state.pipeline.authenticate(token).await?;

    info!(
        "Session established for {} ({}, college {})",
        identity.principal_id, identity.role, identity.tenant_id
    );

    Ok(Json(identity.into()))
}

//! Per-request tracing span, correlation id and HTTP metrics.
//!
//! `tenant`, `principal` and `route` start empty; the `Authorized`
//! extractor fills them once the caller is known.

use crate::metrics::HttpMetrics;

use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use tracing::{Instrument, Span, field};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub fn create_request_span(correlation_id: &str, method: &Method, path: &str) -> Span {
    tracing::info_span!(
        "request",
        correlation_id = %correlation_id,
        method = %method,
        path = %path,
        tenant = field::Empty,
        principal = field::Empty,
        route = field::Empty,
    )
}

pub async fn request_span(req: Request, next: Next) -> Response {
    let correlation_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("req-{}", Uuid::new_v4().as_simple()));

    let span = create_request_span(&correlation_id, req.method(), req.uri().path());
    let started = Instant::now();

    let mut response = next.run(req).instrument(span).await;

    HttpMetrics::new().request_completed(response.status(), started.elapsed());
    if let Ok(value) = HeaderValue::from_str(&correlation_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

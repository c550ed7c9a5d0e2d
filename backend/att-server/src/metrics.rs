//! Prometheus recorder and HTTP-level metrics

use crate::AppState;
use crate::error::{Result as ServerErrorResult, ServerError};

use std::time::Duration;

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the global Prometheus recorder. Call once at startup.
pub fn install_recorder() -> ServerErrorResult<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics {
            message: e.to_string(),
        })
}

/// Request counters and latency, keyed by status class
#[derive(Clone)]
pub struct HttpMetrics {
    prefix: &'static str,
}

impl HttpMetrics {
    pub fn new() -> Self {
        Self { prefix: "att.http" }
    }

    pub fn request_completed(&self, status: StatusCode, latency: Duration) {
        counter!(format!("{}.requests", self.prefix)).increment(1);
        counter!(format!("{}.responses.{}xx", self.prefix, status.as_u16() / 100)).increment(1);
        histogram!(format!("{}.latency_seconds", self.prefix)).record(latency.as_secs_f64());
    }

    pub fn request_timed_out(&self) {
        counter!(format!("{}.timeouts", self.prefix)).increment(1);
    }
}

impl Default for HttpMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// GET /metrics - Prometheus text exposition
pub async fn render(State(state): State<AppState>) -> Response {
    match state.metrics {
        Some(ref handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "metrics recorder not installed").into_response(),
    }
}

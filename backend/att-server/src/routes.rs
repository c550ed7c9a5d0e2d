use crate::metrics::{self, HttpMetrics};
use crate::request_span::request_span;
use crate::{
    ApiError, AppState, callback, create_relation, delete_relation, freeze_student_attendance,
    generate_qr_code, get_course_attendance, get_student_attendance, health, login,
    process_qr_code, update_attendance_status,
};

use std::panic::Location;

use axum::{
    BoxError, Router,
    error_handling::HandleErrorLayer,
    middleware,
    routing::{get, post, put},
};
use error_location::ErrorLocation;
use tower::ServiceBuilder;
use tower::timeout::{TimeoutLayer, error::Elapsed};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let request_timeout = state.request_timeout;

    Router::new()
        // Session hand-off
        .route("/auth/login", get(login))
        .route("/auth/callback", get(callback))
        // Attendance
        .route(
            "/api/attendance/course/{courseID}/lecture/{lectureID}/qrcode",
            get(generate_qr_code),
        )
        .route("/api/attendance/Mark/Scan", post(process_qr_code))
        .route(
            "/api/attendance/get-attendance-course",
            get(get_course_attendance),
        )
        .route(
            "/api/attendance/student/{studentID}",
            get(get_student_attendance),
        )
        .route(
            "/api/attendance/student/{studentID}/freeze",
            post(freeze_student_attendance),
        )
        .route("/api/attendance/status", put(update_attendance_status))
        // Policy administration
        .route(
            "/api/admin/relations",
            put(create_relation).delete(delete_relation),
        )
        // Probes and metrics (unauthenticated)
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .route("/metrics", get(metrics::render))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_layer_error))
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .layer(middleware::from_fn(request_span))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Whole-request timeout elapsed (the in-flight handler future is dropped)
async fn handle_layer_error(err: BoxError) -> ApiError {
    let location = ErrorLocation::from(Location::caller());
    if err.is::<Elapsed>() {
        HttpMetrics::new().request_timed_out();
        ApiError::Timeout {
            message: "Request timed out".to_string(),
            location,
        }
    } else {
        ApiError::Internal {
            message: format!("Unhandled middleware error: {err}"),
            location,
        }
    }
}

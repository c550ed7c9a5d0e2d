//! Proof token issuance and consumption
//!
//! Issue: staff obtain a signed, lecture-scoped token rendered as a QR code.
//! Consume: a student presents it; once it verifies, the ledger records
//! them present. Expired or malformed tokens end the attempt before any
//! write, and there is no retry here: a re-scan is an idempotent update.

use crate::api::bounded::bounded;
use crate::api::params::{parse_id, parse_optional_id};
use crate::api::route_policies::{IssueQrCode, MARK_ATTENDANCE, ScanQrCode};
use crate::{
    ApiError, ApiResult, AppState, Authorized, MarkResponse, QrCodeQuery, QrCodeResponse,
    ScanRequest,
};

use att_config::{MAX_TTL_SECS, MIN_TTL_SECS};

use std::panic::Location;
use std::time::Duration;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use error_location::ErrorLocation;
use log::info;

/// GET /api/attendance/course/{courseID}/lecture/{lectureID}/qrcode
pub async fn generate_qr_code(
    State(state): State<AppState>,
    auth: Authorized<IssueQrCode>,
    Path((course_id, lecture_id)): Path<(String, String)>,
    Query(query): Query<QrCodeQuery>,
) -> ApiResult<Json<QrCodeResponse>> {
    let course_id = parse_id("courseID", &course_id)?;
    let lecture_id = parse_id("lectureID", &lecture_id)?;
    let ttl = parse_optional_id("ttl_secs", query.ttl_secs.as_deref())?
        .map(|secs| {
            let secs = secs as u64;
            if (MIN_TTL_SECS..=MAX_TTL_SECS).contains(&secs) {
                Ok(Duration::from_secs(secs))
            } else {
                Err(ApiError::validation(
                    "ttl_secs",
                    format!("ttl_secs must be between {MIN_TTL_SECS} and {MAX_TTL_SECS}"),
                ))
            }
        })
        .transpose()?;

    // Only this college's lectures, and only under their own course
    let lecture = bounded(
        state.call_timeout,
        "lecture lookup",
        state
            .lectures
            .find_in_course(auth.tenant_id, course_id, lecture_id),
    )
    .await?
    .ok_or_else(|| ApiError::NotFound {
        message: format!("lecture {lecture_id} of course {course_id} not found"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let issued = state
        .tokens
        .issue(auth.tenant_id, lecture.course_id, lecture.id, ttl)?;

    info!(
        "{} issued QR token for course {} lecture {} '{}' (tenant {}, expires {})",
        auth.principal_id(),
        lecture.course_id,
        lecture.id,
        lecture.title,
        auth.tenant_id,
        issued.payload.expires_at
    );

    Ok(Json(issued.into()))
}

/// POST /api/attendance/Mark/Scan
pub async fn process_qr_code(
    State(state): State<AppState>,
    auth: Authorized<ScanQrCode>,
    Json(req): Json<ScanRequest>,
) -> ApiResult<Json<MarkResponse>> {
    let own_id = auth.profile.as_ref().map(|p| p.id);
    let student_id = req.student_id.or(own_id).ok_or_else(|| ApiError::BadRequest {
        message: "student_id is required".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    state
        .pipeline
        .verify_ownership(&auth, student_id, MARK_ATTENDANCE)
        .await?;

    if own_id != Some(student_id) {
        bounded(
            state.call_timeout,
            "student lookup",
            state.students.find_by_id(auth.tenant_id, student_id),
        )
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("student {student_id} not found"),
            location: ErrorLocation::from(Location::caller()),
        })?;
    }

    let payload = state.tokens.redeem(auth.tenant_id, &req.token)?;

    let outcome = bounded(
        state.call_timeout,
        "attendance mark",
        state
            .ledger
            .mark(auth.tenant_id, student_id, payload.course_id, payload.lecture_id),
    )
    .await?;

    let mut warnings = Vec::new();
    if outcome.overrode_frozen {
        warnings.push(format!(
            "attendance {} had been frozen; the scan overrode it",
            outcome.record.id
        ));
    }

    info!(
        "Recorded attendance for student {} course {} lecture {} (tenant {}, new: {})",
        student_id, payload.course_id, payload.lecture_id, auth.tenant_id, outcome.newly_created
    );

    Ok(Json(MarkResponse {
        attendance: outcome.record.into(),
        newly_created: outcome.newly_created,
        warnings,
    }))
}

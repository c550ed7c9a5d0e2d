//! Attendance read, override and freeze handlers

use crate::api::bounded::bounded;
use crate::api::params::{parse_date, parse_id, parse_optional_id};
use crate::api::route_policies::{
    FreezeStudent, ReadCourseAttendance, ReadStudentAttendance, UpdateAttendanceStatus,
    VIEW_ATTENDANCE,
};
use crate::{
    ApiError, ApiResult, AppState, AttendanceListResponse, Authorized, CourseAttendanceQuery,
    FreezeResponse, StudentAttendanceQuery, UpdateStatusRequest, UpdateStatusResponse,
};

use att_core::{AttendanceStatus, Role};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;
use error_location::ErrorLocation;
use log::{info, warn};

/// GET /api/attendance/get-attendance-course?course_id=&lecture_id=
pub async fn get_course_attendance(
    State(state): State<AppState>,
    auth: Authorized<ReadCourseAttendance>,
    Query(query): Query<CourseAttendanceQuery>,
) -> ApiResult<Json<AttendanceListResponse>> {
    let course_id = parse_optional_id("course_id", query.course_id.as_deref())?
        .ok_or_else(|| ApiError::validation("course_id", "course_id is required"))?;
    let lecture_id = parse_optional_id("lecture_id", query.lecture_id.as_deref())?;

    let records = bounded(
        state.call_timeout,
        "course attendance query",
        state.ledger.find_by_course(auth.tenant_id, course_id, lecture_id),
    )
    .await?;

    Ok(Json(AttendanceListResponse {
        attendance: records.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/attendance/student/{studentID}?course_id=
///
/// Students reach only their own history unless the policy engine grants
/// them `view_attendance` on the target; staff read any student in their
/// college.
pub async fn get_student_attendance(
    State(state): State<AppState>,
    auth: Authorized<ReadStudentAttendance>,
    Path(student_id): Path<String>,
    Query(query): Query<StudentAttendanceQuery>,
) -> ApiResult<Json<AttendanceListResponse>> {
    let student_id = parse_id("studentID", &student_id)?;
    let course_id = parse_optional_id("course_id", query.course_id.as_deref())?;

    if auth.role() == Role::Student {
        state
            .pipeline
            .verify_ownership(&auth, student_id, VIEW_ATTENDANCE)
            .await?;
    }

    let records = bounded(
        state.call_timeout,
        "student attendance query",
        state.ledger.find_by_student(auth.tenant_id, student_id, course_id),
    )
    .await?;

    Ok(Json(AttendanceListResponse {
        attendance: records.into_iter().map(Into::into).collect(),
    }))
}

/// PUT /api/attendance/status
pub async fn update_attendance_status(
    State(state): State<AppState>,
    auth: Authorized<UpdateAttendanceStatus>,
    Json(req): Json<UpdateStatusRequest>,
) -> ApiResult<Json<UpdateStatusResponse>> {
    let status: AttendanceStatus = req
        .status
        .parse()
        .map_err(|_| ApiError::validation("status", format!("unknown status '{}'", req.status)))?;
    if status == AttendanceStatus::Frozen {
        return Err(ApiError::Validation {
            message: "frozen is only set by freezing a student".to_string(),
            field: Some("status".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    let date = req
        .date
        .as_deref()
        .map(|raw| parse_date("date", raw))
        .transpose()?;

    let update = bounded(
        state.call_timeout,
        "attendance status update",
        state.ledger.update_status(
            auth.tenant_id,
            req.student_id,
            req.course_id,
            req.lecture_id,
            date,
            status,
        ),
    )
    .await?;

    let mut warnings = Vec::new();
    let overridden = update.overrode_frozen();
    if overridden > 0 {
        warn!(
            "{} overrode {} frozen attendance row(s) of student {}",
            auth.principal_id(),
            overridden,
            req.student_id
        );
        warnings.push(format!("{overridden} frozen attendance row(s) were overridden"));
    }

    Ok(Json(UpdateStatusResponse {
        updated: update.rows_affected(),
        attendance: update.records.into_iter().map(Into::into).collect(),
        warnings,
    }))
}

/// POST /api/attendance/student/{studentID}/freeze
pub async fn freeze_student_attendance(
    State(state): State<AppState>,
    auth: Authorized<FreezeStudent>,
    Path(student_id): Path<String>,
) -> ApiResult<Json<FreezeResponse>> {
    let student_id = parse_id("studentID", &student_id)?;

    let rows_affected = bounded(
        state.call_timeout,
        "student freeze",
        state.ledger.freeze_student(auth.tenant_id, student_id, Utc::now()),
    )
    .await?;

    info!(
        "{} froze student {} (tenant {}, {} attendance row(s))",
        auth.principal_id(),
        student_id,
        auth.tenant_id,
        rows_affected
    );

    Ok(Json(FreezeResponse {
        student_id,
        rows_affected,
    }))
}

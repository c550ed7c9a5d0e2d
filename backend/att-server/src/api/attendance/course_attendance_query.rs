use serde::Deserialize;

/// Query string for `GET /api/attendance/get-attendance-course`
///
/// Kept as text so bad ids produce a JSON validation error.
#[derive(Debug, Default, Deserialize)]
pub struct CourseAttendanceQuery {
    pub course_id: Option<String>,
    pub lecture_id: Option<String>,
}

use att_core::AttendanceRecord;

use serde::{Deserialize, Serialize};

/// Attendance row as returned over HTTP
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceDto {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub lecture_id: i64,
    /// UTC calendar day, `YYYY-MM-DD`
    pub date: String,
    pub status: String,
    /// RFC 3339
    pub scanned_at: String,
    pub scan_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frozen_at: Option<String>,
}

impl From<AttendanceRecord> for AttendanceDto {
    fn from(record: AttendanceRecord) -> Self {
        Self {
            id: record.id,
            student_id: record.student_id,
            course_id: record.course_id,
            lecture_id: record.lecture_id,
            date: record.date.format("%Y-%m-%d").to_string(),
            status: record.status.as_str().to_string(),
            scanned_at: record.scanned_at.to_rfc3339(),
            scan_count: record.scan_count,
            frozen_at: record.frozen_at.map(|t| t.to_rfc3339()),
        }
    }
}

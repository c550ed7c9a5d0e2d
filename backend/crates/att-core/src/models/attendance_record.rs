use crate::{AttendanceKey, AttendanceStatus, CourseId, LectureId, StudentId, TenantId};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceRecord {
    pub id: i64,
    pub tenant_id: TenantId,
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub lecture_id: LectureId,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub scanned_at: DateTime<Utc>,
    /// Number of successful marks folded into this row
    pub scan_count: i64,
    /// Set by the first freeze and never cleared
    pub frozen_at: Option<DateTime<Utc>>,
}

impl AttendanceRecord {
    pub fn key(&self) -> AttendanceKey {
        AttendanceKey {
            tenant_id: self.tenant_id,
            student_id: self.student_id,
            course_id: self.course_id,
            lecture_id: self.lecture_id,
            date: self.date,
        }
    }

    pub fn was_frozen(&self) -> bool {
        self.frozen_at.is_some()
    }
}

use crate::{CourseId, LectureId, StudentId, TenantId};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Natural key of an attendance row: at most one row per student, lecture and day
/// within a tenant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AttendanceKey {
    pub tenant_id: TenantId,
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub lecture_id: LectureId,
    pub date: NaiveDate,
}

impl AttendanceKey {
    /// Key for a scan happening at `at`. Days are UTC calendar days.
    pub fn for_scan(
        tenant_id: TenantId,
        student_id: StudentId,
        course_id: CourseId,
        lecture_id: LectureId,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            tenant_id,
            student_id,
            course_id,
            lecture_id,
            date: at.date_naive(),
        }
    }
}

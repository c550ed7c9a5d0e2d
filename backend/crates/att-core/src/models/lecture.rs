use crate::{CourseId, LectureId, TenantId};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A scheduled session of a course. Tokens and attendance rows may only
/// name a lecture together with the course and college it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lecture {
    pub id: LectureId,
    pub tenant_id: TenantId,
    pub course_id: CourseId,
    pub title: String,
    pub scheduled_on: Option<NaiveDate>,
}

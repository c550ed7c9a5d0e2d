use crate::Result as DbErrorResult;
use crate::repositories::rows::{LECTURE_COLUMNS, lecture_from_row};

use att_core::{CourseId, Lecture, LectureId, TenantId};

use sqlx::SqlitePool;

/// Read access to the lecture catalogue, always addressed within a tenant.
#[derive(Clone)]
pub struct LectureRepository {
    pool: SqlitePool,
}

impl LectureRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The lecture, only if it belongs to `course_id` within `tenant_id`.
    pub async fn find_in_course(
        &self,
        tenant_id: TenantId,
        course_id: CourseId,
        lecture_id: LectureId,
    ) -> DbErrorResult<Option<Lecture>> {
        let row = sqlx::query(&format!(
            "SELECT {LECTURE_COLUMNS} FROM lectures WHERE tenant_id = ? AND course_id = ? AND id = ?"
        ))
        .bind(tenant_id)
        .bind(course_id)
        .bind(lecture_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(lecture_from_row).transpose()
    }
}

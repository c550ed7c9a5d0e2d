use crate::repositories::rows::{STUDENT_COLUMNS, student_from_row};
use crate::{DbError, Result as DbErrorResult};

use att_core::{StudentId, StudentProfile, StudentStatus, TenantId};

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::SqlitePool;

/// Student records, always addressed within a tenant.
#[derive(Clone)]
pub struct StudentRepository {
    pool: SqlitePool,
}

impl StudentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_principal(
        &self,
        tenant_id: TenantId,
        principal_id: &str,
    ) -> DbErrorResult<Option<StudentProfile>> {
        let row = sqlx::query(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE tenant_id = ? AND principal_id = ?"
        ))
        .bind(tenant_id)
        .bind(principal_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(student_from_row).transpose()
    }

    pub async fn find_by_id(
        &self,
        tenant_id: TenantId,
        student_id: StudentId,
    ) -> DbErrorResult<Option<StudentProfile>> {
        let row = sqlx::query(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE tenant_id = ? AND id = ?"
        ))
        .bind(tenant_id)
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(student_from_row).transpose()
    }

    pub async fn set_status(
        &self,
        tenant_id: TenantId,
        student_id: StudentId,
        status: StudentStatus,
    ) -> DbErrorResult<()> {
        let result = sqlx::query("UPDATE students SET status = ? WHERE tenant_id = ? AND id = ?")
            .bind(status.as_str())
            .bind(tenant_id)
            .bind(student_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity: "student",
                key: format!("{tenant_id}/{student_id}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}

//! The only writer of attendance state.
//!
//! Every statement filters on `tenant_id`. `mark` is a single upsert against
//! the natural-key unique constraint, so concurrent duplicate scans collapse
//! into one row without application locks.

use crate::repositories::rows::{ATTENDANCE_COLUMNS, attendance_from_row, format_date};
use crate::{DbError, Result as DbErrorResult};

use att_core::{
    AttendanceKey, AttendanceRecord, AttendanceStatus, CourseId, LectureId, StudentId,
    StudentStatus, TenantId,
};

use std::panic::Location;

use chrono::{DateTime, NaiveDate, Utc};
use error_location::ErrorLocation;
use log::{debug, warn};
use metrics::counter;
use sqlx::SqlitePool;

/// Result of a `mark`.
#[derive(Debug, Clone)]
pub struct MarkOutcome {
    pub record: AttendanceRecord,
    pub newly_created: bool,
    /// The row had been frozen before this write touched it
    pub overrode_frozen: bool,
}

/// Rows changed by an explicit status override.
#[derive(Debug, Clone)]
pub struct StatusUpdate {
    pub records: Vec<AttendanceRecord>,
}

impl StatusUpdate {
    pub fn rows_affected(&self) -> usize {
        self.records.len()
    }

    /// Number of updated rows that had previously been frozen
    pub fn overrode_frozen(&self) -> usize {
        self.records.iter().filter(|r| r.was_frozen()).count()
    }
}

#[derive(Clone)]
pub struct AttendanceLedger {
    pool: SqlitePool,
}

impl AttendanceLedger {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn mark(
        &self,
        tenant_id: TenantId,
        student_id: StudentId,
        course_id: CourseId,
        lecture_id: LectureId,
    ) -> DbErrorResult<MarkOutcome> {
        let now = Utc::now();
        let key = AttendanceKey::for_scan(tenant_id, student_id, course_id, lecture_id, now);
        self.mark_at(&key, now).await
    }

    /// Record `Present` for `key`, creating the row or refreshing its scan time.
    pub async fn mark_at(
        &self,
        key: &AttendanceKey,
        scanned_at: DateTime<Utc>,
    ) -> DbErrorResult<MarkOutcome> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO attendance (
                tenant_id, student_id, course_id, lecture_id, date,
                status, scanned_at, scan_count
            ) VALUES (?, ?, ?, ?, ?, ?, ?, 1)
            ON CONFLICT (student_id, course_id, lecture_id, date, tenant_id) DO UPDATE SET
                status = excluded.status,
                scanned_at = excluded.scanned_at,
                scan_count = attendance.scan_count + 1
            RETURNING {ATTENDANCE_COLUMNS}
            "#
        ))
        .bind(key.tenant_id)
        .bind(key.student_id)
        .bind(key.course_id)
        .bind(key.lecture_id)
        .bind(format_date(key.date))
        .bind(AttendanceStatus::Present.as_str())
        .bind(scanned_at.timestamp())
        .fetch_one(&self.pool)
        .await?;

        let record = attendance_from_row(&row)?;
        let newly_created = record.scan_count == 1;
        let overrode_frozen = !newly_created && record.was_frozen();

        if newly_created {
            counter!("att.attendance.marked.created").increment(1);
        } else {
            counter!("att.attendance.marked.updated").increment(1);
        }
        if overrode_frozen {
            warn!(
                "Scan overrode frozen attendance {} for student {} (tenant {})",
                record.id, record.student_id, record.tenant_id
            );
        }

        Ok(MarkOutcome {
            record,
            newly_created,
            overrode_frozen,
        })
    }

    /// Override status on existing rows; never creates one.
    ///
    /// With `date` the single natural-key row is targeted, without it every
    /// day recorded for (student, course, lecture).
    pub async fn update_status(
        &self,
        tenant_id: TenantId,
        student_id: StudentId,
        course_id: CourseId,
        lecture_id: LectureId,
        date: Option<NaiveDate>,
        status: AttendanceStatus,
    ) -> DbErrorResult<StatusUpdate> {
        let date = date.map(format_date);
        let rows = sqlx::query(&format!(
            r#"
            UPDATE attendance SET status = ?
            WHERE tenant_id = ? AND student_id = ? AND course_id = ? AND lecture_id = ?
              AND (? IS NULL OR date = ?)
            RETURNING {ATTENDANCE_COLUMNS}
            "#
        ))
        .bind(status.as_str())
        .bind(tenant_id)
        .bind(student_id)
        .bind(course_id)
        .bind(lecture_id)
        .bind(date.as_deref())
        .bind(date.as_deref())
        .fetch_all(&self.pool)
        .await?;

        if rows.is_empty() {
            return Err(DbError::NotFound {
                entity: "attendance",
                key: format!(
                    "tenant {tenant_id} student {student_id} course {course_id} lecture {lecture_id}{}",
                    date.map(|d| format!(" on {d}")).unwrap_or_default()
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let update = StatusUpdate {
            records: rows
                .iter()
                .map(attendance_from_row)
                .collect::<DbErrorResult<Vec<_>>>()?,
        };
        if update.overrode_frozen() > 0 {
            warn!(
                "Status override to {} touched {} frozen row(s) for student {} (tenant {})",
                status,
                update.overrode_frozen(),
                student_id,
                tenant_id
            );
        }
        Ok(update)
    }

    /// Move every attendance row of a student to `Frozen`; zero rows is fine.
    pub async fn freeze(&self, tenant_id: TenantId, student_id: StudentId) -> DbErrorResult<u64> {
        self.freeze_at(tenant_id, student_id, Utc::now()).await
    }

    pub async fn freeze_at(
        &self,
        tenant_id: TenantId,
        student_id: StudentId,
        now: DateTime<Utc>,
    ) -> DbErrorResult<u64> {
        let result = sqlx::query(FREEZE_ROWS)
            .bind(AttendanceStatus::Frozen.as_str())
            .bind(now.timestamp())
            .bind(tenant_id)
            .bind(student_id)
            .execute(&self.pool)
            .await?;

        debug!(
            "Froze {} attendance row(s) for student {} (tenant {})",
            result.rows_affected(),
            student_id,
            tenant_id
        );
        Ok(result.rows_affected())
    }

    /// Suspend a student: profile status and attendance history move to
    /// frozen together or not at all.
    pub async fn freeze_student(
        &self,
        tenant_id: TenantId,
        student_id: StudentId,
        now: DateTime<Utc>,
    ) -> DbErrorResult<u64> {
        let mut tx = self.pool.begin().await?;

        let profile = sqlx::query("UPDATE students SET status = ? WHERE tenant_id = ? AND id = ?")
            .bind(StudentStatus::Frozen.as_str())
            .bind(tenant_id)
            .bind(student_id)
            .execute(&mut *tx)
            .await?;
        if profile.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity: "student",
                key: format!("{tenant_id}/{student_id}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let rows = sqlx::query(FREEZE_ROWS)
            .bind(AttendanceStatus::Frozen.as_str())
            .bind(now.timestamp())
            .bind(tenant_id)
            .bind(student_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;
        counter!("att.attendance.frozen").increment(rows);
        Ok(rows)
    }

    pub async fn find_by_course(
        &self,
        tenant_id: TenantId,
        course_id: CourseId,
        lecture_id: Option<LectureId>,
    ) -> DbErrorResult<Vec<AttendanceRecord>> {
        self.fetch(
            tenant_id,
            "course_id = ? AND (? IS NULL OR lecture_id = ?)",
            &[Some(course_id), lecture_id, lecture_id],
        )
        .await
    }

    pub async fn find_by_student(
        &self,
        tenant_id: TenantId,
        student_id: StudentId,
        course_id: Option<CourseId>,
    ) -> DbErrorResult<Vec<AttendanceRecord>> {
        self.fetch(
            tenant_id,
            "student_id = ? AND (? IS NULL OR course_id = ?)",
            &[Some(student_id), course_id, course_id],
        )
        .await
    }

    pub async fn find_by_student_and_course(
        &self,
        tenant_id: TenantId,
        student_id: StudentId,
        course_id: CourseId,
    ) -> DbErrorResult<Vec<AttendanceRecord>> {
        self.find_by_student(tenant_id, student_id, Some(course_id)).await
    }

    pub async fn find_by_lecture(
        &self,
        tenant_id: TenantId,
        lecture_id: LectureId,
    ) -> DbErrorResult<Vec<AttendanceRecord>> {
        self.fetch(tenant_id, "lecture_id = ?", &[Some(lecture_id)]).await
    }

    async fn fetch(
        &self,
        tenant_id: TenantId,
        filter: &str,
        params: &[Option<i64>],
    ) -> DbErrorResult<Vec<AttendanceRecord>> {
        let sql = format!(
            "SELECT {ATTENDANCE_COLUMNS} FROM attendance \
             WHERE tenant_id = ? AND {filter} \
             ORDER BY date ASC, scanned_at ASC, id ASC"
        );
        let mut query = sqlx::query(&sql).bind(tenant_id);
        for param in params {
            query = query.bind(*param);
        }

        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(attendance_from_row).collect()
    }
}

const FREEZE_ROWS: &str = "UPDATE attendance SET status = ?, frozen_at = COALESCE(frozen_at, ?) \
     WHERE tenant_id = ? AND student_id = ?";

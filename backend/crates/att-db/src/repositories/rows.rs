use crate::{DbError, Result as DbErrorResult};

use att_core::{AttendanceRecord, AttendanceStatus, Lecture, StudentProfile, StudentStatus};

use std::panic::Location;

use chrono::{DateTime, NaiveDate, Utc};
use error_location::ErrorLocation;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) const ATTENDANCE_COLUMNS: &str = "id, tenant_id, student_id, course_id, lecture_id, \
     date, status, scanned_at, scan_count, frozen_at";

pub(crate) const STUDENT_COLUMNS: &str = "id, tenant_id, principal_id, name, status";

pub(crate) const LECTURE_COLUMNS: &str = "id, tenant_id, course_id, title, scheduled_on";

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub(crate) fn attendance_from_row(row: &SqliteRow) -> DbErrorResult<AttendanceRecord> {
    let date: String = row.try_get("date")?;
    let status: String = row.try_get("status")?;
    let frozen_at: Option<i64> = row.try_get("frozen_at")?;

    Ok(AttendanceRecord {
        id: row.try_get("id")?,
        tenant_id: row.try_get("tenant_id")?,
        student_id: row.try_get("student_id")?,
        course_id: row.try_get("course_id")?,
        lecture_id: row.try_get("lecture_id")?,
        date: NaiveDate::parse_from_str(&date, DATE_FORMAT)
            .map_err(|e| decode_error("date", e.to_string()))?,
        status: status
            .parse::<AttendanceStatus>()
            .map_err(|e| decode_error("status", e.to_string()))?,
        scanned_at: timestamp("scanned_at", row.try_get("scanned_at")?)?,
        scan_count: row.try_get("scan_count")?,
        frozen_at: frozen_at.map(|ts| timestamp("frozen_at", ts)).transpose()?,
    })
}

pub(crate) fn student_from_row(row: &SqliteRow) -> DbErrorResult<StudentProfile> {
    let status: String = row.try_get("status")?;

    Ok(StudentProfile {
        id: row.try_get("id")?,
        tenant_id: row.try_get("tenant_id")?,
        principal_id: row.try_get("principal_id")?,
        name: row.try_get("name")?,
        status: status
            .parse::<StudentStatus>()
            .map_err(|e| decode_error("status", e.to_string()))?,
    })
}

pub(crate) fn lecture_from_row(row: &SqliteRow) -> DbErrorResult<Lecture> {
    let scheduled_on: Option<String> = row.try_get("scheduled_on")?;

    Ok(Lecture {
        id: row.try_get("id")?,
        tenant_id: row.try_get("tenant_id")?,
        course_id: row.try_get("course_id")?,
        title: row.try_get("title")?,
        scheduled_on: scheduled_on
            .map(|raw| {
                NaiveDate::parse_from_str(&raw, DATE_FORMAT)
                    .map_err(|e| decode_error("scheduled_on", e.to_string()))
            })
            .transpose()?,
    })
}

fn timestamp(column: &'static str, ts: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0).ok_or_else(|| decode_error(column, format!("{ts} out of range")))
}

#[track_caller]
fn decode_error(column: &'static str, message: String) -> DbError {
    DbError::RowDecode {
        column,
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}

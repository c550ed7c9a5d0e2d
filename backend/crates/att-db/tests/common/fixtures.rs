use att_core::{StudentStatus, TenantId};

use chrono::{DateTime, TimeZone, Utc};
use sqlx::SqlitePool;

pub const TENANT: TenantId = 7;
pub const OTHER_TENANT: TenantId = 8;
pub const COURSE: i64 = 10;
pub const LECTURE: i64 = 55;
pub const OTHER_LECTURE: i64 = 56;
pub const STUDENT: i64 = 1;
pub const OTHER_STUDENT: i64 = 2;
/// Belongs to OTHER_TENANT
pub const FOREIGN_STUDENT: i64 = 3;
pub const FOREIGN_COURSE: i64 = 20;
pub const FOREIGN_LECTURE: i64 = 75;
/// Second course of TENANT
pub const OTHER_COURSE: i64 = 11;
/// Belongs to OTHER_COURSE
pub const OTHER_COURSE_LECTURE: i64 = 57;

/// 2026-10-05 09:00:00 UTC
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 5, 9, 0, 0).unwrap()
}

pub fn minutes(m: i64) -> chrono::Duration {
    chrono::Duration::minutes(m)
}

/// Two colleges with courses, lectures and students.
///
/// Uses `sqlx::query` rather than the macros so tests need no offline data.
pub async fn seed(pool: &SqlitePool) {
    let statements = [
        "INSERT INTO colleges (id, name, city) VALUES (7, 'North College', 'Pune')",
        "INSERT INTO colleges (id, name, city) VALUES (8, 'South College', 'Chennai')",
        "INSERT INTO courses (id, tenant_id, name) VALUES (10, 7, 'Compilers')",
        "INSERT INTO courses (id, tenant_id, name) VALUES (11, 7, 'Databases')",
        "INSERT INTO courses (id, tenant_id, name) VALUES (20, 8, 'Networks')",
        "INSERT INTO lectures (id, tenant_id, course_id, title) VALUES (55, 7, 10, 'Parsing')",
        "INSERT INTO lectures (id, tenant_id, course_id, title) VALUES (56, 7, 10, 'Lexing')",
        "INSERT INTO lectures (id, tenant_id, course_id, title, scheduled_on) VALUES (57, 7, 11, 'Indexes', '2026-10-06')",
        "INSERT INTO lectures (id, tenant_id, course_id, title) VALUES (75, 8, 20, 'Routing')",
        "INSERT INTO students (id, tenant_id, principal_id, name) VALUES (1, 7, 'student-1', 'Asha')",
        "INSERT INTO students (id, tenant_id, principal_id, name) VALUES (2, 7, 'student-2', 'Ravi')",
        "INSERT INTO students (id, tenant_id, principal_id, name) VALUES (3, 8, 'student-3', 'Meena')",
    ];
    for statement in statements {
        sqlx::query(statement)
            .execute(pool)
            .await
            .expect("Failed to seed fixtures");
    }
}

pub async fn set_student_status(pool: &SqlitePool, student_id: i64, status: StudentStatus) {
    sqlx::query("UPDATE students SET status = ? WHERE id = ?")
        .bind(status.as_str())
        .bind(student_id)
        .execute(pool)
        .await
        .expect("Failed to update student status");
}

pub async fn count_attendance_rows(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM attendance")
        .fetch_one(pool)
        .await
        .expect("Failed to count attendance rows")
}

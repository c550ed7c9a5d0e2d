pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::attendance_key::AttendanceKey;
pub use models::attendance_record::AttendanceRecord;
pub use models::attendance_status::AttendanceStatus;
pub use models::lecture::Lecture;
pub use models::relation_tuple::RelationTuple;
pub use models::role::Role;
pub use models::student_profile::StudentProfile;
pub use models::student_status::StudentStatus;

pub use error_location::ErrorLocation;

/// College identifier. Every per-college row is scoped by it.
pub type TenantId = i64;
pub type StudentId = i64;
pub type CourseId = i64;
pub type LectureId = i64;

#[cfg(test)]
mod tests;

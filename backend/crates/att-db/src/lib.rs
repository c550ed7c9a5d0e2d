pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::pool::{connect, ping, run_migrations};
pub use error::{DbError, Result};
pub use repositories::attendance_ledger::{AttendanceLedger, MarkOutcome, StatusUpdate};
pub use repositories::lecture_repository::LectureRepository;
pub use repositories::student_repository::StudentRepository;

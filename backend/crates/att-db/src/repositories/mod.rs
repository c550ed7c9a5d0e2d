pub mod attendance_ledger;
pub mod lecture_repository;
pub mod student_repository;

mod rows;

pub mod attendance_key;
pub mod attendance_record;
pub mod attendance_status;
pub mod lecture;
pub mod relation_tuple;
pub mod role;
pub mod student_profile;
pub mod student_status;

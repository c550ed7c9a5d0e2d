mod attendance_key;
mod attendance_status;
mod role;
mod student_status;

pub mod attendance;
pub mod attendance_dto;
pub mod attendance_list_response;
pub mod course_attendance_query;
pub mod freeze_response;
pub mod mark_response;
pub mod qr_code;
pub mod qr_code_query;
pub mod qr_code_response;
pub mod scan_request;
pub mod student_attendance_query;
pub mod update_status_request;
pub mod update_status_response;

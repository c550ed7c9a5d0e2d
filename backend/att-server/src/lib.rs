pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod profile_store;
pub mod request_span;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    admin::{
        relation_request::RelationRequest,
        relation_response::RelationResponse,
        relations::{create_relation, delete_relation},
    },
    attendance::{
        attendance::{
            freeze_student_attendance, get_course_attendance, get_student_attendance,
            update_attendance_status,
        },
        attendance_dto::AttendanceDto,
        attendance_list_response::AttendanceListResponse,
        course_attendance_query::CourseAttendanceQuery,
        freeze_response::FreezeResponse,
        mark_response::MarkResponse,
        qr_code::{generate_qr_code, process_qr_code},
        qr_code_query::QrCodeQuery,
        qr_code_response::QrCodeResponse,
        scan_request::ScanRequest,
        student_attendance_query::StudentAttendanceQuery,
        update_status_request::UpdateStatusRequest,
        update_status_response::UpdateStatusResponse,
    },
    auth::{
        auth::{callback, login},
        callback_query::CallbackQuery,
        identity_response::IdentityResponse,
        login_response::LoginResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::authorized::Authorized,
};

pub use crate::app_state::AppState;
pub use crate::profile_store::DbProfileStore;
pub use crate::routes::build_router;

//! Authorization requirements for each protected route.

use att_auth::RoutePolicy;
use att_core::Role;

/// Compile-time route requirements consumed by the `Authorized` extractor.
pub trait RouteRequirements: Send + Sync + 'static {
    const POLICY: RoutePolicy;
}

const STAFF: &[Role] = &[Role::Admin, Role::Faculty];

pub struct IssueQrCode;

impl RouteRequirements for IssueQrCode {
    const POLICY: RoutePolicy = RoutePolicy {
        name: "issue_qr_code",
        roles: STAFF,
        load_profile: false,
    };
}

pub struct ScanQrCode;

impl RouteRequirements for ScanQrCode {
    const POLICY: RoutePolicy = RoutePolicy {
        name: "scan_qr_code",
        roles: &[Role::Student],
        load_profile: true,
    };
}

pub struct ReadCourseAttendance;

impl RouteRequirements for ReadCourseAttendance {
    const POLICY: RoutePolicy = RoutePolicy {
        name: "read_course_attendance",
        roles: STAFF,
        load_profile: false,
    };
}

pub struct ReadStudentAttendance;

impl RouteRequirements for ReadStudentAttendance {
    const POLICY: RoutePolicy = RoutePolicy {
        name: "read_student_attendance",
        roles: &[Role::Admin, Role::Faculty, Role::Student],
        load_profile: true,
    };
}

pub struct UpdateAttendanceStatus;

impl RouteRequirements for UpdateAttendanceStatus {
    const POLICY: RoutePolicy = RoutePolicy {
        name: "update_attendance_status",
        roles: STAFF,
        load_profile: false,
    };
}

pub struct FreezeStudent;

impl RouteRequirements for FreezeStudent {
    const POLICY: RoutePolicy = RoutePolicy {
        name: "freeze_student",
        roles: &[Role::Admin],
        load_profile: false,
    };
}

pub struct ManageRelations;

impl RouteRequirements for ManageRelations {
    const POLICY: RoutePolicy = RoutePolicy {
        name: "manage_relations",
        roles: &[Role::Admin],
        load_profile: false,
    };
}

/// Policy-engine relation a caller needs to mark someone else's attendance
pub const MARK_ATTENDANCE: &str = "mark_attendance";
/// Policy-engine relation a caller needs to read someone else's attendance
pub const VIEW_ATTENDANCE: &str = "view_attendance";

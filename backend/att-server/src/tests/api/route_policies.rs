use crate::api::route_policies::{
    FreezeStudent, IssueQrCode, ManageRelations, ReadCourseAttendance, ReadStudentAttendance,
    RouteRequirements, ScanQrCode, UpdateAttendanceStatus,
};

use att_core::Role;

#[test]
fn given_student_when_checking_staff_routes_then_excluded() {
    for roles in [
        IssueQrCode::POLICY.roles,
        ReadCourseAttendance::POLICY.roles,
        UpdateAttendanceStatus::POLICY.roles,
    ] {
        assert!(!Role::Student.is_any_of(roles));
        assert!(Role::Faculty.is_any_of(roles));
    }
}

#[test]
fn given_admin_only_routes_when_checking_faculty_then_excluded() {
    assert!(!Role::Faculty.is_any_of(FreezeStudent::POLICY.roles));
    assert!(!Role::Faculty.is_any_of(ManageRelations::POLICY.roles));
    assert!(Role::Admin.is_any_of(FreezeStudent::POLICY.roles));
}

#[test]
fn given_student_routes_when_inspected_then_profile_is_loaded() {
    assert!(ScanQrCode::POLICY.load_profile);
    assert!(ReadStudentAttendance::POLICY.load_profile);
    assert!(!IssueQrCode::POLICY.load_profile);
}

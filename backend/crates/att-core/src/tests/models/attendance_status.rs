use crate::AttendanceStatus;

use std::str::FromStr;

#[test]
fn test_attendance_status_as_str() {
    assert_eq!(AttendanceStatus::Present.as_str(), "present");
    assert_eq!(AttendanceStatus::Absent.as_str(), "absent");
    assert_eq!(AttendanceStatus::Frozen.as_str(), "frozen");
}

#[test]
fn test_attendance_status_from_str() {
    assert_eq!(
        AttendanceStatus::from_str("present").unwrap(),
        AttendanceStatus::Present
    );
    assert_eq!(
        AttendanceStatus::from_str("frozen").unwrap(),
        AttendanceStatus::Frozen
    );
    assert!(AttendanceStatus::from_str("Present").is_err());
    assert!(AttendanceStatus::from_str("late").is_err());
}

#[test]
fn test_attendance_status_display_matches_storage_form() {
    assert_eq!(AttendanceStatus::Absent.to_string(), "absent");
}

use crate::StudentStatus;

use std::str::FromStr;

#[test]
fn test_student_status_only_active_is_active() {
    assert!(StudentStatus::Active.is_active());
    assert!(!StudentStatus::Frozen.is_active());
    assert!(!StudentStatus::Deactivated.is_active());
}

#[test]
fn test_student_status_from_str() {
    assert_eq!(
        StudentStatus::from_str("deactivated").unwrap(),
        StudentStatus::Deactivated
    );
    assert!(StudentStatus::from_str("suspended").is_err());
}

#[test]
fn test_student_status_default() {
    assert_eq!(StudentStatus::default(), StudentStatus::Active);
}

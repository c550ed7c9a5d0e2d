use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Faculty.as_str(), "faculty");
    assert_eq!(Role::Student.as_str(), "student");
}

#[test]
fn test_role_from_str_is_case_insensitive() {
    assert_eq!(Role::from_str("Admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str(" FACULTY ").unwrap(), Role::Faculty);
    assert_eq!(Role::from_str("student").unwrap(), Role::Student);
}

#[test]
fn test_role_from_str_rejects_unknown() {
    let result = Role::from_str("janitor");

    assert!(matches!(result, Err(CoreError::InvalidRole { .. })));
}

#[test]
fn test_role_any_of() {
    let staff = [Role::Admin, Role::Faculty];

    assert!(Role::Admin.is_any_of(&staff));
    assert!(Role::Faculty.is_any_of(&staff));
    assert!(!Role::Student.is_any_of(&staff));
    assert!(!Role::Admin.is_any_of(&[]));
}

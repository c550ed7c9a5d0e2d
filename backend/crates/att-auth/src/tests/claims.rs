use crate::{AuthError, Claims, IdentityContext};

use att_core::Role;

use serde_json::{Map, json};

fn claims(sub: &str, tenant_id: i64, role: &str) -> Claims {
    Claims {
        sub: sub.to_string(),
        tenant_id,
        role: role.to_string(),
        exp: 2_000_000_000,
        iat: 1_900_000_000,
        extra: Map::new(),
    }
}

#[test]
fn given_valid_claims_when_validated_then_ok() {
    assert!(claims("user-1", 7, "faculty").validate().is_ok());
}

#[test]
fn given_empty_sub_when_validated_then_invalid_claim() {
    let result = claims("  ", 7, "student").validate();

    assert!(matches!(result, Err(AuthError::InvalidClaim { ref claim, .. }) if claim == "sub"));
}

#[test]
fn given_non_positive_tenant_when_validated_then_invalid_claim() {
    let result = claims("user-1", 0, "student").validate();

    assert!(matches!(result, Err(AuthError::InvalidClaim { ref claim, .. }) if claim == "tenant_id"));
}

#[test]
fn given_unknown_role_when_validated_then_invalid_claim() {
    let result = claims("user-1", 7, "janitor").validate();

    assert!(matches!(result, Err(AuthError::InvalidClaim { ref claim, .. }) if claim == "role"));
}

#[test]
fn given_claims_with_extra_fields_when_converted_then_raw_claims_keep_them() {
    let mut c = claims("user-1", 7, "Admin");
    c.extra.insert("email".to_string(), json!("a@college.edu"));

    let identity = IdentityContext::from_claims(c).unwrap();

    assert_eq!(identity.role, Role::Admin);
    assert_eq!(identity.tenant_id, 7);
    assert_eq!(identity.raw_claims["email"], json!("a@college.edu"));
    assert_eq!(identity.raw_claims["sub"], json!("user-1"));
}

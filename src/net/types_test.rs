use super::*;
use crate::test_support::{sample_profile, sample_user, sample_user_json};

// =============================================================
// User
// =============================================================

#[test]
fn user_decodes_gateway_payload() {
    let user: User = serde_json::from_value(sample_user_json()).unwrap();
    assert_eq!(user, sample_user());
}

#[test]
fn user_tolerates_missing_optional_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u2",
        "email": "x@y.com",
        "is_active": true,
        "email_verified": true,
        "subscription_tier": "pro",
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    }))
    .unwrap();
    assert_eq!(user.first_name, None);
    assert_eq!(user.last_login_at, None);
}

#[test]
fn display_name_joins_name_parts() {
    assert_eq!(sample_user().display_name(), "Ada Byron");
}

#[test]
fn display_name_falls_back_to_email() {
    let user = User {
        first_name: None,
        last_name: Some("  ".to_owned()),
        ..sample_user()
    };
    assert_eq!(user.display_name(), "a@b.com");
}

// =============================================================
// Requests
// =============================================================

#[test]
fn register_request_omits_unset_fields() {
    let req = RegisterRequest {
        email: "a@b.com".to_owned(),
        password: "pw".to_owned(),
        ..RegisterRequest::default()
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({"email": "a@b.com", "password": "pw"})
    );
}

#[test]
fn empty_profile_fields_serialize_explicit_nulls() {
    let value = serde_json::to_value(ProfileFields::default()).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 15);
    assert_eq!(object["linkedin_url"], serde_json::Value::Null);
    assert_eq!(object["target_salary_min"], serde_json::Value::Null);
    assert_eq!(object["willing_to_relocate"], serde_json::json!(false));
}

#[test]
fn profile_fields_seeded_from_profile() {
    let profile = sample_profile();
    let fields = ProfileFields::from_profile(&profile);
    assert_eq!(fields.location_city.as_deref(), Some("London"));
    assert!(fields.willing_to_relocate);
    assert_eq!(fields.target_salary_max, Some(150_000));
    assert_eq!(fields.resume_text, None);
}

use futures::executor::block_on;

use super::*;
use crate::net::transport::Method;
use crate::test_support::{MockTransport, client, sample_profile, sample_profile_json};
use crate::util::storage::MemoryStorage;

#[test]
fn profile_state_defaults() {
    let s = ProfileState::default();
    assert!(s.profile.is_none());
    assert!(!s.loading);
    assert!(!s.saving);
    assert!(!s.exists());
    assert_eq!(s.form_fields(), ProfileFields::default());
}

#[test]
fn form_fields_come_from_saved_profile() {
    let s = ProfileState {
        profile: Some(sample_profile()),
        ..ProfileState::default()
    };
    assert!(s.exists());
    assert_eq!(s.form_fields().current_title.as_deref(), Some("Engineer"));
}

// =============================================================
// load / save
// =============================================================

#[test]
fn load_profile_returns_existing_profile() {
    let transport = MockTransport::new().reply(Method::Get, "/me/profile", 200, sample_profile_json());
    let api = client(transport, &MemoryStorage::new());
    assert_eq!(block_on(load_profile(&api)).unwrap(), Some(sample_profile()));
}

#[test]
fn load_profile_maps_not_found_to_none() {
    let transport = MockTransport::new().reply(
        Method::Get,
        "/me/profile",
        404,
        serde_json::json!({"detail": "User profile not found"}),
    );
    let api = client(transport, &MemoryStorage::new());
    assert_eq!(block_on(load_profile(&api)).unwrap(), None);
}

#[test]
fn load_profile_propagates_other_errors() {
    let transport = MockTransport::new().reply(
        Method::Get,
        "/me/profile",
        401,
        serde_json::json!({"detail": "Could not validate credentials"}),
    );
    let api = client(transport, &MemoryStorage::new());
    let err = block_on(load_profile(&api)).unwrap_err();
    assert_eq!(err.status(), Some(401));
}

#[test]
fn save_profile_creates_then_updates() {
    let transport = MockTransport::new()
        .reply(Method::Post, "/me/profile", 201, sample_profile_json())
        .reply(Method::Put, "/me/profile", 200, sample_profile_json());
    let api = client(transport, &MemoryStorage::new());
    let fields = ProfileFields::default();

    block_on(save_profile(&api, false, &fields)).unwrap();
    block_on(save_profile(&api, true, &fields)).unwrap();

    let methods: Vec<Method> = api.transport().sent().iter().map(|r| r.method).collect();
    assert_eq!(methods, vec![Method::Post, Method::Put]);
}

// =============================================================
// Form parsing
// =============================================================

#[test]
fn parse_optional_number_handles_blank_and_formatting() {
    assert_eq!(parse_optional_number("   "), Ok(None));
    assert_eq!(parse_optional_number("7"), Ok(Some(7)));
    assert_eq!(parse_optional_number(" $120,000 "), Ok(Some(120_000)));
}

#[test]
fn parse_optional_number_rejects_non_numbers() {
    assert_eq!(
        parse_optional_number("lots"),
        Err("\"lots\" is not a whole number".to_owned())
    );
    assert!(parse_optional_number("-5").is_err());
}

#[test]
fn optional_text_trims_and_drops_blank() {
    assert_eq!(optional_text("  London "), Some("London".to_owned()));
    assert_eq!(optional_text("   "), None);
}

#[test]
fn salary_range_must_be_ordered() {
    assert_eq!(validate_salary_range(Some(10), Some(5)), Err("Minimum salary cannot exceed maximum."));
    assert_eq!(validate_salary_range(Some(5), Some(10)), Ok(()));
    assert_eq!(validate_salary_range(None, Some(10)), Ok(()));
}

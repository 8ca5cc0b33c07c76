use super::*;
use crate::test_support::sample_user;
use crate::util::storage::MemoryStorage;

fn signed_in() -> AuthState {
    AuthState {
        user: Some(sample_user()),
        token: Some("T1".to_owned()),
        is_authenticated: true,
        loading: true,
        error: Some("stale".to_owned()),
    }
}

#[test]
fn snapshot_uses_camel_case_envelope() {
    let storage = MemoryStorage::new();
    save_session(&storage, &signed_in());

    let raw: serde_json::Value = serde_json::from_str(&storage.get_item(SESSION_KEY).unwrap()).unwrap();
    assert_eq!(raw["version"], 0);
    assert_eq!(raw["state"]["token"], "T1");
    assert_eq!(raw["state"]["isAuthenticated"], true);
    assert_eq!(raw["state"]["user"]["id"], "u1");
    assert!(raw["state"].get("loading").is_none());
    assert!(raw["state"].get("error").is_none());
}

#[test]
fn restore_drops_transient_fields() {
    let storage = MemoryStorage::new();
    save_session(&storage, &signed_in());

    let restored = restore_session(&storage);
    assert_eq!(
        restored,
        AuthState {
            loading: false,
            error: None,
            ..signed_in()
        }
    );
}

#[test]
fn restore_without_record_is_anonymous() {
    assert_eq!(restore_session(&MemoryStorage::new()), AuthState::default());
}

#[test]
fn restore_ignores_garbage_and_unknown_versions() {
    let storage = MemoryStorage::new();
    storage.set_item(SESSION_KEY, "not json");
    assert_eq!(restore_session(&storage), AuthState::default());

    storage.set_item(
        SESSION_KEY,
        r#"{"state":{"user":null,"token":"T1","isAuthenticated":false},"version":3}"#,
    );
    assert_eq!(restore_session(&storage), AuthState::default());
}

#[test]
fn restore_downgrades_authenticated_record_missing_token() {
    let storage = MemoryStorage::new();
    let envelope = SnapshotEnvelope {
        state: PersistedAuth {
            user: Some(sample_user()),
            token: None,
            is_authenticated: true,
        },
        version: SNAPSHOT_VERSION,
    };
    save_json(&storage, SESSION_KEY, &envelope);

    assert_eq!(restore_session(&storage), AuthState::default());
}

#[test]
fn restore_keeps_registered_but_unauthenticated_user() {
    let storage = MemoryStorage::new();
    let state = AuthState {
        user: Some(sample_user()),
        ..AuthState::default()
    };
    save_session(&storage, &state);

    assert_eq!(restore_session(&storage), state);
}

//! Durable snapshot of the auth session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server never sees browser storage, so the store starts out
//! `AuthState::restoring()` on both sides and hydration matches the server
//! markup. `resume_session` applies the saved snapshot once the browser has
//! hydrated. `install_persistence` keeps the snapshot current by writing it
//! from a store listener on every change.
//!
//! Only identity is persisted; `loading` and `error` always start clear.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::auth::{AuthState, AuthStore, SubscriptionId};
use crate::net::api::ApiClient;
use crate::net::transport::Transport;
use crate::net::types::User;
use crate::util::storage::{KeyValueStore, SESSION_KEY, load_json, save_json};

/// Snapshot format version written alongside the state.
pub const SNAPSHOT_VERSION: u32 = 0;

/// Persisted subset of `AuthState`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedAuth {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
}

/// On-disk envelope: `{"state": {...}, "version": 0}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEnvelope {
    pub state: PersistedAuth,
    #[serde(default)]
    pub version: u32,
}

impl From<&AuthState> for PersistedAuth {
    fn from(state: &AuthState) -> Self {
        Self {
            user: state.user.clone(),
            token: state.token.clone(),
            is_authenticated: state.is_authenticated,
        }
    }
}

impl From<PersistedAuth> for AuthState {
    fn from(saved: PersistedAuth) -> Self {
        // A snapshot claiming authentication without both halves is not trusted.
        let is_authenticated = saved.is_authenticated && saved.user.is_some() && saved.token.is_some();
        if !is_authenticated && saved.is_authenticated {
            return Self::default();
        }
        Self {
            user: saved.user,
            token: saved.token,
            is_authenticated,
            loading: false,
            error: None,
        }
    }
}

/// Write the persisted subset of `state` under [`SESSION_KEY`].
pub fn save_session(storage: &dyn KeyValueStore, state: &AuthState) {
    let envelope = SnapshotEnvelope {
        state: PersistedAuth::from(state),
        version: SNAPSHOT_VERSION,
    };
    save_json(storage, SESSION_KEY, &envelope);
}

/// Read the last snapshot; absent, unreadable or newer-format records give an
/// anonymous session.
pub fn restore_session(storage: &dyn KeyValueStore) -> AuthState {
    match load_json::<SnapshotEnvelope>(storage, SESSION_KEY) {
        Some(envelope) if envelope.version == SNAPSHOT_VERSION => envelope.state.into(),
        _ => AuthState::default(),
    }
}

/// Store for the first render with persistence already attached.
///
/// Storage is not read here; see [`resume_session`].
pub fn attach_session<T: Transport>(api: ApiClient<T>, storage: Rc<dyn KeyValueStore>) -> AuthStore<T> {
    let store = AuthStore::with_state(api, AuthState::restoring());
    install_persistence(&store, storage);
    store
}

/// Apply the saved snapshot to `store`, notifying its listeners.
pub fn resume_session<T: Transport>(store: &AuthStore<T>, storage: &dyn KeyValueStore) {
    store.restore(restore_session(storage));
}

/// Persist every state change of `store` into `storage`.
pub fn install_persistence<T: Transport>(store: &AuthStore<T>, storage: Rc<dyn KeyValueStore>) -> SubscriptionId {
    store.subscribe(move |state| save_session(storage.as_ref(), state))
}

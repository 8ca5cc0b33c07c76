//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthStore` is created once in `App`, provided through Leptos context, and
//! mirrored into an `RwSignal<AuthState>` for rendering. Route guards and the
//! layout read that signal; pages call the store's actions.
//!
//! DESIGN
//! ======
//! The session is replaced as a whole record on every write and listeners are
//! notified synchronously afterwards, so readers never see a half-applied
//! update. Actions are not deduplicated: overlapping calls race and the last
//! write wins. Persistence is a listener (`state::persist`), not part of the
//! store.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::{FetchTransport, Transport};
use crate::net::types::{RegisterRequest, User};
use crate::util::storage::{KeyValueStore, TOKEN_KEY};

/// Client-held session: identity plus request status.
///
/// `is_authenticated` holds only when `user` and `token` are both present and
/// came from a successful login or restore.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    /// Session for the first render on both server and browser. Nothing has
    /// been read from storage yet, so guards wait instead of redirecting.
    pub fn restoring() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    fn failed(message: String) -> Self {
        Self {
            error: Some(message),
            ..Self::default()
        }
    }
}

/// Handle returned by [`AuthStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&AuthState)>;

struct Inner {
    state: RefCell<AuthState>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

/// Session container with login/register/logout/restore actions.
///
/// Cheap to clone; clones share the same session.
pub struct AuthStore<T> {
    api: ApiClient<T>,
    inner: Rc<Inner>,
}

/// Store type used by the running app.
pub type AppAuthStore = AuthStore<FetchTransport>;

impl<T> Clone for AuthStore<T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Transport> AuthStore<T> {
    /// Anonymous store.
    #[cfg(test)]
    pub fn new(api: ApiClient<T>) -> Self {
        Self::with_state(api, AuthState::default())
    }

    /// Store seeded from a previously persisted session.
    pub fn with_state(api: ApiClient<T>, initial: AuthState) -> Self {
        Self {
            api,
            inner: Rc::new(Inner {
                state: RefCell::new(initial),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    /// Current session record.
    pub fn snapshot(&self) -> AuthState {
        self.inner.state.borrow().clone()
    }

    /// Register `listener`; it runs after every state replacement.
    pub fn subscribe(&self, listener: impl Fn(&AuthState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
    }

    /// Replace the session with an edited copy and notify listeners.
    fn update(&self, edit: impl FnOnce(&mut AuthState)) {
        let mut next = self.snapshot();
        edit(&mut next);
        self.replace(next);
    }

    fn replace(&self, next: AuthState) {
        *self.inner.state.borrow_mut() = next.clone();
        // Listeners may subscribe or read the store while being notified.
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener(&next);
        }
    }

    /// Exchange credentials for a token.
    ///
    /// On success the token is written to durable storage and the session
    /// becomes authenticated. On failure the session is left anonymous with
    /// `error` set to the returned error's message.
    ///
    /// # Errors
    ///
    /// Returns the `ApiError` from `POST /login` so the form can present it.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        self.update(|s| {
            s.loading = true;
            s.error = None;
        });
        match self.api.login(email, password).await {
            Ok(resp) => {
                self.api.storage().set_item(TOKEN_KEY, &resp.access_token);
                leptos::logging::log!("signed in as {}", resp.user.id);
                self.replace(AuthState {
                    user: Some(resp.user),
                    token: Some(resp.access_token),
                    is_authenticated: true,
                    loading: false,
                    error: None,
                });
                Ok(())
            }
            Err(err) => {
                self.api.storage().remove_item(TOKEN_KEY);
                self.replace(AuthState::failed(err.to_string()));
                Err(err)
            }
        }
    }

    /// Create an account. The returned user is cached but no token is issued,
    /// so the session stays unauthenticated until a separate login.
    ///
    /// # Errors
    ///
    /// Returns the `ApiError` from `POST /register`.
    pub async fn register(&self, data: &RegisterRequest) -> Result<User, ApiError> {
        self.update(|s| {
            s.loading = true;
            s.error = None;
        });
        match self.api.register(data).await {
            Ok(user) => {
                self.update(|s| {
                    s.user = Some(user.clone());
                    s.loading = false;
                    s.error = None;
                });
                Ok(user)
            }
            Err(err) => {
                self.update(|s| {
                    s.loading = false;
                    s.error = Some(err.to_string());
                });
                Err(err)
            }
        }
    }

    /// Adopt a session read back from durable storage.
    pub fn restore(&self, saved: AuthState) {
        self.replace(saved);
    }

    /// Drop the durable token and reset to anonymous. Idempotent.
    pub fn logout(&self) {
        self.api.storage().remove_item(TOKEN_KEY);
        self.replace(AuthState::default());
    }

    /// Restore a session from the durable token, if any.
    ///
    /// Any failure to fetch the current user, transient or not, clears the
    /// token and leaves the session anonymous. Nothing is surfaced.
    pub async fn check_auth(&self) {
        let Some(token) = self.api.storage().get_item(TOKEN_KEY).filter(|t| !t.is_empty()) else {
            self.replace(AuthState::default());
            return;
        };
        self.update(|s| {
            s.loading = true;
            s.error = None;
        });
        match self.api.current_user().await {
            Ok(user) => self.replace(AuthState {
                user: Some(user),
                token: Some(token),
                is_authenticated: true,
                loading: false,
                error: None,
            }),
            Err(err) => {
                leptos::logging::warn!("stored session rejected: {err}");
                self.api.storage().remove_item(TOKEN_KEY);
                self.replace(AuthState::default());
            }
        }
    }

    pub fn clear_error(&self) {
        self.update(|s| s.error = None);
    }

    /// Replace the cached user (e.g. after a profile edit). The session only
    /// counts as authenticated while a token is held.
    pub fn set_user(&self, user: User) {
        self.update(|s| {
            s.is_authenticated = s.token.is_some();
            s.user = Some(user);
        });
    }
}

//! Route-guard decisions shared by every protected page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes must apply identical unauthenticated redirect behavior.
//! The decision itself is a pure function of `AuthState`; only the redirect
//! effect touches the router.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Entry point for unauthenticated visitors.
pub const LOGIN_PATH: &str = "/login";

/// What a guarded route should do for a given session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the wrapped page.
    Render,
    /// A restore is in flight; render a placeholder and wait.
    Pending,
    /// Render nothing and navigate to the given path.
    Redirect(&'static str),
}

pub fn guard_decision(state: &AuthState) -> GuardDecision {
    if state.is_authenticated {
        GuardDecision::Render
    } else if state.loading {
        GuardDecision::Pending
    } else {
        GuardDecision::Redirect(LOGIN_PATH)
    }
}

/// Navigate to `/login` whenever the session settles unauthenticated.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(path) = guard_decision(&auth.get()) {
            navigate(
                path,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });
}

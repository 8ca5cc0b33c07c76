//! Route guard wrapper for pages that need a signed-in user.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::use_auth;
use crate::util::auth::{GuardDecision, guard_decision, install_unauth_redirect};

/// Renders `children` only for an authenticated session. Anonymous visitors
/// see nothing and are sent to `/login`; while a stored session is being
/// revalidated a placeholder is shown instead of redirecting.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth().state;
    install_unauth_redirect(auth, use_navigate());

    let decision = Memo::new(move |_| guard_decision(&auth.get()));

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || {
                move || {
                    (decision.get() == GuardDecision::Pending)
                        .then(|| view! { <p class="page__pending">"Checking your session..."</p> })
                }
            }
        >
            {children()}
        </Show>
    }
}

//! Login page: email + password sign-in against the auth store.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_auth;

/// Trim the email and require both fields before calling the backend.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state;
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    // Already signed in (or just signed in): go to the dashboard.
    Effect::new(move || {
        if state.get().is_authenticated {
            navigate("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.get_untracked().loading {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let store = auth.store();
            leptos::task::spawn_local(async move {
                // The store records the message in `error`; the form shows it from there.
                if store.login(&email_value, &password_value).await.is_ok() {
                    password.set(String::new());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value);
    };

    let message = move || {
        let local = info.get();
        if local.is_empty() { state.get().error.unwrap_or_default() } else { local }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"JobApp"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                            if state.get_untracked().error.is_some() {
                                auth.store().clear_error();
                            }
                        }
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || state.get().loading>
                        {move || if state.get().loading { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !message().is_empty()>
                    <p class="login-message">{message}</p>
                </Show>
                <p class="login-card__footer">
                    "No account yet? "
                    <a href="/register">"Create one"</a>
                </p>
            </div>
        </div>
    }
}

//! Registration page. A successful sign-up does not sign the user in; it
//! sends them to the login page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_auth;
use crate::net::types::RegisterRequest;
use crate::state::profile::optional_text;
use crate::util::auth::LOGIN_PATH;

/// Raw form values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct RegisterForm {
    email: String,
    password: String,
    first_name: String,
    last_name: String,
    phone: String,
}

/// Require email and password; blank optional fields are omitted.
fn build_register_request(form: &RegisterForm) -> Result<RegisterRequest, &'static str> {
    let email = form.email.trim();
    if email.is_empty() || form.password.is_empty() {
        return Err("Enter an email and password.");
    }
    Ok(RegisterRequest {
        email: email.to_owned(),
        password: form.password.clone(),
        first_name: optional_text(&form.first_name),
        last_name: optional_text(&form.last_name),
        phone: optional_text(&form.phone),
        ..RegisterRequest::default()
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state;
    let navigate = use_navigate();
    let form = RwSignal::new(RegisterForm::default());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.get_untracked().loading {
            return;
        }
        let request = match build_register_request(&form.get()) {
            Ok(req) => req,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let store = auth.store();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if store.register(&request).await.is_ok() {
                    navigate(LOGIN_PATH, NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, &navigate);
    };

    let message = move || {
        let local = info.get();
        if local.is_empty() { state.get().error.unwrap_or_default() } else { local }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create your account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="new-password"
                        prop:value=move || form.get().password
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="First name (optional)"
                        prop:value=move || form.get().first_name
                        on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Last name (optional)"
                        prop:value=move || form.get().last_name
                        on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="tel"
                        placeholder="Phone (optional)"
                        prop:value=move || form.get().phone
                        on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || state.get().loading>
                        {move || if state.get().loading { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <Show when=move || !message().is_empty()>
                    <p class="login-message">{message}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? "
                    <a href=LOGIN_PATH>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

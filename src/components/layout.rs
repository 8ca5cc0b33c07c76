//! App header with primary navigation and the session menu.
//!
//! Links are always rendered; the right-hand side switches between the user's
//! avatar + sign-out and a sign-in link depending on the session.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::app::use_auth;
use crate::net::types::User;
use crate::util::auth::LOGIN_PATH;

/// Primary navigation entries as `(href, label)`.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("/", "Dashboard"),
    ("/jobs", "Jobs"),
    ("/applications", "Applications"),
    ("/profile", "Profile"),
];

/// Exact path match, ignoring a trailing slash on non-root paths.
pub fn is_active(current: &str, href: &str) -> bool {
    let normalize = |p: &str| {
        let trimmed = p.trim_end_matches('/');
        if trimmed.is_empty() { "/".to_owned() } else { trimmed.to_owned() }
    };
    normalize(current) == normalize(href)
}

fn nav_link_class(current: &str, href: &str) -> &'static str {
    if is_active(current, href) {
        "app-nav__link app-nav__link--active"
    } else {
        "app-nav__link"
    }
}

/// Uppercase initials from the user's name parts, or the email's first letter.
pub fn avatar_initials(user: &User) -> String {
    let from_name: String = [user.first_name.as_deref(), user.last_name.as_deref()]
        .into_iter()
        .flatten()
        .flat_map(str::split_whitespace)
        .filter_map(|part| part.chars().next())
        .collect();
    let initials = if from_name.is_empty() {
        user.email.chars().take(1).collect()
    } else {
        from_name
    };
    initials.to_uppercase()
}

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let auth = use_auth();
    let state = auth.state;
    let location = use_location();

    let links = NAV_LINKS
        .iter()
        .map(|&(href, label)| {
            view! {
                <a href=href class=move || nav_link_class(&location.pathname.get(), href)>
                    {label}
                </a>
            }
        })
        .collect_view();

    // Guarded pages redirect on their own once the session is anonymous.
    let on_logout = move |_| auth.store().logout();

    let user_menu = move || {
        let current = state.get();
        match current.user.filter(|_| current.is_authenticated) {
            Some(user) => {
                let name = user.display_name();
                let initials = avatar_initials(&user);
                view! {
                    <div class="app-header__user">
                        <span class="avatar" title=name.clone() aria-label=name>
                            {initials}
                        </span>
                        <button class="btn btn--outline btn--sm" on:click=on_logout>
                            "Sign out"
                        </button>
                    </div>
                }
                .into_any()
            }
            None => view! {
                <div class="app-header__user">
                    <a href=LOGIN_PATH class="btn btn--outline btn--sm">"Sign in"</a>
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <div class="app-shell">
            <header class="app-header">
                <nav class="app-nav">
                    <a href="/" class="app-nav__brand">"JobApp"</a>
                    <div class="app-nav__links">{links}</div>
                    {user_menu}
                </nav>
            </header>
            <main class="app-main">{children()}</main>
        </div>
    }
}

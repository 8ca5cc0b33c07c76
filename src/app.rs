//! Root application component with routing and context providers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::AppLayout;
use crate::components::require_auth::RequireAuth;
use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::net::transport::FetchTransport;
use crate::pages::{
    applications::ApplicationsPage, dashboard::DashboardPage, jobs::JobsPage, login::LoginPage,
    profile::ProfilePage, register::RegisterPage,
};
use crate::state::auth::{AppAuthStore, AuthState};
use crate::state::persist::attach_session;
use crate::util::storage::{BrowserStorage, KeyValueStore};

/// Auth handles shared through context.
///
/// `state` mirrors the store for rendering; `store` runs actions. The store
/// holds `Rc`s, so it lives in local (non-`Send`) arena storage.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
    store: StoredValue<AppAuthStore, LocalStorage>,
}

impl AuthContext {
    pub fn store(&self) -> AppAuthStore {
        self.store.get_value()
    }
}

/// Fetch the auth context provided by [`App`].
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context, restores and revalidates any stored session
/// once hydrated, and sets up client-side routing. Every route except
/// login/register is guarded.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Server and browser render the same restoring session; the saved one is
    // applied after hydration.
    let storage: Rc<dyn KeyValueStore> = Rc::new(BrowserStorage);
    let api = ApiClient::new(ApiConfig::from_env(), FetchTransport, Rc::clone(&storage));
    let store = attach_session(api, Rc::clone(&storage));
    let state = RwSignal::new(store.snapshot());
    store.subscribe(move |s| state.set(s.clone()));

    provide_context(AuthContext {
        state,
        store: StoredValue::new_local(store.clone()),
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::state::persist::resume_session(&store, storage.as_ref());
        store.check_auth().await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (store, storage);

    view! {
        <Stylesheet id="leptos" href="/pkg/jobapp-web.css"/>
        <Title text="JobApp"/>

        <Router>
            <AppLayout>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("jobs")
                        view=|| view! { <RequireAuth><JobsPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("applications")
                        view=|| view! { <RequireAuth><ApplicationsPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <RequireAuth><ProfilePage/></RequireAuth> }
                    />
                </Routes>
            </AppLayout>
        </Router>
    }
}

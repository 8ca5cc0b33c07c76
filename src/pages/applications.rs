//! Applications page: tracked job applications (empty until the tracker API lands).

use leptos::prelude::*;

#[component]
pub fn ApplicationsPage() -> impl IntoView {
    view! {
        <div class="page">
            <header class="page__header">
                <h1>"My Applications"</h1>
                <p class="page__subtitle">"Track and manage your job applications"</p>
            </header>
            <section class="card card--empty">
                <h3>"No applications yet"</h3>
                <p>"Start by searching for jobs and creating your first application."</p>
                <a href="/jobs" class="btn">"Find jobs"</a>
            </section>
        </div>
    }
}

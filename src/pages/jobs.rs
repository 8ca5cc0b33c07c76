//! Jobs page: search filters and the (currently empty) result list.

use leptos::prelude::*;

const EXPERIENCE_LEVELS: [&str; 4] = ["Any", "Entry Level", "Mid Level", "Senior Level"];

#[component]
pub fn JobsPage() -> impl IntoView {
    let title = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let level = RwSignal::new(EXPERIENCE_LEVELS[0].to_owned());
    let results = RwSignal::new(Vec::<String>::new());

    let options = EXPERIENCE_LEVELS
        .iter()
        .map(|&l| view! { <option value=l>{l}</option> })
        .collect_view();

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // No job search endpoint exists yet; keep the list empty.
        results.set(Vec::new());
    };

    view! {
        <div class="page jobs-page">
            <header class="page__header">
                <h1>"Job Discovery"</h1>
                <p class="page__subtitle">"Find and manage relevant job opportunities"</p>
            </header>

            <form class="card jobs-page__filters" on:submit=on_search>
                <h2 class="card__title">"Search & Filter"</h2>
                <label>
                    "Job Title"
                    <input
                        type="text"
                        placeholder="e.g., Software Engineer"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Location"
                    <input
                        type="text"
                        placeholder="e.g., San Francisco, Remote"
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Experience Level"
                    <select
                        prop:value=move || level.get()
                        on:change=move |ev| level.set(event_target_value(&ev))
                    >
                        {options}
                    </select>
                </label>
                <button class="btn" type="submit">"Search Jobs"</button>
            </form>

            <section class="jobs-page__results">
                <div class="jobs-page__results-header">
                    <h2>"Available Jobs"</h2>
                    <p>{move || format!("Showing {} jobs", results.get().len())}</p>
                </div>
                <Show when=move || results.get().is_empty()>
                    <div class="card card--empty">
                        <h3>"No jobs found"</h3>
                        <p>"Start by searching for jobs or configure your preferences above."</p>
                    </div>
                </Show>
            </section>
        </div>
    }
}

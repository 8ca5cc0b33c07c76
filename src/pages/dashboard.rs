//! Dashboard page: authenticated landing route with feature entry points.

use leptos::prelude::*;

use crate::app::use_auth;

/// Feature cards as `(title, description, detail, href, action)`.
const FEATURES: [(&str, &str, &str, &str, &str); 3] = [
    (
        "Job Discovery",
        "Find relevant jobs across multiple platforms",
        "Intelligent job search with semantic matching and multi-platform aggregation.",
        "/jobs",
        "Search Jobs",
    ),
    (
        "Resume Processing",
        "Tailor your resume for each application",
        "Dynamic resume optimization based on job requirements.",
        "/profile",
        "Upload Resume",
    ),
    (
        "Cover Letters",
        "AI-generated personalized cover letters",
        "Personalized content with company research integration.",
        "/applications",
        "Generate Letter",
    ),
];

const QUICK_START: [(&str, &str); 3] = [
    ("Set up your profile", "Upload your resume and set job preferences"),
    ("Discover relevant jobs", "AI-powered job matching across multiple platforms"),
    ("Generate application materials", "Tailored resumes and personalized cover letters"),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth().state;
    let greeting = move || {
        auth.get()
            .user
            .map(|u| format!("Welcome back, {}", u.display_name()))
            .unwrap_or_else(|| "Welcome".to_owned())
    };

    let cards = FEATURES
        .iter()
        .map(|&(title, description, detail, href, action)| {
            view! {
                <section class="card">
                    <h2 class="card__title">{title}</h2>
                    <p class="card__description">{description}</p>
                    <p class="card__detail">{detail}</p>
                    <a href=href class="btn btn--block">{action}</a>
                </section>
            }
        })
        .collect_view();

    let steps = QUICK_START
        .iter()
        .enumerate()
        .map(|(i, &(title, detail))| {
            view! {
                <li class="quick-start__step">
                    <span class="quick-start__number">{i + 1}</span>
                    <div>
                        <h3>{title}</h3>
                        <p>{detail}</p>
                    </div>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="page dashboard-page">
            <header class="page__header">
                <h1>"Job Application Automation"</h1>
                <p class="page__subtitle">{greeting}</p>
                <p class="page__subtitle">"AI-powered job discovery and application assistance"</p>
            </header>
            <div class="dashboard-page__grid">{cards}</div>
            <section class="card quick-start">
                <h2 class="card__title">"Quick Start"</h2>
                <p class="card__description">"Get started with your job application automation"</p>
                <ol class="quick-start__steps">{steps}</ol>
            </section>
        </div>
    }
}

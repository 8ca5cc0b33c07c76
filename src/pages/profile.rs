//! Profile page: account details from the session plus the editable job
//! profile (`/me/profile`).
//!
//! SYSTEM CONTEXT
//! ==============
//! The profile is fetched once on mount. A user without a profile gets an
//! empty form, and the first save creates it.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::app::use_auth;
use crate::net::types::ProfileFields;
use crate::state::profile::{ProfileState, optional_text, parse_optional_number, validate_salary_range};

const WORK_TYPES: [(&str, &str); 4] = [
    ("", "Not specified"),
    ("remote", "Remote"),
    ("hybrid", "Hybrid"),
    ("onsite", "On-site"),
];

/// Text inputs backing the form; numbers stay as typed until submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct ProfileForm {
    current_title: String,
    linkedin_url: String,
    github_url: String,
    portfolio_url: String,
    resume_file_url: String,
    location_city: String,
    location_state: String,
    location_country: String,
    willing_to_relocate: bool,
    years_experience: String,
    target_salary_min: String,
    target_salary_max: String,
    preferred_work_type: String,
}

impl ProfileForm {
    fn from_fields(fields: &ProfileFields) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        let num = |v: Option<u32>| v.map(|n| n.to_string()).unwrap_or_default();
        Self {
            current_title: text(&fields.current_title),
            linkedin_url: text(&fields.linkedin_url),
            github_url: text(&fields.github_url),
            portfolio_url: text(&fields.portfolio_url),
            resume_file_url: text(&fields.resume_file_url),
            location_city: text(&fields.location_city),
            location_state: text(&fields.location_state),
            location_country: text(&fields.location_country),
            willing_to_relocate: fields.willing_to_relocate,
            years_experience: num(fields.years_experience),
            target_salary_min: num(fields.target_salary_min),
            target_salary_max: num(fields.target_salary_max),
            preferred_work_type: text(&fields.preferred_work_type),
        }
    }

    /// Edited values over `base`; fields the form does not show keep their
    /// saved value and blank inputs become `None`.
    fn to_fields(&self, base: &ProfileFields) -> Result<ProfileFields, String> {
        let target_salary_min = parse_optional_number(&self.target_salary_min)?;
        let target_salary_max = parse_optional_number(&self.target_salary_max)?;
        validate_salary_range(target_salary_min, target_salary_max).map_err(str::to_owned)?;
        Ok(ProfileFields {
            current_title: optional_text(&self.current_title),
            linkedin_url: optional_text(&self.linkedin_url),
            github_url: optional_text(&self.github_url),
            portfolio_url: optional_text(&self.portfolio_url),
            resume_file_url: optional_text(&self.resume_file_url),
            location_city: optional_text(&self.location_city),
            location_state: optional_text(&self.location_state),
            location_country: optional_text(&self.location_country),
            willing_to_relocate: self.willing_to_relocate,
            years_experience: parse_optional_number(&self.years_experience)?,
            target_salary_min,
            target_salary_max,
            preferred_work_type: optional_text(&self.preferred_work_type),
            ..base.clone()
        })
    }
}

fn text_field(
    form: RwSignal<ProfileForm>,
    label: &'static str,
    placeholder: &'static str,
    get: fn(&ProfileForm) -> &String,
    set: fn(&mut ProfileForm, String),
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span>{label}</span>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || form.with(|f| get(f).clone())
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        </label>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let session = auth.state;
    let profile = RwSignal::new(ProfileState {
        loading: true,
        ..ProfileState::default()
    });
    let form = RwSignal::new(ProfileForm::default());
    let notice = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let api = auth.store().api().clone();
        leptos::task::spawn_local(async move {
            match crate::state::profile::load_profile(&api).await {
                Ok(loaded) => {
                    profile.set(ProfileState {
                        profile: loaded,
                        ..ProfileState::default()
                    });
                    form.set(ProfileForm::from_fields(&profile.get_untracked().form_fields()));
                }
                Err(e) => profile.set(ProfileState {
                    error: Some(e.to_string()),
                    ..ProfileState::default()
                }),
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if profile.get_untracked().saving {
            return;
        }
        let base = profile.get_untracked().form_fields();
        let fields = match form.get_untracked().to_fields(&base) {
            Ok(fields) => fields,
            Err(msg) => {
                notice.set(msg);
                return;
            }
        };
        notice.set(String::new());
        profile.update(|p| {
            p.saving = true;
            p.error = None;
        });

        #[cfg(feature = "hydrate")]
        {
            let api = auth.store().api().clone();
            let exists = profile.get_untracked().exists();
            leptos::task::spawn_local(async move {
                match crate::state::profile::save_profile(&api, exists, &fields).await {
                    Ok(saved) => {
                        form.set(ProfileForm::from_fields(&ProfileFields::from_profile(&saved)));
                        profile.set(ProfileState {
                            profile: Some(saved),
                            ..ProfileState::default()
                        });
                        notice.set("Profile saved.".to_owned());
                    }
                    Err(e) => profile.update(|p| {
                        p.saving = false;
                        p.error = Some(e.to_string());
                    }),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = fields;
    };

    let account_row = move |label: &'static str, value: fn(&crate::net::types::User) -> String| {
        view! {
            <div class="profile-page__row">
                <span class="profile-page__label">{label}</span>
                <span class="profile-page__value">
                    {move || session.get().user.as_ref().map_or_else(|| "Not set".to_owned(), value)}
                </span>
            </div>
        }
    };

    view! {
        <div class="page profile-page">
            <header class="page__header">
                <h1>"Profile & Settings"</h1>
                <p class="page__subtitle">"Manage your profile, resume, and job preferences"</p>
            </header>

            <section class="card">
                <h2 class="card__title">"Personal Information"</h2>
                {account_row("Name", |u| u.display_name())}
                {account_row("Email", |u| u.email.clone())}
                {account_row("Plan", |u| u.subscription_tier.clone())}
                {account_row("Email verified", |u| if u.email_verified { "Yes".to_owned() } else { "No".to_owned() })}
            </section>

            <Show
                when=move || !profile.get().loading
                fallback=|| view! { <p class="page__pending">"Loading profile..."</p> }
            >
                <form class="card profile-page__form" on:submit=on_submit>
                    <h2 class="card__title">"Job Preferences"</h2>
                    {text_field(form, "Current title", "Software Engineer", |f| &f.current_title, |f, v| f.current_title = v)}
                    {text_field(form, "City", "San Francisco", |f| &f.location_city, |f, v| f.location_city = v)}
                    {text_field(form, "State / region", "CA", |f| &f.location_state, |f, v| f.location_state = v)}
                    {text_field(form, "Country", "USA", |f| &f.location_country, |f, v| f.location_country = v)}
                    <label class="form-field form-field--inline">
                        <input
                            type="checkbox"
                            prop:checked=move || form.get().willing_to_relocate
                            on:change=move |ev| form.update(|f| f.willing_to_relocate = event_target_checked(&ev))
                        />
                        <span>"Willing to relocate"</span>
                    </label>
                    <label class="form-field">
                        <span>"Preferred work type"</span>
                        <select
                            prop:value=move || form.get().preferred_work_type
                            on:change=move |ev| form.update(|f| f.preferred_work_type = event_target_value(&ev))
                        >
                            {WORK_TYPES
                                .iter()
                                .map(|&(value, label)| view! { <option value=value>{label}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    {text_field(form, "Years of experience", "5", |f| &f.years_experience, |f, v| f.years_experience = v)}
                    {text_field(form, "Target salary (min)", "100000", |f| &f.target_salary_min, |f, v| f.target_salary_min = v)}
                    {text_field(form, "Target salary (max)", "150000", |f| &f.target_salary_max, |f, v| f.target_salary_max = v)}

                    <h2 class="card__title">"Resume & Links"</h2>
                    {text_field(form, "Resume URL", "https://...", |f| &f.resume_file_url, |f, v| f.resume_file_url = v)}
                    {text_field(form, "LinkedIn", "https://linkedin.com/in/...", |f| &f.linkedin_url, |f, v| f.linkedin_url = v)}
                    {text_field(form, "GitHub", "https://github.com/...", |f| &f.github_url, |f, v| f.github_url = v)}
                    {text_field(form, "Portfolio", "https://...", |f| &f.portfolio_url, |f, v| f.portfolio_url = v)}

                    <button class="btn" type="submit" disabled=move || profile.get().saving>
                        {move || {
                            match (profile.get().saving, profile.get().exists()) {
                                (true, _) => "Saving...",
                                (false, true) => "Save Changes",
                                (false, false) => "Create Profile",
                            }
                        }}
                    </button>
                </form>
            </Show>

            <Show when=move || profile.get().error.is_some() || !notice.get().is_empty()>
                <p class="profile-page__message">
                    {move || profile.get().error.unwrap_or_else(|| notice.get())}
                </p>
            </Show>
        </div>
    }
}

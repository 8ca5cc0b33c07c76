//! Wire DTOs for the user/auth REST router.
//!
//! DESIGN
//! ======
//! Field names mirror the gateway's JSON exactly so serde needs no renames.
//! Optional registration fields are skipped when absent so the gateway fills
//! its defaults. Profile fields are always sent in full.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account identity as returned by `/login`, `/register` and `/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub is_active: bool,
    pub email_verified: bool,
    /// Billing tier name (e.g. `"free"`, `"pro"`).
    pub subscription_tier: String,
    /// ISO-8601 timestamp of the most recent login, if any.
    #[serde(default)]
    pub last_login_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl User {
    /// Human-facing name: first + last when set, otherwise the email address.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        if parts.is_empty() {
            self.email.clone()
        } else {
            parts.join(" ")
        }
    }
}

/// Extended profile attached to a user (`/me/profile`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub resume_file_url: Option<String>,
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub portfolio_url: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location_city: Option<String>,
    #[serde(default)]
    pub location_state: Option<String>,
    #[serde(default)]
    pub location_country: Option<String>,
    #[serde(default)]
    pub willing_to_relocate: bool,
    #[serde(default)]
    pub years_experience: Option<u32>,
    #[serde(default)]
    pub current_title: Option<String>,
    #[serde(default)]
    pub target_salary_min: Option<u32>,
    #[serde(default)]
    pub target_salary_max: Option<u32>,
    /// One of `"remote"`, `"hybrid"`, `"onsite"` when set.
    #[serde(default)]
    pub preferred_work_type: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Writable profile fields, used for both `POST` (create) and `PUT` (update).
///
/// Every field is serialized. The gateway applies each key it receives on
/// update, so an absent value goes out as `null` and clears the stored one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileFields {
    pub resume_file_url: Option<String>,
    pub resume_text: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub phone: Option<String>,
    pub location_city: Option<String>,
    pub location_state: Option<String>,
    pub location_country: Option<String>,
    pub willing_to_relocate: bool,
    pub years_experience: Option<u32>,
    pub current_title: Option<String>,
    pub target_salary_min: Option<u32>,
    pub target_salary_max: Option<u32>,
    pub preferred_work_type: Option<String>,
}

impl ProfileFields {
    /// Seed an edit form from an existing profile.
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            resume_file_url: profile.resume_file_url.clone(),
            resume_text: profile.resume_text.clone(),
            linkedin_url: profile.linkedin_url.clone(),
            github_url: profile.github_url.clone(),
            portfolio_url: profile.portfolio_url.clone(),
            phone: profile.phone.clone(),
            location_city: profile.location_city.clone(),
            location_state: profile.location_state.clone(),
            location_country: profile.location_country.clone(),
            willing_to_relocate: profile.willing_to_relocate,
            years_experience: profile.years_experience,
            current_title: profile.current_title.clone(),
            target_salary_min: profile.target_salary_min,
            target_salary_max: profile.target_salary_max,
            preferred_work_type: profile.preferred_work_type.clone(),
        }
    }
}

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /register`. Unset optional fields fall back to server defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_tier: Option<String>,
}

/// Response of a successful `POST /login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Always `"bearer"` for the current gateway.
    pub token_type: String,
    pub user: User,
}

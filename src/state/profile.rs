//! Profile page state and load/save orchestration.
//!
//! A user may not have a profile row yet; the gateway answers `404` for that,
//! which is an empty form here rather than an error. Saving picks `POST` for
//! the first write and `PUT` afterwards.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::{ProfileFields, UserProfile};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileState {
    pub profile: Option<UserProfile>,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
}

impl ProfileState {
    /// Whether a save should update (`PUT`) rather than create (`POST`).
    pub fn exists(&self) -> bool {
        self.profile.is_some()
    }

    /// Form values to edit: the saved profile, or blanks.
    pub fn form_fields(&self) -> ProfileFields {
        self.profile
            .as_ref()
            .map(ProfileFields::from_profile)
            .unwrap_or_default()
    }
}

/// Fetch the current user's profile; a missing profile is `Ok(None)`.
///
/// # Errors
///
/// Any `ApiError` other than a 404.
pub async fn load_profile<T: Transport>(api: &ApiClient<T>) -> Result<Option<UserProfile>, ApiError> {
    match api.user_profile().await {
        Ok(profile) => Ok(Some(profile)),
        Err(err) if err.is_not_found() => Ok(None),
        Err(err) => Err(err),
    }
}

/// Create or update the profile depending on whether one already `exists`.
///
/// # Errors
///
/// The `ApiError` from the underlying request.
pub async fn save_profile<T: Transport>(
    api: &ApiClient<T>,
    exists: bool,
    fields: &ProfileFields,
) -> Result<UserProfile, ApiError> {
    if exists {
        api.update_user_profile(fields).await
    } else {
        api.create_user_profile(fields).await
    }
}

/// Parse an optional whole-number form field. Blank input is `None`; commas
/// and a leading `$` are tolerated so "$120,000" reads as 120000.
pub fn parse_optional_number(input: &str) -> Result<Option<u32>, String> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    if cleaned.is_empty() {
        return Ok(None);
    }
    cleaned
        .parse::<u32>()
        .map(Some)
        .map_err(|_| format!("\"{}\" is not a whole number", input.trim()))
}

/// Blank text inputs are sent as absent rather than empty strings.
pub fn optional_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Reject a salary range whose minimum exceeds its maximum.
pub fn validate_salary_range(min: Option<u32>, max: Option<u32>) -> Result<(), &'static str> {
    match (min, max) {
        (Some(lo), Some(hi)) if lo > hi => Err("Minimum salary cannot exceed maximum."),
        _ => Ok(()),
    }
}

//! Backend endpoint configuration.
//!
//! The browser has no process environment, so the backend base URL is baked in
//! at build time from `JOBAPP_API_URL` and falls back to the local dev server.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default backend origin used when `JOBAPP_API_URL` is unset at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Path prefix for the user/auth router on the API gateway.
pub const USERS_API_PREFIX: &str = "/api/v1/users";

/// Resolved REST client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend origin without a trailing slash (e.g. `http://localhost:8000`).
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_owned(),
        }
    }

    /// Build from the compile-time `JOBAPP_API_URL` override, if any.
    pub fn from_env() -> Self {
        Self::from_override(option_env!("JOBAPP_API_URL"))
    }

    fn from_override(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => Self::new(url),
            None => Self::new(DEFAULT_API_URL),
        }
    }

    /// Base path every user/auth endpoint is appended to.
    pub fn users_base(&self) -> String {
        format!("{}{USERS_API_PREFIX}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

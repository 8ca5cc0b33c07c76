use super::*;

#[test]
fn default_points_at_local_gateway() {
    let config = ApiConfig::default();
    assert_eq!(config.base_url, "http://localhost:8000");
    assert_eq!(config.users_base(), "http://localhost:8000/api/v1/users");
}

#[test]
fn new_strips_trailing_slashes_and_whitespace() {
    let config = ApiConfig::new("  https://api.example.com//  ");
    assert_eq!(config.base_url, "https://api.example.com");
    assert_eq!(config.users_base(), "https://api.example.com/api/v1/users");
}

#[test]
fn override_wins_when_present() {
    let config = ApiConfig::from_override(Some("https://staging.example.com"));
    assert_eq!(config.base_url, "https://staging.example.com");
}

#[test]
fn blank_override_falls_back_to_default() {
    assert_eq!(ApiConfig::from_override(Some("   ")), ApiConfig::default());
    assert_eq!(ApiConfig::from_override(None), ApiConfig::default());
}

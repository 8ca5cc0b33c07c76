use super::*;
use crate::test_support::sample_user;

#[test]
fn is_active_matches_exact_paths() {
    assert!(is_active("/", "/"));
    assert!(is_active("/jobs", "/jobs"));
    assert!(is_active("/jobs/", "/jobs"));
    assert!(!is_active("/jobs", "/"));
    assert!(!is_active("/applications", "/jobs"));
}

#[test]
fn nav_link_class_marks_active_link() {
    assert_eq!(nav_link_class("/profile", "/profile"), "app-nav__link app-nav__link--active");
    assert_eq!(nav_link_class("/profile", "/"), "app-nav__link");
}

#[test]
fn nav_links_cover_every_guarded_page() {
    let hrefs: Vec<&str> = NAV_LINKS.iter().map(|(href, _)| *href).collect();
    assert_eq!(hrefs, vec!["/", "/jobs", "/applications", "/profile"]);
}

#[test]
fn avatar_initials_from_name_parts() {
    assert_eq!(avatar_initials(&sample_user()), "AB");

    let multi = User {
        first_name: Some("mary ann".to_owned()),
        last_name: Some("smith".to_owned()),
        ..sample_user()
    };
    assert_eq!(avatar_initials(&multi), "MAS");
}

#[test]
fn avatar_initials_fall_back_to_email() {
    let user = User {
        first_name: None,
        last_name: None,
        ..sample_user()
    };
    assert_eq!(avatar_initials(&user), "A");
}

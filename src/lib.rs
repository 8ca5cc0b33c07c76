//! # jobapp-web
//!
//! Leptos + WASM front-end shell for the job application tracker.
//!
//! This crate contains the HTTP client for the users gateway, the auth store
//! with its browser persistence, the route guard, and the layout and pages
//! that sit on top of them.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: install panic/log hooks and hydrate the server markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

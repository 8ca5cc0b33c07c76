//! Networking modules for the users/auth REST gateway.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds and sends requests, `transport` abstracts the fetch call so
//! tests can script responses, `error` normalizes failures into one display
//! message, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;

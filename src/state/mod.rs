//! Application state shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` owns the session record and its actions, `persist` mirrors that
//! record into browser storage, and `profile` drives the profile editor.

pub mod auth;
pub mod persist;
pub mod profile;

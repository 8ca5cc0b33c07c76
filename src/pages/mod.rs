//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration. Auth gating happens in `app`
//! via `RequireAuth`, so pages assume the session they need.

pub mod applications;
pub mod dashboard;
pub mod jobs;
pub mod login;
pub mod profile;
pub mod register;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome and the auth gate while reading shared state
//! from the `AuthContext` provider.

pub mod layout;
pub mod require_auth;

//! Shared UI components.

pub mod navbar;
pub mod require_auth;

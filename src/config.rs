//! Backend base URL configuration.
//!
//! The URL is baked in at build time via the `PLANTASY_API_URL` environment
//! variable. A missing URL is not fatal at startup; every request attempt
//! fails with [`crate::net::error::ApiError::MissingBaseUrl`] instead, so the
//! public pages still render.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::OnceLock;

static API_URL: OnceLock<Option<String>> = OnceLock::new();

/// The configured backend base URL with any trailing slash stripped, or
/// `None` when `PLANTASY_API_URL` was unset or empty at build time.
pub fn api_url() -> Option<&'static str> {
    API_URL
        .get_or_init(|| option_env!("PLANTASY_API_URL").and_then(normalize))
        .as_deref()
}

/// Strip one trailing slash and reject empty values.
fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.strip_suffix('/').unwrap_or(raw);
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

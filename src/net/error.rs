//! Structured errors produced by the HTTP client.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;
use thiserror::Error;

/// Error raised by [`crate::net::api::request`] and its wrappers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// `PLANTASY_API_URL` was not set at build time.
    #[error("PLANTASY_API_URL is not set; configure the backend base URL")]
    MissingBaseUrl,

    /// The request never produced an HTTP response: DNS failure, CORS
    /// rejection, an aborted request, and similar transport-level problems.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Status {
        message: String,
        status: u16,
        payload: Option<Value>,
    },
}

impl ApiError {
    /// HTTP status code, when the server produced a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Pick the message for a failed response: the server's `msg` field, then
/// its `error` field, then the HTTP status text, then a generic fallback.
pub(crate) fn status_message(payload: Option<&Value>, status_text: &str) -> String {
    let from_payload = payload.and_then(|p| {
        p.get("msg")
            .and_then(Value::as_str)
            .or_else(|| p.get("error").and_then(Value::as_str))
    });
    match from_payload {
        Some(msg) if !msg.is_empty() => msg.to_owned(),
        _ if !status_text.is_empty() => status_text.to_owned(),
        _ => "Request failed".to_owned(),
    }
}

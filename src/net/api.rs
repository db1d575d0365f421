//! HTTP client for the Plantasy REST API.
//!
//! Wraps `gloo-net` with base-URL resolution, bearer-token injection, and
//! error normalization. Callers receive parsed JSON (`serde_json::Value`) or
//! a structured [`ApiError`]; they never touch raw responses.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is surfaced to the caller: a missing base URL as
//! `ApiError::MissingBaseUrl`, transport failures and aborted requests as
//! `ApiError::Network`, non-2xx statuses as `ApiError::Status`. A 401
//! additionally drops the persisted token so a stale credential cannot
//! survive a reload; clearing the live session stays with the session store.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use gloo_net::http::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;
use web_sys::AbortSignal;

use crate::config;
use crate::net::error::{ApiError, status_message};
use crate::net::token;

/// Request body variants accepted by [`request`].
pub enum Body {
    /// JSON payload.
    Json(Value),
    /// Pre-encoded string payload, passed through unmodified. Still sent as
    /// JSON on the wire, like every non-form body.
    Text(String),
    /// Multipart form payload. No explicit content type so the browser can
    /// set the multipart boundary itself.
    Form(web_sys::FormData),
}

/// Optional per-request settings.
#[derive(Default)]
pub struct RequestOptions {
    /// Extra headers. Authorization is applied after these, so a caller
    /// cannot accidentally ship a stale credential.
    pub headers: Vec<(String, String)>,
    /// Abort signal for cancelling the in-flight request. Abortion surfaces
    /// as `ApiError::Network`, never silently.
    pub signal: Option<AbortSignal>,
}

/// Perform a request against the configured base URL.
///
/// The response body is parsed as JSON only when the response content type
/// says it is JSON; a parse failure yields `None` rather than an error.
///
/// # Errors
///
/// See the module-level error taxonomy.
pub async fn request(
    path: &str,
    method: Method,
    body: Option<Body>,
    opts: RequestOptions,
) -> Result<Option<Value>, ApiError> {
    let base = config::api_url().ok_or(ApiError::MissingBaseUrl)?;
    let url = join_url(base, path);

    let mut builder = RequestBuilder::new(&url).method(method);
    for (name, value) in &opts.headers {
        builder = builder.header(name, value);
    }
    if let Some(tok) = token::current_token() {
        builder = builder.header("Authorization", &format!("Bearer {tok}"));
    }
    builder = builder.abort_signal(opts.signal.as_ref());

    let req = match body {
        Some(body) => {
            if let Some(content_type) = explicit_content_type(&body) {
                builder = builder.header("Content-Type", content_type);
            }
            match body {
                Body::Json(value) => builder.body(value.to_string()).map_err(network)?,
                Body::Text(text) => builder.body(text).map_err(network)?,
                Body::Form(form) => builder.body(form).map_err(network)?,
            }
        }
        None => builder.build().map_err(network)?,
    };

    let resp = req.send().await.map_err(network)?;
    let payload = parse_json_body(&resp).await;

    if resp.ok() {
        return Ok(payload);
    }

    if should_discard_stored_token(resp.status()) {
        token::discard_stored_token();
    }

    Err(ApiError::Status {
        message: status_message(payload.as_ref(), &resp.status_text()),
        status: resp.status(),
        payload,
    })
}

/// Parse the body as JSON when the content type indicates JSON. Anything
/// else, including a JSON parse failure, is `None`.
async fn parse_json_body(resp: &Response) -> Option<Value> {
    let content_type = resp.headers().get("content-type")?;
    if !content_type.contains("application/json") {
        return None;
    }
    resp.json::<Value>().await.ok()
}

/// Explicit content type for a request body: JSON for everything except
/// form payloads, whose multipart boundary the browser must set itself.
fn explicit_content_type(body: &Body) -> Option<&'static str> {
    match body {
        Body::Json(_) | Body::Text(_) => Some("application/json"),
        Body::Form(_) => None,
    }
}

/// A 401 means the credential is stale and its persisted copy must go;
/// every other failure leaves it in place.
fn should_discard_stored_token(status: u16) -> bool {
    status == 401
}

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Base URL and path joined with exactly one slash between them.
fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// `GET` a path.
///
/// # Errors
///
/// See [`request`].
pub async fn get(path: &str) -> Result<Option<Value>, ApiError> {
    request(path, Method::GET, None, RequestOptions::default()).await
}

/// `POST` a JSON-encoded body.
///
/// # Errors
///
/// See [`request`].
pub async fn post<B: Serialize>(path: &str, body: &B) -> Result<Option<Value>, ApiError> {
    request(path, Method::POST, Some(encode(body)?), RequestOptions::default()).await
}

/// `POST` a multipart form payload.
///
/// # Errors
///
/// See [`request`].
pub async fn post_form(path: &str, form: web_sys::FormData) -> Result<Option<Value>, ApiError> {
    request(path, Method::POST, Some(Body::Form(form)), RequestOptions::default()).await
}

/// `PUT` a JSON-encoded body.
///
/// # Errors
///
/// See [`request`].
pub async fn put<B: Serialize>(path: &str, body: &B) -> Result<Option<Value>, ApiError> {
    request(path, Method::PUT, Some(encode(body)?), RequestOptions::default()).await
}

/// `PATCH` a JSON-encoded body.
///
/// # Errors
///
/// See [`request`].
pub async fn patch<B: Serialize>(path: &str, body: &B) -> Result<Option<Value>, ApiError> {
    request(path, Method::PATCH, Some(encode(body)?), RequestOptions::default()).await
}

/// `DELETE` a path.
///
/// # Errors
///
/// See [`request`].
pub async fn delete(path: &str) -> Result<Option<Value>, ApiError> {
    request(path, Method::DELETE, None, RequestOptions::default()).await
}

fn encode<B: Serialize>(body: &B) -> Result<Body, ApiError> {
    serde_json::to_value(body)
        .map(Body::Json)
        .map_err(|e| ApiError::Network(format!("request encoding failed: {e}")))
}

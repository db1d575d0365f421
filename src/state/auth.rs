//! Session store: the single authority over "who is logged in".
//!
//! The [`AuthState`] signal is provided via context from the composition
//! root and mutated only by the operations in this module; pages and
//! components read it, never write it.
//!
//! ERROR HANDLING
//! ==============
//! Expected failures inside `login`/`signup` (network, bad credentials,
//! malformed response) are fully absorbed: the caller sees `false` and the
//! session is left unchanged; the cause goes to the console log only, never
//! to the UI. A missing context provider, by contrast, is a programming
//! defect and panics via `expect_context` at the call site.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::net::api;
use crate::net::token;
use crate::net::types::{LoginBody, RegisterBody, User};
use crate::util::storage;

const USER_KEY: &str = "user";

/// In-memory session record.
///
/// `token` is the authority for authentication checks; `user` may be absent
/// while a token is held (a restored session whose profile failed to
/// deserialize stays authenticated on the token alone).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state while the persisted session is being restored.
    pub fn restoring() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
        }
    }

    /// True iff a token is held. Computed from the token alone; callers
    /// must not assume `user` is populated when this is true.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Enter the authenticated state with a fresh credential. A response
    /// without a user object keeps whatever user was already held.
    fn establish(&mut self, token: String, user: Option<User>) {
        self.token = Some(token);
        if user.is_some() {
            self.user = user;
        }
    }

    /// Drop the credential and identity. Idempotent.
    fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }
}

/// Restore a persisted session into `auth`, then clear the loading flag.
///
/// Runs once at startup; there is no way back to the loading state after.
/// A persisted user that fails to deserialize is ignored: the session stays
/// authenticated on the token alone.
pub fn restore(auth: RwSignal<AuthState>) {
    let saved = token::stored_token();
    let user = saved
        .as_ref()
        .and_then(|_| storage::get_item(USER_KEY))
        .and_then(|raw| serde_json::from_str(&raw).ok());
    if let Some(tok) = saved.as_deref() {
        token::set_token(Some(tok));
    }
    auth.update(|state| {
        state.token = saved;
        state.user = user;
        state.loading = false;
    });
}

/// Log in against `POST /auth/login`. Returns `true` on success.
pub async fn login(auth: RwSignal<AuthState>, email: &str, password: &str) -> bool {
    let body = LoginBody { email, password };
    match api::post("/auth/login", &body).await {
        Ok(payload) => accept_session(auth, payload, "login"),
        Err(err) => {
            log::error!("login failed: {err}");
            false
        }
    }
}

/// Create an account against `POST /auth/register`. Same contract as
/// [`login`], with `name` included in the request body.
pub async fn signup(auth: RwSignal<AuthState>, name: &str, email: &str, password: &str) -> bool {
    let body = RegisterBody {
        name,
        email,
        password,
    };
    match api::post("/auth/register", &body).await {
        Ok(payload) => accept_session(auth, payload, "signup"),
        Err(err) => {
            log::error!("signup failed: {err}");
            false
        }
    }
}

/// Clear the session everywhere: signal, ambient token, persisted token,
/// persisted user. Safe to call when already anonymous; the caller handles
/// navigation back to the landing page.
pub fn logout(auth: RwSignal<AuthState>) {
    token::clear_token();
    storage::remove_item(USER_KEY);
    auth.update(AuthState::clear);
}

/// Apply a successful auth response to the session. A response without a
/// token is rejected even though the HTTP call itself succeeded.
fn accept_session(auth: RwSignal<AuthState>, payload: Option<Value>, op: &str) -> bool {
    let Some((tok, user)) = credential_from_payload(payload.as_ref()) else {
        log::error!("{op} response did not include a token");
        return false;
    };
    token::set_token(Some(&tok));
    if let Some(ref user) = user {
        persist_user(user);
    }
    auth.update(|state| state.establish(tok, user));
    true
}

/// Extract the credential from an auth response body. `None` when the body
/// is absent or lacks a non-empty token. A user object that fails to decode
/// is dropped without rejecting the token.
fn credential_from_payload(payload: Option<&Value>) -> Option<(String, Option<User>)> {
    let payload = payload?;
    let tok = payload
        .get("token")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())?
        .to_owned();
    let user = payload
        .get("user")
        .and_then(|u| serde_json::from_value(u.clone()).ok());
    Some((tok, user))
}

/// Best-effort persistence of the user profile; storage failure is
/// swallowed inside [`storage::set_item`].
fn persist_user(user: &User) {
    if let Ok(raw) = serde_json::to_string(user) {
        storage::set_item(USER_KEY, &raw);
    }
}

//! Ambient bearer token shared by all requests.
//!
//! The in-memory token is authoritative while the app runs; localStorage
//! holds a mirror so the session survives reloads. Storage writes are
//! best-effort and never fail the caller.

use std::cell::RefCell;

use crate::util::storage;

const TOKEN_KEY: &str = "auth.token";

thread_local! {
    static TOKEN: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Set or clear the ambient token, mirroring the change to localStorage.
pub fn set_token(token: Option<&str>) {
    TOKEN.with(|t| *t.borrow_mut() = token.map(str::to_owned));
    match token {
        Some(value) => storage::set_item(TOKEN_KEY, value),
        None => storage::remove_item(TOKEN_KEY),
    }
}

/// The token persisted in localStorage, if any.
pub fn stored_token() -> Option<String> {
    storage::get_item(TOKEN_KEY)
}

/// Clear both the ambient and the persisted token.
pub fn clear_token() {
    set_token(None);
}

/// Token to attach to an outgoing request: the in-memory token first,
/// falling back to the persisted copy.
pub(crate) fn current_token() -> Option<String> {
    TOKEN
        .with(|t| t.borrow().clone())
        .or_else(stored_token)
}

/// Drop only the persisted copy, leaving in-memory state alone. Used on a
/// 401 response; clearing the live session is the session store's job.
pub(crate) fn discard_stored_token() {
    storage::remove_item(TOKEN_KEY);
}

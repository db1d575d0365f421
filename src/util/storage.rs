//! Best-effort localStorage access.
//!
//! Storage can be unavailable (private browsing, storage disabled) or fail on
//! write. Callers treat it as an optional mirror of in-memory state, so every
//! failure here degrades to "nothing stored" instead of escalating.

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read a value, or `None` if storage is unavailable or the key is absent.
pub fn get_item(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

/// Write a value; failures are swallowed.
pub fn set_item(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

/// Remove a key; failures are swallowed.
pub fn remove_item(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

use super::*;
use serde_json::json;

fn user(name: &str, id: &str) -> User {
    User {
        name: name.to_owned(),
        user_id: id.to_owned(),
    }
}

// =============================================================
// AuthState lifecycle
// =============================================================

#[test]
fn restoring_state_is_loading_and_anonymous() {
    let state = AuthState::restoring();
    assert!(state.loading);
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn authenticated_from_token_presence_only() {
    let mut state = AuthState::default();
    state.establish("t1".to_owned(), None);
    assert!(state.is_authenticated());
    assert!(state.user.is_none());
}

#[test]
fn establish_sets_token_and_user() {
    let mut state = AuthState::default();
    state.establish("t1".to_owned(), Some(user("A", "1")));
    assert_eq!(state.token.as_deref(), Some("t1"));
    assert_eq!(state.user, Some(user("A", "1")));
}

#[test]
fn establish_without_user_keeps_previous_user() {
    let mut state = AuthState::default();
    state.establish("t1".to_owned(), Some(user("A", "1")));
    state.establish("t2".to_owned(), None);
    assert_eq!(state.token.as_deref(), Some("t2"));
    assert_eq!(state.user, Some(user("A", "1")));
}

#[test]
fn clear_is_idempotent() {
    let mut state = AuthState::default();
    state.establish("t1".to_owned(), Some(user("A", "1")));
    state.clear();
    let once = state.clone();
    state.clear();
    assert_eq!(state, once);
    assert!(state.token.is_none());
    assert!(state.user.is_none());
}

// =============================================================
// credential_from_payload
// =============================================================

#[test]
fn payload_with_token_and_user_yields_both() {
    let payload = json!({"token": "t1", "user": {"name": "A", "userId": "1"}});
    let (tok, usr) = credential_from_payload(Some(&payload)).unwrap();
    assert_eq!(tok, "t1");
    assert_eq!(usr, Some(user("A", "1")));
}

#[test]
fn payload_without_token_is_rejected() {
    let payload = json!({"user": {"name": "A", "userId": "1"}});
    assert!(credential_from_payload(Some(&payload)).is_none());
}

#[test]
fn empty_token_is_rejected() {
    let payload = json!({"token": ""});
    assert!(credential_from_payload(Some(&payload)).is_none());
}

#[test]
fn missing_body_is_rejected() {
    assert!(credential_from_payload(None).is_none());
}

#[test]
fn malformed_user_is_dropped_but_token_kept() {
    let payload = json!({"token": "t1", "user": {"unexpected": true}});
    let (tok, usr) = credential_from_payload(Some(&payload)).unwrap();
    assert_eq!(tok, "t1");
    assert!(usr.is_none());
}

#[test]
fn non_string_token_is_rejected() {
    let payload = json!({"token": 17});
    assert!(credential_from_payload(Some(&payload)).is_none());
}

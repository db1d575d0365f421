use super::*;
use serde_json::json;

// =============================================================
// status_message priority
// =============================================================

#[test]
fn msg_field_wins() {
    let payload = json!({"msg": "bad credentials", "error": "ignored"});
    assert_eq!(status_message(Some(&payload), "Unauthorized"), "bad credentials");
}

#[test]
fn error_field_when_no_msg() {
    let payload = json!({"error": "email taken"});
    assert_eq!(status_message(Some(&payload), "Conflict"), "email taken");
}

#[test]
fn status_text_when_payload_has_neither() {
    let payload = json!({"detail": "something else"});
    assert_eq!(status_message(Some(&payload), "Not Found"), "Not Found");
}

#[test]
fn status_text_when_no_payload() {
    assert_eq!(status_message(None, "Bad Gateway"), "Bad Gateway");
}

#[test]
fn generic_fallback_when_nothing_usable() {
    assert_eq!(status_message(None, ""), "Request failed");
}

#[test]
fn non_string_msg_falls_through() {
    let payload = json!({"msg": 42, "error": "real message"});
    assert_eq!(status_message(Some(&payload), ""), "real message");
}

#[test]
fn empty_msg_falls_back_to_status_text() {
    let payload = json!({"msg": ""});
    assert_eq!(status_message(Some(&payload), "Forbidden"), "Forbidden");
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn status_error_carries_code_and_payload() {
    let payload = json!({"error": "email taken"});
    let err = ApiError::Status {
        message: status_message(Some(&payload), "Conflict"),
        status: 409,
        payload: Some(payload.clone()),
    };
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.to_string(), "email taken");
    match err {
        ApiError::Status { payload: Some(p), .. } => assert_eq!(p, payload),
        _ => panic!("expected status error"),
    }
}

#[test]
fn non_status_errors_have_no_code() {
    assert_eq!(ApiError::MissingBaseUrl.status(), None);
    assert_eq!(ApiError::Network("abort".to_owned()).status(), None);
}

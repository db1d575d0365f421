use super::*;

// =============================================================
// join_url
// =============================================================

#[test]
fn join_url_keeps_leading_slash() {
    assert_eq!(
        join_url("https://api.plantasy.dev", "/auth/login"),
        "https://api.plantasy.dev/auth/login"
    );
}

#[test]
fn join_url_inserts_missing_slash() {
    assert_eq!(
        join_url("https://api.plantasy.dev", "auth/login"),
        "https://api.plantasy.dev/auth/login"
    );
}

// =============================================================
// content type
// =============================================================

#[test]
fn json_body_gets_json_content_type() {
    let body = Body::Json(serde_json::json!({"email": "a@b.com"}));
    assert_eq!(explicit_content_type(&body), Some("application/json"));
}

#[test]
fn string_body_gets_json_content_type() {
    let body = Body::Text("{\"raw\":true}".to_owned());
    assert_eq!(explicit_content_type(&body), Some("application/json"));
}

// =============================================================
// 401 cleanup
// =============================================================

#[test]
fn unauthorized_discards_stored_token() {
    assert!(should_discard_stored_token(401));
}

#[test]
fn other_statuses_keep_stored_token() {
    for status in [200, 204, 400, 403, 404, 409, 500, 503] {
        assert!(!should_discard_stored_token(status), "status {status}");
    }
}

// =============================================================
// body encoding
// =============================================================

#[test]
fn encode_produces_json_body() {
    let body = crate::net::types::LoginBody {
        email: "a@b.com",
        password: "pw",
    };
    match encode(&body).unwrap() {
        Body::Json(value) => {
            assert_eq!(value["email"], "a@b.com");
            assert_eq!(value["password"], "pw");
        }
        _ => panic!("expected JSON body"),
    }
}

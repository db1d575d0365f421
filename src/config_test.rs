use super::*;

// =============================================================
// normalize
// =============================================================

#[test]
fn normalize_keeps_plain_url() {
    assert_eq!(
        normalize("https://api.plantasy.dev"),
        Some("https://api.plantasy.dev".to_owned())
    );
}

#[test]
fn normalize_strips_one_trailing_slash() {
    assert_eq!(
        normalize("https://api.plantasy.dev/"),
        Some("https://api.plantasy.dev".to_owned())
    );
}

#[test]
fn normalize_rejects_empty() {
    assert_eq!(normalize(""), None);
}

#[test]
fn normalize_rejects_lone_slash() {
    assert_eq!(normalize("/"), None);
}

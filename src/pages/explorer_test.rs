use super::*;

// =============================================================
// endpoint
// =============================================================

#[test]
fn explore_feed_lives_under_plants() {
    assert_eq!(EXPLORE_PATH, "/plants/explore");
}

use super::*;
use serde_json::json;

// =============================================================
// User
// =============================================================

#[test]
fn user_decodes_wire_field_names() {
    let user: User = serde_json::from_value(json!({
        "name": "A",
        "userId": "1",
    }))
    .unwrap();
    assert_eq!(user.name, "A");
    assert_eq!(user.user_id, "1");
}

#[test]
fn user_round_trips_through_storage_serialization() {
    let user = User {
        name: "A".to_owned(),
        user_id: "1".to_owned(),
    };
    let raw = serde_json::to_string(&user).unwrap();
    assert!(raw.contains("userId"));
    let back: User = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, user);
}

// =============================================================
// Plant shapes
// =============================================================

#[test]
fn plant_summary_tolerates_missing_optionals() {
    let plant: PlantSummary = serde_json::from_value(json!({
        "id": "p1",
        "name": "Monstera",
        "species": null,
        "imageUrl": null,
    }))
    .unwrap();
    assert_eq!(plant.id, "p1");
    assert!(plant.species.is_none());
    assert!(plant.image_url.is_none());
}

#[test]
fn plant_detail_decodes_full_record() {
    let plant: PlantDetail = serde_json::from_value(json!({
        "id": "p1",
        "name": "Monstera",
        "species": "Monstera deliciosa",
        "description": "Big leaves.",
        "imageUrl": "https://img.example/p1.jpg",
    }))
    .unwrap();
    assert_eq!(plant.species.as_deref(), Some("Monstera deliciosa"));
    assert_eq!(plant.image_url.as_deref(), Some("https://img.example/p1.jpg"));
}

#[test]
fn identification_match_decodes() {
    let m: IdentificationMatch = serde_json::from_value(json!({
        "species": "Ficus lyrata",
        "commonName": "Fiddle-leaf fig",
        "score": 0.92,
    }))
    .unwrap();
    assert_eq!(m.common_name.as_deref(), Some("Fiddle-leaf fig"));
    assert!((m.score - 0.92).abs() < f64::EPSILON);
}

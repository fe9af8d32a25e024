use super::*;

// =============================================================
// Helpers
// =============================================================

fn chess() -> Activity {
    Activity {
        description: "Learn strategies and compete in chess tournaments".to_owned(),
        schedule: "Fridays, 3:30 PM - 5:00 PM".to_owned(),
        max_participants: 12,
        participants: vec!["michael@mergington.edu".to_owned(), "daniel@mergington.edu".to_owned()],
    }
}

// =============================================================
// Activity
// =============================================================

#[test]
fn spots_left_subtracts_roster_from_capacity() {
    assert_eq!(chess().spots_left(), 10);
}

#[test]
fn spots_left_goes_negative_when_over_filled() {
    let mut a = chess();
    a.max_participants = 1;
    assert_eq!(a.spots_left(), -1);
}

#[test]
fn activity_missing_participants_defaults_empty() {
    let a: Activity = serde_json::from_value(serde_json::json!({
        "description": "d",
        "schedule": "s",
        "max_participants": 5
    }))
    .unwrap();
    assert!(a.participants.is_empty());
    assert_eq!(a.spots_left(), 5);
}

#[test]
fn has_participant_matches_exact_email() {
    let a = chess();
    assert!(a.has_participant("daniel@mergington.edu"));
    assert!(!a.has_participant("Daniel@mergington.edu"));
}

// =============================================================
// ActivityCatalog
// =============================================================

#[test]
fn catalog_preserves_document_order() {
    let raw = r#"{
        "Programming Class": {"description": "p", "schedule": "s", "max_participants": 20, "participants": []},
        "Chess Club": {"description": "c", "schedule": "s", "max_participants": 12, "participants": ["a@b.com"]},
        "Art Studio": {"description": "a", "schedule": "s", "max_participants": 8, "participants": []}
    }"#;
    let catalog: ActivityCatalog = serde_json::from_str(raw).unwrap();
    assert_eq!(catalog.names(), vec!["Programming Class", "Chess Club", "Art Studio"]);
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.get("Chess Club").unwrap().participants, vec!["a@b.com"]);
}

#[test]
fn catalog_empty_object_is_empty() {
    let catalog: ActivityCatalog = serde_json::from_str("{}").unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.names().is_empty());
}

#[test]
fn catalog_rejects_non_object() {
    assert!(serde_json::from_str::<ActivityCatalog>("[]").is_err());
    assert!(serde_json::from_str::<ActivityCatalog>(r#"{"x": 1}"#).is_err());
}

#[test]
fn catalog_from_iter_replaces_duplicate_in_place() {
    let mut later = chess();
    later.max_participants = 99;
    let catalog: ActivityCatalog = vec![
        ("Chess Club".to_owned(), chess()),
        ("Art".to_owned(), chess()),
        ("Chess Club".to_owned(), later),
    ]
    .into_iter()
    .collect();
    assert_eq!(catalog.names(), vec!["Chess Club", "Art"]);
    assert_eq!(catalog.get("Chess Club").unwrap().max_participants, 99);
}

// =============================================================
// Mutation bodies
// =============================================================

#[test]
fn signup_ack_reads_message() {
    let ack: SignupAck = serde_json::from_str(r#"{"message": "Signed up a@b.com for Chess Club"}"#).unwrap();
    assert_eq!(ack.message, "Signed up a@b.com for Chess Club");
}

#[test]
fn signup_ack_missing_message_is_empty() {
    let ack: SignupAck = serde_json::from_str("{}").unwrap();
    assert_eq!(ack.message, "");
}

#[test]
fn error_body_reads_detail_and_message() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail": "Activity full", "message": "m"}"#).unwrap();
    assert_eq!(body.detail.as_deref(), Some("Activity full"));
    assert_eq!(body.message.as_deref(), Some("m"));
}

#[test]
fn error_body_ignores_structured_detail() {
    let body: ErrorBody =
        serde_json::from_str(r#"{"detail": [{"loc": ["query", "email"], "msg": "field required"}]}"#).unwrap();
    assert_eq!(body.detail, None);
    assert_eq!(body.message, None);
}

#[test]
fn error_body_treats_empty_string_as_missing() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail": ""}"#).unwrap();
    assert_eq!(body.detail, None);
}

use super::*;

#[test]
fn user_deserializes_backend_shape() {
    let user: User = serde_json::from_str(
        r#"{"_id":"u1","name":"Asha","email":"asha@example.com","profilePic":null,"createdAt":"2024-03-01T10:00:00Z"}"#,
    )
    .unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.created_at.as_deref(), Some("2024-03-01T10:00:00Z"));
    assert_eq!(user.profile_pic, None);
}

#[test]
fn user_tolerates_missing_optional_fields() {
    let user: User =
        serde_json::from_str(r#"{"_id":"u1","name":"Asha","email":"a@b.c"}"#).unwrap();
    assert_eq!(user.profile_pic, None);
    assert_eq!(user.created_at, None);
}

#[test]
fn relationship_round_trips_self_rename() {
    let json = serde_json::to_string(&Relationship::Myself).unwrap();
    assert_eq!(json, r#""Self""#);
    let back: Relationship = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Relationship::Myself);
}

#[test]
fn relationship_unknown_value_maps_to_other() {
    let parsed: Relationship = serde_json::from_str(r#""Cousin""#).unwrap();
    assert_eq!(parsed, Relationship::Other);
}

#[test]
fn relationship_from_label_covers_all_variants() {
    for relationship in Relationship::ALL {
        assert_eq!(Relationship::from_label(relationship.label()), Some(relationship));
    }
    assert_eq!(Relationship::from_label("Select relationship"), None);
}

#[test]
fn family_member_accepts_both_identifier_spellings() {
    let by_member_id: FamilyMember = serde_json::from_str(
        r#"{"memberId":"m1","name":"Ravi","age":"34","gender":"Male","relationship":"Father"}"#,
    )
    .unwrap();
    assert_eq!(by_member_id.id, "m1");
    assert!(!by_member_id.local_only);

    let by_object_id: FamilyMember =
        serde_json::from_str(r#"{"_id":"m2","name":"Ravi","relationship":"Father"}"#).unwrap();
    assert_eq!(by_object_id.id, "m2");
    assert_eq!(by_object_id.age, "");
}

#[test]
fn prescription_accepts_image_url_alias() {
    let prescription: Prescription = serde_json::from_str(
        r#"{"_id":"p1","title":"Amoxicillin","tags":["ENT"],"memberId":"m1","imageUrl":"https://cdn/x.png"}"#,
    )
    .unwrap();
    assert_eq!(prescription.file_url.as_deref(), Some("https://cdn/x.png"));
    assert_eq!(prescription.tags, vec!["ENT"]);
}

#[test]
fn report_uses_type_field_for_its_name() {
    let report: Report =
        serde_json::from_str(r#"{"_id":"r1","type":"X-Ray","memberId":"m1"}"#).unwrap();
    assert_eq!(report.doc_type, "X-Ray");
    assert_eq!(report.date, None);
}

#[test]
fn shared_document_parses_with_every_field_absent() {
    let doc: SharedDocument = serde_json::from_str("{}").unwrap();
    assert_eq!(doc, SharedDocument::default());
}

#[test]
fn doc_kind_forms_are_consistent() {
    for kind in [DocKind::Prescription, DocKind::Report] {
        assert_eq!(DocKind::from_label(kind.label()), Some(kind));
        assert_eq!(DocKind::from_route(kind.wire()), Some(kind));
    }
    assert_eq!(DocKind::from_label("all"), None);
    assert_eq!(DocKind::from_route("Prescription"), None);
}

#[test]
fn profile_update_skips_absent_fields() {
    let update = ProfileUpdate { name: None, profile_pic: Some("data:image/png;base64,AA".to_owned()) };
    let value = serde_json::to_value(&update).unwrap();
    assert_eq!(value, serde_json::json!({ "profilePic": "data:image/png;base64,AA" }));
}

#[test]
fn new_member_payload_serializes_camel_case() {
    let payload = NewMemberPayload {
        name: "Ravi".to_owned(),
        age: "62".to_owned(),
        gender: "Male".to_owned(),
        relationship: Relationship::Father,
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "name": "Ravi", "age": "62", "gender": "Male", "relationship": "Father" })
    );
}

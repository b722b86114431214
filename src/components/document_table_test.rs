use super::*;
use crate::net::types::Relationship;

fn members_with_ravi() -> MembersState {
    let mut members = MembersState::default();
    members.apply_fetched(vec![crate::net::types::FamilyMember {
        id: "m1".to_owned(),
        name: "Ravi".to_owned(),
        age: "62".to_owned(),
        gender: "Male".to_owned(),
        relationship: Relationship::Father,
        local_only: false,
    }]);
    members
}

#[test]
fn prescription_rows_use_title_and_first_tag() {
    let members = members_with_ravi();
    let rows = prescription_rows(
        &[Prescription {
            id: "p1".to_owned(),
            title: "Amoxicillin".to_owned(),
            date: Some("2024-05-01T00:00:00Z".to_owned()),
            tags: vec!["ENT".to_owned(), "Follow-up".to_owned()],
            member_id: "m1".to_owned(),
            file_url: Some("https://cdn/p1.pdf".to_owned()),
            file_type: Some("application/pdf".to_owned()),
            local_only: false,
        }],
        &members,
    );
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Amoxicillin");
    assert_eq!(rows[0].tag.as_deref(), Some("ENT"));
    assert_eq!(rows[0].member, "Ravi");
}

#[test]
fn report_rows_use_type_field_for_name() {
    let members = members_with_ravi();
    let rows = report_rows(
        &[Report {
            id: "r1".to_owned(),
            doc_type: "X-Ray".to_owned(),
            date: None,
            tags: vec![],
            member_id: "m1".to_owned(),
            file_url: None,
            file_type: None,
            local_only: true,
        }],
        &members,
    );
    assert_eq!(rows[0].name, "X-Ray");
    assert_eq!(rows[0].tag, None);
    assert!(rows[0].local_only);
}

#[test]
fn unknown_member_falls_back_to_raw_id() {
    let members = members_with_ravi();
    let rows = report_rows(
        &[Report {
            id: "r1".to_owned(),
            doc_type: "MRI".to_owned(),
            date: None,
            tags: vec![],
            member_id: "deleted".to_owned(),
            file_url: None,
            file_type: None,
            local_only: false,
        }],
        &members,
    );
    assert_eq!(rows[0].member, "deleted");
}

#[test]
fn empty_message_names_the_kind() {
    assert_eq!(empty_message(DocKind::Prescription), "No prescriptions uploaded yet.");
    assert_eq!(empty_message(DocKind::Report), "No reports uploaded yet.");
}

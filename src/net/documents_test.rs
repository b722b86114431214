use super::*;

#[test]
fn collection_endpoints_split_by_kind() {
    assert_eq!(documents_endpoint(DocKind::Prescription), "/api/prescriptions");
    assert_eq!(documents_endpoint(DocKind::Report), "/api/reports");
    assert_eq!(FAMILY_ENDPOINT, "/api/family");
}

#[test]
fn delete_endpoints_append_identifier() {
    assert_eq!(member_delete_endpoint("m1"), "/api/family/m1");
    assert_eq!(document_delete_endpoint(DocKind::Prescription, "p1"), "/api/prescriptions/p1");
    assert_eq!(document_delete_endpoint(DocKind::Report, "r1"), "/api/reports/r1");
}

#[test]
fn empty_query_produces_no_pairs() {
    assert!(DocumentQuery::default().pairs().is_empty());
}

#[test]
fn full_query_produces_all_pairs_in_order() {
    let query = DocumentQuery {
        member_id: Some("m1".to_owned()),
        tag: Some("Cardiology".to_owned()),
        date_range: Some(("2024-01-03".to_owned(), "2024-02-03".to_owned())),
    };
    assert_eq!(
        query.pairs(),
        vec![
            ("memberId", "m1".to_owned()),
            ("tags", "Cardiology".to_owned()),
            ("startDate", "2024-01-03".to_owned()),
            ("endDate", "2024-02-03".to_owned()),
        ]
    );
}

#[test]
fn partial_query_omits_unset_fields() {
    let query = DocumentQuery { tag: Some("ENT".to_owned()), ..DocumentQuery::default() };
    assert_eq!(query.pairs(), vec![("tags", "ENT".to_owned())]);
}

#[test]
fn prescription_upload_uses_title_field() {
    let fields = upload_fields(DocKind::Prescription, " Amoxicillin ", "m1", "ENT", "2024-05-01");
    assert_eq!(
        fields,
        vec![
            ("title".to_owned(), "Amoxicillin".to_owned()),
            ("memberId".to_owned(), "m1".to_owned()),
            ("tags".to_owned(), "ENT".to_owned()),
            ("date".to_owned(), "2024-05-01".to_owned()),
        ]
    );
}

#[test]
fn report_upload_uses_type_field_and_skips_empty_date() {
    let fields = upload_fields(DocKind::Report, "X-Ray", "m2", "Orthopedics", "");
    assert_eq!(
        fields,
        vec![
            ("type".to_owned(), "X-Ray".to_owned()),
            ("memberId".to_owned(), "m2".to_owned()),
            ("tags".to_owned(), "Orthopedics".to_owned()),
        ]
    );
}

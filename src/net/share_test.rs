use super::*;

#[test]
fn share_endpoints_match_backend_contract() {
    assert_eq!(GENERATE_LINK_ENDPOINT, "/api/share/generate-link");
    assert_eq!(SEND_EMAIL_ENDPOINT, "/api/share/send-email");
    assert_eq!(shared_endpoint("tok123"), "/api/share/tok123");
}

#[test]
fn share_payload_uses_lowercase_kind() {
    assert_eq!(
        share_payload(DocKind::Prescription, "p1"),
        serde_json::json!({ "type": "prescription", "id": "p1" })
    );
    assert_eq!(
        share_payload(DocKind::Report, "r9"),
        serde_json::json!({ "type": "report", "id": "r9" })
    );
}

#[test]
fn email_payload_carries_all_three_fields() {
    assert_eq!(
        email_payload("doc@example.com", DocKind::Report, "r1"),
        serde_json::json!({ "email": "doc@example.com", "type": "report", "id": "r1" })
    );
}

#[test]
fn whatsapp_message_names_the_document_kind() {
    assert_eq!(
        whatsapp_message(DocKind::Prescription, "https://x/view/prescription/abc"),
        "Check out this Prescription: https://x/view/prescription/abc"
    );
}

// The three terminal states of the shared view must stay distinguishable
// from literal status/body fixtures.

#[test]
fn classify_ok_body_is_found() {
    let result = classify_shared_response(
        200,
        r#"{"title":"X-Ray","date":"2024-01-01","tags":["ENT"],"fileUrl":"https://x/y.pdf"}"#,
    );
    let doc = result.unwrap().unwrap();
    assert_eq!(doc.title.as_deref(), Some("X-Ray"));
    assert_eq!(doc.tags, vec!["ENT"]);
    assert_eq!(doc.file_url.as_deref(), Some("https://x/y.pdf"));
}

#[test]
fn classify_non_2xx_is_error() {
    let result = classify_shared_response(404, "");
    assert_eq!(result, Err("Request failed with status 404".to_owned()));
}

#[test]
fn classify_non_2xx_surfaces_backend_message() {
    let result = classify_shared_response(410, r#"{"message":"Share link expired"}"#);
    assert_eq!(result, Err("Share link expired".to_owned()));
}

#[test]
fn classify_null_body_is_not_found() {
    assert_eq!(classify_shared_response(200, "null"), Ok(None));
    assert_eq!(classify_shared_response(200, ""), Ok(None));
}

#[test]
fn classify_unparsable_success_body_is_error() {
    assert_eq!(classify_shared_response(200, "<html>"), Err(SHARED_LOAD_ERROR.to_owned()));
}

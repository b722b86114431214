use super::*;
use crate::net::share::classify_shared_response;

fn sample_document() -> SharedDocument {
    SharedDocument {
        title: Some("X-Ray".to_owned()),
        doc_type: Some("Radiology".to_owned()),
        date: Some("2024-01-01".to_owned()),
        tags: vec!["ENT".to_owned()],
        file_url: Some("https://x/y.pdf".to_owned()),
    }
}

#[test]
fn found_document_renders_ready() {
    let outcome = lookup_outcome(Ok(Some(sample_document())));
    assert_eq!(outcome, SharedLookup::Ready(sample_document()));
}

#[test]
fn null_body_renders_not_found() {
    assert_eq!(lookup_outcome(Ok(None)), SharedLookup::NotFound);
}

#[test]
fn backend_error_renders_failed_with_message() {
    assert_eq!(
        lookup_outcome(Err("Share link expired".to_owned())),
        SharedLookup::Failed("Share link expired".to_owned())
    );
}

// End-to-end over literal wire fixtures: status/body pairs map to the
// three distinguishable render states, and the found document keeps the
// fields the card renders.

#[test]
fn wire_fixtures_map_to_distinct_states() {
    let found = lookup_outcome(classify_shared_response(
        200,
        r#"{"title":"X-Ray","date":"2024-01-01","tags":["ENT"],"fileUrl":"https://x/y.pdf"}"#,
    ));
    let SharedLookup::Ready(document) = found else {
        panic!("expected Ready");
    };
    assert_eq!(document.title.as_deref(), Some("X-Ray"));
    // A .pdf file URL gets the frame preview.
    assert_eq!(classify_file(None, document.file_url.as_deref().unwrap()), FileKind::Pdf);

    assert_eq!(
        lookup_outcome(classify_shared_response(404, "")),
        SharedLookup::Failed("Request failed with status 404".to_owned())
    );
    assert_eq!(lookup_outcome(classify_shared_response(200, "null")), SharedLookup::NotFound);
}

#[test]
fn heading_follows_route_kind() {
    let document = sample_document();
    assert_eq!(shared_heading(Some(DocKind::Prescription), &document), "X-Ray");
    assert_eq!(shared_heading(Some(DocKind::Report), &document), "Radiology");
}

#[test]
fn heading_without_kind_prefers_title_then_type() {
    let document = sample_document();
    assert_eq!(shared_heading(None, &document), "X-Ray");

    let untitled = SharedDocument { title: None, ..sample_document() };
    assert_eq!(shared_heading(None, &untitled), "Radiology");

    assert_eq!(shared_heading(None, &SharedDocument::default()), "Shared Document");
}

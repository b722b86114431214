use super::*;

fn prescription(id: &str, title: &str) -> Prescription {
    Prescription {
        id: id.to_owned(),
        title: title.to_owned(),
        date: None,
        tags: vec!["ENT".to_owned()],
        member_id: "m1".to_owned(),
        file_url: None,
        file_type: None,
        local_only: false,
    }
}

fn report(id: &str, doc_type: &str) -> Report {
    Report {
        id: id.to_owned(),
        doc_type: doc_type.to_owned(),
        date: None,
        tags: vec![],
        member_id: "m1".to_owned(),
        file_url: None,
        file_type: None,
        local_only: false,
    }
}

#[test]
fn begin_fetch_claims_increasing_epochs() {
    let mut state = DocumentsState::default();
    let first = state.begin_fetch();
    let second = state.begin_fetch();
    assert!(second > first);
    assert!(state.loading);
    assert!(state.is_current(second));
    assert!(!state.is_current(first));
}

#[test]
fn stale_results_are_discarded() {
    let mut state = DocumentsState::default();
    let stale = state.begin_fetch();
    let current = state.begin_fetch();

    assert!(!state.apply_prescriptions(stale, vec![prescription("p1", "old")]));
    assert!(state.prescriptions.is_empty());

    assert!(state.apply_prescriptions(current, vec![prescription("p2", "new")]));
    assert_eq!(state.prescriptions[0].id, "p2");
}

#[test]
fn stale_finish_does_not_clear_loading() {
    let mut state = DocumentsState::default();
    let stale = state.begin_fetch();
    let current = state.begin_fetch();

    state.finish_fetch(stale);
    assert!(state.loading);
    state.finish_fetch(current);
    assert!(!state.loading);
}

#[test]
fn apply_reports_respects_epoch_too() {
    let mut state = DocumentsState::default();
    let epoch = state.begin_fetch();
    assert!(state.apply_reports(epoch, vec![report("r1", "X-Ray")]));
    state.begin_fetch();
    assert!(!state.apply_reports(epoch, vec![report("r2", "MRI")]));
    assert_eq!(state.reports[0].id, "r1");
}

#[test]
fn removals_only_touch_the_target_list() {
    let mut state = DocumentsState::default();
    let epoch = state.begin_fetch();
    state.apply_prescriptions(epoch, vec![prescription("p1", "a"), prescription("p2", "b")]);
    state.apply_reports(epoch, vec![report("r1", "X-Ray")]);

    state.remove_prescription("p1");
    assert_eq!(state.prescriptions.len(), 1);
    assert_eq!(state.reports.len(), 1);

    state.remove_report("r1");
    assert!(state.reports.is_empty());
}

#[test]
fn fallback_display_id_counts_both_lists() {
    let mut state = DocumentsState::default();
    assert_eq!(state.fallback_display_id(), "PR-1000");
    let epoch = state.begin_fetch();
    state.apply_prescriptions(epoch, vec![prescription("p1", "a")]);
    state.apply_reports(epoch, vec![report("r1", "X-Ray"), report("r2", "MRI")]);
    assert_eq!(state.fallback_display_id(), "PR-1003");
}

#[test]
fn local_records_are_tagged_and_tag_wrapped() {
    let file = SelectedFile::stub("scan.png", "image/png");
    let p = local_prescription("PR-1000".to_owned(), " Amoxicillin ", "", "ENT", "m1", &file);
    assert!(p.local_only);
    assert_eq!(p.title, "Amoxicillin");
    assert_eq!(p.date, None);
    assert_eq!(p.tags, vec!["ENT"]);
    assert_eq!(p.file_type.as_deref(), Some("image/png"));

    let r = local_report("PR-1001".to_owned(), "X-Ray", "2024-05-01", "Heart", "m2", &file);
    assert!(r.local_only);
    assert_eq!(r.date.as_deref(), Some("2024-05-01"));
}

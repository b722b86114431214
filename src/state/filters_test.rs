use super::*;

#[test]
fn default_filters_fetch_both_collections() {
    let filters = FiltersState::default();
    let plan = filters.fetch_plan();
    assert!(plan.prescriptions);
    assert!(plan.reports);
}

#[test]
fn all_value_fetches_both_collections() {
    let filters = FiltersState { doc_type: "all".to_owned(), ..FiltersState::default() };
    let plan = filters.fetch_plan();
    assert!(plan.prescriptions);
    assert!(plan.reports);
}

#[test]
fn prescription_filter_skips_reports_fetch() {
    let filters = FiltersState { doc_type: "Prescription".to_owned(), ..FiltersState::default() };
    let plan = filters.fetch_plan();
    assert!(plan.prescriptions);
    assert!(!plan.reports);
}

#[test]
fn report_filter_skips_prescriptions_fetch() {
    let filters = FiltersState { doc_type: "Report".to_owned(), ..FiltersState::default() };
    let plan = filters.fetch_plan();
    assert!(!plan.prescriptions);
    assert!(plan.reports);
}

#[test]
fn unrecognized_doc_type_fetches_nothing() {
    let filters = FiltersState { doc_type: "Invoice".to_owned(), ..FiltersState::default() };
    let plan = filters.fetch_plan();
    assert!(!plan.prescriptions);
    assert!(!plan.reports);
}

#[test]
fn query_omits_unset_and_all_values() {
    let filters = FiltersState {
        member: "all".to_owned(),
        tag: String::new(),
        ..FiltersState::default()
    };
    assert_eq!(filters.query(None), DocumentQuery::default());
}

#[test]
fn query_carries_member_and_tag() {
    let filters = FiltersState {
        member: "m1".to_owned(),
        tag: "Cardiology".to_owned(),
        ..FiltersState::default()
    };
    let query = filters.query(None);
    assert_eq!(query.member_id.as_deref(), Some("m1"));
    assert_eq!(query.tag.as_deref(), Some("Cardiology"));
    assert_eq!(query.date_range, None);
}

#[test]
fn last_month_quick_filter_expands_to_date_range() {
    let filters = FiltersState {
        quick: QuickFilters { last_month: true, ..QuickFilters::default() },
        ..FiltersState::default()
    };
    let today = CivilDate { year: 2024, month: 3, day: 31 };
    let query = filters.query(Some(today));
    assert_eq!(query.date_range, Some(("2024-02-29".to_owned(), "2024-03-31".to_owned())));
}

#[test]
fn last_month_without_a_clock_adds_no_range() {
    let filters = FiltersState {
        quick: QuickFilters { last_month: true, ..QuickFilters::default() },
        ..FiltersState::default()
    };
    assert_eq!(filters.query(None).date_range, None);
}

#[test]
fn quick_toggles_do_not_change_the_selection_key() {
    let mut filters = FiltersState { member: "m1".to_owned(), ..FiltersState::default() };
    let key = filters.selection_key();
    filters.quick.last_month = true;
    filters.quick.by_type = true;
    assert_eq!(filters.selection_key(), key);
}

#[test]
fn clear_resets_everything() {
    let mut filters = FiltersState {
        doc_type: "Report".to_owned(),
        member: "m1".to_owned(),
        tag: "ENT".to_owned(),
        quick: QuickFilters { last_month: true, by_type: true, by_id: true },
    };
    assert!(filters.is_active());
    filters.clear();
    assert!(!filters.is_active());
    assert_eq!(filters, FiltersState::default());
}

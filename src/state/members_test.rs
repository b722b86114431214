use super::*;

fn member(id: &str, name: &str, relationship: Relationship) -> FamilyMember {
    FamilyMember {
        id: id.to_owned(),
        name: name.to_owned(),
        age: "30".to_owned(),
        gender: "Female".to_owned(),
        relationship,
        local_only: false,
    }
}

fn count_self(members: &[FamilyMember]) -> usize {
    members.iter().filter(|m| m.relationship == Relationship::Myself).count()
}

#[test]
fn ensure_self_prepends_when_missing() {
    let members = ensure_self(vec![member("m1", "Ravi", Relationship::Father)]);
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].id, SELF_MEMBER_ID);
    assert_eq!(count_self(&members), 1);
}

#[test]
fn ensure_self_keeps_backend_entry_by_relationship() {
    let members =
        ensure_self(vec![member("m9", "Asha", Relationship::Myself), member("m1", "Ravi", Relationship::Father)]);
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].id, "m9");
    assert_eq!(count_self(&members), 1);
}

#[test]
fn ensure_self_matches_name_case_insensitively() {
    let members = ensure_self(vec![member("m2", "SELF", Relationship::Other)]);
    assert_eq!(members.len(), 1);
}

#[test]
fn fetched_list_always_has_exactly_one_self() {
    let mut state = MembersState { loading: true, ..MembersState::default() };
    state.apply_fetched(vec![member("m1", "Ravi", Relationship::Father)]);
    assert_eq!(count_self(&state.items), 1);
    assert!(!state.loading);
}

#[test]
fn failed_fetch_falls_back_to_singleton_self() {
    let mut state = MembersState { loading: true, ..MembersState::default() };
    state.apply_fetch_failure();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, SELF_MEMBER_ID);
    assert_eq!(count_self(&state.items), 1);
    assert!(!state.loading);
}

#[test]
fn has_name_is_case_insensitive_and_trims() {
    let mut state = MembersState::default();
    state.apply_fetched(vec![member("m1", "Ravi", Relationship::Father)]);
    assert!(state.has_name("ravi"));
    assert!(state.has_name("  RAVI  "));
    assert!(!state.has_name("Ravina"));
}

#[test]
fn member_name_falls_back_to_raw_id() {
    let mut state = MembersState::default();
    state.apply_fetched(vec![member("m1", "Ravi", Relationship::Father)]);
    assert_eq!(state.member_name("m1"), "Ravi");
    assert_eq!(state.member_name("gone"), "gone");
}

#[test]
fn remove_deletes_only_the_target() {
    let mut state = MembersState::default();
    state.apply_fetched(vec![
        member("m1", "Ravi", Relationship::Father),
        member("m2", "Mira", Relationship::Mother),
    ]);
    state.remove("m1");
    assert!(state.items.iter().all(|m| m.id != "m1"));
    assert!(state.items.iter().any(|m| m.id == "m2"));
}

#[test]
fn local_member_is_tagged_and_trimmed() {
    let record = local_member("local-1712".to_owned(), " Dadi ", "80", "Female", Relationship::Other);
    assert!(record.local_only);
    assert_eq!(record.name, "Dadi");
    assert_eq!(record.id, "local-1712");
}

#[test]
fn local_member_id_carries_local_prefix() {
    assert!(local_member_id().starts_with("local-"));
}

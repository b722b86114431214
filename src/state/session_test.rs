use super::*;

fn sample_user() -> User {
    User {
        id: "u1".to_owned(),
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        profile_pic: None,
        created_at: Some("2024-03-01T10:00:00Z".to_owned()),
    }
}

#[test]
fn default_state_is_checking_and_anonymous() {
    let state = SessionState::default();
    assert!(state.checking);
    assert!(state.user.is_none());
    assert!(!state.logging_in);
    assert!(!state.signing_up);
    assert!(!state.logging_out);
    assert!(!state.updating_profile);
}

#[test]
fn finish_check_stores_identity_and_clears_flag() {
    let mut state = SessionState::default();
    state.finish_check(Some(sample_user()));
    assert!(!state.checking);
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
}

#[test]
fn finish_check_failure_settles_to_anonymous() {
    let mut state = SessionState { user: Some(sample_user()), ..SessionState::default() };
    state.finish_check(None);
    assert!(!state.checking);
    assert!(state.user.is_none());
}

#[test]
fn busy_reflects_each_in_flight_flag() {
    let mut state = SessionState::default();
    state.finish_check(None);
    assert!(!state.busy());

    for set in [
        |s: &mut SessionState| s.logging_in = true,
        |s: &mut SessionState| s.signing_up = true,
        |s: &mut SessionState| s.logging_out = true,
        |s: &mut SessionState| s.updating_profile = true,
    ] {
        let mut flagged = state.clone();
        set(&mut flagged);
        assert!(flagged.busy());
    }
}

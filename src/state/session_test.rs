use super::*;

fn teacher() -> Teacher {
    Teacher {
        id: "1".to_owned(),
        name: "A".to_owned(),
        email: "a@b.com".to_owned(),
        is_verified: true,
        phone: None,
        specialization: None,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_bootstrapping_and_loading() {
    let state = SessionState::default();
    assert!(state.is_bootstrapping());
    assert!(state.is_loading());
    assert!(!state.is_authenticated());
    assert!(state.teacher().is_none());
    assert!(state.error().is_none());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn begin_clears_error_before_raising_pending() {
    let mut state = SessionState::default();
    state.rejected("bad credentials".to_owned());
    state.begin();
    assert!(state.error().is_none());
    assert!(state.is_loading());
}

#[test]
fn authenticated_holds_profile_and_clears_error() {
    let mut state = SessionState::default();
    state.begin();
    state.authenticated(teacher());
    assert!(state.is_authenticated());
    assert_eq!(state.teacher().map(|t| t.id.as_str()), Some("1"));
    assert!(!state.is_loading());
    assert!(state.error().is_none());
}

#[test]
fn rejected_drops_profile_and_surfaces_message() {
    let mut state = SessionState::default();
    state.authenticated(teacher());
    state.rejected("session expired".to_owned());
    assert!(!state.is_authenticated());
    assert!(state.teacher().is_none());
    assert_eq!(state.error(), Some("session expired"));
}

#[test]
fn failed_keeps_authentication_phase() {
    let mut state = SessionState::default();
    state.authenticated(teacher());
    state.begin();
    state.failed("could not send the code".to_owned());
    assert!(state.is_authenticated());
    assert!(!state.is_loading());
    assert_eq!(state.error(), Some("could not send the code"));
}

#[test]
fn settled_only_lowers_pending() {
    let mut state = SessionState::default();
    state.signed_out();
    state.begin();
    state.settled();
    assert!(!state.is_loading());
    assert!(!state.is_authenticated());
}

#[test]
fn signed_out_resets_everything_but_stays_out_of_bootstrapping() {
    let mut state = SessionState::default();
    state.authenticated(teacher());
    state.signed_out();
    assert!(!state.is_authenticated());
    assert!(!state.is_bootstrapping());
    assert!(!state.is_loading());
    assert!(state.error().is_none());
}

#[test]
fn clear_error_is_idempotent() {
    let mut state = SessionState::default();
    state.signed_out();
    let before = state.clone();
    state.clear_error();
    assert_eq!(state, before);
    state.rejected("oops".to_owned());
    state.clear_error();
    state.clear_error();
    assert!(state.error().is_none());
}

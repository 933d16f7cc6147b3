use super::*;

#[test]
fn token_state_default_is_unknown_without_token() {
    let state = TokenState::default();
    assert_eq!(state.valid, TokenValidity::Unknown);
    assert_eq!(state.token, None);
    assert!(!state.is_valid());
}

#[test]
fn from_check_maps_acceptance() {
    assert_eq!(TokenValidity::from_check(true), TokenValidity::Valid);
    assert_eq!(TokenValidity::from_check(false), TokenValidity::Invalid);
}

#[test]
fn resolve_accepted_keeps_token() {
    let mut state = TokenState { token: Some("abc".to_owned()), valid: TokenValidity::Unknown };
    state.resolve(true);
    assert!(state.is_valid());
    assert_eq!(state.token.as_deref(), Some("abc"));
}

#[test]
fn resolve_rejected_drops_token() {
    let mut state = TokenState { token: Some("abc".to_owned()), valid: TokenValidity::Unknown };
    state.resolve(false);
    assert_eq!(state.valid, TokenValidity::Invalid);
    assert_eq!(state.token, None);
}

#[test]
fn sign_in_marks_valid() {
    let mut state = TokenState { token: None, valid: TokenValidity::Invalid };
    state.sign_in("fresh".to_owned());
    assert!(state.is_valid());
    assert_eq!(state.token.as_deref(), Some("fresh"));
}

#[test]
fn sign_out_marks_invalid_from_any_state() {
    for valid in [TokenValidity::Unknown, TokenValidity::Valid, TokenValidity::Invalid] {
        let mut state = TokenState { token: Some("t".to_owned()), valid };
        state.sign_out();
        assert_eq!(state.valid, TokenValidity::Invalid);
        assert_eq!(state.token, None);
    }
}

#[test]
fn resolve_checked_applies_to_current_token() {
    let mut state = TokenState { token: Some("stored".to_owned()), valid: TokenValidity::Unknown };
    assert!(state.resolve_checked("stored", false));
    assert_eq!(state.valid, TokenValidity::Invalid);
    assert_eq!(state.token, None);
}

#[test]
fn late_rejection_does_not_undo_fresh_login() {
    let mut state = TokenState { token: Some("stale".to_owned()), valid: TokenValidity::Unknown };
    state.sign_in("fresh".to_owned());
    assert!(!state.resolve_checked("stale", false));
    assert!(state.is_valid());
    assert_eq!(state.token.as_deref(), Some("fresh"));
}

#[test]
fn late_acceptance_does_not_undo_logout() {
    let mut state = TokenState { token: Some("stale".to_owned()), valid: TokenValidity::Unknown };
    state.sign_out();
    assert!(!state.resolve_checked("stale", true));
    assert_eq!(state.valid, TokenValidity::Invalid);
}

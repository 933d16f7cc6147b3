#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::token::TokenValidity;

#[test]
fn provide_token_state_starts_unknown_and_is_reachable_from_context() {
    let owner = Owner::new();
    owner.with(|| {
        let state = provide_token_state();
        assert_eq!(state.get_untracked().valid, TokenValidity::Unknown);

        let from_context = expect_context::<RwSignal<TokenState>>();
        from_context.update(|s| s.resolve(true));
        assert!(state.get_untracked().is_valid());
    });
}

#[test]
fn install_token_validation_leaves_state_pending_outside_the_browser() {
    let owner = Owner::new();
    owner.with(|| {
        let state = provide_token_state();
        install_token_validation(state);
        assert_eq!(state.get_untracked().valid, TokenValidity::Unknown);
    });
}

#[test]
fn sign_out_invalidates_a_valid_session() {
    let owner = Owner::new();
    owner.with(|| {
        let state = RwSignal::new(TokenState::default());
        state.update(|s| s.sign_in("t-1".to_owned()));
        sign_out(state);
        let after = state.get_untracked();
        assert_eq!(after.valid, TokenValidity::Invalid);
        assert_eq!(after.token, None);
    });
}

#[test]
fn check_result_for_stored_token_is_applied() {
    let owner = Owner::new();
    owner.with(|| {
        let state = RwSignal::new(TokenState { token: Some("stored".to_owned()), valid: TokenValidity::Unknown });
        assert!(apply_check_result(state, "stored", true));
        assert!(state.get_untracked().is_valid());
    });
}

#[test]
fn late_rejection_after_login_keeps_new_session() {
    let owner = Owner::new();
    owner.with(|| {
        let state = RwSignal::new(TokenState { token: Some("stale".to_owned()), valid: TokenValidity::Unknown });
        state.update(|s| s.sign_in("fresh".to_owned()));

        assert!(!apply_check_result(state, "stale", false));
        let after = state.get_untracked();
        assert!(after.is_valid());
        assert_eq!(after.token.as_deref(), Some("fresh"));
    });
}

//! App-wide session token context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route reads `RwSignal<TokenState>` from context. The provider starts
//! in the unknown state (which is also what SSR renders), then in the browser
//! validates the stored token once and settles on valid or invalid.

#[cfg(test)]
#[path = "token_provider_test.rs"]
mod token_provider_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::state::token::TokenState;
use crate::util::token_storage;

/// Create the session signal and provide it to descendants.
pub fn provide_token_state() -> RwSignal<TokenState> {
    let state = RwSignal::new(TokenState::default());
    provide_context(state);
    state
}

/// Resolve the stored token against the server once the app has hydrated.
///
/// No stored token resolves to invalid without a round trip.
pub fn install_token_validation(state: RwSignal<TokenState>) {
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let Some(token) = token_storage::read() else {
                state.update(TokenState::sign_out);
                return;
            };
            state.update(|s| s.token = Some(token.clone()));
            leptos::task::spawn_local(async move {
                let accepted = api::check_token(&token).await;
                if !apply_check_result(state, &token, accepted) {
                    log::debug!("ignoring check result for a replaced session token");
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = state;
    }
}

/// Record the outcome of checking `checked`, unless the session has moved on
/// to another token (fresh login, logout) while the check was in flight.
///
/// Returns whether the result was applied.
pub fn apply_check_result(state: RwSignal<TokenState>, checked: &str, accepted: bool) -> bool {
    let mut applied = false;
    state.update(|s| applied = s.resolve_checked(checked, accepted));
    if applied && !accepted {
        token_storage::clear();
    }
    applied
}

/// End the session locally and revoke it on the server.
pub fn sign_out(state: RwSignal<TokenState>) {
    let token = state.get_untracked().token;
    token_storage::clear();
    state.update(TokenState::sign_out);

    #[cfg(feature = "hydrate")]
    if let Some(token) = token {
        leptos::task::spawn_local(async move {
            api::logout(&token).await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Provides the session signal to `children` and kicks off validation.
#[component]
pub fn TokenProvider(children: Children) -> impl IntoView {
    let state = provide_token_state();
    install_token_validation(state);
    children()
}

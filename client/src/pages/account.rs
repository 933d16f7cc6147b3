//! Account screen: session status and logout.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use leptos::prelude::*;

use crate::components::token_provider;
use crate::state::token::{TokenState, TokenValidity};

pub(crate) fn validity_label(valid: TokenValidity) -> &'static str {
    match valid {
        TokenValidity::Unknown => "Checking session...",
        TokenValidity::Valid => "Signed in",
        TokenValidity::Invalid => "Signed out",
    }
}

#[component]
pub fn AccountPage() -> impl IntoView {
    let token = expect_context::<RwSignal<TokenState>>();

    view! {
        <section class="account-page">
            <h2>"Account"</h2>
            <p class="account-page__status">{move || validity_label(token.get().valid)}</p>
            <button class="btn account-page__logout" on:click=move |_| token_provider::sign_out(token)>
                "Sign out of this browser"
            </button>
        </section>
    }
}

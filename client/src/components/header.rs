//! Top bar of the authenticated layout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hamburger button is the only way to open the navigation drawer on
//! narrow viewports; on wide viewports it is hidden by the stylesheet.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::components::token_provider;
use crate::state::token::TokenState;

/// Accessible label for the drawer toggle button.
pub(crate) fn toggle_label(open: bool) -> &'static str {
    if open { "Close navigation" } else { "Open navigation" }
}

/// Header strip with the drawer toggle, title and logout control.
#[component]
pub fn Header(#[prop(into)] is_menu_open: Signal<bool>, on_toggle: Callback<()>) -> impl IntoView {
    let token = expect_context::<RwSignal<TokenState>>();

    view! {
        <header class="app-header">
            <button
                class="btn app-header__menu-toggle"
                aria-label=move || toggle_label(is_menu_open.get())
                aria-expanded=move || is_menu_open.get().to_string()
                on:click=move |_| on_toggle.run(())
            >
                "☰"
            </button>

            <span class="app-header__title">"MCDash"</span>
            <span class="app-header__spacer"></span>

            <button
                class="btn app-header__logout"
                on:click=move |_| token_provider::sign_out(token)
                title="Logout"
            >
                "Logout"
            </button>
        </header>
    }
}

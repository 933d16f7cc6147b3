//! Default screen inside the authenticated layout.

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

use leptos::prelude::*;

use crate::components::sidebar::NAV_ENTRIES;
use crate::state::token::TokenState;

/// Short, non-secret hint identifying the current session token.
pub(crate) fn token_hint(token: Option<&str>) -> String {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return "none".to_owned();
    };
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 6 {
        return token.to_owned();
    }
    let tail: String = chars[chars.len() - 6..].iter().collect();
    format!("…{tail}")
}

#[component]
pub fn OverviewPage() -> impl IntoView {
    let token = expect_context::<RwSignal<TokenState>>();

    view! {
        <section class="overview-page">
            <h2>"Overview"</h2>
            <p class="overview-page__session">
                "Session: "
                <code>{move || token_hint(token.get().token.as_deref())}</code>
            </p>
            <ul class="overview-page__links">
                {NAV_ENTRIES
                    .iter()
                    .skip(1)
                    .map(|entry| view! { <li><a href=entry.path>{entry.label}</a></li> })
                    .collect_view()}
            </ul>
        </section>
    }
}

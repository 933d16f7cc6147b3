//! Collapsible navigation drawer.
//!
//! ARCHITECTURE
//! ============
//! On wide viewports the drawer is a fixed 240px side panel and the open flag
//! has no visual effect. On narrow viewports it slides in over the content
//! while open, with a backdrop that closes it again.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::components::A;

/// One link in the navigation drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
}

/// Screens reachable from the drawer, in display order.
pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry { label: "Overview", path: "/" },
    NavEntry { label: "Account", path: "/account" },
];

/// CSS class list for the drawer element.
pub(crate) fn drawer_class(open: bool) -> &'static str {
    if open { "sidebar sidebar--open" } else { "sidebar" }
}

/// Navigation drawer sharing its open flag with the header.
#[component]
pub fn Sidebar(#[prop(into)] is_menu_open: Signal<bool>, on_toggle: Callback<()>) -> impl IntoView {
    // Following a link on a narrow viewport should not leave the drawer covering the page.
    let close_if_open = move || {
        if is_menu_open.get_untracked() {
            on_toggle.run(());
        }
    };

    view! {
        <Show when=move || is_menu_open.get()>
            <div class="sidebar__backdrop" on:click=move |_| on_toggle.run(())></div>
        </Show>
        <nav class=move || drawer_class(is_menu_open.get())>
            <div class="sidebar__head">
                <span class="sidebar__brand">"MCDash"</span>
                <button
                    class="btn sidebar__close"
                    aria-label="Close navigation"
                    on:click=move |_| on_toggle.run(())
                >
                    "×"
                </button>
            </div>
            <ul class="sidebar__list">
                {NAV_ENTRIES
                    .iter()
                    .map(|entry| {
                        view! {
                            <li class="sidebar__item" on:click=move |_| close_if_open()>
                                <A href=entry.path>{entry.label}</A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

//! Authenticated root route: access guard plus layout shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected screen is nested under this route. The guard reads the
//! session signal from context and either redirects to `/login`, renders the
//! layout, or renders nothing while the token is still being validated, so
//! neither the login screen nor protected content flashes before the check
//! settles.
//!
//! DESIGN
//! ======
//! The drawer flag is owned by the shell instance and reaches header and
//! sidebar as one read signal plus one toggle callback, shared by both.

#[cfg(test)]
#[path = "root_test.rs"]
mod root_test;

#[cfg(test)]
#[path = "root_render_test.rs"]
mod root_render_test;

use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::state::menu::MenuState;
use crate::state::token::TokenState;
use crate::util::gate::{GateDecision, LOGIN_PATH, decide};

/// Read signal and toggle callback handed to both header and sidebar.
pub(crate) fn menu_bindings(menu: RwSignal<MenuState>) -> (Signal<bool>, Callback<()>) {
    let is_menu_open = Signal::derive(move || menu.get().is_open());
    let on_toggle = Callback::new(move |()| menu.update(MenuState::toggle));
    (is_menu_open, on_toggle)
}

/// Guard decision for the current session signal value.
pub(crate) fn gate_decision(token: RwSignal<TokenState>) -> GateDecision {
    decide(token.get().valid)
}

/// Parent route for every protected screen.
#[component]
pub fn Root() -> impl IntoView {
    let token = expect_context::<RwSignal<TokenState>>();
    // Memoized so token refreshes that keep the same verdict do not rebuild the shell.
    let decision = Memo::new(move |_| gate_decision(token));

    move || match decision.get() {
        GateDecision::Redirect => view! { <Redirect path=LOGIN_PATH/> }.into_any(),
        GateDecision::ShowLayout => view! { <LayoutShell/> }.into_any(),
        GateDecision::ShowNothing => ().into_any(),
    }
}

/// Header strip, side panel and flexible content area.
#[component]
fn LayoutShell() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());
    let (is_menu_open, on_toggle) = menu_bindings(menu);

    view! {
        <div class="app-shell">
            <Header is_menu_open on_toggle/>
            <Sidebar is_menu_open on_toggle/>
            <main class="app-shell__main">
                <Outlet/>
            </main>
        </div>
    }
}

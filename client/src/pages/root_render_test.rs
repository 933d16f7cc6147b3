#![cfg(feature = "ssr")]

use std::sync::{Arc, Mutex};

use leptos_router::components::{ParentRoute, Route, Router, Routes, provide_server_redirect};
use leptos_router::location::RequestUrl;
use leptos_router::StaticSegment;

use super::*;
use crate::state::token::TokenValidity;

struct Rendered {
    html: String,
    redirect: Option<String>,
}

fn render_root_at_home(valid: TokenValidity) -> Rendered {
    let redirect = Arc::new(Mutex::new(None::<String>));
    let owner = Owner::new();
    let html = owner.with(|| {
        provide_context(RequestUrl::new("/"));
        provide_context(RwSignal::new(TokenState { token: Some("abcdef123456".to_owned()), valid }));
        let seen = Arc::clone(&redirect);
        provide_server_redirect(move |path| {
            *seen.lock().unwrap() = Some(path.to_owned());
        });

        view! {
            <Router>
                <Routes fallback=|| "missing">
                    <ParentRoute path=StaticSegment("") view=Root>
                        <Route path=StaticSegment("") view=|| view! { <p class="nested-marker">"nested"</p> }/>
                    </ParentRoute>
                </Routes>
            </Router>
        }
        .to_html()
    });
    let redirect = redirect.lock().unwrap().take();
    Rendered { html, redirect }
}

fn render_chrome_after_toggle() -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RequestUrl::new("/"));
        provide_context(RwSignal::new(TokenState { token: None, valid: TokenValidity::Valid }));
        let (is_menu_open, on_toggle) = menu_bindings(RwSignal::new(MenuState::default()));
        on_toggle.run(());

        view! {
            <Router>
                <Header is_menu_open on_toggle/>
                <Sidebar is_menu_open on_toggle/>
            </Router>
        }
        .to_html()
    })
}

// =============================================================
// Guard output
// =============================================================

#[test]
fn pending_session_renders_no_shell_and_no_redirect() {
    let out = render_root_at_home(TokenValidity::Unknown);
    assert!(!out.html.contains("app-header"));
    assert!(!out.html.contains("sidebar"));
    assert!(!out.html.contains("nested-marker"));
    assert_eq!(out.redirect, None);
}

#[test]
fn valid_session_renders_closed_shell_around_nested_route() {
    let out = render_root_at_home(TokenValidity::Valid);
    assert!(out.html.contains("app-header"));
    assert!(out.html.contains("aria-expanded=\"false\""));
    assert!(out.html.contains("class=\"sidebar\""));
    assert!(!out.html.contains("sidebar--open"));
    assert!(out.html.contains("nested-marker"));
    assert_eq!(out.redirect, None);
}

#[test]
fn invalid_session_redirects_to_login_without_shell() {
    let out = render_root_at_home(TokenValidity::Invalid);
    assert!(!out.html.contains("app-header"));
    assert!(!out.html.contains("nested-marker"));
    assert_eq!(out.redirect.as_deref(), Some("/login"));
}

// =============================================================
// Shared drawer flag
// =============================================================

#[test]
fn one_toggle_opens_drawer_in_header_and_sidebar_together() {
    let html = render_chrome_after_toggle();
    assert!(html.contains("aria-expanded=\"true\""));
    assert!(html.contains("sidebar sidebar--open"));
    assert!(html.contains("sidebar__backdrop"));
}

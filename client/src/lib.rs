//! # client
//!
//! Leptos + WASM frontend for the MCDash web console.
//!
//! The crate holds the routed pages, the authenticated layout shell, shared
//! session state, and the small REST helpers used to validate the session
//! token. It is compiled twice: with `ssr` for server rendering inside the
//! axum binary, and with `hydrate` for the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the client-side app to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

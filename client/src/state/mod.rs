//! Reactive client state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `token` is app-wide session state provided once at the root; `menu` is
//! owned by a single layout shell instance and never provided as context.

pub mod menu;
pub mod token;

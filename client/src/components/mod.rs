//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `token_provider` owns the app-wide session signal. `header` and `sidebar`
//! are the chrome of the authenticated layout; they receive the drawer state
//! as props from the layout shell instead of reading it from context.

pub mod header;
pub mod sidebar;
pub mod token_provider;

//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the REST endpoints the console uses to issue, check and
//! revoke session tokens.

pub mod api;

//! Domain services behind the HTTP handlers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `credentials` checks console logins; `session` issues and validates the
//! bearer tokens the browser keeps in `localStorage`.

pub mod credentials;
pub mod session;

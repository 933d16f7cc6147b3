//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `root` is the parent route: it guards access and frames every nested
//! screen. `login` sits outside the guard. `overview` and `account` render
//! inside the root layout's content slot.

pub mod account;
pub mod login;
pub mod overview;
pub mod root;

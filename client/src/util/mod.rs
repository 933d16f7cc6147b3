//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure decisions
//! from page and component logic to improve reuse and testability.

pub mod gate;
pub mod token_storage;

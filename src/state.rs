//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the loaded configuration and the live session table.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::session::SessionStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub sessions: SessionStore,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let sessions = SessionStore::new(config.session_ttl);
        Self { config: Arc::new(config), sessions }
    }
}

//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::FormularyConfig;
use crate::services::SessionTracker;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Formulary used by the medication list endpoint
    pub formulary: Arc<FormularyConfig>,
    /// Tracker for per-session UI panel state
    pub sessions: SessionTracker,
}

impl AppState {
    /// Create a new application state with the given formulary.
    pub fn new(formulary: FormularyConfig) -> Self {
        Self {
            formulary: Arc::new(formulary),
            sessions: SessionTracker::new(),
        }
    }
}

//! Per-session UI state tracking.
//!
//! This module provides a simple in-memory tracker that stores the
//! side-effects panel state for each frontend session.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::SessionId;
use crate::routes::side_effects::PanelState;
use crate::services::panel;

/// In-memory session tracker.
#[derive(Clone)]
pub struct SessionTracker {
    sessions: Arc<RwLock<HashMap<SessionId, PanelState>>>,
}

impl SessionTracker {
    /// Create a new session tracker.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a new session with the panel hidden and return its ID and
    /// initial state.
    pub fn create_session(&self) -> (SessionId, PanelState) {
        let session_id = SessionId::new(Uuid::new_v4().to_string());
        let state = PanelState::default();
        self.sessions.write().insert(session_id.clone(), state);
        (session_id, state)
    }

    /// Get the panel state for a session.
    pub fn get_panel(&self, session_id: &SessionId) -> Option<PanelState> {
        self.sessions.read().get(session_id).copied()
    }

    /// Toggle the panel for a session, returning the new state.
    pub fn toggle_panel(&self, session_id: &SessionId) -> Option<PanelState> {
        let mut sessions = self.sessions.write();
        let state = sessions.get_mut(session_id)?;
        *state = panel::toggle(*state);
        Some(*state)
    }

    /// Number of live sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.read().len()
    }
}

impl Default for SessionTracker {
    fn default() -> Self {
        Self::new()
    }
}

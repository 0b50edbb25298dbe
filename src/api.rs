//! Public API surface for the backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::age::AgeCategory;
pub use crate::routes::age::AgeGuidance;
pub use crate::routes::dose::DoseResult;
pub use crate::routes::medications::MedicationListData;
pub use crate::routes::side_effects::PanelState;

use serde::{Deserialize, Serialize};

/// Frontend session identifier.
///
/// Issued when a session is created and used to key per-session UI state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new(value: impl Into<String>) -> Self {
        SessionId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

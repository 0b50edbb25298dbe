//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Result DTOs are re-exported from the routes module since they already
//! derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Age check
    AgeCategory, AgeGuidance,
    // Dose
    DoseResult,
    // Medications
    MedicationListData,
    // Side effects panel
    PanelState,
};

/// Request body for the age check.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AgeCheckRequest {
    /// Patient age in whole years; absent when the field was empty or
    /// not a number
    #[serde(default)]
    pub age: Option<i32>,
}

/// Request body for the next-dose calculation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NextDoseRequest {
    /// Last dose time in "HH:mm" form
    #[serde(default)]
    pub last_dose_time: String,
    /// Hours between doses; absent when the field was empty or not a number
    #[serde(default)]
    pub frequency_hours: Option<i64>,
}

/// Response for session creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    /// Session ID keying per-session UI state
    pub session_id: String,
    /// Initial side-effects panel state
    pub side_effects: PanelStateDto,
}

/// Side-effects panel state with the derived button label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelStateDto {
    /// Whether the panel is currently visible
    pub visible: bool,
    /// Label the toggle button should display
    pub button_label: String,
}

impl From<PanelState> for PanelStateDto {
    fn from(state: PanelState) -> Self {
        Self {
            visible: state.visible,
            button_label: state.button_label().to_string(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of medications loaded in the formulary
    pub medications_loaded: usize,
}

//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::{
    AgeCheckRequest, AgeGuidance, CreateSessionResponse, DoseResult, HealthResponse,
    MedicationListData, NextDoseRequest, PanelStateDto,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::SessionId;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the formulary
/// is loaded.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        medications_loaded: state.formulary.medications.len(),
    }))
}

// =============================================================================
// Guidance and Calculation
// =============================================================================

/// POST /v1/age-check
///
/// Classify a patient age and return the dosage guidance message for it.
pub async fn check_age(
    State(_state): State<AppState>,
    Json(request): Json<AgeCheckRequest>,
) -> HandlerResult<AgeGuidance> {
    Ok(Json(services::classify_age(request.age)))
}

/// POST /v1/dose/next
///
/// Compute the next dose time from the last dose time and the dose
/// frequency. Invalid input yields a 200 carrying the soft failure message
/// rather than an error status.
pub async fn next_dose(
    State(_state): State<AppState>,
    Json(request): Json<NextDoseRequest>,
) -> HandlerResult<DoseResult> {
    Ok(Json(services::dose::dose_result(
        &request.last_dose_time,
        request.frequency_hours,
    )))
}

/// GET /v1/medications
///
/// List the formulary's medication names, formatted for display.
pub async fn list_medications(
    State(state): State<AppState>,
) -> HandlerResult<MedicationListData> {
    let medications = services::formulary_names(&state.formulary);
    let total = medications.len();

    Ok(Json(MedicationListData { medications, total }))
}

// =============================================================================
// Session Management
// =============================================================================

/// POST /v1/sessions
///
/// Create a new frontend session holding per-session UI state.
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(axum::http::StatusCode, Json<CreateSessionResponse>), AppError> {
    let (session_id, panel) = state.sessions.create_session();

    Ok((
        axum::http::StatusCode::CREATED,
        Json(CreateSessionResponse {
            session_id: session_id.value().to_string(),
            side_effects: panel.into(),
        }),
    ))
}

/// GET /v1/sessions/{session_id}/side-effects
///
/// Get the current side-effects panel state for a session.
pub async fn get_side_effects(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> HandlerResult<PanelStateDto> {
    let session_id = SessionId::new(session_id);
    let panel = state
        .sessions
        .get_panel(&session_id)
        .ok_or_else(|| AppError::NotFound(format!("Session {} not found", session_id)))?;

    Ok(Json(panel.into()))
}

/// POST /v1/sessions/{session_id}/side-effects/toggle
///
/// Toggle the side-effects panel for a session and return the new state.
pub async fn toggle_side_effects(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> HandlerResult<PanelStateDto> {
    let session_id = SessionId::new(session_id);
    let panel = state
        .sessions
        .toggle_panel(&session_id)
        .ok_or_else(|| AppError::NotFound(format!("Session {} not found", session_id)))?;

    Ok(Json(panel.into()))
}

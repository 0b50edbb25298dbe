//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Guidance and calculation
        .route("/age-check", post(handlers::check_age))
        .route("/dose/next", post(handlers::next_dose))
        .route("/medications", get(handlers::list_medications))
        // Session-scoped UI state
        .route("/sessions", post(handlers::create_session))
        .route(
            "/sessions/{session_id}/side-effects",
            get(handlers::get_side_effects),
        )
        .route(
            "/sessions/{session_id}/side-effects/toggle",
            post(handlers::toggle_side_effects),
        );

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

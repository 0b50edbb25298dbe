//! MedGuide HTTP Server Binary
//!
//! This is the main entry point for the MedGuide REST API server.
//! It loads the formulary, sets up the HTTP router, and starts serving
//! requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the built-in formulary
//! cargo run --bin medguide-server
//!
//! # Run with a custom formulary file
//! MEDGUIDE_FORMULARY=formulary.toml cargo run --bin medguide-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `MEDGUIDE_FORMULARY`: Path to a TOML formulary file (optional)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use medguide::config::FormularyConfig;
use medguide::http::{create_router, AppState};
use medguide::services::reminder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting MedGuide HTTP Server");

    // Load the formulary once and share it across the app
    let formulary = FormularyConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    info!(
        "Formulary loaded with {} medications",
        formulary.medications.len()
    );

    // The reminder countdown the frontend used to print at load time
    for line in reminder::countdown_lines(reminder::COUNTDOWN_START) {
        info!("{}", line);
    }

    // Create application state
    let state = AppState::new(formulary);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("API documentation: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

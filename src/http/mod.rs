//! HTTP server module for the MedGuide backend.
//!
//! This module provides an axum-based HTTP server that exposes the backend
//! as a REST API. It reuses the service layer and DTOs from the core
//! library; handlers only parse requests and serialize responses.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and validation                         │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Dose calculation, guidance, formulary                  │
//! │  - Per-session panel state                                │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod handlers;

pub mod router;

pub mod state;

pub mod error;

pub mod dto;

pub use router::create_router;

pub use state::AppState;

//! # MedGuide Backend
//!
//! Medication guidance service.
//!
//! This crate provides a small Rust backend for a medication-helper frontend,
//! offering age-based dosage guidance, next-dose time calculation, a formatted
//! medication formulary, and per-session UI panel state. The backend exposes a
//! REST API via Axum for the frontend.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Consolidated Data Transfer Objects (DTOs) for API responses
//! - [`models`]: Domain types for wall-clock times and dose intervals
//! - [`services`]: Business logic (dose calculation, guidance, formulary)
//! - [`routes`]: Route-specific data types
//! - [`config`]: Formulary configuration
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod config;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

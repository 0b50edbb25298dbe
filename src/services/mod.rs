//! Service layer for business logic.
//!
//! This module contains the service layer that sits between the domain
//! models and the HTTP handlers. Services implement the core calculations
//! and hold the only mutable state in the process (per-session UI state).

pub mod dose;

pub mod formulary;

pub mod guidance;

pub mod panel;

pub mod reminder;
pub mod session_tracker;

pub use dose::{dose_result, next_dose, next_dose_message};
pub use formulary::{format_medication_name, formulary_names};
pub use guidance::classify_age;
pub use panel::toggle;
pub use session_tracker::SessionTracker;

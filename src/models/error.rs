//! Invalid-input conditions for the core calculations.

use thiserror::Error;

/// The single error taxonomy of the service: input that cannot be
/// interpreted. Nothing here is fatal; callers either surface the message
/// or degrade to a fixed display string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Last-dose time field was empty.
    #[error("last dose time is missing")]
    MissingTime,

    /// Last-dose time was not a valid "HH:mm" wall-clock time.
    #[error("'{0}' is not a valid HH:mm time")]
    MalformedTime(String),

    /// Frequency field was empty or did not parse as a number.
    #[error("dose frequency is missing or not a number")]
    MissingFrequency,

    /// Frequency parsed, but to a negative number of hours.
    #[error("dose frequency cannot be negative, got {0}")]
    NegativeFrequency(i64),
}

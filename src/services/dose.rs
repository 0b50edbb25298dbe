//! Next-dose time calculation service.
//!
//! The typed core is [`next_dose`]; [`next_dose_message`] wraps it with the
//! soft validation policy the frontend expects: invalid input never raises,
//! it degrades to a fixed display string.

use crate::models::{DoseInterval, InputError, TimeOfDay};
use crate::routes::dose::DoseResult;

/// Literal result returned when the inputs cannot be interpreted.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input.";

/// Compute the next dose time of day from the last dose and the interval
/// between doses. Wraps past midnight; only the time of day is reported.
pub fn next_dose(last: TimeOfDay, every: DoseInterval) -> TimeOfDay {
    last.add_hours(every.hours())
}

/// Validate the raw field values as they arrive from the frontend.
///
/// `frequency_hours` is `None` when the frequency field was empty or did
/// not parse as a number on the client side.
pub fn parse_dose_inputs(
    last_dose_time: &str,
    frequency_hours: Option<i64>,
) -> Result<(TimeOfDay, DoseInterval), InputError> {
    let last = TimeOfDay::parse(last_dose_time)?;
    let every = frequency_hours
        .ok_or(InputError::MissingFrequency)
        .and_then(DoseInterval::new)?;
    Ok((last, every))
}

/// Compute the full result the frontend renders: the display message plus
/// the bare "HH:mm" time when the inputs were valid.
pub fn dose_result(last_dose_time: &str, frequency_hours: Option<i64>) -> DoseResult {
    match parse_dose_inputs(last_dose_time, frequency_hours) {
        Ok((last, every)) => {
            let next = next_dose(last, every);
            DoseResult {
                message: format!("Your next dose is at {}.", next),
                next_dose_time: Some(next.to_string()),
            }
        }
        Err(_) => DoseResult {
            message: INVALID_INPUT_MESSAGE.to_string(),
            next_dose_time: None,
        },
    }
}

/// Compute the next dose and phrase it for display.
///
/// Returns `"Your next dose is at HH:mm."` on success and
/// [`INVALID_INPUT_MESSAGE`] when either field is unusable.
pub fn next_dose_message(last_dose_time: &str, frequency_hours: Option<i64>) -> String {
    dose_result(last_dose_time, frequency_hours).message
}

//! Edge-case coverage for the calculation and formatting surface.

use medguide::models::{DoseInterval, TimeOfDay};
use medguide::services::dose::{next_dose, next_dose_message, INVALID_INPUT_MESSAGE};
use medguide::services::format_medication_name;
use medguide::services::guidance::{classify_age, INVALID_AGE_MESSAGE};
use medguide::routes::age::AgeCategory;

#[test]
fn test_zero_frequency_returns_same_time() {
    let message = next_dose_message("09:45", Some(0));
    assert_eq!(message, "Your next dose is at 09:45.");
}

#[test]
fn test_midnight_input() {
    let message = next_dose_message("00:00", Some(12));
    assert_eq!(message, "Your next dose is at 12:00.");
}

#[test]
fn test_frequency_spanning_multiple_days() {
    // 36 hours from 10:00 lands at 22:00 with the days discarded
    let message = next_dose_message("10:00", Some(36));
    assert_eq!(message, "Your next dose is at 22:00.");
}

#[test]
fn test_last_minute_of_day() {
    let last = TimeOfDay::parse("23:59").unwrap();
    let next = next_dose(last, DoseInterval::new(1).unwrap());
    assert_eq!(next.to_string(), "00:59");
}

#[test]
fn test_whitespace_time_is_invalid() {
    assert_eq!(next_dose_message(" 08:00", Some(4)), INVALID_INPUT_MESSAGE);
}

#[test]
fn test_out_of_range_fields_are_invalid() {
    assert_eq!(next_dose_message("24:00", Some(4)), INVALID_INPUT_MESSAGE);
    assert_eq!(next_dose_message("12:60", Some(4)), INVALID_INPUT_MESSAGE);
}

#[test]
fn test_enormous_frequency_still_wraps() {
    // i64::MAX hours is 7 hours past a whole number of days
    let message = next_dose_message("08:00", Some(i64::MAX));
    assert_eq!(message, "Your next dose is at 15:00.");
}

#[test]
fn test_negative_frequency_is_invalid() {
    assert_eq!(next_dose_message("08:00", Some(-1)), INVALID_INPUT_MESSAGE);
}

#[test]
fn test_name_formatter_handles_unicode() {
    // Multi-byte first characters must not be split
    assert_eq!(format_medication_name("ébastine"), "Ébastine");
}

#[test]
fn test_name_formatter_basic_cases() {
    assert_eq!(format_medication_name("IBUPROFEN"), "Ibuprofen");
    assert_eq!(format_medication_name(""), "");
    assert_eq!(
        format_medication_name("Ibuprofen"),
        format_medication_name(&format_medication_name("Ibuprofen"))
    );
}

#[test]
fn test_extreme_ages() {
    assert_eq!(classify_age(Some(i32::MIN)).category, AgeCategory::Invalid);
    assert_eq!(classify_age(Some(i32::MAX)).category, AgeCategory::Senior);
    assert_eq!(classify_age(None).message, INVALID_AGE_MESSAGE);
}

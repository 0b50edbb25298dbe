//! Property tests for the dose-time arithmetic.

use proptest::prelude::*;

use medguide::models::{DoseInterval, TimeOfDay};
use medguide::services::dose::{next_dose, next_dose_message};
use medguide::services::format_medication_name;

proptest! {
    /// Any valid time plus any non-negative whole-hour interval yields a
    /// normalized time of day.
    #[test]
    fn next_dose_stays_in_range(
        hour in 0u32..24,
        minute in 0u32..60,
        frequency in 0i64..=240,
    ) {
        let last = TimeOfDay::new(hour, minute).unwrap();
        let every = DoseInterval::new(frequency).unwrap();
        let next = next_dose(last, every);

        prop_assert!(next.hour() <= 23);
        prop_assert!(next.minute() <= 59);
        // Whole-hour intervals never move the minute hand
        prop_assert_eq!(next.minute(), minute);
    }

    /// The message layer always embeds a zero-padded "HH:mm" time for
    /// valid inputs.
    #[test]
    fn message_embeds_well_formed_time(
        hour in 0u32..24,
        minute in 0u32..60,
        frequency in 0i64..=240,
    ) {
        let last = format!("{:02}:{:02}", hour, minute);
        let message = next_dose_message(&last, Some(frequency));

        prop_assert!(message.starts_with("Your next dose is at "));
        prop_assert!(message.ends_with('.'));

        let time_part = message
            .trim_start_matches("Your next dose is at ")
            .trim_end_matches('.');
        let parsed = TimeOfDay::parse(time_part);
        prop_assert!(parsed.is_ok(), "'{}' is not a valid HH:mm time", time_part);
    }

    /// Adding a whole number of days lands back on the starting time.
    #[test]
    fn full_day_intervals_are_identity(
        hour in 0u32..24,
        minute in 0u32..60,
        days in 1i64..=10,
    ) {
        let last = TimeOfDay::new(hour, minute).unwrap();
        let every = DoseInterval::new(days * 24).unwrap();
        prop_assert_eq!(next_dose(last, every), last);
    }

    /// Formatting a medication name is idempotent for ASCII names.
    #[test]
    fn name_formatting_is_idempotent(name in "[a-zA-Z]{0,24}") {
        let once = format_medication_name(&name);
        let twice = format_medication_name(&once);
        prop_assert_eq!(once, twice);
    }
}

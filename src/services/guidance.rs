//! Age-based dosage guidance service.

use crate::routes::age::{AgeCategory, AgeGuidance};

pub const INVALID_AGE_MESSAGE: &str = "Please enter a valid age.";
pub const PEDIATRIC_MESSAGE: &str =
    "⚠️ For patients under 18, please consult a pediatrician.";
pub const SENIOR_MESSAGE: &str =
    "⚠️ For patients over 65, dosage may need adjustment. Consult a doctor.";
pub const STANDARD_MESSAGE: &str =
    "✅ Standard dosage guidelines likely apply. Always follow package instructions.";

/// Classify a patient age and select the guidance message for it.
///
/// `None` models an age field that was empty or did not parse as a number.
/// Non-positive ages are treated the same way.
pub fn classify_age(age: Option<i32>) -> AgeGuidance {
    let (category, message) = match age {
        None => (AgeCategory::Invalid, INVALID_AGE_MESSAGE),
        Some(age) if age <= 0 => (AgeCategory::Invalid, INVALID_AGE_MESSAGE),
        Some(age) if age < 18 => (AgeCategory::Pediatric, PEDIATRIC_MESSAGE),
        Some(age) if age >= 65 => (AgeCategory::Senior, SENIOR_MESSAGE),
        Some(_) => (AgeCategory::Standard, STANDARD_MESSAGE),
    };

    AgeGuidance {
        category,
        message: message.to_string(),
    }
}

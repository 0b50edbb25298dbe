use serde::{Deserialize, Serialize};

/// Age bracket used to select a guidance message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeCategory {
    /// Age missing or non-positive.
    Invalid,
    /// Under 18.
    Pediatric,
    /// 18 to 64 inclusive.
    Standard,
    /// 65 and above.
    Senior,
}

/// Dosage guidance for a patient age.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeGuidance {
    pub category: AgeCategory,
    /// Sentence ready for direct display in the frontend.
    pub message: String,
}

/// Age check route function name constant
pub const CHECK_AGE: &str = "check_age";

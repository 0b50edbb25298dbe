use serde::{Deserialize, Serialize};

/// Next-dose calculation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoseResult {
    /// Sentence ready for direct display, including the soft failure text
    /// when the inputs could not be interpreted.
    pub message: String,
    /// Computed "HH:mm" time of day; present only when the inputs were valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_dose_time: Option<String>,
}

/// Next dose route function name constant
pub const GET_NEXT_DOSE: &str = "get_next_dose";

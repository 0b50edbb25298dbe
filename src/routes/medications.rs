use serde::{Deserialize, Serialize};

/// Formatted medication list for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicationListData {
    /// Display-formatted medication names, in formulary order.
    pub medications: Vec<String>,
    /// Total count
    pub total: usize,
}

/// Medication list route function name constant
pub const LIST_MEDICATIONS: &str = "list_medications";

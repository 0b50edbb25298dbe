//! Medication name formatting and formulary listing.

use crate::config::FormularyConfig;

/// Normalize a medication name for display: first letter uppercased, the
/// rest lowercased. Empty input stays empty.
pub fn format_medication_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
    }
}

/// Display-formatted medication names from the formulary, in order.
pub fn formulary_names(config: &FormularyConfig) -> Vec<String> {
    config
        .medications
        .iter()
        .map(|name| format_medication_name(name))
        .collect()
}

//! Formulary configuration and environment variable handling.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Medications shipped as the built-in formulary, used when no
/// configuration file is provided. Stored unformatted; the formulary
/// service formats names for display.
pub const DEFAULT_MEDICATIONS: [&str; 5] = [
    "paracetamol",
    "ibuprofen",
    "aspirin",
    "loratadine",
    "amoxicillin",
];

/// Formulary configuration loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormularyConfig {
    /// Medication names, in display order.
    pub medications: Vec<String>,
}

impl Default for FormularyConfig {
    fn default() -> Self {
        Self {
            medications: DEFAULT_MEDICATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FormularyConfig {
    /// Create the formulary configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `MEDGUIDE_FORMULARY` (optional): path to a TOML file with a
    ///   `medications` array. When unset, the built-in formulary is used.
    ///
    /// # Errors
    /// Returns an error if the variable is set but the file cannot be read
    /// or parsed.
    pub fn from_env() -> Result<Self, String> {
        match env::var("MEDGUIDE_FORMULARY") {
            Ok(path) => Self::from_path(Path::new(&path)),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Load the formulary from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, String> {
        let raw = fs::read_to_string(path)
            .map_err(|e| format!("cannot read formulary file {}: {}", path.display(), e))?;
        toml::from_str(&raw)
            .map_err(|e| format!("invalid formulary file {}: {}", path.display(), e))
    }
}

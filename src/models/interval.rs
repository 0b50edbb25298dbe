use serde::*;

use super::error::InputError;

/// Hours between successive medication doses.
///
/// Always a non-negative whole number of hours; negative values are rejected
/// at construction so downstream arithmetic never sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DoseInterval(i64);

impl DoseInterval {
    /// Create a new dose interval from a whole number of hours.
    pub fn new(hours: i64) -> Result<Self, InputError> {
        if hours < 0 {
            return Err(InputError::NegativeFrequency(hours));
        }
        Ok(Self(hours))
    }

    /// Interval length in hours.
    pub fn hours(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for DoseInterval {
    type Error = InputError;

    fn try_from(hours: i64) -> Result<Self, Self::Error> {
        DoseInterval::new(hours)
    }
}

//! Rule-validator limits.

use serde::{Deserialize, Serialize};

/// Request validation limits for the shipped rule validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorLimits {
    /// Maximum destinations accepted per envelope (0 = unlimited).
    pub max_destinations: usize,
}

impl Default for ValidatorLimits {
    fn default() -> Self {
        Self {
            max_destinations: 500,
        }
    }
}

impl ValidatorLimits {
    /// Limits with no envelope-size cap.
    pub fn unlimited() -> Self {
        Self {
            max_destinations: 0,
        }
    }
}

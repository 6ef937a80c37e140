//! Rollback configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default number of `SCHEDULE`/`CANCEL` records undone per rollback.
const fn default_window() -> usize {
    3
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RollbackConfig {
    /// How many of the most recent `SCHEDULE`/`CANCEL` records one
    /// rollback inspects.
    #[serde(default = "default_window")]
    pub window: usize,
}

impl RollbackConfig {
    /// Reject a window that could never undo anything.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when `window` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window == 0 {
            return Err(ConfigError::InvalidValue {
                field: "rollback.window".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for RollbackConfig {
    fn default() -> Self {
        Self {
            window: default_window(),
        }
    }
}

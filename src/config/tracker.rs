//! Session store configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::session::DEFAULT_CAPACITY;

/// Upper bound accepted for the store capacity.
pub const MAX_CAPACITY: usize = 100;

/// Session store configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrackerConfig {
    /// Maximum number of sessions per run
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl TrackerConfig {
    /// Validate tracker configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.capacity == 0 || self.capacity > MAX_CAPACITY {
            return Err(ValidationError::InvalidCapacity {
                max: MAX_CAPACITY,
                actual: self.capacity,
            });
        }
        Ok(())
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

//! Session store error types.

use thiserror::Error;

/// Reasons a session is refused by the store.
///
/// A refused insertion leaves the store untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("You have reached the maximum number of sessions ({capacity}).")]
    CapacityExceeded { capacity: usize },

    #[error("Session {field} cannot be negative")]
    InvalidNumericField { field: &'static str },
}

impl StoreError {
    pub fn capacity_exceeded(capacity: usize) -> Self {
        StoreError::CapacityExceeded { capacity }
    }

    pub fn invalid_numeric_field(field: &'static str) -> Self {
        StoreError::InvalidNumericField { field }
    }
}

//! Application-level errors.

use thiserror::Error;

use crate::domain::session::StoreError;
use crate::ports::StorageError;

/// Errors surfaced by [`Tracker`](super::Tracker) operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    /// The store refused a session.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The report could not be persisted.
    #[error("Failed to save report: {0}")]
    Storage(#[from] StorageError),
}

impl TrackerError {
    /// Returns true when the store is already at capacity.
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, TrackerError::Store(StoreError::CapacityExceeded { .. }))
    }
}

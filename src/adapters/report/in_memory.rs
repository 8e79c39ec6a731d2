//! In-memory report storage for testing.

use std::cell::RefCell;

use super::checksum::compute_checksum;
use crate::ports::{ReportStorage, SavedReport, StorageError};

const IN_MEMORY_LOCATION: &str = "memory://report";

/// Report storage that keeps the last written report in memory.
///
/// Counts writes so tests can assert that a save happened exactly once.
#[derive(Debug, Default)]
pub struct InMemoryReportStorage {
    content: RefCell<Option<String>>,
    writes: RefCell<usize>,
}

impl InMemoryReportStorage {
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    /// Returns the last written report, if any.
    pub fn content(&self) -> Option<String> {
        self.content.borrow().clone()
    }

    /// Returns how many times a report was written.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl ReportStorage for InMemoryReportStorage {
    fn write(&self, content: &str) -> Result<SavedReport, StorageError> {
        *self.content.borrow_mut() = Some(content.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(SavedReport::new(
            IN_MEMORY_LOCATION,
            content.len() as u64,
            compute_checksum(content),
        ))
    }

    fn read(&self) -> Result<String, StorageError> {
        self.content
            .borrow()
            .clone()
            .ok_or_else(|| StorageError::not_found(IN_MEMORY_LOCATION))
    }

    fn location(&self) -> String {
        IN_MEMORY_LOCATION.to_string()
    }
}

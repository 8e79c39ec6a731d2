//! Local Filesystem Report Storage - Implementation of ReportStorage.
//!
//! Writes the report to a single plain-text file, replacing it on every
//! save.

use std::fs;
use std::io::Write;

use super::checksum::compute_checksum;
use crate::ports::{ReportPath, ReportStorage, SavedReport, StorageError};

/// Default report file name.
pub const DEFAULT_REPORT_FILE: &str = "report.txt";

/// Report storage backed by one file on the local filesystem.
///
/// # Atomic Writes
///
/// Uses a write-to-temp-then-rename pattern:
/// 1. Write content to `{path}.tmp`
/// 2. Sync to disk
/// 3. Rename over `{path}`
///
/// Readers therefore see either the previous report or the new one, never
/// a mix.
///
/// # Usage
///
/// ```rust,ignore
/// let storage = LocalFileReportStorage::new("report.txt");
/// let saved = storage.write(&report_text)?;
/// println!("Report saved to {}", saved.location);
/// ```
#[derive(Debug, Clone)]
pub struct LocalFileReportStorage {
    path: ReportPath,
}

impl LocalFileReportStorage {
    /// Creates storage writing to the given path.
    pub fn new(path: impl Into<ReportPath>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the report path.
    pub fn path(&self) -> &ReportPath {
        &self.path
    }

    /// Ensures the parent directory exists.
    fn ensure_parent_dir(&self) -> Result<(), StorageError> {
        match self.path.as_path().parent() {
            Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
                .map_err(|e| StorageError::from_io(dir, "create directory", e)),
            _ => Ok(()),
        }
    }
}

impl Default for LocalFileReportStorage {
    fn default() -> Self {
        Self::new(DEFAULT_REPORT_FILE)
    }
}

impl ReportStorage for LocalFileReportStorage {
    fn write(&self, content: &str) -> Result<SavedReport, StorageError> {
        self.ensure_parent_dir()?;

        let temp_path = self.path.temp_path();
        let final_path = self.path.as_path();

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StorageError::from_io(&temp_path, "create", e))?;
            file.write_all(content.as_bytes())
                .map_err(|e| StorageError::from_io(&temp_path, "write", e))?;
            file.sync_all()
                .map_err(|e| StorageError::from_io(&temp_path, "sync", e))?;
        }

        if let Err(e) = fs::rename(&temp_path, final_path) {
            let _ = fs::remove_file(&temp_path);
            return Err(StorageError::from_io(final_path, "replace", e));
        }

        let saved = SavedReport::new(
            self.path.to_string_lossy(),
            content.len() as u64,
            compute_checksum(content),
        );
        tracing::info!(
            path = %saved.location,
            size_bytes = saved.size_bytes,
            checksum = %saved.checksum,
            "Report written"
        );
        Ok(saved)
    }

    fn read(&self) -> Result<String, StorageError> {
        let path = self.path.as_path();
        fs::read_to_string(path).map_err(|e| StorageError::from_io(path, "read", e))
    }

    fn location(&self) -> String {
        self.path.to_string_lossy()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

//! Report Storage Port - Persistence of the rendered report.
//!
//! The report is rendered fully in memory first, then handed to a storage
//! adapter in one call. Each save replaces the previous report entirely.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Port for persisting the single report artifact.
///
/// # Contract
///
/// Implementations must:
/// - Replace any previous report in full (no append, no versioning)
/// - Never leave a partially written report behind
/// - Release every resource before `write` returns
///
/// # Usage
///
/// ```rust,ignore
/// let storage: &dyn ReportStorage = get_storage();
///
/// let saved = storage.write("Embroidery Report for Ada\n...")?;
/// println!("Report saved to {}", saved.location);
/// ```
pub trait ReportStorage {
    /// Writes the report, replacing any earlier one.
    ///
    /// # Returns
    ///
    /// Where the report was written, its size and checksum.
    fn write(&self, content: &str) -> Result<SavedReport, StorageError>;

    /// Reads the current report back.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if no report has been written.
    fn read(&self) -> Result<String, StorageError>;

    /// Describes where reports are written, for user-facing messages.
    fn location(&self) -> String;
}

/// Receipt for a completed report write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedReport {
    /// Where the report now lives.
    pub location: String,

    /// Size of the written content in bytes.
    pub size_bytes: u64,

    /// Hex-encoded SHA-256 of the written content.
    pub checksum: String,
}

impl SavedReport {
    pub fn new(location: impl Into<String>, size_bytes: u64, checksum: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            size_bytes,
            checksum: checksum.into(),
        }
    }
}

/// File-system location of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPath(PathBuf);

impl ReportPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Returns the path as a string (lossy conversion for non-UTF8 paths).
    pub fn to_string_lossy(&self) -> String {
        self.0.to_string_lossy().to_string()
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Returns the sibling path used while a write is in progress.
    pub fn temp_path(&self) -> PathBuf {
        let mut name = self
            .0
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.0.with_file_name(name)
    }
}

impl std::fmt::Display for ReportPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_lossy())
    }
}

impl From<&str> for ReportPath {
    fn from(s: &str) -> Self {
        Self::new(PathBuf::from(s))
    }
}

impl From<PathBuf> for ReportPath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

/// Errors that can occur while persisting a report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No report exists yet.
    #[error("Report not found: {path}")]
    NotFound { path: String },

    /// Permission denied accessing the report.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    /// IO error during a report operation.
    #[error("IO error: {message}")]
    Io { message: String },
}

impl StorageError {
    /// Creates a not found error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Creates a permission denied error.
    pub fn permission_denied(path: impl Into<String>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Maps an `std::io::Error` for the given path.
    pub fn from_io(path: &Path, action: &str, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::not_found(path.display().to_string()),
            std::io::ErrorKind::PermissionDenied => {
                Self::permission_denied(path.display().to_string())
            }
            _ => Self::io(format!("Failed to {} {}: {}", action, path.display(), err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_appends_suffix() {
        let path = ReportPath::from("out/report.txt");
        assert_eq!(path.temp_path(), PathBuf::from("out/report.txt.tmp"));
    }

    #[test]
    fn report_path_displays_path() {
        assert_eq!(ReportPath::from("report.txt").to_string(), "report.txt");
    }

    #[test]
    fn from_io_maps_error_kinds() {
        let path = Path::new("report.txt");

        let err = StorageError::from_io(
            path,
            "read",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err, StorageError::not_found("report.txt"));

        let err = StorageError::from_io(
            path,
            "write",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope"),
        );
        assert_eq!(err, StorageError::permission_denied("report.txt"));

        let err = StorageError::from_io(
            path,
            "write",
            std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        );
        assert_eq!(err, StorageError::io("Failed to write report.txt: disk full"));
    }

    #[test]
    fn storage_error_displays_correctly() {
        assert_eq!(
            StorageError::not_found("report.txt").to_string(),
            "Report not found: report.txt"
        );
        assert_eq!(StorageError::io("boom").to_string(), "IO error: boom");
    }
}

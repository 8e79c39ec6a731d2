//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ReportStorage` - Persistence of the rendered weekly report

mod report_storage;

pub use report_storage::{ReportPath, ReportStorage, SavedReport, StorageError};

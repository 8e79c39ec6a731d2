//! Report adapters - Implementations of the ReportStorage port.
//!
//! - `LocalFileReportStorage` - Writes the report to a local text file
//! - `InMemoryReportStorage` - Keeps the report in memory (tests)

mod checksum;
mod in_memory;
mod local_file_storage;

pub use checksum::compute_checksum;
pub use in_memory::InMemoryReportStorage;
pub use local_file_storage::{LocalFileReportStorage, DEFAULT_REPORT_FILE};

//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `report` - Report storage implementations (local file, in-memory)

pub mod report;

pub use report::{InMemoryReportStorage, LocalFileReportStorage};

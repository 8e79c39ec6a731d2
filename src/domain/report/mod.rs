//! Report module - Fixed-width text rendering of the session store.
//!
//! Rendering is a pure transform from sessions to text; persisting the text
//! is the job of a [`ReportStorage`](crate::ports::ReportStorage) adapter.

mod formatter;
mod parser;

pub use formatter::{
    ReportFormatter, COLUMN_TITLES, COST_WIDTH, DESCRIPTION_WIDTH, DIFFICULTY_WIDTH, HOURS_WIDTH,
};
pub use parser::{ParsedReport, ReportParseError, ReportParser, ReportRow};

//! Application layer - the tracker service.
//!
//! Orchestrates the session store, the analysis services, the report
//! formatter and the report storage port on behalf of one user.

mod errors;
mod tracker;

pub use errors::TrackerError;
pub use tracker::Tracker;

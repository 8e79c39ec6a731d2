//! Domain layer containing the tracker's business rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (difficulty scale, validation errors)
//! - `session` - Session records and the fixed-capacity session store
//! - `analysis` - Pure aggregate and recommendation services
//! - `report` - Fixed-width report rendering and parsing
//! - `project` - Practice and commission project records

pub mod analysis;
pub mod foundation;
pub mod project;
pub mod report;
pub mod session;

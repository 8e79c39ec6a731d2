//! Foundation module - Shared domain primitives.
//!
//! Contains the difficulty scale and validation error types that form the
//! vocabulary of the embroidery tracker domain.

mod difficulty;
mod errors;

pub use difficulty::{label_for_ordinal, DifficultyLevel};
pub use errors::ValidationError;

//! Analysis Module - Pure domain services over the session store.
//!
//! # Components
//!
//! - `Aggregator` - Totals, average hours, hardest difficulty
//! - `RecommendationEngine` - Goal/budget classification of weekly totals
//!
//! All functions are pure and read the store through a shared borrow.

mod aggregator;
mod recommendation;

pub use aggregator::{Aggregator, SessionSummary};
pub use recommendation::{Recommendation, RecommendationEngine, DEFAULT_MAX_COST};

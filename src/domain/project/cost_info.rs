//! CostInfo value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Money spent on a project, in the user's currency.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct CostInfo(f64);

impl CostInfo {
    /// No cost.
    pub const FREE: Self = Self(0.0);

    pub fn new(cost: f64) -> Self {
        Self(cost)
    }

    pub fn cost(&self) -> f64 {
        self.0
    }

    pub fn set_cost(&mut self, cost: f64) {
        self.0 = cost;
    }

    /// Returns true when the cost is exactly zero.
    pub fn is_free(&self) -> bool {
        self.0 == 0.0
    }

    /// Renders the cost as `$` followed by two decimals.
    pub fn formatted(&self) -> String {
        format!("${:.2}", self.0)
    }
}

impl fmt::Display for CostInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

//! Recommendation configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::DEFAULT_MAX_COST;

/// Recommendation thresholds
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecommendationConfig {
    /// Weekly thread spending counted as "on budget"
    #[serde(default = "default_max_cost")]
    pub max_cost: f64,

    /// Weekly goal offered when the user accepts the default
    #[serde(default = "default_goal_hours")]
    pub goal_hours: f64,
}

impl RecommendationConfig {
    /// Validate recommendation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.max_cost.is_finite() || self.max_cost < 0.0 {
            return Err(ValidationError::InvalidMaxCost(self.max_cost));
        }
        if !self.goal_hours.is_finite() || self.goal_hours <= 0.0 {
            return Err(ValidationError::InvalidGoalHours(self.goal_hours));
        }
        Ok(())
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            max_cost: default_max_cost(),
            goal_hours: default_goal_hours(),
        }
    }
}

fn default_max_cost() -> f64 {
    DEFAULT_MAX_COST
}

fn default_goal_hours() -> f64 {
    5.0
}

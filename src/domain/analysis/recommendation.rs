//! Recommendation Engine - Classifies weekly totals against goal and budget.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Aggregator;
use crate::domain::session::SessionStore;

/// Default spending ceiling for a week of sessions.
pub const DEFAULT_MAX_COST: f64 = 50.0;

/// Outcome of comparing a week's totals with the goal and budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Goal reached without going over budget.
    MetGoalOnBudget,
    /// Goal missed while spending more than the budget.
    OverBudgetUnderGoal,
    /// Every other combination.
    SteadyProgress,
}

impl Recommendation {
    /// Returns the message shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::MetGoalOnBudget => {
                "Great job! You met your weekly goal AND stayed on budget."
            }
            Recommendation::OverBudgetUnderGoal => {
                "You may want shorter sessions or lower-cost projects."
            }
            Recommendation::SteadyProgress => "You are making steady progress. Keep going!",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Classifies totals against a weekly goal and a cost ceiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationEngine {
    max_cost: f64,
}

impl RecommendationEngine {
    /// Creates an engine with the given cost ceiling.
    pub fn new(max_cost: f64) -> Self {
        Self { max_cost }
    }

    /// Returns the cost ceiling.
    pub fn max_cost(&self) -> f64 {
        self.max_cost
    }

    /// Classifies totals using this engine's ceiling.
    pub fn classify(&self, total_hours: f64, total_cost: f64, weekly_goal_hours: f64) -> Recommendation {
        Self::classify_with(total_hours, total_cost, weekly_goal_hours, self.max_cost)
    }

    /// Classifies totals against an explicit ceiling.
    ///
    /// Branches are checked in order:
    /// 1. `hours >= goal && cost <= max_cost` -> `MetGoalOnBudget`
    /// 2. `hours < goal && cost > max_cost` -> `OverBudgetUnderGoal`
    /// 3. anything else -> `SteadyProgress`
    ///
    /// Hitting the goal exactly counts as met; spending exactly the ceiling
    /// counts as on budget.
    pub fn classify_with(
        total_hours: f64,
        total_cost: f64,
        weekly_goal_hours: f64,
        max_cost: f64,
    ) -> Recommendation {
        if total_hours >= weekly_goal_hours && total_cost <= max_cost {
            Recommendation::MetGoalOnBudget
        } else if total_hours < weekly_goal_hours && total_cost > max_cost {
            Recommendation::OverBudgetUnderGoal
        } else {
            Recommendation::SteadyProgress
        }
    }

    /// Aggregates the store and classifies its totals.
    pub fn recommend(&self, store: &SessionStore, weekly_goal_hours: f64) -> Recommendation {
        self.classify(
            Aggregator::total_hours(store),
            Aggregator::total_cost(store),
            weekly_goal_hours,
        )
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_COST)
    }
}

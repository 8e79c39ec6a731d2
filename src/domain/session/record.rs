//! Session value record.
//!
//! A session is one logged stretch of embroidery work. Sessions carry no
//! identity beyond their position in a [`SessionStore`](super::SessionStore).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DifficultyLevel;

/// One logged embroidery activity.
///
/// Construction performs no validation; the store enforces its own
/// non-negative rule on insertion, and interactive capture applies the
/// stricter rules in [`capture`](super::capture).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Session {
    /// What was stitched.
    description: String,

    /// Time spent, in hours.
    hours: f64,

    /// Thread cost for the session.
    cost: f64,

    /// How demanding the session was.
    difficulty: DifficultyLevel,
}

impl Session {
    /// Creates a session from its parts.
    pub fn new(
        description: impl Into<String>,
        hours: f64,
        cost: f64,
        difficulty: DifficultyLevel,
    ) -> Self {
        Self {
            description: description.into(),
            hours,
            cost,
            difficulty,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the hours spent.
    pub fn hours(&self) -> f64 {
        self.hours
    }

    /// Returns the thread cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Returns the difficulty level.
    pub fn difficulty(&self) -> DifficultyLevel {
        self.difficulty
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_hours(&mut self, hours: f64) {
        self.hours = hours;
    }

    pub fn set_cost(&mut self, cost: f64) {
        self.cost = cost;
    }

    pub fn set_difficulty(&mut self, difficulty: DifficultyLevel) {
        self.difficulty = difficulty;
    }
}

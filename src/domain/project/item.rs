//! Project - An embroidery piece, either practice work or a commission.

use serde::{Deserialize, Serialize};

use super::CostInfo;
use crate::domain::foundation::DifficultyLevel;

/// What kind of project this is, with the data only that kind carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProjectKind {
    /// Practice piece, tracked by stitch count.
    Practice { stitch_count: u32 },
    /// Piece made for a client.
    Commission { client_name: String },
}

/// An embroidery project.
///
/// Shared attributes live on the struct; the variant-specific ones live in
/// [`ProjectKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    name: String,
    /// Duration in minutes.
    duration: u32,
    difficulty: DifficultyLevel,
    cost: CostInfo,
    kind: ProjectKind,
}

impl Project {
    /// Creates a practice project.
    pub fn practice(
        name: impl Into<String>,
        duration: u32,
        difficulty: DifficultyLevel,
        stitch_count: u32,
        cost: f64,
    ) -> Self {
        Self {
            name: name.into(),
            duration,
            difficulty,
            cost: CostInfo::new(cost),
            kind: ProjectKind::Practice { stitch_count },
        }
    }

    /// Creates a commissioned project.
    pub fn commission(
        name: impl Into<String>,
        duration: u32,
        difficulty: DifficultyLevel,
        client_name: impl Into<String>,
        cost: f64,
    ) -> Self {
        Self {
            name: name.into(),
            duration,
            difficulty,
            cost: CostInfo::new(cost),
            kind: ProjectKind::Commission {
                client_name: client_name.into(),
            },
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the duration in minutes.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn difficulty(&self) -> DifficultyLevel {
        self.difficulty
    }

    pub fn cost(&self) -> &CostInfo {
        &self.cost
    }

    pub fn kind(&self) -> &ProjectKind {
        &self.kind
    }

    /// Stitch count, for practice projects only.
    pub fn stitch_count(&self) -> Option<u32> {
        match &self.kind {
            ProjectKind::Practice { stitch_count } => Some(*stitch_count),
            ProjectKind::Commission { .. } => None,
        }
    }

    /// Client name, for commissioned projects only.
    pub fn client_name(&self) -> Option<&str> {
        match &self.kind {
            ProjectKind::Commission { client_name } => Some(client_name.as_str()),
            ProjectKind::Practice { .. } => None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_duration(&mut self, duration: u32) {
        self.duration = duration;
    }

    pub fn set_difficulty(&mut self, difficulty: DifficultyLevel) {
        self.difficulty = difficulty;
    }

    pub fn set_cost(&mut self, cost: f64) {
        self.cost.set_cost(cost);
    }

    /// Updates the stitch count. Returns false for commissions.
    pub fn set_stitch_count(&mut self, count: u32) -> bool {
        match &mut self.kind {
            ProjectKind::Practice { stitch_count } => {
                *stitch_count = count;
                true
            }
            ProjectKind::Commission { .. } => false,
        }
    }

    /// Updates the client name. Returns false for practice projects.
    pub fn set_client_name(&mut self, client: impl Into<String>) -> bool {
        match &mut self.kind {
            ProjectKind::Commission { client_name } => {
                *client_name = client.into();
                true
            }
            ProjectKind::Practice { .. } => false,
        }
    }

    /// One-line human readable summary.
    pub fn describe(&self) -> String {
        let mut line = format!(
            "Name: {}, Duration: {}, Difficulty: {}",
            self.name,
            self.duration,
            self.difficulty.label()
        );
        match &self.kind {
            ProjectKind::Practice { stitch_count } => {
                line.push_str(&format!(", Stitches: {}", stitch_count));
            }
            ProjectKind::Commission { client_name } => {
                line.push_str(&format!(", Client: {}", client_name));
            }
        }
        line.push_str(&format!(", Cost: {}", self.cost.formatted()));
        line
    }
}

impl Default for Project {
    /// An unnamed, free, easy commission with no client.
    fn default() -> Self {
        Self::commission("", 0, DifficultyLevel::Easy, "", 0.0)
    }
}

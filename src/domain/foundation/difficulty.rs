//! DifficultyLevel enum for rating how demanding a session was.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How demanding an embroidery session was.
///
/// Ordered by ordinal: `Easy < Intermediate < Hard`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    #[default]
    Easy = 1,
    Intermediate = 2,
    Hard = 3,
}

impl DifficultyLevel {
    /// All levels in ascending order.
    pub const ALL: [DifficultyLevel; 3] = [
        DifficultyLevel::Easy,
        DifficultyLevel::Intermediate,
        DifficultyLevel::Hard,
    ];

    /// Maps a raw menu selection to a level.
    ///
    /// 1, 2 and 3 select Easy, Intermediate and Hard. Any other value
    /// falls back to Easy; this never fails.
    pub fn from_input(raw: i64) -> Self {
        match raw {
            1 => DifficultyLevel::Easy,
            2 => DifficultyLevel::Intermediate,
            3 => DifficultyLevel::Hard,
            _ => DifficultyLevel::Easy,
        }
    }

    /// Parses a typed selection.
    ///
    /// Returns the level and whether the Easy fallback was applied, so
    /// callers can tell the user their choice was not recognised.
    pub fn parse_selection(raw: &str) -> (Self, bool) {
        match raw.trim().parse::<i64>() {
            Ok(value @ 1..=3) => (Self::from_input(value), false),
            _ => (DifficultyLevel::Easy, true),
        }
    }

    /// Returns the ordinal value (1-3).
    pub fn ordinal(&self) -> i64 {
        *self as i64
    }

    /// Returns the display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "Easy",
            DifficultyLevel::Intermediate => "Intermediate",
            DifficultyLevel::Hard => "Hard",
        }
    }

    /// Parses a display label back into a level.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == label)
    }
}

/// Returns the label for a raw ordinal, or "Unknown" outside 1-3.
pub fn label_for_ordinal(ordinal: i64) -> &'static str {
    match ordinal {
        1..=3 => DifficultyLevel::from_input(ordinal).label(),
        _ => "Unknown",
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

//! Aggregator - Totals, average and hardest difficulty over a store.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DifficultyLevel;
use crate::domain::session::SessionStore;

/// Snapshot of every aggregate for one store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub session_count: usize,
    pub total_hours: f64,
    pub total_cost: f64,
    pub average_hours: f64,
    pub hardest_difficulty: DifficultyLevel,
}

/// Pure aggregate computations over a [`SessionStore`].
pub struct Aggregator;

impl Aggregator {
    /// Sum of all session hours.
    ///
    /// # Edge Cases
    /// - Empty store: Returns 0.0
    pub fn total_hours(store: &SessionStore) -> f64 {
        store.all().iter().fold(0.0, |acc, s| acc + s.hours())
    }

    /// Sum of all session costs.
    ///
    /// # Edge Cases
    /// - Empty store: Returns 0.0
    pub fn total_cost(store: &SessionStore) -> f64 {
        store.all().iter().fold(0.0, |acc, s| acc + s.cost())
    }

    /// Mean hours per session.
    ///
    /// # Edge Cases
    /// - Empty store: Returns exactly 0.0 rather than dividing by zero
    pub fn average_hours(store: &SessionStore) -> f64 {
        if store.is_empty() {
            return 0.0;
        }
        Self::total_hours(store) / store.count() as f64
    }

    /// Highest difficulty across all sessions.
    ///
    /// # Edge Cases
    /// - Empty store: Returns `Easy`, the lowest level. This is a defined
    ///   default, not evidence that an easy session exists.
    pub fn hardest_difficulty(store: &SessionStore) -> DifficultyLevel {
        store
            .all()
            .iter()
            .map(|s| s.difficulty())
            .max()
            .unwrap_or(DifficultyLevel::Easy)
    }

    /// Computes every aggregate at once.
    pub fn summarize(store: &SessionStore) -> SessionSummary {
        SessionSummary {
            session_count: store.count(),
            total_hours: Self::total_hours(store),
            total_cost: Self::total_cost(store),
            average_hours: Self::average_hours(store),
            hardest_difficulty: Self::hardest_difficulty(store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::Session;

    fn store_of(sessions: Vec<Session>) -> SessionStore {
        SessionStore::seeded(5, sessions)
    }

    fn two_sessions() -> SessionStore {
        store_of(vec![
            Session::new("A", 2.5, 10.0, DifficultyLevel::Easy),
            Session::new("B", 3.5, 20.0, DifficultyLevel::Hard),
        ])
    }

    #[test]
    fn totals_over_two_sessions() {
        let store = two_sessions();
        assert!((Aggregator::total_hours(&store) - 6.0).abs() < 1e-9);
        assert!((Aggregator::total_cost(&store) - 30.0).abs() < 1e-9);
        assert!((Aggregator::average_hours(&store) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_store_aggregates_are_zero() {
        let store = SessionStore::new();
        assert_eq!(Aggregator::total_hours(&store), 0.0);
        assert_eq!(Aggregator::total_cost(&store), 0.0);
        assert_eq!(Aggregator::average_hours(&store), 0.0);
    }

    #[test]
    fn all_zero_session_totals_are_zero() {
        let store = store_of(vec![Session::default()]);
        assert_eq!(Aggregator::total_hours(&store), 0.0);
        assert_eq!(Aggregator::total_cost(&store), 0.0);
        assert_eq!(Aggregator::average_hours(&store), 0.0);
    }

    #[test]
    fn whole_number_sessions_sum_exactly() {
        let store = store_of(vec![
            Session::new("A", 1.0, 5.0, DifficultyLevel::Easy),
            Session::new("B", 2.0, 10.0, DifficultyLevel::Intermediate),
            Session::new("C", 3.0, 15.0, DifficultyLevel::Hard),
        ]);
        assert_eq!(Aggregator::total_hours(&store), 6.0);
        assert_eq!(Aggregator::total_cost(&store), 30.0);
    }

    #[test]
    fn hardest_difficulty_is_maximum() {
        assert_eq!(
            Aggregator::hardest_difficulty(&two_sessions()),
            DifficultyLevel::Hard
        );

        let store = store_of(vec![
            Session::new("A", 1.0, 1.0, DifficultyLevel::Intermediate),
            Session::new("B", 1.0, 1.0, DifficultyLevel::Easy),
        ]);
        assert_eq!(
            Aggregator::hardest_difficulty(&store),
            DifficultyLevel::Intermediate
        );
    }

    #[test]
    fn hardest_difficulty_of_empty_store_is_easy() {
        assert_eq!(
            Aggregator::hardest_difficulty(&SessionStore::new()),
            DifficultyLevel::Easy
        );
    }

    #[test]
    fn summarize_collects_all_values() {
        let summary = Aggregator::summarize(&two_sessions());
        assert_eq!(summary.session_count, 2);
        assert!((summary.total_hours - 6.0).abs() < 1e-9);
        assert!((summary.total_cost - 30.0).abs() < 1e-9);
        assert!((summary.average_hours - 3.0).abs() < 1e-9);
        assert_eq!(summary.hardest_difficulty, DifficultyLevel::Hard);
    }

    #[test]
    fn summary_serializes_camel_case() {
        let json = serde_json::to_string(&Aggregator::summarize(&SessionStore::new())).unwrap();
        assert!(json.contains("\"sessionCount\":0"));
        assert!(json.contains("\"hardestDifficulty\":\"easy\""));
    }
}

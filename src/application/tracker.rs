//! Tracker - one user's week of embroidery sessions.

use crate::config::AppConfig;
use crate::domain::analysis::{Aggregator, Recommendation, RecommendationEngine, SessionSummary};
use crate::domain::report::ReportFormatter;
use crate::domain::session::{Session, SessionStore};
use crate::ports::{ReportStorage, SavedReport};

use super::TrackerError;

/// Application service behind the interactive menu.
///
/// Owns the session store exclusively. Each menu action maps onto one
/// method here; the CLI only gathers input and prints results.
#[derive(Debug, Clone)]
pub struct Tracker {
    user_name: String,
    weekly_goal: f64,
    store: SessionStore,
    engine: RecommendationEngine,
    formatter: ReportFormatter,
}

impl Tracker {
    pub fn new(
        user_name: impl Into<String>,
        weekly_goal: f64,
        store: SessionStore,
        engine: RecommendationEngine,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            weekly_goal,
            store,
            engine,
            formatter: ReportFormatter::new(),
        }
    }

    /// Creates a tracker with an empty store sized and tuned by `config`.
    pub fn from_config(user_name: impl Into<String>, weekly_goal: f64, config: &AppConfig) -> Self {
        Self::new(
            user_name,
            weekly_goal,
            SessionStore::with_capacity(config.tracker.capacity),
            RecommendationEngine::new(config.recommendation.max_cost),
        )
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn weekly_goal(&self) -> f64 {
        self.weekly_goal
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn session_count(&self) -> usize {
        self.store.count()
    }

    /// Whether another session can be added.
    pub fn is_full(&self) -> bool {
        self.store.is_full()
    }

    /// Records a session.
    ///
    /// # Returns
    ///
    /// The number of stored sessions after the add.
    ///
    /// # Errors
    ///
    /// `TrackerError::Store` if the store refuses the session; the store is
    /// left unchanged.
    pub fn add_session(&mut self, session: Session) -> Result<usize, TrackerError> {
        if let Err(err) = self.store.add(session) {
            tracing::warn!(user = %self.user_name, error = %err, "Session refused");
            return Err(err.into());
        }

        let count = self.store.count();
        tracing::info!(user = %self.user_name, count, "Session recorded");
        Ok(count)
    }

    /// Renders the interactive listing, or `None` when nothing is recorded.
    pub fn listing(&self) -> Option<String> {
        if self.store.is_empty() {
            return None;
        }
        Some(
            self.formatter
                .render_listing(self.store.all(), &self.user_name),
        )
    }

    pub fn summary(&self) -> SessionSummary {
        Aggregator::summarize(&self.store)
    }

    /// Classifies this week's totals against the goal and cost ceiling.
    pub fn recommendation(&self) -> Recommendation {
        let recommendation = self.engine.recommend(&self.store, self.weekly_goal);
        tracing::debug!(
            user = %self.user_name,
            goal = self.weekly_goal,
            max_cost = self.engine.max_cost(),
            ?recommendation,
            "Recommendation computed"
        );
        recommendation
    }

    /// Renders the report text without persisting it.
    pub fn render_report(&self) -> String {
        self.formatter
            .render(self.store.all(), &self.user_name, self.weekly_goal)
    }

    /// Renders the report and hands it to `storage` in a single write.
    ///
    /// # Errors
    ///
    /// `TrackerError::Storage` if the write fails.
    pub fn save_report(&self, storage: &dyn ReportStorage) -> Result<SavedReport, TrackerError> {
        let content = self.render_report();
        match storage.write(&content) {
            Ok(saved) => {
                tracing::info!(
                    user = %self.user_name,
                    sessions = self.store.count(),
                    location = %saved.location,
                    "Report saved"
                );
                Ok(saved)
            }
            Err(err) => {
                tracing::error!(location = %storage.location(), error = %err, "Report save failed");
                Err(err.into())
            }
        }
    }
}

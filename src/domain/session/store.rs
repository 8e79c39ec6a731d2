//! Fixed-capacity session store.

use super::{Session, StoreError};

/// Default number of sessions a store accepts.
pub const DEFAULT_CAPACITY: usize = 5;

/// Ordered, fixed-capacity collection of sessions for one user.
///
/// # Invariants
///
/// - `count() <= capacity()` at all times
/// - sessions keep their insertion order
/// - a refused [`add`](Self::add) changes nothing
/// - the store never shrinks; there is no removal or edit operation
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStore {
    sessions: Vec<Session>,
    capacity: usize,
}

impl SessionStore {
    /// Creates an empty store with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty store holding at most `capacity` sessions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sessions: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Creates a store seeded from existing sessions.
    ///
    /// Every seed goes through [`add`](Self::add); seeds that are refused
    /// are skipped.
    pub fn seeded<I>(capacity: usize, seeds: I) -> Self
    where
        I: IntoIterator<Item = Session>,
    {
        let mut store = Self::with_capacity(capacity);
        for session in seeds {
            if let Err(err) = store.add(session) {
                tracing::debug!(error = %err, "Skipped seed session");
            }
        }
        store
    }

    /// Appends a session.
    ///
    /// # Errors
    ///
    /// - `CapacityExceeded` if the store is full
    /// - `InvalidNumericField` if hours or cost is negative (or NaN)
    pub fn add(&mut self, session: Session) -> Result<(), StoreError> {
        if self.is_full() {
            return Err(StoreError::capacity_exceeded(self.capacity));
        }
        if !is_non_negative(session.hours()) {
            return Err(StoreError::invalid_numeric_field("hours"));
        }
        if !is_non_negative(session.cost()) {
            return Err(StoreError::invalid_numeric_field("cost"));
        }

        self.sessions.push(session);
        tracing::debug!(count = self.sessions.len(), capacity = self.capacity, "Session added");
        Ok(())
    }

    /// Returns the number of stored sessions.
    pub fn count(&self) -> usize {
        self.sessions.len()
    }

    /// Returns the maximum number of sessions.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.sessions.len() >= self.capacity
    }

    /// Returns all sessions in insertion order.
    pub fn all(&self) -> &[Session] {
        &self.sessions
    }
}

/// NaN is not non-negative.
fn is_non_negative(value: f64) -> bool {
    value >= 0.0
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

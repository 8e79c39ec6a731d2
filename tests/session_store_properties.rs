//! Property tests for the session store.
//!
//! Whatever sequence of sessions is offered, the store stays within its
//! capacity and only keeps sessions with non-negative hours and cost.

use proptest::prelude::*;

use embroidery_tracker::domain::foundation::DifficultyLevel;
use embroidery_tracker::domain::session::{Session, SessionStore, StoreError};

fn difficulty() -> impl Strategy<Value = DifficultyLevel> {
    prop_oneof![
        Just(DifficultyLevel::Easy),
        Just(DifficultyLevel::Intermediate),
        Just(DifficultyLevel::Hard),
    ]
}

fn session() -> impl Strategy<Value = Session> {
    ("[a-z ]{1,24}", -50.0f64..50.0, -50.0f64..50.0, difficulty())
        .prop_map(|(description, hours, cost, level)| Session::new(description, hours, cost, level))
}

proptest! {
    /// Property: count never exceeds capacity and equals successful adds.
    #[test]
    fn count_tracks_successful_adds(
        capacity in 1usize..10,
        sessions in prop::collection::vec(session(), 0..20)
    ) {
        let mut store = SessionStore::with_capacity(capacity);
        let mut accepted = 0usize;

        for session in sessions {
            if store.add(session).is_ok() {
                accepted += 1;
            }
            prop_assert!(store.count() <= capacity);
        }

        prop_assert_eq!(store.count(), accepted);
    }

    /// Property: negative hours or cost never make it into the store.
    #[test]
    fn negatives_are_never_stored(sessions in prop::collection::vec(session(), 0..20)) {
        let mut store = SessionStore::with_capacity(25);

        for session in sessions {
            let negative = session.hours() < 0.0 || session.cost() < 0.0;
            let before = store.count();
            let result = store.add(session);

            if negative {
                let refused = matches!(result, Err(StoreError::InvalidNumericField { .. }));
                prop_assert!(refused);
                prop_assert_eq!(store.count(), before);
            } else {
                prop_assert!(result.is_ok());
            }
        }

        prop_assert!(store.all().iter().all(|s| s.hours() >= 0.0 && s.cost() >= 0.0));
    }

    /// Property: accepted sessions keep their insertion order.
    #[test]
    fn insertion_order_is_preserved(sessions in prop::collection::vec(session(), 0..8)) {
        let mut store = SessionStore::with_capacity(8);
        let mut expected = Vec::new();

        for session in sessions {
            if store.add(session.clone()).is_ok() {
                expected.push(session);
            }
        }

        prop_assert_eq!(store.all(), expected.as_slice());
    }
}

#[test]
fn sixth_add_to_default_store_is_refused() {
    let mut store = SessionStore::new();
    for i in 0..5 {
        store
            .add(Session::new(format!("S{}", i), 1.0, 1.0, DifficultyLevel::Easy))
            .unwrap();
    }

    let result = store.add(Session::new("S5", 1.0, 1.0, DifficultyLevel::Easy));

    assert_eq!(result, Err(StoreError::capacity_exceeded(5)));
    assert_eq!(store.count(), 5);
}

//! Property-based tests for ranking.
//!
//! # Invariants tested
//!
//! - **Exclusion:** attended events never appear in the result.
//! - **Length:** results hold at most `min(limit, candidates)` events.
//! - **Ordering:** scores are non-increasing along the result.
//! - **Uniqueness:** each input event appears at most once.

use std::collections::HashSet;

use eventrank_core::{Event, EventSimilarity, Location, Scorer, User};
use eventrank_scorer::{HeuristicScorer, Recommender};
use proptest::prelude::*;

const CATEGORIES: &[&str] = &["music", "sports", "art", "food", "tech"];

fn category_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::sample::subsequence(CATEGORIES, 0..=CATEGORIES.len())
}

fn location_strategy() -> impl Strategy<Value = Option<Location>> {
    proptest::option::of(
        (-60.0_f64..=60.0, -120.0_f64..=120.0)
            .prop_map(|(latitude, longitude)| Location::new(latitude, longitude)),
    )
}

fn event_strategy(index: usize) -> impl Strategy<Value = Event> {
    (
        proptest::option::of(category_strategy()),
        location_strategy(),
        proptest::option::of(0.0_f64..=1.0),
    )
        .prop_map(move |(categories, location, popularity)| Event {
            id: format!("e{index}").into(),
            categories: categories.map(|labels| labels.into_iter().map(Into::into).collect()),
            location,
            popularity,
        })
}

fn events_strategy() -> impl Strategy<Value = Vec<Event>> {
    (0_usize..20).prop_flat_map(|count| (0..count).map(event_strategy).collect::<Vec<_>>())
}

fn user_strategy() -> impl Strategy<Value = User> {
    (
        proptest::collection::hash_set(0_usize..20, 0..6),
        category_strategy(),
        location_strategy(),
    )
        .prop_map(|(attended, preferences, location)| User {
            attended_events: Some(attended.into_iter().map(|i| format!("e{i}").into()).collect()),
            preferences: Some(preferences.into_iter().map(Into::into).collect()),
            location,
        })
}

fn similarity_strategy() -> impl Strategy<Value = EventSimilarity> {
    proptest::collection::vec(
        (0_usize..20, proptest::collection::vec(0_usize..20, 0..5)),
        0..10,
    )
    .prop_map(|entries| {
        let mut similarity = EventSimilarity::new();
        for (source, similar) in entries {
            similarity.insert(
                format!("e{source}"),
                similar.into_iter().map(|i| format!("e{i}")),
            );
        }
        similarity
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn ranking_respects_invariants(
        user in user_strategy(),
        events in events_strategy(),
        similarity in similarity_strategy(),
        limit in 0_usize..10,
    ) {
        let recommender = Recommender::heuristic();
        let ranked = recommender.rank(&user, &events, &similarity, limit);

        let candidates = events
            .iter()
            .filter(|event| !user.has_attended(event.id.as_str()))
            .count();
        prop_assert!(ranked.len() <= limit.min(candidates));
        prop_assert_eq!(ranked.len(), limit.min(candidates));

        let mut seen = HashSet::new();
        for scored in &ranked {
            prop_assert!(!user.has_attended(scored.event.id.as_str()));
            prop_assert!(seen.insert(scored.event.id.clone()), "duplicate {}", scored.event.id);
        }

        for pair in ranked.windows(2) {
            if let [first, second] = pair {
                prop_assert!(first.score >= second.score, "{} < {}", first.score, second.score);
            }
        }
    }

    #[test]
    fn scores_are_finite_and_bounded(
        user in user_strategy(),
        events in events_strategy(),
        similarity in similarity_strategy(),
    ) {
        let scorer = HeuristicScorer::default();
        for event in &events {
            let score = scorer.score(&user, event, &similarity);
            prop_assert!(score.is_finite());
            prop_assert!((0.0..=1.0 + 1e-9).contains(&score), "score {score} out of range");
        }
    }
}

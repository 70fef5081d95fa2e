//! Scoring and ranking of candidate events for EventRank.
//!
//! The crate provides two layers:
//! - **Heuristic scoring** blends four weighted factors (attendance
//!   similarity, preference match, geographic proximity and popularity)
//!   into a single score per event. It implements the
//!   [`Scorer`](eventrank_core::Scorer) trait so callers can swap in their
//!   own scorer.
//! - **Ranking** excludes events the user already attended, sorts the
//!   remaining candidates by descending score (stable for ties) and keeps
//!   the first `limit`.
//!
//! Neither layer fails at request time: absent data contributes nothing to
//! a score, and empty inputs produce empty results.
//!
//! # Examples
//!
//! ```
//! use eventrank_core::{Event, EventSimilarity, User};
//! use eventrank_scorer::recommend_default;
//!
//! let user = User::new()
//!     .with_attended_events(["e1"])
//!     .with_preferences(["music"]);
//! let events = vec![
//!     Event::new("e2").with_categories(["music"]).with_popularity(0.8),
//!     Event::new("e3").with_categories(["sports"]).with_popularity(0.1),
//! ];
//!
//! let ranked = recommend_default(&user, &events, &EventSimilarity::new());
//! assert_eq!(ranked.first().map(|event| event.id.as_str()), Some("e2"));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use eventrank_core::{Event, EventSimilarity, User};

mod error;
mod heuristic;
mod recommender;
pub mod weights;

pub use error::WeightsError;
pub use heuristic::{HeuristicScorer, ScoreBreakdown};
pub use recommender::{DEFAULT_LIMIT, RecommendOptions, Recommender, ScoredEvent};
pub use weights::ScoreWeights;

/// Recommend up to `limit` events using the default heuristic weights.
///
/// Events the user already attended are never returned. A `limit` of zero
/// yields an empty result.
#[must_use]
pub fn recommend<'a>(
    user: &User,
    events: &'a [Event],
    similarity: &EventSimilarity,
    limit: usize,
) -> Vec<&'a Event> {
    Recommender::heuristic().recommend(user, events, similarity, limit)
}

/// Recommend up to [`DEFAULT_LIMIT`] events using the default heuristic
/// weights.
#[must_use]
pub fn recommend_default<'a>(
    user: &User,
    events: &'a [Event],
    similarity: &EventSimilarity,
) -> Vec<&'a Event> {
    recommend(user, events, similarity, DEFAULT_LIMIT)
}

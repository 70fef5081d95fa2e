//! Rank candidate events and select the best matches for a user.
//!
//! Ranking excludes events the user already attended, scores the remaining
//! candidates with a [`Scorer`], sorts them by descending score and keeps
//! the first `limit`. The sort is stable, so events with equal scores keep
//! their input order.

#![forbid(unsafe_code)]

use std::cmp::Ordering;

use eventrank_core::{Event, EventSimilarity, Scorer, User};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{HeuristicScorer, ScoreWeights, WeightsError};

/// Number of events returned when the caller does not choose a limit.
pub const DEFAULT_LIMIT: usize = 5;

/// Caller-facing ranking options.
///
/// # Examples
/// ```
/// use eventrank_scorer::{DEFAULT_LIMIT, RecommendOptions};
///
/// assert_eq!(RecommendOptions::default().limit, DEFAULT_LIMIT);
/// assert_eq!(RecommendOptions::from_signed_limit(-3).limit, 0);
/// assert_eq!(RecommendOptions::from_signed_limit(7).limit, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RecommendOptions {
    /// Maximum number of events to return.
    pub limit: usize,
}

impl RecommendOptions {
    /// Options returning at most `limit` events.
    #[must_use]
    pub const fn with_limit(limit: usize) -> Self {
        Self { limit }
    }

    /// Options from a signed limit, treating negative values as zero.
    #[must_use]
    pub fn from_signed_limit(limit: i64) -> Self {
        Self::with_limit(usize::try_from(limit).unwrap_or(0))
    }
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self::with_limit(DEFAULT_LIMIT)
    }
}

/// A candidate event paired with its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredEvent<'a> {
    /// The candidate event.
    pub event: &'a Event,
    /// Total score assigned by the scorer.
    pub score: f64,
}

/// Ranks events for a user using a pluggable [`Scorer`].
///
/// # Examples
/// ```
/// use eventrank_core::{Event, EventSimilarity, User};
/// use eventrank_scorer::Recommender;
///
/// let user = User::new()
///     .with_attended_events(["e1"])
///     .with_preferences(["music"]);
/// let events = vec![
///     Event::new("e1").with_popularity(1.0),
///     Event::new("e3").with_categories(["sports"]).with_popularity(0.1),
///     Event::new("e2").with_categories(["music"]).with_popularity(0.8),
/// ];
///
/// let ranked = Recommender::heuristic().recommend(&user, &events, &EventSimilarity::new(), 5);
/// let ids: Vec<&str> = ranked.iter().map(|event| event.id.as_str()).collect();
/// assert_eq!(ids, ["e2", "e3"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Recommender<S = HeuristicScorer> {
    scorer: S,
}

impl Recommender<HeuristicScorer> {
    /// Construct a recommender using the heuristic scorer with default
    /// weights.
    #[must_use]
    pub fn heuristic() -> Self {
        Self::new(HeuristicScorer::default())
    }

    /// Construct a recommender using the heuristic scorer with custom
    /// weights.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when the weights fail validation.
    pub fn with_weights(weights: ScoreWeights) -> Result<Self, WeightsError> {
        HeuristicScorer::new(weights).map(Self::new)
    }
}

impl<S: Scorer> Recommender<S> {
    /// Construct a recommender around `scorer`.
    #[must_use]
    pub const fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Borrow the scorer.
    #[must_use]
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Score, sort and truncate the events the user has not attended.
    ///
    /// The result holds at most `limit` entries in non-increasing score
    /// order. Equal scores preserve input order. A score of `NaN` (possible
    /// only with a `NaN` popularity or a custom scorer) ranks last.
    #[must_use]
    pub fn rank<'a>(
        &self,
        user: &User,
        events: &'a [Event],
        similarity: &EventSimilarity,
        limit: usize,
    ) -> Vec<ScoredEvent<'a>> {
        if events.is_empty() || limit == 0 {
            return Vec::new();
        }

        let attended = user.attended_set();
        let mut scored: Vec<ScoredEvent<'a>> = events
            .iter()
            .filter(|event| !attended.contains(event.id.as_str()))
            .map(|event| {
                let score = self.scorer.score(user, event, similarity);
                if score.is_nan() {
                    log::warn!("event {} scored NaN; ranking it last", event.id);
                }
                ScoredEvent { event, score }
            })
            .collect();
        log::debug!(
            "ranking {} candidate events ({} excluded as attended)",
            scored.len(),
            events.len() - scored.len()
        );

        scored.sort_by(|lhs, rhs| {
            sort_key(rhs.score)
                .partial_cmp(&sort_key(lhs.score))
                .unwrap_or(Ordering::Equal)
        });
        scored.truncate(limit);
        scored
    }

    /// Return up to `limit` recommended events, best first.
    #[must_use]
    pub fn recommend<'a>(
        &self,
        user: &User,
        events: &'a [Event],
        similarity: &EventSimilarity,
        limit: usize,
    ) -> Vec<&'a Event> {
        self.rank(user, events, similarity, limit)
            .into_iter()
            .map(|scored| scored.event)
            .collect()
    }

    /// Return recommendations using `options`.
    #[must_use]
    pub fn recommend_with<'a>(
        &self,
        user: &User,
        events: &'a [Event],
        similarity: &EventSimilarity,
        options: RecommendOptions,
    ) -> Vec<&'a Event> {
        self.recommend(user, events, similarity, options.limit)
    }
}

const fn sort_key(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else {
        score
    }
}

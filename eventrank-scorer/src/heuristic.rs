//! Weighted heuristic scoring of candidate events.
//!
//! Four independent factors contribute to an event's score:
//!
//! - **Similarity**: the share of the user's attended events (those with a
//!   similarity entry) that list the candidate as similar.
//! - **Preference**: the share of the candidate's categories the user has
//!   declared an interest in.
//! - **Proximity**: an exponential decay over the great-circle distance
//!   between the user and the venue.
//! - **Popularity**: the event's own popularity signal, unclamped.
//!
//! Each factor applies only when its inputs are present. Missing data
//! contributes `0.0` rather than a penalty, and scoring never fails.

#![forbid(unsafe_code)]

use eventrank_core::{Event, EventSimilarity, Scorer, User, distance};
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{ScoreWeights, WeightsError};

/// Weighted contribution of each factor to an event's score.
///
/// # Examples
/// ```
/// use eventrank_core::{Event, EventSimilarity, User};
/// use eventrank_scorer::HeuristicScorer;
///
/// let user = User::new().with_preferences(["music"]);
/// let event = Event::new("e2").with_categories(["music"]).with_popularity(0.8);
/// let breakdown = HeuristicScorer::default().breakdown(&user, &event, &EventSimilarity::new());
/// assert_eq!(breakdown.similarity, 0.0);
/// assert!((breakdown.preference - 0.25).abs() < 1e-12);
/// assert!((breakdown.popularity - 0.16).abs() < 1e-12);
/// assert!((breakdown.total() - 0.41).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ScoreBreakdown {
    /// Weighted attendance-similarity contribution.
    pub similarity: f64,
    /// Weighted preference-match contribution.
    pub preference: f64,
    /// Weighted proximity contribution.
    pub proximity: f64,
    /// Weighted popularity contribution.
    pub popularity: f64,
}

impl ScoreBreakdown {
    /// Sum of all factor contributions.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the total score is the sum of weighted factors"
    )]
    pub fn total(&self) -> f64 {
        self.similarity + self.preference + self.proximity + self.popularity
    }
}

/// Scorer blending similarity, preference, proximity and popularity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeuristicScorer {
    weights: ScoreWeights,
}

impl HeuristicScorer {
    /// Construct a scorer from custom weights.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when the weights fail
    /// [`ScoreWeights::validate`].
    pub fn new(weights: ScoreWeights) -> Result<Self, WeightsError> {
        let validated = weights.validate()?;
        Ok(Self { weights: validated })
    }

    /// Return the weights in use.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Compute each factor's weighted contribution for `event`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "each factor is a ratio or signal scaled by its weight"
    )]
    pub fn breakdown(
        &self,
        user: &User,
        event: &Event,
        similarity: &EventSimilarity,
    ) -> ScoreBreakdown {
        let weights = self.weights;
        ScoreBreakdown {
            similarity: similarity_ratio(user, event, similarity)
                .map_or(0.0, |ratio| ratio * weights.similarity),
            preference: preference_ratio(user, event)
                .map_or(0.0, |ratio| ratio * weights.preference),
            proximity: proximity_decay(user, event, weights.proximity_scale_km)
                .map_or(0.0, |decay| decay * weights.proximity),
            popularity: event
                .popularity
                .map_or(0.0, |popularity| popularity * weights.popularity),
        }
    }
}

impl Scorer for HeuristicScorer {
    fn score(&self, user: &User, event: &Event, similarity: &EventSimilarity) -> f64 {
        let breakdown = self.breakdown(user, event, similarity);
        log::trace!("scored event {}: {breakdown:?}", event.id);
        breakdown.total()
    }
}

/// Share of attended events with a similarity entry that list `event`.
///
/// Attended events missing from `similarity` count toward neither side of
/// the ratio. Returns `None` when no attended event has an entry.
fn similarity_ratio(user: &User, event: &Event, similarity: &EventSimilarity) -> Option<f64> {
    let mut similar = 0_usize;
    let mut total = 0_usize;
    for attended in user.attended_events() {
        let Some(listed) = similarity.similar_to(attended.as_str()) else {
            continue;
        };
        total += 1;
        if listed.contains(&event.id) {
            similar += 1;
        }
    }
    ratio(similar, total)
}

/// Share of `event`'s categories the user prefers.
///
/// The denominator is the shorter of the two lists, so a user with a single
/// preference fully matches any event carrying that category.
fn preference_ratio(user: &User, event: &Event) -> Option<f64> {
    let preferences = user.preferences();
    if preferences.is_empty() {
        return None;
    }
    let categories = event.categories.as_deref()?;
    let matches = categories
        .iter()
        .filter(|category| preferences.contains(*category))
        .count();
    ratio(matches, preferences.len().min(categories.len()))
}

/// `e^(-km / scale)` for the distance between user and venue.
#[expect(
    clippy::float_arithmetic,
    reason = "proximity decays exponentially with distance"
)]
fn proximity_decay(user: &User, event: &Event, scale_km: f64) -> Option<f64> {
    let (Some(from), Some(to)) = (user.location, event.location) else {
        return None;
    };
    Some((-distance(from, to) / scale_km).exp())
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "counts are bounded by input list lengths, far below f64 precision limits"
)]
fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    if denominator == 0 {
        return None;
    }
    Some(numerator as f64 / denominator as f64)
}

//! Test-only helpers shared by unit, behaviour and property tests.

use std::collections::HashMap;

use crate::{Event, EventSimilarity, Scorer, User};

/// `Scorer` returning a preset score per event identifier.
///
/// Events without a preset score receive `0.0`.
#[derive(Debug, Default, Clone)]
pub struct FixedScorer {
    scores: HashMap<String, f64>,
}

impl FixedScorer {
    /// Create a scorer from `(id, score)` pairs.
    #[must_use]
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            scores: pairs.into_iter().map(|(id, score)| (id.into(), score)).collect(),
        }
    }
}

impl Scorer for FixedScorer {
    fn score(&self, _user: &User, event: &Event, _similarity: &EventSimilarity) -> f64 {
        self.scores.get(event.id.as_str()).copied().unwrap_or(0.0)
    }
}

/// Build `count` bare events with identifiers `e0`, `e1`, ….
#[must_use]
pub fn numbered_events(count: usize) -> Vec<Event> {
    (0..count).map(|index| Event::new(format!("e{index}"))).collect()
}

//! Sparse lookup of events known to resemble one another.
//!
//! The relation is directional: listing `b` under `a` says nothing about
//! `a` under `b`. A missing key means "no known similar events" and is
//! distinct from a key mapped to an empty list, which still counts as a
//! known entry when scoring.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::EventId;

/// Mapping from an event to the events considered similar to it.
///
/// # Examples
/// ```
/// use eventrank_core::{EventId, EventSimilarity};
///
/// let similarity = EventSimilarity::new()
///     .with_similar("e1", ["e2", "e3"])
///     .with_similar("e4", Vec::<&str>::new());
/// assert!(similarity.is_similar("e1", "e2"));
/// assert!(!similarity.is_similar("e2", "e1"));
/// assert_eq!(similarity.similar_to("e4").map(<[EventId]>::len), Some(0));
/// assert!(similarity.similar_to("e9").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EventSimilarity {
    entries: HashMap<EventId, Vec<EventId>>,
}

impl EventSimilarity {
    /// Construct an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the similar-list for `id`, if an entry exists.
    #[must_use]
    pub fn similar_to(&self, id: &str) -> Option<&[EventId]> {
        self.entries.get(id).map(Vec::as_slice)
    }

    /// Report whether `candidate` is listed as similar to `source`.
    #[must_use]
    pub fn is_similar(&self, source: &str, candidate: &str) -> bool {
        self.similar_to(source)
            .is_some_and(|similar| similar.iter().any(|id| id.as_str() == candidate))
    }

    /// Append similar events for `source`, creating the entry when missing.
    pub fn insert<I, E>(&mut self, source: impl Into<EventId>, similar: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<EventId>,
    {
        self.entries
            .entry(source.into())
            .or_default()
            .extend(similar.into_iter().map(Into::into));
    }

    /// Add an entry while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_similar<I, E>(mut self, source: impl Into<EventId>, similar: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<EventId>,
    {
        self.insert(source, similar);
        self
    }

    /// Number of events with an entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether no entries are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<HashMap<EventId, Vec<EventId>>> for EventSimilarity {
    fn from(entries: HashMap<EventId, Vec<EventId>>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(EventId, Vec<EventId>)> for EventSimilarity {
    fn from_iter<T: IntoIterator<Item = (EventId, Vec<EventId>)>>(iter: T) -> Self {
        let mut similarity = Self::new();
        for (source, similar) in iter {
            similarity.insert(source, similar);
        }
        similarity
    }
}

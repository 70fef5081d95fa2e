//! Candidate events and their identifiers.

use std::borrow::Borrow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Location;

/// Opaque identifier for an event.
///
/// # Examples
/// ```
/// use eventrank_core::EventId;
///
/// let id = EventId::from("e1");
/// assert_eq!(id.as_str(), "e1");
/// assert_eq!(id.to_string(), "e1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EventId(String);

impl EventId {
    /// Wrap a raw identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EventId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for EventId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form category label such as `"music"` or `"sports"`.
///
/// Labels compare exactly; no case folding is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Category(String);

impl Category {
    /// Wrap a raw category label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Borrow the label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl Borrow<str> for Category {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An event that may be recommended to a user.
///
/// Every attribute other than the identifier is optional; absent data simply
/// contributes nothing when the event is scored.
///
/// # Examples
/// ```
/// use eventrank_core::{Event, Location};
///
/// let event = Event::new("e2")
///     .with_categories(["music", "outdoor"])
///     .with_location(Location::new(51.5, -0.12))
///     .with_popularity(0.8);
/// assert_eq!(event.id.as_str(), "e2");
/// assert_eq!(event.categories.as_ref().map(Vec::len), Some(2));
/// assert_eq!(event.popularity, Some(0.8));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Event {
    /// Unique identifier.
    pub id: EventId,
    /// Category labels attached to the event.
    #[cfg_attr(feature = "serde", serde(default))]
    pub categories: Option<Vec<Category>>,
    /// Venue position.
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: Option<Location>,
    /// Popularity signal, nominally within `0.0..=1.0`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub popularity: Option<f64>,
}

impl Event {
    /// Construct an event carrying only its identifier.
    #[must_use]
    pub fn new(id: impl Into<EventId>) -> Self {
        Self {
            id: id.into(),
            categories: None,
            location: None,
            popularity: None,
        }
    }

    /// Attach category labels while returning `self` for chaining.
    #[must_use]
    pub fn with_categories<I, C>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Category>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    /// Attach a venue location while returning `self` for chaining.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Attach a popularity signal while returning `self` for chaining.
    #[must_use]
    pub fn with_popularity(mut self, popularity: f64) -> Self {
        self.popularity = Some(popularity);
        self
    }
}

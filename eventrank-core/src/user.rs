//! User profiles: attendance history, declared preferences and position.
//!
//! Every field is optional. A missing list and an empty list behave the same
//! way when scoring: the corresponding factor contributes nothing.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Category, EventId, Location};

/// The person receiving recommendations.
///
/// # Examples
/// ```
/// use eventrank_core::User;
///
/// let user = User::new()
///     .with_attended_events(["e1"])
///     .with_preferences(["music"]);
/// assert!(user.has_attended("e1"));
/// assert!(!user.has_attended("e2"));
/// assert_eq!(user.preferences().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct User {
    /// Identifiers of events the user has already attended.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attended_events: Option<Vec<EventId>>,
    /// Categories the user has declared an interest in.
    #[cfg_attr(feature = "serde", serde(default))]
    pub preferences: Option<Vec<Category>>,
    /// The user's current position.
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: Option<Location>,
}

impl User {
    /// Construct a user with no history, preferences or location.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attended event identifiers, or an empty slice when absent.
    #[must_use]
    pub fn attended_events(&self) -> &[EventId] {
        self.attended_events.as_deref().unwrap_or_default()
    }

    /// Declared preferences, or an empty slice when absent.
    #[must_use]
    pub fn preferences(&self) -> &[Category] {
        self.preferences.as_deref().unwrap_or_default()
    }

    /// Collect attended identifiers into a set for membership checks.
    #[must_use]
    pub fn attended_set(&self) -> HashSet<&str> {
        self.attended_events().iter().map(EventId::as_str).collect()
    }

    /// Report whether the user attended the event with `id`.
    #[must_use]
    pub fn has_attended(&self, id: &str) -> bool {
        self.attended_events().iter().any(|attended| attended.as_str() == id)
    }

    /// Set the attended events while returning `self` for chaining.
    #[must_use]
    pub fn with_attended_events<I, E>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<EventId>,
    {
        self.attended_events = Some(events.into_iter().map(Into::into).collect());
        self
    }

    /// Set the declared preferences while returning `self` for chaining.
    #[must_use]
    pub fn with_preferences<I, C>(mut self, preferences: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Category>,
    {
        self.preferences = Some(preferences.into_iter().map(Into::into).collect());
        self
    }

    /// Set the user's position while returning `self` for chaining.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}

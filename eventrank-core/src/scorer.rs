//! Score candidate events for a user.
//!
//! The `Scorer` trait assigns a relevance score to an
//! [`Event`](crate::Event) given the [`User`](crate::User) and the
//! [`EventSimilarity`](crate::EventSimilarity) lookup.

use crate::{Event, EventSimilarity, User};

/// Calculate a relevance score for a candidate event.
///
/// Higher scores indicate a better match between the event and the user.
/// Implementations must be thread-safe (`Send` + `Sync`) so a recommender
/// can be shared across threads.
/// The method is infallible; implementers must return `0.0` for any factor
/// that lacks the data it needs rather than penalising the event.
///
/// # Examples
///
/// ```rust
/// use eventrank_core::{Event, EventSimilarity, Scorer, User};
///
/// struct PopularityOnly;
///
/// impl Scorer for PopularityOnly {
///     fn score(&self, _user: &User, event: &Event, _similarity: &EventSimilarity) -> f64 {
///         event.popularity.unwrap_or(0.0)
///     }
/// }
///
/// let event = Event::new("e1").with_popularity(0.4);
/// let score = PopularityOnly.score(&User::new(), &event, &EventSimilarity::new());
/// assert_eq!(score, 0.4);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `event` according to `user` and `similarity`.
    fn score(&self, user: &User, event: &Event, similarity: &EventSimilarity) -> f64;
}

impl<S: Scorer + ?Sized> Scorer for &S {
    fn score(&self, user: &User, event: &Event, similarity: &EventSimilarity) -> f64 {
        (**self).score(user, event, similarity)
    }
}

impl<S: Scorer + ?Sized> Scorer for Box<S> {
    fn score(&self, user: &User, event: &Event, similarity: &EventSimilarity) -> f64 {
        (**self).score(user, event, similarity)
    }
}

//! Core domain types for the EventRank engine.
//!
//! The crate models users, candidate events and the similarity lookup the
//! recommender consumes, provides the Haversine great-circle distance used
//! for proximity scoring, and defines the [`Scorer`] seam that ranking is
//! built on. All types are plain owned data; nothing here performs I/O.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod event;
pub mod geodistance;
pub mod location;
pub mod scorer;
pub mod similarity;
pub mod user;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use event::{Category, Event, EventId};
pub use geodistance::distance;
pub use location::{Location, LocationParseError};
pub use scorer::Scorer;
pub use similarity::EventSimilarity;
pub use user::User;

//! Facade crate for the EventRank recommendation engine.
//!
//! This crate re-exports the core domain types, the great-circle distance
//! helper and the weighted heuristic recommender.

#![forbid(unsafe_code)]

pub use eventrank_core::{
    Category, Event, EventId, EventSimilarity, Location, LocationParseError, Scorer, User,
    distance,
};

pub use eventrank_scorer::{
    DEFAULT_LIMIT, HeuristicScorer, RecommendOptions, Recommender, ScoreBreakdown, ScoreWeights,
    ScoredEvent, WeightsError, recommend, recommend_default,
};

#[cfg(feature = "test-support")]
pub use eventrank_core::test_support;

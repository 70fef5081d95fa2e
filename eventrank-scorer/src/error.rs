//! Error types raised while configuring the recommender.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when custom score weights are unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WeightsError {
    /// A factor weight was NaN or infinite.
    #[error("{factor} weight must be finite")]
    NonFinite {
        /// Name of the offending factor.
        factor: &'static str,
    },
    /// A factor weight was below zero.
    #[error("{factor} weight must not be negative")]
    Negative {
        /// Name of the offending factor.
        factor: &'static str,
    },
    /// Every factor weight was zero, so no event could ever score.
    #[error("at least one factor weight must be positive")]
    AllZero,
    /// The proximity decay scale was not a positive finite distance.
    #[error("proximity scale must be a positive number of kilometres")]
    InvalidProximityScale,
}

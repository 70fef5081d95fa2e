//! Tunable weights applied to each scoring factor.
#![forbid(unsafe_code)]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::WeightsError;

/// Weight applied to the attendance-similarity ratio.
pub const SIMILARITY_WEIGHT: f64 = 0.35;
/// Weight applied to the preference-match ratio.
pub const PREFERENCE_WEIGHT: f64 = 0.25;
/// Weight applied to the proximity decay.
pub const PROXIMITY_WEIGHT: f64 = 0.20;
/// Weight applied to the raw popularity signal.
pub const POPULARITY_WEIGHT: f64 = 0.20;
/// Distance in kilometres over which proximity decays by a factor of `e`.
pub const PROXIMITY_SCALE_KM: f64 = 100.0;

/// Relative weighting between the four scoring factors.
///
/// The defaults sum to `1.0`, so an event with full similarity, full
/// preference overlap, zero distance and popularity `1.0` scores `1.0`.
///
/// # Examples
/// ```
/// use eventrank_scorer::ScoreWeights;
///
/// let weights = ScoreWeights::default();
/// assert_eq!(weights.similarity, 0.35);
/// assert_eq!(weights.proximity, weights.popularity);
/// assert!(weights.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ScoreWeights {
    /// Multiplier applied to the share of attended events listing the
    /// candidate as similar.
    pub similarity: f64,
    /// Multiplier applied to the share of categories matching preferences.
    pub preference: f64,
    /// Multiplier applied to the distance decay `e^(-km / scale)`.
    pub proximity: f64,
    /// Multiplier applied to the event's popularity.
    pub popularity: f64,
    /// Decay scale for the proximity factor, in kilometres.
    pub proximity_scale_km: f64,
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when a weight is non-finite or negative, when
    /// every weight is zero, or when the proximity scale is not a positive
    /// finite distance.
    pub fn validate(self) -> Result<Self, WeightsError> {
        for (factor, weight) in self.factors() {
            if !weight.is_finite() {
                return Err(WeightsError::NonFinite { factor });
            }
            if weight < 0.0 {
                return Err(WeightsError::Negative { factor });
            }
        }
        if self.factors().iter().all(|&(_, weight)| weight == 0.0) {
            return Err(WeightsError::AllZero);
        }
        if !(self.proximity_scale_km.is_finite() && self.proximity_scale_km > 0.0) {
            return Err(WeightsError::InvalidProximityScale);
        }
        Ok(self)
    }

    const fn factors(self) -> [(&'static str, f64); 4] {
        [
            ("similarity", self.similarity),
            ("preference", self.preference),
            ("proximity", self.proximity),
            ("popularity", self.popularity),
        ]
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            similarity: SIMILARITY_WEIGHT,
            preference: PREFERENCE_WEIGHT,
            proximity: PROXIMITY_WEIGHT,
            popularity: POPULARITY_WEIGHT,
            proximity_scale_km: PROXIMITY_SCALE_KM,
        }
    }
}

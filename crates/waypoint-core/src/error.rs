//! Configuration error types.
//!
//! These errors represent construction-time failures: a scoring matrix the
//! engine refuses to run with. Missing or sparse response data is never an
//! error — scoring degrades to defined defaults instead.

use thiserror::Error;

use crate::model::InterestType;

/// Errors raised when constructing an [`crate::engine::AssessmentEngine`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A matching weight is missing, negative, or not finite.
    #[error("invalid matching weight '{name}': {value}")]
    InvalidMatchingWeight { name: &'static str, value: f64 },

    /// A per-type interest weight is negative or not finite.
    #[error("invalid type weight for {interest_type}: {value}")]
    InvalidTypeWeight {
        interest_type: InterestType,
        value: f64,
    },

    /// A classification threshold is outside [0, 1] or not finite.
    #[error("invalid threshold '{name}': {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    /// `moderate_match` exceeds `high_match`.
    #[error("moderate_match {moderate} exceeds high_match {high}")]
    InvertedThresholds { moderate: f64, high: f64 },

    /// `max_recommendations` is zero or below `min_recommendations`.
    #[error("invalid recommendation bounds: min {min}, max {max}")]
    InvalidRecommendationBounds { min: usize, max: usize },
}

impl ConfigError {
    /// Returns `true` when the error concerns the five-way matching split.
    pub fn is_matching_weight(&self) -> bool {
        matches!(self, ConfigError::InvalidMatchingWeight { .. })
    }
}

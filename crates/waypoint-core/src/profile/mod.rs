//! Profile calculators.
//!
//! Each submodule reduces one partition of the question set into a derived
//! profile. They are pure functions of (questions, matrix, responses) and
//! never fail: a bucket with no answered questions scores 0.0. That zero
//! convention is applied uniformly across every calculator.

use std::collections::HashMap;

pub mod efficacy;
pub mod identity;
pub mod interest;
pub mod values;

pub use efficacy::{DomainScores, SelfEfficacyProfile};
pub use identity::{IdentityProfile, IdentityStatus};
pub use interest::InterestProfile;
pub use values::{ValueScore, ValuesProfile};

/// Normalized answers: question id -> chosen option value. Skips, unknown
/// ids, and out-of-range values are already removed by the engine.
pub type ResponseMap = HashMap<String, f64>;

/// Incremental weighted mean over answered questions only.
///
/// Unanswered questions contribute to neither numerator nor denominator;
/// an empty accumulator yields 0.0.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct WeightedMean {
    numerator: f64,
    denominator: f64,
}

impl WeightedMean {
    pub(crate) fn add(&mut self, value: f64, weight: f64) {
        self.numerator += value * weight;
        self.denominator += weight;
    }

    pub(crate) fn value(&self) -> f64 {
        if self.denominator > 0.0 {
            self.numerator / self.denominator
        } else {
            0.0
        }
    }
}

//! Identity-development profile (exploration / commitment).
//!
//! The two scalars are classified into one of Marcia's four identity
//! statuses with a 2x2 table at the scale midpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Question, QuestionCategory};
use crate::profile::{ResponseMap, WeightedMean};
use crate::tags::{self, IdentityDimension};

/// Midpoint of the 1-5 response scale used by the status table.
pub const SCALE_MIDPOINT: f64 = 3.5;

/// One of four categorical identity statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentityStatus {
    Achievement,
    Moratorium,
    Foreclosure,
    Diffusion,
}

impl IdentityStatus {
    /// Classify an (exploration, commitment) pair.
    pub fn classify(exploration: f64, commitment: f64) -> Self {
        match (exploration >= SCALE_MIDPOINT, commitment >= SCALE_MIDPOINT) {
            (true, true) => IdentityStatus::Achievement,
            (true, false) => IdentityStatus::Moratorium,
            (false, true) => IdentityStatus::Foreclosure,
            (false, false) => IdentityStatus::Diffusion,
        }
    }

    /// Fixed explanatory text for the status.
    pub fn description(&self) -> &'static str {
        match self {
            IdentityStatus::Achievement => {
                "High exploration and commitment - strong identity with clear direction"
            }
            IdentityStatus::Moratorium => {
                "High exploration but lower commitment - actively exploring options"
            }
            IdentityStatus::Foreclosure => {
                "Lower exploration but high commitment - may benefit from broader career exploration"
            }
            IdentityStatus::Diffusion => {
                "Lower exploration and commitment - would benefit from structured career exploration"
            }
        }
    }
}

impl fmt::Display for IdentityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityStatus::Achievement => write!(f, "Achievement"),
            IdentityStatus::Moratorium => write!(f, "Moratorium"),
            IdentityStatus::Foreclosure => write!(f, "Foreclosure"),
            IdentityStatus::Diffusion => write!(f, "Diffusion"),
        }
    }
}

/// Derived identity profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityProfile {
    pub exploration: f64,
    pub commitment: f64,
    pub status: IdentityStatus,
    pub description: String,
}

/// Reduce all identity questions into an [`IdentityProfile`].
pub fn calculate(questions: &[Question], responses: &ResponseMap) -> IdentityProfile {
    let mut exploration = WeightedMean::default();
    let mut commitment = WeightedMean::default();

    for question in questions {
        if question.category != QuestionCategory::Identity {
            continue;
        }
        let Some(dimension) = tags::identity_dimension(&question.subcategory) else {
            continue;
        };
        let Some(&value) = responses.get(&question.id) else {
            continue;
        };
        match dimension {
            IdentityDimension::Exploration => exploration.add(value, question.weight),
            IdentityDimension::Commitment => commitment.add(value, question.weight),
        }
    }

    let exploration = exploration.value();
    let commitment = commitment.value();
    let status = IdentityStatus::classify(exploration, commitment);

    IdentityProfile {
        exploration,
        commitment,
        status,
        description: status.description().to_string(),
    }
}

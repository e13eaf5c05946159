//! Central assessment engine.
//!
//! A pure function of (questions, pathways, matrix, responses): one full
//! scoring pass per submitted response set, deterministic, no I/O. Content
//! is fixed at construction and treated as immutable for the engine's
//! lifetime; the only construction failure is a rejected scoring matrix.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::confidence;
use crate::error::ConfigError;
use crate::matcher::{self, PathwayMatch};
use crate::model::{AssessmentResponse, CareerPathway, Question, ScoringMatrix};
use crate::profile::{
    self, IdentityProfile, InterestProfile, ResponseMap, SelfEfficacyProfile, ValuesProfile,
};
use crate::recommend::{self, Recommendation};

/// Complete output of one scoring pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResults {
    pub interests: InterestProfile,
    pub identity: IdentityProfile,
    pub self_efficacy: SelfEfficacyProfile,
    pub values: ValuesProfile,
    pub pathway_matches: Vec<PathwayMatch>,
    pub recommendations: Vec<Recommendation>,
    /// 0-100 heuristic trust signal, see [`crate::confidence`].
    pub confidence_score: f64,
}

/// The assessment scoring and matching engine.
#[derive(Debug)]
pub struct AssessmentEngine {
    questions: Vec<Question>,
    pathways: Vec<CareerPathway>,
    matrix: ScoringMatrix,
}

impl AssessmentEngine {
    /// Construct an engine, rejecting an unusable scoring matrix.
    ///
    /// Empty question or pathway lists are valid and produce degenerate
    /// (zero-filled / empty) results rather than errors.
    pub fn new(
        questions: Vec<Question>,
        pathways: Vec<CareerPathway>,
        matrix: ScoringMatrix,
    ) -> Result<Self, ConfigError> {
        validate_matrix(&matrix)?;
        Ok(Self {
            questions,
            pathways,
            matrix,
        })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn pathways(&self) -> &[CareerPathway] {
        &self.pathways
    }

    pub fn matrix(&self) -> &ScoringMatrix {
        &self.matrix
    }

    /// Run one full scoring pass. Total and non-throwing for any
    /// syntactically valid response list.
    pub fn calculate_results(&self, responses: &[AssessmentResponse]) -> AssessmentResults {
        let response_map = self.response_map(responses);

        let interests = profile::interest::calculate(&self.questions, &self.matrix, &response_map);
        let identity = profile::identity::calculate(&self.questions, &response_map);
        let self_efficacy = profile::efficacy::calculate(&self.questions, &response_map);
        let values = profile::values::calculate(&self.questions, &response_map);

        let pathway_matches = matcher::match_pathways(
            &self.pathways,
            &self.matrix,
            &interests,
            &identity,
            &self_efficacy,
            &values,
        );

        let recommendations = recommend::generate(&pathway_matches, &identity, &self_efficacy);

        let confidence_score =
            confidence::score(&pathway_matches, response_map.len(), self.questions.len());

        AssessmentResults {
            interests,
            identity,
            self_efficacy,
            values,
            pathway_matches,
            recommendations,
            confidence_score,
        }
    }

    /// Normalize raw responses into question id -> value.
    ///
    /// Later duplicates win. Explicit skips, responses to unknown
    /// questions, and values outside the question's declared options are
    /// dropped rather than failing the pass.
    fn response_map(&self, responses: &[AssessmentResponse]) -> ResponseMap {
        let by_id: HashMap<&str, &Question> =
            self.questions.iter().map(|q| (q.id.as_str(), q)).collect();

        let mut map = ResponseMap::new();
        for response in responses {
            if response.is_skip() {
                map.remove(&response.question_id);
                continue;
            }
            let Some(question) = by_id.get(response.question_id.as_str()) else {
                tracing::warn!(
                    question_id = %response.question_id,
                    "ignoring response to unknown question"
                );
                continue;
            };
            if !question.accepts_value(response.value) {
                tracing::warn!(
                    question_id = %response.question_id,
                    value = response.value,
                    "ignoring response outside declared options"
                );
                continue;
            }
            map.insert(response.question_id.clone(), response.value);
        }
        map
    }
}

fn validate_matrix(matrix: &ScoringMatrix) -> Result<(), ConfigError> {
    let w = &matrix.matching_weights;
    for (name, value) in [
        ("interests", w.interests),
        ("identity", w.identity),
        ("self_efficacy", w.self_efficacy),
        ("values", w.values),
        ("knowledge", w.knowledge),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::InvalidMatchingWeight { name, value });
        }
    }

    for (interest_type, &value) in &matrix.type_weights {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::InvalidTypeWeight {
                interest_type: *interest_type,
                value,
            });
        }
    }

    let t = &matrix.thresholds;
    for (name, value) in [("high_match", t.high_match), ("moderate_match", t.moderate_match)] {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::InvalidThreshold { name, value });
        }
    }
    if t.moderate_match > t.high_match {
        return Err(ConfigError::InvertedThresholds {
            moderate: t.moderate_match,
            high: t.high_match,
        });
    }
    if t.max_recommendations == 0 || t.min_recommendations > t.max_recommendations {
        return Err(ConfigError::InvalidRecommendationBounds {
            min: t.min_recommendations,
            max: t.max_recommendations,
        });
    }

    let sum = w.sum();
    if (sum - 1.0).abs() > 0.01 {
        tracing::warn!(sum, "matching weights do not sum to 1.0");
    }

    Ok(())
}

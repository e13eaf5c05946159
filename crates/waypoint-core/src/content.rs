//! Content store loading and validation.
//!
//! The offline content pipeline produces three JSON documents: a question
//! list, a pathway list, and one scoring matrix. This module parses them,
//! and runs the authoring checks that must catch data defects before
//! content ever reaches the engine.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{
    CareerPathway, InterestType, MatchingWeights, Question, QuestionCategory, ScoringMatrix,
    Thresholds,
};
use crate::tags;

/// File names written by the content compiler.
pub const QUESTIONS_FILE: &str = "questions.json";
pub const PATHWAYS_FILE: &str = "pathways.json";
pub const MATRIX_FILE: &str = "scoring-matrix.json";

/// The three content documents, loaded together.
#[derive(Debug, Clone)]
pub struct ContentSet {
    pub questions: Vec<Question>,
    pub pathways: Vec<CareerPathway>,
    pub matrix: ScoringMatrix,
}

/// Load a full content set from a directory.
pub fn load_content_dir(dir: &Path) -> Result<ContentSet> {
    anyhow::ensure!(dir.is_dir(), "not a directory: {}", dir.display());

    let questions = parse_questions(&dir.join(QUESTIONS_FILE))?;
    let pathways = parse_pathways(&dir.join(PATHWAYS_FILE))?;
    let matrix = parse_matrix(&dir.join(MATRIX_FILE))?;

    Ok(ContentSet {
        questions,
        pathways,
        matrix,
    })
}

/// Parse the question list from a JSON file.
pub fn parse_questions(path: &Path) -> Result<Vec<Question>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read questions file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse questions JSON: {}", path.display()))
}

/// Parse the pathway list from a JSON file.
pub fn parse_pathways(path: &Path) -> Result<Vec<CareerPathway>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read pathways file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse pathways JSON: {}", path.display()))
}

/// Parse the scoring matrix from a JSON file.
pub fn parse_matrix(path: &Path) -> Result<ScoringMatrix> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scoring matrix: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse scoring matrix JSON: {}", path.display()))
}

/// The scoring matrix the content compiler emits when no override exists.
pub fn default_scoring_matrix() -> ScoringMatrix {
    let type_weights: HashMap<InterestType, f64> = [
        (InterestType::R, 1.1),
        (InterestType::I, 1.2),
        (InterestType::A, 1.0),
        (InterestType::S, 1.05),
        (InterestType::E, 1.0),
        (InterestType::C, 1.0),
    ]
    .into();

    ScoringMatrix {
        type_weights,
        matching_weights: MatchingWeights {
            interests: 0.4,
            identity: 0.25,
            self_efficacy: 0.2,
            values: 0.1,
            knowledge: 0.05,
        },
        thresholds: Thresholds {
            high_match: 0.8,
            moderate_match: 0.6,
            min_recommendations: 3,
            max_recommendations: 5,
        },
    }
}

/// A warning from content validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Question or pathway id, if applicable.
    pub item_id: Option<String>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn for_item(id: &str, message: impl Into<String>) -> Self {
        Self {
            item_id: Some(id.to_string()),
            message: message.into(),
        }
    }
}

/// Validate a content set for authoring defects.
///
/// None of these stop the engine; they exist so defects are caught in the
/// pipeline rather than surfacing as silently-empty score buckets.
pub fn validate_content(content: &ContentSet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let pathway_ids: HashSet<&str> = content.pathways.iter().map(|p| p.id.as_str()).collect();

    // Duplicate question ids
    let mut seen = HashSet::new();
    for q in &content.questions {
        if !seen.insert(&q.id) {
            warnings.push(ValidationWarning::for_item(
                &q.id,
                format!("duplicate question ID: {}", q.id),
            ));
        }
    }

    for q in &content.questions {
        // Option cardinality for fixed formats
        if let Some(expected) = q.kind.expected_options() {
            if q.response_options.len() != expected {
                warnings.push(ValidationWarning::for_item(
                    &q.id,
                    format!(
                        "expected {expected} response options, found {}",
                        q.response_options.len()
                    ),
                ));
            }
        }

        // Option values must be contiguous
        if q.response_options.len() > 1 {
            let contiguous = q
                .response_options
                .windows(2)
                .all(|w| (w[1].value - w[0].value - 1.0).abs() < 1e-9);
            if !contiguous {
                warnings.push(ValidationWarning::for_item(
                    &q.id,
                    "response option values are not contiguous",
                ));
            }
        }

        // Weight domain
        if !(0.0..=2.0).contains(&q.weight) || !q.weight.is_finite() {
            warnings.push(ValidationWarning::for_item(
                &q.id,
                format!("question weight {} outside [0, 2]", q.weight),
            ));
        }

        // Pathway scoring references and domain
        for (pathway_id, score) in &q.pathway_scoring {
            if !pathway_ids.contains(pathway_id.as_str()) {
                warnings.push(ValidationWarning::for_item(
                    &q.id,
                    format!("pathway_scoring references unknown pathway '{pathway_id}'"),
                ));
            }
            if !(0.0..=1.0).contains(score) || !score.is_finite() {
                warnings.push(ValidationWarning::for_item(
                    &q.id,
                    format!("pathway_scoring weight {score} for '{pathway_id}' outside [0, 1]"),
                ));
            }
        }

        // Engine-relevant tags must resolve through the static tables
        let resolved = match q.category {
            QuestionCategory::Interest => tags::interest_type(&q.subcategory).is_some(),
            QuestionCategory::Identity => tags::identity_dimension(&q.subcategory).is_some(),
            QuestionCategory::SelfEfficacy => tags::skill_domain(&q.subcategory).is_some(),
            QuestionCategory::Values => tags::value_category(&q.subcategory).is_some(),
            _ => true,
        };
        if !resolved {
            warnings.push(ValidationWarning::for_item(
                &q.id,
                format!(
                    "subcategory '{}' does not map to any {} bucket",
                    q.subcategory, q.category
                ),
            ));
        }
    }

    // Duplicate pathway ids
    let mut seen = HashSet::new();
    for p in &content.pathways {
        if !seen.insert(&p.id) {
            warnings.push(ValidationWarning::for_item(
                &p.id,
                format!("duplicate pathway ID: {}", p.id),
            ));
        }
    }

    // Too many declared interest codes dilutes matching
    for p in &content.pathways {
        if p.interest_codes.len() > 3 {
            warnings.push(ValidationWarning::for_item(
                &p.id,
                format!(
                    "{} interest codes declared; more than 3 dilutes matching",
                    p.interest_codes.len()
                ),
            ));
        }
    }

    // Matrix weight split should sum to ~1.0
    let sum = content.matrix.matching_weights.sum();
    if (sum - 1.0).abs() > 0.01 {
        warnings.push(ValidationWarning {
            item_id: None,
            message: format!("matching weights sum to {sum:.3}, expected ~1.0"),
        });
    }

    warnings
}

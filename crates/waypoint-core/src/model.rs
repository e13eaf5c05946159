//! Core data model types for waypoint.
//!
//! These are the fundamental types the entire waypoint system uses to
//! represent questionnaire content, career pathways, scoring configuration,
//! and collected responses. All content types are immutable once loaded.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reserved response value meaning "explicitly skipped".
pub const SKIP_SENTINEL: f64 = -1.0;

/// A single questionnaire item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier for this question.
    pub id: String,
    /// Which assessment dimension this question belongs to.
    pub category: QuestionCategory,
    /// Free-text grouping tag resolved against the static tables in
    /// [`crate::tags`] at content-load time.
    pub subcategory: String,
    /// The prompt shown to the respondent.
    pub text: String,
    /// Response format.
    #[serde(rename = "type")]
    pub kind: ResponseKind,
    /// Contribution multiplier in [0, 2].
    pub weight: f64,
    /// Optional research citation for the item.
    #[serde(default)]
    pub research_source: Option<String>,
    /// Ordered response options presented to the respondent.
    #[serde(default)]
    pub response_options: Vec<ResponseOption>,
    /// Pathway identifier -> scoring weight in [0, 1].
    #[serde(default)]
    pub pathway_scoring: HashMap<String, f64>,
}

impl Question {
    /// Whether `value` is one of this question's declared option values.
    pub fn accepts_value(&self, value: f64) -> bool {
        self.response_options.iter().any(|o| o.value == value)
    }
}

/// One selectable answer for a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseOption {
    /// Numeric value recorded when this option is chosen.
    pub value: f64,
    /// Label shown to the respondent.
    pub label: String,
}

/// Assessment dimension a question measures.
///
/// The engine scores the first four; the remaining categories are accepted
/// from content but only contribute through their `pathway_scoring` maps
/// upstream, never through a profile calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionCategory {
    Interest,
    Identity,
    Values,
    SelfEfficacy,
    OutcomeExpectations,
    WorkEnvironment,
    CareerMaturity,
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuestionCategory::Interest => "interest",
            QuestionCategory::Identity => "identity",
            QuestionCategory::Values => "values",
            QuestionCategory::SelfEfficacy => "self-efficacy",
            QuestionCategory::OutcomeExpectations => "outcome-expectations",
            QuestionCategory::WorkEnvironment => "work-environment",
            QuestionCategory::CareerMaturity => "career-maturity",
        };
        write!(f, "{s}")
    }
}

/// Response format of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    /// Five-point Likert scale, serialized as `likert_5`.
    #[serde(rename = "likert_5")]
    Likert5,
    MultipleChoice,
    Ranking,
    Binary,
}

impl ResponseKind {
    /// Expected option cardinality, if the format fixes one.
    pub fn expected_options(&self) -> Option<usize> {
        match self {
            ResponseKind::Likert5 => Some(5),
            ResponseKind::Binary => Some(2),
            ResponseKind::MultipleChoice | ResponseKind::Ranking => None,
        }
    }
}

/// One of the six vocational interest types (RIASEC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InterestType {
    R,
    I,
    A,
    S,
    E,
    C,
}

impl InterestType {
    /// All six types in canonical R-I-A-S-E-C order.
    pub const ALL: [InterestType; 6] = [
        InterestType::R,
        InterestType::I,
        InterestType::A,
        InterestType::S,
        InterestType::E,
        InterestType::C,
    ];

    /// Short human-readable description used in match reasons.
    pub fn description(&self) -> &'static str {
        match self {
            InterestType::R => "Realistic - hands-on, practical work",
            InterestType::I => "Investigative - research and analysis",
            InterestType::A => "Artistic - creative and expressive",
            InterestType::S => "Social - helping and working with people",
            InterestType::E => "Enterprising - leadership and business",
            InterestType::C => "Conventional - organized and systematic",
        }
    }
}

impl fmt::Display for InterestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            InterestType::R => 'R',
            InterestType::I => 'I',
            InterestType::A => 'A',
            InterestType::S => 'S',
            InterestType::E => 'E',
            InterestType::C => 'C',
        };
        write!(f, "{c}")
    }
}

impl FromStr for InterestType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" => Ok(InterestType::R),
            "I" => Ok(InterestType::I),
            "A" => Ok(InterestType::A),
            "S" => Ok(InterestType::S),
            "E" => Ok(InterestType::E),
            "C" => Ok(InterestType::C),
            other => Err(format!("unknown interest type: {other}")),
        }
    }
}

/// A career pathway the assessment recommends against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerPathway {
    /// Unique identifier.
    pub id: String,
    /// Broad grouping of the pathway.
    pub category: PathwayCategory,
    /// Display title.
    pub title: String,
    /// Declared interest-type codes. More than three dilutes matching and
    /// is flagged by the content validator, never enforced here.
    #[serde(default)]
    pub interest_codes: Vec<InterestType>,
    /// Short overview text.
    #[serde(default)]
    pub overview: String,
    /// Free-form career progression section.
    #[serde(default)]
    pub progression: Option<String>,
    /// Free-form education section.
    #[serde(default)]
    pub education: Option<String>,
    /// Free-form skills section.
    #[serde(default)]
    pub skills: Option<String>,
    /// Free-form outlook section.
    #[serde(default)]
    pub outlook: Option<String>,
}

/// Broad grouping of a career pathway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathwayCategory {
    Traditional,
    Emerging,
    Interdisciplinary,
}

impl fmt::Display for PathwayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathwayCategory::Traditional => write!(f, "traditional"),
            PathwayCategory::Emerging => write!(f, "emerging"),
            PathwayCategory::Interdisciplinary => write!(f, "interdisciplinary"),
        }
    }
}

/// Scoring configuration supplied by the content pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringMatrix {
    /// Per-interest-type weight multipliers.
    pub type_weights: HashMap<InterestType, f64>,
    /// Five-way weight split for pathway matching. Should sum to ~1.0.
    pub matching_weights: MatchingWeights,
    /// Classification thresholds and recommendation bounds.
    pub thresholds: Thresholds,
}

/// Five-way weight split for pathway matching.
///
/// All five fields are required; a missing field is a construction-time
/// configuration error surfaced during deserialization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchingWeights {
    pub interests: f64,
    pub identity: f64,
    pub self_efficacy: f64,
    pub values: f64,
    pub knowledge: f64,
}

impl MatchingWeights {
    /// Sum of the five fractions.
    pub fn sum(&self) -> f64 {
        self.interests + self.identity + self.self_efficacy + self.values + self.knowledge
    }
}

/// Match classification thresholds and recommendation count bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Thresholds {
    /// Match score at or above this is a "High" match.
    pub high_match: f64,
    /// Match score at or above this (but below `high_match`) is "Moderate".
    pub moderate_match: f64,
    /// Minimum recommendations to surface.
    pub min_recommendations: usize,
    /// Ranked matches are truncated to this many.
    pub max_recommendations: usize,
}

/// One collected answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResponse {
    /// The question this answers.
    pub question_id: String,
    /// Chosen option value, or [`SKIP_SENTINEL`] for an explicit skip.
    pub value: f64,
    /// When the answer was collected.
    pub timestamp: DateTime<Utc>,
}

impl AssessmentResponse {
    /// Whether this response is the explicit-skip marker.
    pub fn is_skip(&self) -> bool {
        self.value == SKIP_SENTINEL
    }
}

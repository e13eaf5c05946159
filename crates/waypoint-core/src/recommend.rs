//! Rule-based recommendation generation.
//!
//! A short, prioritized action list derived from the top pathway match, the
//! identity status, and self-efficacy gaps. Deterministic and finite.

use serde::{Deserialize, Serialize};

use crate::matcher::PathwayMatch;
use crate::profile::{IdentityProfile, IdentityStatus, SelfEfficacyProfile};

/// Time horizon of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Immediate,
    ShortTerm,
    LongTerm,
}

/// What a recommendation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    Education,
    Experience,
    Skills,
    Exploration,
}

/// One prioritized recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub category: RecommendationCategory,
    pub title: String,
    pub description: String,
    pub action_steps: Vec<String>,
}

/// Generate the recommendation list.
pub fn generate(
    matches: &[PathwayMatch],
    identity: &IdentityProfile,
    efficacy: &SelfEfficacyProfile,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if let Some(top) = matches.first() {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Immediate,
            category: RecommendationCategory::Exploration,
            title: format!("Explore {}", top.pathway.title),
            description: format!(
                "Based on your assessment, {} shows strong alignment with your interests and profile.",
                top.pathway.title
            ),
            action_steps: vec![
                "Research day-in-the-life descriptions of professionals in this field".to_string(),
                "Look for internship or shadowing opportunities".to_string(),
                "Connect with professionals through professional organizations".to_string(),
            ],
        });
    }

    if matches!(
        identity.status,
        IdentityStatus::Moratorium | IdentityStatus::Diffusion
    ) {
        recommendations.push(Recommendation {
            kind: RecommendationKind::ShortTerm,
            category: RecommendationCategory::Exploration,
            title: "Expand Career Exploration".to_string(),
            description: "Your assessment suggests you would benefit from broader career exploration."
                .to_string(),
            action_steps: vec![
                "Attend career fairs and information sessions".to_string(),
                "Take personality and interest assessments".to_string(),
                "Schedule informational interviews with professionals".to_string(),
                "Join relevant student organizations or clubs".to_string(),
            ],
        });
    }

    if !efficacy.development_areas.is_empty() {
        recommendations.push(Recommendation {
            kind: RecommendationKind::LongTerm,
            category: RecommendationCategory::Skills,
            title: "Skill Development Focus".to_string(),
            description: "Strengthening these areas will improve your career preparation."
                .to_string(),
            action_steps: efficacy
                .development_areas
                .iter()
                .map(|area| format!("Work on: {area}"))
                .collect(),
        });
    }

    recommendations
}

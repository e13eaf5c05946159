//! Pathway matching and ranking.
//!
//! Scores every pathway against the combined profile with the matrix's
//! five-way weight split, classifies confidence against the configured
//! thresholds, and ranks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{CareerPathway, PathwayCategory, ScoringMatrix};
use crate::profile::{
    IdentityProfile, IdentityStatus, InterestProfile, SelfEfficacyProfile, ValuesProfile,
};

/// One sub-signal feeding a pathway match score.
///
/// `Placeholder` marks a signal that is not yet modeled and carries a fixed
/// stand-in constant, so callers and tests can tell "computed low score"
/// apart from "feature unimplemented".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "score", rename_all = "snake_case")]
pub enum SubScore {
    Computed(f64),
    Placeholder(f64),
}

impl SubScore {
    /// The numeric value regardless of provenance.
    pub fn value(&self) -> f64 {
        match self {
            SubScore::Computed(v) | SubScore::Placeholder(v) => *v,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, SubScore::Placeholder(_))
    }
}

/// The five normalized sub-scores behind one match.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub interests: SubScore,
    pub identity: SubScore,
    pub self_efficacy: SubScore,
    pub values: SubScore,
    pub knowledge: SubScore,
}

/// Coarse classification of a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    High,
    Moderate,
    Low,
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidenceLevel::High => write!(f, "High"),
            ConfidenceLevel::Moderate => write!(f, "Moderate"),
            ConfidenceLevel::Low => write!(f, "Low"),
        }
    }
}

/// One ranked pathway match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathwayMatch {
    pub pathway: CareerPathway,
    /// Blended match score in [0, 1].
    pub match_score: f64,
    pub confidence: ConfidenceLevel,
    pub reasons: Vec<String>,
    pub considerations: Vec<String>,
    pub breakdown: MatchBreakdown,
}

/// Score, rank, and truncate all pathways against the combined profile.
pub fn match_pathways(
    pathways: &[CareerPathway],
    matrix: &ScoringMatrix,
    interests: &InterestProfile,
    identity: &IdentityProfile,
    efficacy: &SelfEfficacyProfile,
    values: &ValuesProfile,
) -> Vec<PathwayMatch> {
    let mut matches: Vec<PathwayMatch> = pathways
        .iter()
        .map(|pathway| score_pathway(pathway, matrix, interests, identity, efficacy, values))
        .collect();

    // Stable sort: ties keep content order, no secondary key is defined.
    matches.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    matches.truncate(matrix.thresholds.max_recommendations);
    matches
}

fn score_pathway(
    pathway: &CareerPathway,
    matrix: &ScoringMatrix,
    interests: &InterestProfile,
    identity: &IdentityProfile,
    efficacy: &SelfEfficacyProfile,
    values: &ValuesProfile,
) -> PathwayMatch {
    let breakdown = MatchBreakdown {
        interests: interest_alignment(pathway, interests),
        identity: SubScore::Computed((identity.exploration + identity.commitment) / 10.0),
        self_efficacy: SubScore::Computed(efficacy.overall / 5.0),
        values: values_alignment(pathway, values),
        knowledge: SubScore::Placeholder(0.5),
    };

    let weights = &matrix.matching_weights;
    let raw = breakdown.interests.value() * weights.interests
        + breakdown.identity.value() * weights.identity
        + breakdown.self_efficacy.value() * weights.self_efficacy
        + breakdown.values.value() * weights.values
        + breakdown.knowledge.value() * weights.knowledge;
    let match_score = raw.clamp(0.0, 1.0);

    let confidence = if match_score >= matrix.thresholds.high_match {
        ConfidenceLevel::High
    } else if match_score >= matrix.thresholds.moderate_match {
        ConfidenceLevel::Moderate
    } else {
        ConfidenceLevel::Low
    };

    PathwayMatch {
        match_score,
        confidence,
        reasons: match_reasons(pathway, interests, identity, efficacy),
        considerations: considerations(identity, efficacy),
        breakdown,
        pathway: pathway.clone(),
    }
}

/// Mean of the profile's scores over the pathway's declared codes,
/// normalized to [0, 1] against the 5-point scale. A pathway with no
/// declared codes gets a neutral 0.5.
fn interest_alignment(pathway: &CareerPathway, interests: &InterestProfile) -> SubScore {
    if pathway.interest_codes.is_empty() {
        return SubScore::Computed(0.5);
    }
    let sum: f64 = pathway
        .interest_codes
        .iter()
        .map(|code| interests.scores.get(code).copied().unwrap_or(0.0))
        .sum();
    let normalized = sum / (pathway.interest_codes.len() as f64 * 5.0);
    SubScore::Computed(normalized.min(1.0))
}

/// Coarse category-based stand-in. True integration with the computed
/// values profile is tracked as a follow-up, so this stays an explicit
/// placeholder rather than a silent constant.
fn values_alignment(pathway: &CareerPathway, _values: &ValuesProfile) -> SubScore {
    let score = match pathway.category {
        PathwayCategory::Emerging => 0.7,
        PathwayCategory::Traditional => 0.6,
        PathwayCategory::Interdisciplinary => 0.5,
    };
    SubScore::Placeholder(score)
}

fn match_reasons(
    pathway: &CareerPathway,
    interests: &InterestProfile,
    identity: &IdentityProfile,
    efficacy: &SelfEfficacyProfile,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if pathway.interest_codes.contains(&interests.primary) {
        reasons.push(format!(
            "Strong match with your {} ({}) interests",
            interests.primary,
            interests.primary.description()
        ));
    }
    if identity.status == IdentityStatus::Achievement {
        reasons.push("Your strong career identity aligns well with this path".to_string());
    }
    if efficacy.overall >= 4.0 {
        reasons.push("Your confidence in your abilities fits this career well".to_string());
    }

    reasons
}

fn considerations(identity: &IdentityProfile, efficacy: &SelfEfficacyProfile) -> Vec<String> {
    let mut considerations = Vec::new();

    if efficacy.overall < 3.0 {
        considerations.push(
            "Consider building confidence through coursework and experiences".to_string(),
        );
    }
    if identity.status == IdentityStatus::Diffusion {
        considerations.push(
            "Explore this field through informational interviews and job shadowing before committing"
                .to_string(),
        );
    }

    considerations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::default_scoring_matrix;
    use crate::model::InterestType;
    use std::collections::BTreeMap;

    fn pathway(id: &str, category: PathwayCategory, codes: &[InterestType]) -> CareerPathway {
        CareerPathway {
            id: id.into(),
            category,
            title: id.to_uppercase(),
            interest_codes: codes.to_vec(),
            overview: String::new(),
            progression: None,
            education: None,
            skills: None,
            outlook: None,
        }
    }

    fn interest_profile(scores: &[(InterestType, f64)]) -> InterestProfile {
        let mut map: BTreeMap<InterestType, f64> =
            InterestType::ALL.iter().map(|t| (*t, 0.0)).collect();
        for (t, s) in scores {
            map.insert(*t, *s);
        }
        let primary = scores
            .iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(t, _)| *t)
            .unwrap_or(InterestType::R);
        InterestProfile {
            scores: map,
            primary,
            secondary: None,
            code: primary.to_string(),
        }
    }

    fn identity(exploration: f64, commitment: f64) -> IdentityProfile {
        let status = IdentityStatus::classify(exploration, commitment);
        IdentityProfile {
            exploration,
            commitment,
            status,
            description: status.description().to_string(),
        }
    }

    fn efficacy(overall: f64) -> SelfEfficacyProfile {
        SelfEfficacyProfile {
            overall,
            domains: crate::profile::DomainScores {
                basic: overall,
                applied: overall,
                inquiry: overall,
                innovation: overall,
            },
            strengths: vec![],
            development_areas: vec![],
        }
    }

    fn values() -> ValuesProfile {
        crate::profile::values::calculate(&[], &Default::default())
    }

    #[test]
    fn perfect_interest_alignment_is_one() {
        let p = pathway("geo", PathwayCategory::Traditional, &[InterestType::I]);
        let interests = interest_profile(&[(InterestType::I, 5.0)]);
        let alignment = interest_alignment(&p, &interests);
        assert_eq!(alignment, SubScore::Computed(1.0));
    }

    #[test]
    fn no_declared_codes_is_neutral() {
        let p = pathway("generic", PathwayCategory::Traditional, &[]);
        let interests = interest_profile(&[]);
        assert_eq!(interest_alignment(&p, &interests), SubScore::Computed(0.5));
    }

    #[test]
    fn values_and_knowledge_are_placeholders() {
        let p = pathway("x", PathwayCategory::Emerging, &[InterestType::R]);
        let matches = match_pathways(
            &[p],
            &default_scoring_matrix(),
            &interest_profile(&[]),
            &identity(0.0, 0.0),
            &efficacy(0.0),
            &values(),
        );
        let b = &matches[0].breakdown;
        assert!(b.values.is_placeholder());
        assert!(b.knowledge.is_placeholder());
        assert!(!b.interests.is_placeholder());
        assert_eq!(b.values.value(), 0.7);
        assert_eq!(b.knowledge.value(), 0.5);
    }

    #[test]
    fn scores_stay_in_unit_interval() {
        let p = pathway("max", PathwayCategory::Emerging, &[InterestType::R]);
        let matches = match_pathways(
            &[p],
            &default_scoring_matrix(),
            &interest_profile(&[(InterestType::R, 5.0)]),
            &identity(5.0, 5.0),
            &efficacy(5.0),
            &values(),
        );
        assert!(matches[0].match_score <= 1.0);
        assert!(matches[0].match_score >= 0.0);
    }

    #[test]
    fn ranking_is_descending_and_truncated() {
        // Distinct interest alignments via different codes.
        let pathways = vec![
            pathway("low", PathwayCategory::Traditional, &[InterestType::C]),
            pathway("high", PathwayCategory::Traditional, &[InterestType::R]),
            pathway("mid", PathwayCategory::Traditional, &[InterestType::I]),
        ];
        let interests = interest_profile(&[
            (InterestType::R, 5.0),
            (InterestType::I, 3.0),
            (InterestType::C, 1.0),
        ]);
        let mut matrix = default_scoring_matrix();
        matrix.thresholds.max_recommendations = 2;
        let matches = match_pathways(
            &pathways,
            &matrix,
            &interests,
            &identity(3.0, 3.0),
            &efficacy(3.0),
            &values(),
        );
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].pathway.id, "high");
        assert_eq!(matches[1].pathway.id, "mid");
        assert!(matches[0].match_score > matches[1].match_score);
    }

    #[test]
    fn ties_keep_content_order() {
        let pathways = vec![
            pathway("first", PathwayCategory::Traditional, &[InterestType::R]),
            pathway("second", PathwayCategory::Traditional, &[InterestType::R]),
        ];
        let matches = match_pathways(
            &pathways,
            &default_scoring_matrix(),
            &interest_profile(&[(InterestType::R, 4.0)]),
            &identity(3.0, 3.0),
            &efficacy(3.0),
            &values(),
        );
        assert_eq!(matches[0].pathway.id, "first");
        assert_eq!(matches[1].pathway.id, "second");
    }

    #[test]
    fn confidence_levels_follow_thresholds() {
        let mut matrix = default_scoring_matrix();
        matrix.thresholds.high_match = 0.8;
        matrix.thresholds.moderate_match = 0.6;

        let p = pathway("x", PathwayCategory::Emerging, &[InterestType::R]);
        let high = match_pathways(
            &[p.clone()],
            &matrix,
            &interest_profile(&[(InterestType::R, 5.0)]),
            &identity(5.0, 5.0),
            &efficacy(5.0),
            &values(),
        );
        assert_eq!(high[0].confidence, ConfidenceLevel::High);

        let low = match_pathways(
            &[p],
            &matrix,
            &interest_profile(&[]),
            &identity(0.0, 0.0),
            &efficacy(0.0),
            &values(),
        );
        assert_eq!(low[0].confidence, ConfidenceLevel::Low);
    }

    #[test]
    fn reasons_mention_primary_code_when_declared() {
        let p = pathway("geo", PathwayCategory::Traditional, &[InterestType::I]);
        let interests = interest_profile(&[(InterestType::I, 5.0)]);
        let matches = match_pathways(
            &[p],
            &default_scoring_matrix(),
            &interests,
            &identity(4.0, 4.0),
            &efficacy(4.5),
            &values(),
        );
        let reasons = &matches[0].reasons;
        assert!(reasons.iter().any(|r| r.contains("I (")));
        assert!(reasons.iter().any(|r| r.contains("identity")));
        assert!(reasons.iter().any(|r| r.contains("confidence")));
    }

    #[test]
    fn considerations_flag_low_efficacy_and_diffusion() {
        let p = pathway("geo", PathwayCategory::Traditional, &[]);
        let matches = match_pathways(
            &[p],
            &default_scoring_matrix(),
            &interest_profile(&[]),
            &identity(1.0, 1.0),
            &efficacy(2.0),
            &values(),
        );
        assert_eq!(matches[0].considerations.len(), 2);
    }
}

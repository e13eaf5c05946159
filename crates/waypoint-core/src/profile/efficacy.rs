//! Self-efficacy profile across named skill domains.

use serde::{Deserialize, Serialize};

use crate::model::{Question, QuestionCategory};
use crate::profile::{ResponseMap, WeightedMean};
use crate::tags::{self, SkillDomain};

/// Domain score at or above this is listed as a strength.
const STRENGTH_CUTOFF: f64 = 4.0;
/// Domain score below this is listed as a development area.
const GAP_CUTOFF: f64 = 3.0;

/// Per-domain weighted-mean scores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DomainScores {
    pub basic: f64,
    pub applied: f64,
    pub inquiry: f64,
    pub innovation: f64,
}

impl DomainScores {
    pub fn get(&self, domain: SkillDomain) -> f64 {
        match domain {
            SkillDomain::Basic => self.basic,
            SkillDomain::Applied => self.applied,
            SkillDomain::Inquiry => self.inquiry,
            SkillDomain::Innovation => self.innovation,
        }
    }
}

/// Derived self-efficacy profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfEfficacyProfile {
    /// Innovation-domain score when that domain has answered questions,
    /// otherwise a 30/40/30 blend of basic/applied/inquiry.
    pub overall: f64,
    pub domains: DomainScores,
    pub strengths: Vec<String>,
    pub development_areas: Vec<String>,
}

/// Reduce all self-efficacy questions into a [`SelfEfficacyProfile`].
pub fn calculate(questions: &[Question], responses: &ResponseMap) -> SelfEfficacyProfile {
    let mut means = [WeightedMean::default(); 4];

    for question in questions {
        if question.category != QuestionCategory::SelfEfficacy {
            continue;
        }
        let Some(domain) = tags::skill_domain(&question.subcategory) else {
            continue;
        };
        let Some(&value) = responses.get(&question.id) else {
            continue;
        };
        let slot = SkillDomain::ALL.iter().position(|d| *d == domain).unwrap_or(0);
        means[slot].add(value, question.weight);
    }

    let domains = DomainScores {
        basic: means[0].value(),
        applied: means[1].value(),
        inquiry: means[2].value(),
        innovation: means[3].value(),
    };

    let overall = if domains.innovation > 0.0 {
        domains.innovation
    } else {
        domains.basic * 0.3 + domains.applied * 0.4 + domains.inquiry * 0.3
    };

    let mut strengths = Vec::new();
    let mut development_areas = Vec::new();

    if domains.basic >= STRENGTH_CUTOFF {
        strengths.push("Strong foundational confidence".to_string());
    }
    if domains.applied >= STRENGTH_CUTOFF {
        strengths.push("Confident in practical applications".to_string());
    }
    if domains.inquiry >= STRENGTH_CUTOFF {
        strengths.push("Strong data analysis confidence".to_string());
    }
    if overall >= STRENGTH_CUTOFF {
        strengths.push("Overall high confidence".to_string());
    }

    if domains.basic < GAP_CUTOFF {
        development_areas.push("Build foundational confidence".to_string());
    }
    if domains.applied < GAP_CUTOFF {
        development_areas.push("Gain more hands-on experience".to_string());
    }
    if domains.inquiry < GAP_CUTOFF {
        development_areas.push("Practice data analysis skills".to_string());
    }

    SelfEfficacyProfile {
        overall,
        domains,
        strengths,
        development_areas,
    }
}

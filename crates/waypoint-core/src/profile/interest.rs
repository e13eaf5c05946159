//! Six-dimension vocational interest profile (RIASEC).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{InterestType, Question, QuestionCategory, ScoringMatrix};
use crate::profile::{ResponseMap, WeightedMean};
use crate::tags;

/// Derived interest profile: one score per type plus the dominant codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestProfile {
    /// Weighted-mean score per interest type, on the response scale.
    pub scores: BTreeMap<InterestType, f64>,
    /// Highest-scoring type (first in R-I-A-S-E-C order on exact ties).
    pub primary: InterestType,
    /// Runner-up, reported only when its score is at least 80% of the
    /// primary score and non-zero.
    pub secondary: Option<InterestType>,
    /// Code string, e.g. "IR" or just "I".
    pub code: String,
}

/// Reduce all interest questions into an [`InterestProfile`].
///
/// Questions are bucketed by their resolved type tag; each bucket is a
/// weighted mean of answered questions with the per-type matrix multiplier
/// folded into the weight. Unresolvable tags were already flagged by the
/// content validator and simply land in no bucket.
pub fn calculate(
    questions: &[Question],
    matrix: &ScoringMatrix,
    responses: &ResponseMap,
) -> InterestProfile {
    let mut means: BTreeMap<InterestType, WeightedMean> = InterestType::ALL
        .iter()
        .map(|t| (*t, WeightedMean::default()))
        .collect();

    for question in questions {
        if question.category != QuestionCategory::Interest {
            continue;
        }
        let Some(interest_type) = tags::interest_type(&question.subcategory) else {
            continue;
        };
        let Some(&value) = responses.get(&question.id) else {
            continue;
        };
        let type_weight = matrix
            .type_weights
            .get(&interest_type)
            .copied()
            .unwrap_or(1.0);
        if let Some(mean) = means.get_mut(&interest_type) {
            mean.add(value, question.weight * type_weight);
        }
    }

    let scores: BTreeMap<InterestType, f64> =
        means.iter().map(|(t, m)| (*t, m.value())).collect();

    // Stable descending sort over the canonical order, so exact ties fall
    // back to R-I-A-S-E-C order.
    let mut ranked: Vec<(InterestType, f64)> = InterestType::ALL
        .iter()
        .map(|t| (*t, scores[t]))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let (primary, top_score) = ranked[0];
    let (runner_up, runner_score) = ranked[1];

    // Secondary iff runner-up >= 80% of primary. Written as 5*x >= 4*top so
    // a runner-up at exactly the 80% boundary is reported.
    let secondary = if runner_score > 0.0 && runner_score * 5.0 >= top_score * 4.0 {
        Some(runner_up)
    } else {
        None
    };

    let code = match secondary {
        Some(s) => format!("{primary}{s}"),
        None => primary.to_string(),
    };

    InterestProfile {
        scores,
        primary,
        secondary,
        code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ResponseKind, ResponseOption};
    use std::collections::HashMap;

    fn likert_options() -> Vec<ResponseOption> {
        (1..=5)
            .map(|v| ResponseOption {
                value: v as f64,
                label: format!("option {v}"),
            })
            .collect()
    }

    fn question(id: &str, tag: &str, weight: f64) -> Question {
        Question {
            id: id.into(),
            category: QuestionCategory::Interest,
            subcategory: tag.into(),
            text: String::new(),
            kind: ResponseKind::Likert5,
            weight,
            research_source: None,
            response_options: likert_options(),
            pathway_scoring: HashMap::new(),
        }
    }

    fn matrix() -> ScoringMatrix {
        crate::content::default_scoring_matrix()
    }

    fn uniform_matrix() -> ScoringMatrix {
        let mut m = matrix();
        for t in InterestType::ALL {
            m.type_weights.insert(t, 1.0);
        }
        m
    }

    #[test]
    fn empty_responses_score_zero_everywhere() {
        let questions = vec![question("q1", "realistic", 1.0)];
        let profile = calculate(&questions, &matrix(), &HashMap::new());
        for t in InterestType::ALL {
            assert_eq!(profile.scores[&t], 0.0);
        }
        assert_eq!(profile.primary, InterestType::R);
        assert!(profile.secondary.is_none());
        assert_eq!(profile.code, "R");
    }

    #[test]
    fn weighted_mean_per_bucket() {
        let questions = vec![
            question("q1", "investigative", 1.0),
            question("q2", "investigative", 1.0),
        ];
        let responses: ResponseMap =
            [("q1".to_string(), 5.0), ("q2".to_string(), 3.0)].into();
        let profile = calculate(&questions, &uniform_matrix(), &responses);
        assert!((profile.scores[&InterestType::I] - 4.0).abs() < 1e-12);
        assert_eq!(profile.primary, InterestType::I);
    }

    #[test]
    fn unanswered_questions_do_not_dilute() {
        let questions = vec![
            question("q1", "artistic", 1.0),
            question("q2", "artistic", 1.0),
        ];
        let responses: ResponseMap = [("q1".to_string(), 5.0)].into();
        let profile = calculate(&questions, &uniform_matrix(), &responses);
        assert!((profile.scores[&InterestType::A] - 5.0).abs() < 1e-12);
    }

    #[test]
    fn secondary_reported_at_exactly_eighty_percent() {
        let questions = vec![
            question("q_r", "realistic", 1.0),
            question("q_i", "investigative", 1.0),
        ];
        let responses: ResponseMap =
            [("q_r".to_string(), 5.0), ("q_i".to_string(), 4.0)].into();
        let profile = calculate(&questions, &uniform_matrix(), &responses);
        assert_eq!(profile.primary, InterestType::R);
        assert_eq!(profile.secondary, Some(InterestType::I));
        assert_eq!(profile.code, "RI");
    }

    #[test]
    fn secondary_suppressed_below_eighty_percent() {
        let questions = vec![
            question("q_r", "realistic", 1.0),
            question("q_i", "investigative", 1.0),
        ];
        // 3.9 / 5.0 = 78%
        let responses: ResponseMap =
            [("q_r".to_string(), 5.0), ("q_i".to_string(), 3.9)].into();
        let profile = calculate(&questions, &uniform_matrix(), &responses);
        assert_eq!(profile.primary, InterestType::R);
        assert!(profile.secondary.is_none());
        assert_eq!(profile.code, "R");
    }

    #[test]
    fn tie_at_top_keeps_canonical_order_and_reports_secondary() {
        let questions = vec![
            question("q_r", "realistic", 1.0),
            question("q_i", "investigative", 1.0),
        ];
        let responses: ResponseMap =
            [("q_r".to_string(), 5.0), ("q_i".to_string(), 5.0)].into();
        let profile = calculate(&questions, &uniform_matrix(), &responses);
        assert_eq!(profile.primary, InterestType::R);
        assert_eq!(profile.secondary, Some(InterestType::I));
    }

    #[test]
    fn monotonic_in_response_value() {
        let questions = vec![
            question("q1", "social", 1.0),
            question("q2", "social", 1.5),
        ];
        let low: ResponseMap = [("q1".to_string(), 2.0), ("q2".to_string(), 3.0)].into();
        let high: ResponseMap = [("q1".to_string(), 4.0), ("q2".to_string(), 3.0)].into();
        let p_low = calculate(&questions, &uniform_matrix(), &low);
        let p_high = calculate(&questions, &uniform_matrix(), &high);
        assert!(p_high.scores[&InterestType::S] >= p_low.scores[&InterestType::S]);
    }

    #[test]
    fn type_weight_scales_both_sides_of_the_mean() {
        // With a single answered question the type weight cancels out.
        let questions = vec![question("q1", "conventional", 1.0)];
        let responses: ResponseMap = [("q1".to_string(), 4.0)].into();
        let mut m = uniform_matrix();
        m.type_weights.insert(InterestType::C, 2.0);
        let profile = calculate(&questions, &m, &responses);
        assert!((profile.scores[&InterestType::C] - 4.0).abs() < 1e-12);
    }
}

//! Ranked work-values profile.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Question, QuestionCategory};
use crate::profile::{ResponseMap, WeightedMean};
use crate::tags::{self, ValueCategory};

/// How many top categories are reported.
const TOP_VALUES: usize = 5;

/// One ranked value category with its score and fixed description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueScore {
    pub category: ValueCategory,
    pub name: String,
    pub score: f64,
    pub description: String,
}

/// Derived values profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuesProfile {
    /// Top categories sorted descending by score.
    pub top_values: Vec<ValueScore>,
    /// Score for every category.
    pub categories: BTreeMap<ValueCategory, f64>,
}

/// Reduce all values questions into a [`ValuesProfile`].
pub fn calculate(questions: &[Question], responses: &ResponseMap) -> ValuesProfile {
    let mut means: BTreeMap<ValueCategory, WeightedMean> = ValueCategory::ALL
        .iter()
        .map(|c| (*c, WeightedMean::default()))
        .collect();

    for question in questions {
        if question.category != QuestionCategory::Values {
            continue;
        }
        let Some(category) = tags::value_category(&question.subcategory) else {
            continue;
        };
        let Some(&value) = responses.get(&question.id) else {
            continue;
        };
        if let Some(mean) = means.get_mut(&category) {
            mean.add(value, question.weight);
        }
    }

    let categories: BTreeMap<ValueCategory, f64> =
        means.iter().map(|(c, m)| (*c, m.value())).collect();

    // Stable descending sort over the declaration order, then take the top.
    let mut ranked: Vec<(ValueCategory, f64)> = ValueCategory::ALL
        .iter()
        .map(|c| (*c, categories[c]))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let top_values = ranked
        .into_iter()
        .take(TOP_VALUES)
        .map(|(category, score)| ValueScore {
            category,
            name: category.name().to_string(),
            score,
            description: category.description().to_string(),
        })
        .collect();

    ValuesProfile {
        top_values,
        categories,
    }
}

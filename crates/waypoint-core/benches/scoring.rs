use criterion::{black_box, criterion_group, criterion_main, Criterion};

use waypoint_core::content::default_scoring_matrix;
use waypoint_core::engine::AssessmentEngine;
use waypoint_core::model::*;

use chrono::{TimeZone, Utc};
use std::collections::HashMap;

fn likert_options() -> Vec<ResponseOption> {
    (1..=5)
        .map(|v| ResponseOption {
            value: v as f64,
            label: format!("option {v}"),
        })
        .collect()
}

fn make_content() -> (Vec<Question>, Vec<CareerPathway>) {
    let interest_tags = [
        "realistic",
        "investigative",
        "artistic",
        "social",
        "enterprising",
        "conventional",
    ];
    let efficacy_tags = ["math", "field", "data", "general", "innovation"];
    let value_tags = ["discovery", "job_security", "outdoor_work"];

    let mut questions = Vec::new();
    for i in 0..60 {
        let (category, tag) = match i % 4 {
            0 => (
                QuestionCategory::Interest,
                interest_tags[i % interest_tags.len()],
            ),
            1 => (
                QuestionCategory::Identity,
                if i % 2 == 0 { "exploration" } else { "commitment" },
            ),
            2 => (
                QuestionCategory::SelfEfficacy,
                efficacy_tags[i % efficacy_tags.len()],
            ),
            _ => (QuestionCategory::Values, value_tags[i % value_tags.len()]),
        };
        questions.push(Question {
            id: format!("q{i}"),
            category,
            subcategory: tag.to_string(),
            text: format!("question {i}"),
            kind: ResponseKind::Likert5,
            weight: 1.0 + (i % 3) as f64 * 0.5,
            research_source: None,
            response_options: likert_options(),
            pathway_scoring: HashMap::new(),
        });
    }

    let pathways = (0..12)
        .map(|i| CareerPathway {
            id: format!("p{i}"),
            category: match i % 3 {
                0 => PathwayCategory::Traditional,
                1 => PathwayCategory::Emerging,
                _ => PathwayCategory::Interdisciplinary,
            },
            title: format!("Pathway {i}"),
            interest_codes: vec![InterestType::ALL[i % 6], InterestType::ALL[(i + 2) % 6]],
            overview: String::new(),
            progression: None,
            education: None,
            skills: None,
            outlook: None,
        })
        .collect();

    (questions, pathways)
}

fn make_responses(questions: &[Question]) -> Vec<AssessmentResponse> {
    questions
        .iter()
        .enumerate()
        .map(|(i, q)| AssessmentResponse {
            question_id: q.id.clone(),
            value: (i % 5 + 1) as f64,
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        })
        .collect()
}

fn bench_calculate_results(c: &mut Criterion) {
    let (questions, pathways) = make_content();
    let responses = make_responses(&questions);
    let engine =
        AssessmentEngine::new(questions, pathways, default_scoring_matrix()).unwrap();

    let mut group = c.benchmark_group("calculate_results");

    group.bench_function("full_response_set", |b| {
        b.iter(|| engine.calculate_results(black_box(&responses)))
    });

    let sparse: Vec<_> = responses.iter().step_by(4).cloned().collect();
    group.bench_function("sparse_response_set", |b| {
        b.iter(|| engine.calculate_results(black_box(&sparse)))
    });

    group.bench_function("empty_response_set", |b| {
        b.iter(|| engine.calculate_results(black_box(&[])))
    });

    group.finish();
}

criterion_group!(benches, bench_calculate_results);
criterion_main!(benches);

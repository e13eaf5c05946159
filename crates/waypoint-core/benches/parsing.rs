use criterion::{black_box, criterion_group, criterion_main, Criterion};

use waypoint_core::content;
use waypoint_core::model::{Question, QuestionCategory, ResponseKind, ResponseOption};

use std::collections::HashMap;

fn make_questions_json(count: usize) -> String {
    let tags = [
        "realistic",
        "investigative",
        "artistic",
        "social",
        "enterprising",
        "conventional",
    ];
    let questions: Vec<Question> = (0..count)
        .map(|i| Question {
            id: format!("q{i}"),
            category: QuestionCategory::Interest,
            subcategory: tags[i % tags.len()].to_string(),
            text: format!("How much do you enjoy activity number {i}?"),
            kind: ResponseKind::Likert5,
            weight: 1.0,
            research_source: Some("Holland (1997)".to_string()),
            response_options: (1..=5)
                .map(|v| ResponseOption {
                    value: v as f64,
                    label: format!("level {v}"),
                })
                .collect(),
            pathway_scoring: HashMap::from([(format!("p{}", i % 10), 0.8)]),
        })
        .collect();
    serde_json::to_string(&questions).unwrap()
}

fn bench_parse_questions(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_questions");

    for count in [10usize, 100, 1000] {
        let json = make_questions_json(count);
        group.bench_function(format!("n={count}"), |b| {
            b.iter(|| {
                let parsed: Vec<Question> =
                    serde_json::from_str(black_box(&json)).unwrap();
                parsed
            })
        });
    }

    group.finish();
}

fn bench_validate_content(c: &mut Criterion) {
    let json = make_questions_json(500);
    let questions: Vec<Question> = serde_json::from_str(&json).unwrap();
    let set = content::ContentSet {
        questions,
        pathways: vec![],
        matrix: content::default_scoring_matrix(),
    };

    c.bench_function("validate_content/n=500", |b| {
        b.iter(|| content::validate_content(black_box(&set)))
    });
}

criterion_group!(benches, bench_parse_questions, bench_validate_content);
criterion_main!(benches);

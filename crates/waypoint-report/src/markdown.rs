//! Markdown summary rendering.

use waypoint_core::report::AssessmentReport;

/// Format an assessment report as markdown.
pub fn to_markdown(report: &AssessmentReport) -> String {
    let results = &report.results;
    let mut md = String::new();

    md.push_str("# Assessment results\n\n");
    md.push_str(&format!(
        "**Summary:** interest code {}, {} identity, confidence {:.0}/100\n\n",
        results.interests.code, results.identity.status, results.confidence_score
    ));

    md.push_str("## Interest profile\n\n");
    md.push_str("| Type | Score |\n|------|-------|\n");
    for (t, score) in &results.interests.scores {
        md.push_str(&format!("| {} ({}) | {:.2} |\n", t, t.description(), score));
    }
    md.push('\n');

    md.push_str("## Self-efficacy\n\n");
    md.push_str(&format!(
        "Overall: {:.2}\n\n",
        results.self_efficacy.overall
    ));
    if !results.self_efficacy.strengths.is_empty() {
        md.push_str("Strengths:\n\n");
        for s in &results.self_efficacy.strengths {
            md.push_str(&format!("- {s}\n"));
        }
        md.push('\n');
    }
    if !results.self_efficacy.development_areas.is_empty() {
        md.push_str("Development areas:\n\n");
        for s in &results.self_efficacy.development_areas {
            md.push_str(&format!("- {s}\n"));
        }
        md.push('\n');
    }

    if !results.values.top_values.is_empty() {
        md.push_str("## Top values\n\n");
        for v in &results.values.top_values {
            md.push_str(&format!("- **{}** ({:.2})\n", v.name, v.score));
        }
        md.push('\n');
    }

    md.push_str("## Pathway matches\n\n");
    if results.pathway_matches.is_empty() {
        md.push_str("No pathways matched.\n\n");
    } else {
        md.push_str("| Pathway | Category | Score | Confidence |\n");
        md.push_str("|---------|----------|-------|------------|\n");
        for m in &results.pathway_matches {
            md.push_str(&format!(
                "| {} | {} | {:.1}% | {} |\n",
                m.pathway.title,
                m.pathway.category,
                m.match_score * 100.0,
                m.confidence
            ));
        }
        md.push('\n');
    }

    if !results.recommendations.is_empty() {
        md.push_str("## Recommendations\n\n");
        for rec in &results.recommendations {
            md.push_str(&format!("### {}\n\n{}\n\n", rec.title, rec.description));
            for step in &rec.action_steps {
                md.push_str(&format!("- {step}\n"));
            }
            md.push('\n');
        }
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_core::content::default_scoring_matrix;
    use waypoint_core::engine::AssessmentEngine;
    use waypoint_core::model::*;

    fn make_test_report() -> AssessmentReport {
        let questions = vec![Question {
            id: "q1".into(),
            category: QuestionCategory::Interest,
            subcategory: "realistic".into(),
            text: "prompt".into(),
            kind: ResponseKind::Likert5,
            weight: 1.0,
            research_source: None,
            response_options: (1..=5)
                .map(|v| ResponseOption {
                    value: v as f64,
                    label: format!("{v}"),
                })
                .collect(),
            pathway_scoring: Default::default(),
        }];
        let pathways = vec![CareerPathway {
            id: "mining-engineering".into(),
            category: PathwayCategory::Traditional,
            title: "Mining Engineering".into(),
            interest_codes: vec![InterestType::R],
            overview: String::new(),
            progression: None,
            education: None,
            skills: None,
            outlook: None,
        }];
        let engine =
            AssessmentEngine::new(questions, pathways, default_scoring_matrix()).unwrap();
        let results = engine.calculate_results(&[AssessmentResponse {
            question_id: "q1".into(),
            value: 4.0,
            timestamp: chrono::Utc::now(),
        }]);
        AssessmentReport::new(1, 1, results)
    }

    #[test]
    fn markdown_output() {
        let report = make_test_report();
        let md = to_markdown(&report);

        assert!(md.contains("# Assessment results"));
        assert!(md.contains("Mining Engineering"));
        assert!(md.contains("Pathway matches"));
        assert!(md.contains("interest code R"));
    }

    #[test]
    fn markdown_lists_all_interest_types() {
        let report = make_test_report();
        let md = to_markdown(&report);
        for t in InterestType::ALL {
            assert!(md.contains(&format!("| {} (", t)));
        }
    }
}

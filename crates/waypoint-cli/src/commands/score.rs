//! The `waypoint score` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use waypoint_core::content;
use waypoint_core::engine::{AssessmentEngine, AssessmentResults};
use waypoint_core::model::AssessmentResponse;
use waypoint_core::report::AssessmentReport;
use waypoint_report::html::write_html_report;
use waypoint_report::markdown::to_markdown;

pub fn execute(
    content_dir: PathBuf,
    responses_path: PathBuf,
    output: PathBuf,
    format: String,
) -> Result<()> {
    let content = content::load_content_dir(&content_dir)?;

    let warnings = content::validate_content(&content);
    for w in &warnings {
        tracing::warn!(
            item = w.item_id.as_deref().unwrap_or("-"),
            "content: {}",
            w.message
        );
    }

    let responses = load_responses(&responses_path)?;

    let question_count = content.questions.len();
    let pathway_count = content.pathways.len();
    let engine = AssessmentEngine::new(content.questions, content.pathways, content.matrix)?;

    eprintln!(
        "waypoint — scoring {} responses against {} questions, {} pathways",
        responses.len(),
        question_count,
        pathway_count
    );

    let results = engine.calculate_results(&responses);
    print_summary(&results);

    let report = AssessmentReport::new(question_count, pathway_count, results);

    std::fs::create_dir_all(&output)?;
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");

    let formats: Vec<&str> = if format == "all" {
        vec!["json", "html", "markdown"]
    } else {
        format.split(',').collect()
    };

    for fmt in &formats {
        match fmt.trim() {
            "json" => {
                let path = output.join(format!("results-{timestamp}.json"));
                report.save_json(&path)?;
                eprintln!("Results saved to: {}", path.display());
            }
            "html" => {
                let path = output.join(format!("results-{timestamp}.html"));
                write_html_report(&report, &path)?;
                eprintln!("HTML report: {}", path.display());
            }
            "markdown" | "md" => {
                let path = output.join(format!("results-{timestamp}.md"));
                std::fs::write(&path, to_markdown(&report))?;
                eprintln!("Markdown report: {}", path.display());
            }
            other => {
                eprintln!("Unknown format: {other}");
            }
        }
    }

    Ok(())
}

fn load_responses(path: &PathBuf) -> Result<Vec<AssessmentResponse>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read responses file: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse responses JSON: {}", path.display()))
}

fn print_summary(results: &AssessmentResults) {
    use comfy_table::{Cell, Table};

    println!(
        "\nInterest code: {}  |  Identity: {}  |  Confidence: {:.0}/100",
        results.interests.code, results.identity.status, results.confidence_score
    );

    let mut table = Table::new();
    table.set_header(vec!["Pathway", "Category", "Score", "Confidence"]);

    for m in &results.pathway_matches {
        table.add_row(vec![
            Cell::new(&m.pathway.title),
            Cell::new(m.pathway.category.to_string()),
            Cell::new(format!("{:.1}%", m.match_score * 100.0)),
            Cell::new(m.confidence.to_string()),
        ]);
    }

    println!("\n{table}");
}

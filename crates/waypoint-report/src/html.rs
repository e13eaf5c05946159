//! HTML results page generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use anyhow::Result;
use std::path::Path;

use waypoint_core::model::InterestType;
use waypoint_core::report::AssessmentReport;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate a results page from an assessment report.
pub fn generate_html(report: &AssessmentReport) -> String {
    let results = &report.results;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>waypoint results — {}</title>\n",
        html_escape(&results.interests.code)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>waypoint assessment results</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Interest code: <strong>{}</strong> | {} questions | {} pathways | confidence {:.0}/100 | {}</p>\n",
        html_escape(&results.interests.code),
        report.question_count,
        report.pathway_count,
        results.confidence_score,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Interest profile
    html.push_str("<section class=\"profile\">\n");
    html.push_str("<h2>Interest profile</h2>\n");
    html.push_str(&generate_interest_chart(results));
    html.push_str(&format!(
        "<p>Identity status: <strong>{}</strong> — {}</p>\n",
        results.identity.status,
        html_escape(&results.identity.description)
    ));
    html.push_str("</section>\n");

    // Pathway matches
    html.push_str("<section class=\"matches\">\n");
    html.push_str("<h2>Pathway matches</h2>\n");
    html.push_str("<table class=\"summary\">\n");
    html.push_str(
        "<thead><tr><th>Pathway</th><th>Category</th><th>Score</th><th>Confidence</th></tr></thead>\n",
    );
    html.push_str("<tbody>\n");
    for m in &results.pathway_matches {
        let class = match m.confidence {
            waypoint_core::matcher::ConfidenceLevel::High => "pass",
            waypoint_core::matcher::ConfidenceLevel::Moderate => "mid",
            waypoint_core::matcher::ConfidenceLevel::Low => "fail",
        };
        html.push_str(&format!(
            "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{:.1}%</td><td>{}</td></tr>\n",
            class,
            html_escape(&m.pathway.title),
            m.pathway.category,
            m.match_score * 100.0,
            m.confidence,
        ));
    }
    html.push_str("</tbody></table>\n");

    for m in &results.pathway_matches {
        if m.reasons.is_empty() && m.considerations.is_empty() {
            continue;
        }
        html.push_str(&format!(
            "<details>\n<summary>{}</summary>\n<ul>\n",
            html_escape(&m.pathway.title)
        ));
        for reason in &m.reasons {
            html.push_str(&format!("<li>{}</li>\n", html_escape(reason)));
        }
        for consideration in &m.considerations {
            html.push_str(&format!(
                "<li class=\"consider\">{}</li>\n",
                html_escape(consideration)
            ));
        }
        html.push_str("</ul>\n</details>\n");
    }
    html.push_str("</section>\n");

    // Recommendations
    if !results.recommendations.is_empty() {
        html.push_str("<section class=\"recommendations\">\n");
        html.push_str("<h2>Recommendations</h2>\n");
        for rec in &results.recommendations {
            html.push_str(&format!("<h3>{}</h3>\n", html_escape(&rec.title)));
            html.push_str(&format!("<p>{}</p>\n<ul>\n", html_escape(&rec.description)));
            for step in &rec.action_steps {
                html.push_str(&format!("<li>{}</li>\n", html_escape(step)));
            }
            html.push_str("</ul>\n");
        }
        html.push_str("</section>\n");
    }

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write a results page to a file.
pub fn write_html_report(report: &AssessmentReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

fn generate_interest_chart(results: &waypoint_core::engine::AssessmentResults) -> String {
    let bar_height = 24;
    let max_width = 360;
    let padding = 8;
    let label_width = 40;

    let total_height = InterestType::ALL.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, t) in InterestType::ALL.iter().enumerate() {
        let score = results.interests.scores.get(t).copied().unwrap_or(0.0);
        let y = i * (bar_height + padding) + padding;
        // Interest scores live on the 5-point response scale.
        let width = ((score / 5.0) * max_width as f64) as usize;

        let color = if *t == results.interests.primary {
            "#2563eb"
        } else if Some(*t) == results.interests.secondary {
            "#60a5fa"
        } else {
            "#9ca3af"
        };

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{t}</text>\n",
            label_width - 10,
            y + bar_height / 2,
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width, y, width, bar_height, color
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{score:.2}</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --pass: #dcfce7; --mid: #fef9c3; --fail: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --pass: #064e3b; --mid: #713f12; --fail: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
.pass { background: var(--pass); }
.mid { background: var(--mid); }
.fail { background: var(--fail); }
.consider { color: #b45309; }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;

//! The `waypoint init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    std::fs::create_dir_all("content")?;

    let files = [
        ("content/questions.json", SAMPLE_QUESTIONS),
        ("content/pathways.json", SAMPLE_PATHWAYS),
        ("content/scoring-matrix.json", SAMPLE_MATRIX),
        ("responses.sample.json", SAMPLE_RESPONSES),
    ];

    for (path, body) in files {
        if std::path::Path::new(path).exists() {
            println!("{path} already exists, skipping.");
        } else {
            std::fs::write(path, body)?;
            println!("Created {path}");
        }
    }

    println!("\nNext steps:");
    println!("  1. Edit the content files under content/");
    println!("  2. Run: waypoint validate --content content");
    println!("  3. Run: waypoint score --content content --responses responses.sample.json");

    Ok(())
}

const SAMPLE_QUESTIONS: &str = r#"[
  {
    "id": "interest-realistic-1",
    "category": "interest",
    "subcategory": "realistic",
    "text": "I enjoy working outdoors with tools and equipment.",
    "type": "likert_5",
    "weight": 1.0,
    "research_source": "Holland (1997)",
    "response_options": [
      { "value": 1, "label": "Strongly disagree" },
      { "value": 2, "label": "Disagree" },
      { "value": 3, "label": "Neutral" },
      { "value": 4, "label": "Agree" },
      { "value": 5, "label": "Strongly agree" }
    ]
  },
  {
    "id": "interest-investigative-1",
    "category": "interest",
    "subcategory": "investigative",
    "text": "I enjoy figuring out how natural processes work.",
    "type": "likert_5",
    "weight": 1.2,
    "response_options": [
      { "value": 1, "label": "Strongly disagree" },
      { "value": 2, "label": "Disagree" },
      { "value": 3, "label": "Neutral" },
      { "value": 4, "label": "Agree" },
      { "value": 5, "label": "Strongly agree" }
    ]
  },
  {
    "id": "identity-exploration-1",
    "category": "identity",
    "subcategory": "exploration",
    "text": "I have spent time learning about different career options.",
    "type": "likert_5",
    "weight": 1.0,
    "research_source": "Marcia (1966)",
    "response_options": [
      { "value": 1, "label": "Strongly disagree" },
      { "value": 2, "label": "Disagree" },
      { "value": 3, "label": "Neutral" },
      { "value": 4, "label": "Agree" },
      { "value": 5, "label": "Strongly agree" }
    ]
  },
  {
    "id": "identity-commitment-1",
    "category": "identity",
    "subcategory": "commitment",
    "text": "I know what kind of work I want to do.",
    "type": "likert_5",
    "weight": 1.0,
    "response_options": [
      { "value": 1, "label": "Strongly disagree" },
      { "value": 2, "label": "Disagree" },
      { "value": 3, "label": "Neutral" },
      { "value": 4, "label": "Agree" },
      { "value": 5, "label": "Strongly agree" }
    ]
  },
  {
    "id": "efficacy-math-1",
    "category": "self-efficacy",
    "subcategory": "math",
    "text": "I am confident I can pass a college-level math course.",
    "type": "likert_5",
    "weight": 1.0,
    "response_options": [
      { "value": 1, "label": "Not at all confident" },
      { "value": 2, "label": "Slightly confident" },
      { "value": 3, "label": "Moderately confident" },
      { "value": 4, "label": "Confident" },
      { "value": 5, "label": "Very confident" }
    ]
  },
  {
    "id": "values-discovery-1",
    "category": "values",
    "subcategory": "discovery",
    "text": "Making new discoveries matters to me in a career.",
    "type": "likert_5",
    "weight": 1.0,
    "response_options": [
      { "value": 1, "label": "Not important" },
      { "value": 2, "label": "Slightly important" },
      { "value": 3, "label": "Moderately important" },
      { "value": 4, "label": "Important" },
      { "value": 5, "label": "Very important" }
    ]
  }
]
"#;

const SAMPLE_PATHWAYS: &str = r#"[
  {
    "id": "field-geology",
    "category": "traditional",
    "title": "Field Geology",
    "interest_codes": ["I", "R"],
    "overview": "Mapping, sampling, and interpreting rock formations in the field."
  },
  {
    "id": "environmental-consulting",
    "category": "interdisciplinary",
    "title": "Environmental Consulting",
    "interest_codes": ["I", "S", "E"],
    "overview": "Assessing sites and advising clients on environmental compliance."
  },
  {
    "id": "geospatial-data-science",
    "category": "emerging",
    "title": "Geospatial Data Science",
    "interest_codes": ["I", "C"],
    "overview": "Applying machine learning and remote sensing to earth data."
  }
]
"#;

const SAMPLE_MATRIX: &str = r#"{
  "type_weights": { "R": 1.1, "I": 1.2, "A": 1.0, "S": 1.05, "E": 1.0, "C": 1.0 },
  "matching_weights": {
    "interests": 0.4,
    "identity": 0.25,
    "self_efficacy": 0.2,
    "values": 0.1,
    "knowledge": 0.05
  },
  "thresholds": {
    "high_match": 0.8,
    "moderate_match": 0.6,
    "min_recommendations": 3,
    "max_recommendations": 5
  }
}
"#;

const SAMPLE_RESPONSES: &str = r#"[
  { "question_id": "interest-realistic-1", "value": 4, "timestamp": "2025-01-01T00:00:00Z" },
  { "question_id": "interest-investigative-1", "value": 5, "timestamp": "2025-01-01T00:00:30Z" },
  { "question_id": "identity-exploration-1", "value": 4, "timestamp": "2025-01-01T00:01:00Z" },
  { "question_id": "identity-commitment-1", "value": 3, "timestamp": "2025-01-01T00:01:30Z" },
  { "question_id": "efficacy-math-1", "value": 4, "timestamp": "2025-01-01T00:02:00Z" },
  { "question_id": "values-discovery-1", "value": 5, "timestamp": "2025-01-01T00:02:30Z" }
]
"#;

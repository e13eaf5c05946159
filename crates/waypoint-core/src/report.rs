//! Assessment report with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::AssessmentResults;

/// A saved assessment run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// How many questions the content set carried.
    pub question_count: usize,
    /// How many pathways were considered.
    pub pathway_count: usize,
    /// The full scoring output.
    pub results: AssessmentResults,
}

impl AssessmentReport {
    /// Wrap fresh results in a report envelope.
    pub fn new(question_count: usize, pathway_count: usize, results: AssessmentResults) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            question_count,
            pathway_count,
            results,
        }
    }

    /// Save the report as pretty-printed JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AssessmentReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

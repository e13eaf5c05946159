//! The `waypoint validate` command.

use std::path::PathBuf;

use anyhow::Result;

use waypoint_core::content;

pub fn execute(content_dir: PathBuf) -> Result<()> {
    let set = content::load_content_dir(&content_dir)?;

    println!(
        "Content: {} questions, {} pathways",
        set.questions.len(),
        set.pathways.len()
    );

    let warnings = content::validate_content(&set);
    for w in &warnings {
        let prefix = w
            .item_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Content set valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}

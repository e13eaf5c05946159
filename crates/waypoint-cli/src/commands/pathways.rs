//! The `waypoint pathways` command.

use std::path::PathBuf;

use anyhow::Result;

use waypoint_core::content;

pub fn execute(content_dir: PathBuf, category_filter: Option<String>) -> Result<()> {
    use comfy_table::{Cell, Table};

    let set = content::load_content_dir(&content_dir)?;

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Category", "Interest codes"]);

    let mut shown = 0;
    for p in &set.pathways {
        if let Some(filter) = &category_filter {
            if p.category.to_string() != filter.to_lowercase() {
                continue;
            }
        }
        let codes: String = p.interest_codes.iter().map(|c| c.to_string()).collect();
        table.add_row(vec![
            Cell::new(&p.id),
            Cell::new(&p.title),
            Cell::new(p.category.to_string()),
            Cell::new(codes),
        ]);
        shown += 1;
    }

    if shown == 0 {
        println!("No pathways found. Run `waypoint init` to create starter content.");
    } else {
        println!("{table}");
        println!("\n{shown} pathway(s)");
    }

    Ok(())
}

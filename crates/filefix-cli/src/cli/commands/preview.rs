//! `filefix preview <names..>` – show cleaned names without touching files.

use anyhow::Result;
use filefix_core::archive::{plan_names, PlannedEntry};
use filefix_core::CasingStyle;

/// Width of the ORIGINAL column.
const NAME_COLUMN: usize = 40;

pub(crate) fn format_entry(entry: &PlannedEntry) -> String {
    let note = if entry.collided { "  (renamed: duplicate)" } else { "" };
    format!(
        "{:<width$} {}{}",
        entry.original,
        entry.name,
        note,
        width = NAME_COLUMN
    )
}

pub async fn run_preview(names: &[String], style: CasingStyle) -> Result<()> {
    let plan = plan_names(names.iter().map(String::as_str), style);
    println!("{:<width$} {} ({})", "ORIGINAL", "CLEANED", style, width = NAME_COLUMN);
    for entry in &plan {
        println!("{}", format_entry(entry));
    }
    Ok(())
}

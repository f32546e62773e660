//! CLI commands for reports
//!
//! Prints the expense summary and optionally exports it.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::{TrackerError, TrackerResult};
use crate::reports::SummaryReport;
use crate::storage::ExpenseStore;

/// Handle `summary`
pub fn handle_summary_command(
    store: &ExpenseStore,
    now: NaiveDateTime,
    json: bool,
    output: Option<&Path>,
) -> TrackerResult<()> {
    let report = SummaryReport::generate(store, now)?;

    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.format_terminal());
    }

    if let Some(path) = output {
        let file = File::create(path).map_err(|e| {
            TrackerError::Export(format!("Failed to create {}: {}", path.display(), e))
        })?;
        report.export_csv(BufWriter::new(file))?;
        eprintln!("Exported summary to: {}", path.display());
    }

    Ok(())
}

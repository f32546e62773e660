//! CSV Export functionality
//!
//! Writes a summary report as CSV, one row per period and category total.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::reports::SummaryReport;

/// Export a summary report to CSV
///
/// Columns: `report_id, section, label, total, count`. Period rows come
/// first, then category rows, each in report order.
pub fn export_summary_csv<W: Write>(report: &SummaryReport, writer: W) -> TrackerResult<()> {
    let mut out = csv::Writer::from_writer(writer);

    out.write_record(["report_id", "section", "label", "total", "count"])
        .map_err(export_error)?;

    for period in &report.period_totals {
        let total = period.total.value().to_string();
        let count = period.count.to_string();
        out.write_record([
            report.report_id.as_str(),
            "period",
            period.period.label(),
            total.as_str(),
            count.as_str(),
        ])
        .map_err(export_error)?;
    }

    for entry in &report.category_totals {
        let total = entry.total.value().to_string();
        let count = entry.count.to_string();
        out.write_record([
            report.report_id.as_str(),
            "category",
            entry.category.as_str(),
            total.as_str(),
            count.as_str(),
        ])
        .map_err(export_error)?;
    }

    out.flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}

fn export_error(e: csv::Error) -> TrackerError {
    TrackerError::Export(e.to_string())
}

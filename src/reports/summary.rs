//! Expense Summary
//!
//! Reduces the full record set to totals per category and per period.
//! Records carry no date, so every record falls into the single
//! all-time period; a monthly key would slot in at `Period::of`.

use std::io::Write;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::display::report::{format_bar, format_percentage, separator};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Amount, Category, ExpenseRecord};
use crate::storage::ExpenseStore;

use super::report_id::ReportId;

/// Reporting period a record is bucketed into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Period {
    #[serde(rename = "All Time")]
    AllTime,
}

impl Period {
    /// Period for a record
    pub fn of(_record: &ExpenseRecord) -> Self {
        Self::AllTime
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AllTime => "All Time",
        }
    }
}

/// Total spending in one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Amount,
    pub count: usize,
    /// Share of the grand total, in percent
    pub percentage: f64,
}

/// Total spending in one period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodTotal {
    pub period: Period,
    pub total: Amount,
    pub count: usize,
}

/// Summary Report
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub report_id: ReportId,
    pub generated_at: NaiveDateTime,
    /// Category totals in order of first appearance
    pub category_totals: Vec<CategoryTotal>,
    /// Period totals in order of first appearance
    pub period_totals: Vec<PeriodTotal>,
    pub grand_total: Amount,
    pub record_count: usize,
}

/// Build a summary from `records` as of `now`
///
/// Sums are exact. An empty input yields an empty but valid report. A total
/// that leaves the decimal range is an `AmountOverflow` error; records that
/// passed validation cannot get there, hand-edited ones can.
pub fn summarize(records: &[ExpenseRecord], now: NaiveDateTime) -> TrackerResult<SummaryReport> {
    let mut category_totals: Vec<CategoryTotal> = Vec::new();
    let mut period_totals: Vec<PeriodTotal> = Vec::new();
    let mut grand_total = Amount::zero();

    for record in records {
        match category_totals
            .iter_mut()
            .find(|t| t.category == record.category)
        {
            Some(entry) => {
                entry.total = add_or_overflow(entry.total, record, entry.category.as_str())?;
                entry.count += 1;
            }
            None => category_totals.push(CategoryTotal {
                category: record.category.clone(),
                total: record.amount,
                count: 1,
                percentage: 0.0,
            }),
        }

        let period = Period::of(record);
        match period_totals.iter_mut().find(|t| t.period == period) {
            Some(entry) => {
                entry.total = add_or_overflow(entry.total, record, period.label())?;
                entry.count += 1;
            }
            None => period_totals.push(PeriodTotal {
                period,
                total: record.amount,
                count: 1,
            }),
        }

        grand_total = add_or_overflow(grand_total, record, "grand total")?;
    }

    for entry in &mut category_totals {
        entry.percentage = entry.total.percentage_of(grand_total);
    }

    Ok(SummaryReport {
        report_id: ReportId::from_timestamp(now),
        generated_at: now,
        category_totals,
        period_totals,
        grand_total,
        record_count: records.len(),
    })
}

fn add_or_overflow(total: Amount, record: &ExpenseRecord, label: &str) -> TrackerResult<Amount> {
    total.checked_add(record.amount).ok_or_else(|| {
        TrackerError::AmountOverflow(format!(
            "{} total exceeds the representable range after adding {}",
            label, record.amount
        ))
    })
}

impl SummaryReport {
    /// Generate a summary over everything in the store
    pub fn generate(store: &ExpenseStore, now: NaiveDateTime) -> TrackerResult<Self> {
        let records = store.load_all()?;
        summarize(&records, now)
    }

    /// Whether the report covers no records
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    /// Sum of every record in the report
    pub fn grand_total(&self) -> Amount {
        self.grand_total
    }

    /// Total for a category, `None` if it has no records
    pub fn category_total(&self, category: &Category) -> Option<Amount> {
        self.category_totals
            .iter()
            .find(|t| &t.category == category)
            .map(|t| t.total)
    }

    /// Total for a period, `None` if it has no records
    pub fn period_total(&self, period: Period) -> Option<Amount> {
        self.period_totals
            .iter()
            .find(|t| t.period == period)
            .map(|t| t.total)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        if self.is_empty() {
            output.push_str("No expense data available.\n");
            output.push_str(&format!("\nReport ID: {}\n", self.report_id));
            return output;
        }

        output.push_str("\n--- Monthly Expense Summary ---\n");
        for period in &self.period_totals {
            output.push_str(&format!(
                "{:<20} {:>12} {:>6}\n",
                period.period.label(),
                period.total,
                period.count
            ));
        }

        output.push_str("\n--- Category-wise Expenditure ---\n");
        output.push_str(&format!(
            "{:<20} {:>12} {:>6} {:>6}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&separator(60));
        output.push('\n');

        let max_percentage = self
            .category_totals
            .iter()
            .map(|t| t.percentage)
            .fold(0.0_f64, f64::max);

        for entry in &self.category_totals {
            output.push_str(&format!(
                "{:<20} {:>12} {:>6} {:>6} {}\n",
                entry.category.as_str(),
                entry.total,
                entry.count,
                format_percentage(entry.percentage),
                format_bar(entry.percentage, max_percentage, 10)
            ));
        }

        output.push_str(&separator(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>12} {:>6}\n",
            "TOTAL",
            self.grand_total(),
            self.record_count
        ));

        output.push_str(&format!("\nReport ID: {}\n", self.report_id));
        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> TrackerResult<()> {
        crate::export::csv::export_summary_csv(self, writer)
    }

    /// Render the report as pretty-printed JSON
    pub fn to_json(&self) -> TrackerResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Json(format!("Failed to serialize report: {}", e)))
    }
}

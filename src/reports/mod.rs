//! Reports module for the expense tracker
//!
//! Aggregates the stored records into category and period summaries, each
//! stamped with a time-derived report id.

pub mod report_id;
pub mod summary;

pub use report_id::ReportId;
pub use summary::{summarize, CategoryTotal, Period, PeriodTotal, SummaryReport};

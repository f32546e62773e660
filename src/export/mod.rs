//! Export module for the expense tracker
//!
//! Writes summaries to formats other tools can read.

pub mod csv;

pub use self::csv::export_summary_csv;

//! Expense Tracker - personal expense log with summaries
//!
//! This library records expenses in a single JSON file and summarizes them
//! by category and by period.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution, user settings, logging setup
//! - `error`: Custom error types
//! - `models`: Amounts, categories, expense records
//! - `storage`: Append-only JSON file store with corruption recovery
//! - `reports`: Category and period summaries with report ids
//! - `display`: Terminal formatting
//! - `export`: CSV export of summaries
//! - `cli`: Command handlers and the interactive shell
//!
//! # Example
//!
//! ```rust,no_run
//! use chrono::Local;
//! use expense_tracker::models::{Amount, Category, ExpenseRecord};
//! use expense_tracker::reports::SummaryReport;
//! use expense_tracker::storage::ExpenseStore;
//!
//! # fn main() -> expense_tracker::TrackerResult<()> {
//! let store = ExpenseStore::new("expenses.json");
//! store.append(ExpenseRecord::new(Amount::from(12), "Lunch", Category::Food)?)?;
//!
//! let report = SummaryReport::generate(&store, Local::now().naive_local())?;
//! print!("{}", report.format_terminal());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{TrackerError, TrackerResult};

//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and summaries for the terminal.

pub mod expense;
pub mod report;

pub use expense::format_expense_list;

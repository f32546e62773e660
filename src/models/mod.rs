//! Core data models for the expense tracker
//!
//! This module contains the data structures that make up the expense log:
//! amounts, categories, and the records themselves.

pub mod amount;
pub mod category;
pub mod expense;

pub use amount::{Amount, AmountParseError};
pub use category::Category;
pub use expense::{ExpenseRecord, RecordValidationError};

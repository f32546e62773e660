//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes, automatic directory
//! creation, and recovery from a corrupt backing file.

pub mod expenses;
pub mod file_io;

pub use expenses::{ExpenseStore, StoreSnapshot, StoreStatus};
pub use file_io::{read_json, write_json_atomic};

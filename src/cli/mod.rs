//! CLI command handlers
//!
//! This module contains the implementation of CLI commands and the
//! interactive shell, bridging argument parsing with the store and reports.

pub mod expense;
pub mod report;
pub mod shell;

pub use expense::{handle_add_command, handle_list_command};
pub use report::handle_summary_command;
pub use shell::Shell;

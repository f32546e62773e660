//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Base directory resolution (environment override or platform default)
//! - User settings persistence
//! - Logging setup

pub mod logging;
pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;

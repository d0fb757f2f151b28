//! CLI module for evalviz
//!
//! This module contains the command handlers and output utilities.

mod commands;
mod logging;

pub use commands::{check_report, execute, report_lines, resolve_config, run_command};
pub use logging::LogLevel;

// Re-export Cli from config for convenience
pub use crate::config::Cli;

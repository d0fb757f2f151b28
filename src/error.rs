//! Error types with actionable diagnostics.
//!
//! Module-level errors (`ParseError`, `RankError`, `TableError`,
//! `ValidationError`) convert into the crate-level [`Error`] so pipeline code
//! can use `?` throughout.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ValidationError;
use crate::eval::log_parser::ParseError;
use crate::eval::ranking::RankError;
use crate::io::TableError;

/// Result type alias for evalviz operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning evaluation artifacts into charts.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed prediction line in an evaluation log.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// AUC ranking called with unusable labels or scores.
    #[error(transparent)]
    Rank(#[from] RankError),

    /// CSV artifact could not be read or has unexpected content.
    #[error(transparent)]
    Table(#[from] TableError),

    /// Configuration file not found at expected path.
    #[error("Configuration file not found: {path}\n  → Create a config file or drop --config to use defaults")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file has invalid syntax.
    #[error("Invalid configuration syntax in {path}:\n  {message}\n  → Check YAML syntax at the indicated line")]
    ConfigParsing { path: PathBuf, message: String },

    /// Configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    ConfigValue(#[from] ValidationError),

    /// Chart backend failed while drawing or encoding.
    #[error("Failed to render {path}: {message}")]
    Render { path: PathBuf, message: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Create a render error for the chart at `path`.
    pub fn render(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Render { path: path.into(), message: message.to_string() }
    }

    /// Whether the failure comes from the input data rather than the environment.
    pub fn is_data_error(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::Rank(_) | Self::Table(_))
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Parse(_) => "E001",
            Self::Rank(_) => "E002",
            Self::Table(_) => "E003",
            Self::ConfigNotFound { .. } => "E010",
            Self::ConfigParsing { .. } => "E011",
            Self::ConfigValue(_) => "E012",
            Self::Render { .. } => "E020",
            Self::Io { .. } => "E050",
        }
    }
}

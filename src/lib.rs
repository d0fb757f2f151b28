//! evalviz: charts from shape-descriptor classification results
//!
//! Reads the artifacts written by a classification run (an evaluation log
//! plus metrics, confusion-matrix and precision-recall CSVs) and renders
//! them as PNG charts.
//!
//! - [`eval`]: log parsing, confusion matrices, per-class AUC ranking
//! - [`io`]: CSV tables, file discovery, output naming
//! - [`render`]: chart descriptions and the PNG renderer
//! - [`pipeline`]: batch pipelines over a results tree
//! - [`config`]: YAML configuration and command-line types
//! - [`cli`]: command handlers for the `evalviz` binary

pub mod cli;
pub mod config;
pub mod error;
pub mod eval;
pub mod io;
pub mod pipeline;
pub mod render;

pub use error::{Error, Result};

//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;
use crate::config::VizConfig;

/// evalviz: charts from shape-descriptor classification results
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "evalviz")]
#[command(version)]
#[command(
    about = "Confusion heatmaps, per-class metrics, precision-recall curves and comparison charts"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// YAML configuration file (defaults are used when omitted)
    #[arg(short, long, global = true, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the results directory read by the pipelines
    #[arg(long, global = true)]
    pub input_root: Option<PathBuf>,

    /// Override the directory receiving metrics charts and heatmaps
    #[arg(long, global = true)]
    pub output_root: Option<PathBuf>,

    /// Override how many best and worst classes a PR chart shows
    #[arg(long, global = true)]
    pub top_k: Option<usize>,

    /// Summary format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Confusion matrices from an evaluation log
    Log(LogArgs),

    /// Per-class precision, recall and F1 line charts
    Metrics,

    /// Heatmaps of confusion-matrix CSVs
    Heatmaps,

    /// Precision-recall curves of the best and worst classes
    PrCurves,

    /// KNN vs KMeans bar charts across class counts
    Compare,

    /// Run every pipeline in sequence
    All,
}

/// Arguments for the log command
#[derive(Parser, Debug, Clone, PartialEq, Default)]
pub struct LogArgs {
    /// Evaluation log to parse
    #[arg(value_name = "LOG")]
    pub input: Option<PathBuf>,

    /// Override the confusion-matrix output directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to a configuration
///
/// `--input-root` is applied first so that an explicit `--output-root`
/// wins over the rebased default.
pub fn apply_overrides(config: &mut VizConfig, cli: &Cli) {
    if let Some(root) = &cli.input_root {
        *config = std::mem::take(config).with_input_root(root.clone());
    }
    if let Some(output_root) = &cli.output_root {
        config.output_root = output_root.clone();
    }
    if let Some(top_k) = cli.top_k {
        config.top_k = top_k;
    }
    if let Command::Log(args) = &cli.command {
        if let Some(input) = &args.input {
            config.log_file = input.clone();
        }
        if let Some(output_dir) = &args.output_dir {
            config.log_output_dir = output_dir.clone();
        }
    }
}

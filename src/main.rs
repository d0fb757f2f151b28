//! evalviz CLI
//!
//! # Usage
//!
//! ```bash
//! # Confusion matrices from an evaluation log
//! evalviz log in.txt
//!
//! # Metrics line charts and confusion heatmaps
//! evalviz metrics
//! evalviz heatmaps --input-root ./results
//!
//! # Precision-recall curves for the 5 best and worst classes
//! evalviz pr-curves --top-k 5
//!
//! # Everything, with a JSON summary
//! evalviz all --config evalviz.yaml --format json
//! ```
//!
//! Diagnostics go to stderr and are filtered with `RUST_LOG`.

use clap::Parser;
use evalviz::cli::{run_command, Cli};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! evalviz log in.txt
//! evalviz metrics --input-root ./results
//! evalviz pr-curves --top-k 5
//! evalviz all --config evalviz.yaml --format json
//! ```

mod core;
mod types;

pub use core::{apply_overrides, parse_args, Cli, Command, LogArgs};
pub use types::OutputFormat;

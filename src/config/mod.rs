//! Configuration: YAML schema, loading, validation and command-line types

mod cli;
mod load;
mod schema;
mod validate;

pub use cli::{apply_overrides, parse_args, Cli, Command, LogArgs, OutputFormat};
pub use load::{load_config, parse_config};
pub use schema::{ChartStyle, VizConfig};
pub use validate::{class_count, validate_config, ValidationError};

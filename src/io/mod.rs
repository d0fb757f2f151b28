//! Results-tree input/output
//!
//! - `tables`: typed loading of the metrics, confusion-matrix and
//!   precision-recall CSVs
//! - `discover`: suffix-based file enumeration
//! - `naming`: artifact suffixes and file name sanitization

mod discover;
mod naming;
mod tables;

pub use discover::{file_name, files_with_suffix, subdirectories};
pub use naming::{sanitize_filename, ArtifactKind};
pub use tables::{
    parse_confusion_table, parse_metrics, parse_percentage, parse_pr_samples,
    read_confusion_table, read_metrics, read_pr_samples, split_samples, ConfusionTable,
    MetricsRow, PrSample, TableError, GLOBAL_ROW,
};

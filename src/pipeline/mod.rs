//! Batch pipelines turning evaluation artifacts into charts
//!
//! Each pipeline takes the configuration and a [`ChartSink`], processes
//! its inputs in sorted order and returns a [`BatchReport`]. A file that
//! fails is recorded and the run continues with the next one.

mod charts;
mod compare;
mod heatmaps;
mod log;
mod metrics;
mod pr_curves;
mod report;

pub use charts::{log_heatmap, metrics_chart, table_heatmap};
pub use compare::{comparison_chart, run_compare, sample_stats, ComparisonRow, Metric};
pub use heatmaps::run_heatmaps;
pub use log::{render_records, run_log};
pub use metrics::run_metrics;
pub use pr_curves::{pr_chart, run_pr_curves};
pub use report::{BatchReport, Failure, Skipped};

use std::path::Path;

use crate::config::VizConfig;
use crate::io::{file_name, files_with_suffix, ArtifactKind};
use crate::render::{Chart, ChartSink};
use crate::Result;

/// Run every pipeline in sequence and merge their reports.
///
/// A pipeline that cannot start (for example a missing log file) is
/// recorded as a failure and the remaining pipelines still run.
pub fn run_all(config: &VizConfig, sink: &mut dyn ChartSink) -> BatchReport {
    let mut all = BatchReport::new("all");
    let stages: [(&str, &Path, fn(&VizConfig, &mut dyn ChartSink) -> Result<BatchReport>); 5] = [
        ("log", config.log_file.as_path(), run_log),
        ("metrics", config.input_root.as_path(), run_metrics),
        ("heatmaps", config.input_root.as_path(), run_heatmaps),
        ("pr-curves", config.input_root.as_path(), run_pr_curves),
        ("compare", config.input_root.as_path(), run_compare),
    ];

    for (name, input, stage) in stages {
        tracing::info!(pipeline = name, "starting");
        match stage(config, sink) {
            Ok(report) => {
                tracing::info!("{report}");
                all.absorb(report);
            }
            Err(e) => all.fail(input, &e),
        }
    }
    all
}

/// Render one chart per `kind` file of `input_dir` into `output_dir`.
fn render_dir<F>(
    report: &mut BatchReport,
    sink: &mut dyn ChartSink,
    kind: ArtifactKind,
    input_dir: &Path,
    output_dir: &Path,
    mut build: F,
) -> Result<()>
where
    F: FnMut(&Path, &str) -> Result<Chart>,
{
    for input in files_with_suffix(input_dir, kind.input_suffix())? {
        let name = file_name(&input);
        let (Some(base), Some(output_name)) = (kind.base_name(name), kind.output_name(name))
        else {
            continue;
        };
        let path = output_dir.join(output_name);

        match build(&input, base).and_then(|chart| sink.render(&chart, &path)) {
            Ok(()) => report.wrote(path),
            Err(e) => report.fail(&input, &e),
        }
    }
    Ok(())
}

/// Subdirectories of the input root that contain a `kind` folder
fn artifact_dirs(config: &VizConfig, kind: ArtifactKind) -> Result<Vec<String>> {
    let dirs = crate::io::subdirectories(&config.input_root)?;
    Ok(dirs
        .into_iter()
        .filter(|sub| config.input_root.join(sub).join(kind.dir_name()).is_dir())
        .collect())
}

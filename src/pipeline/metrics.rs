//! Per-class metrics line charts

use crate::config::VizConfig;
use crate::io::{read_metrics, ArtifactKind};
use crate::render::{Chart, ChartSink};
use crate::Result;

use super::charts::metrics_chart;
use super::{artifact_dirs, render_dir, BatchReport};

/// Render `<sub>/metrics/*_metrics.csv` for every subdirectory of the input root
pub fn run_metrics(config: &VizConfig, sink: &mut dyn ChartSink) -> Result<BatchReport> {
    let kind = ArtifactKind::Metrics;
    let mut report = BatchReport::new("metrics");

    for sub in artifact_dirs(config, kind)? {
        let input_dir = config.input_root.join(&sub).join(kind.dir_name());
        let output_dir = config.output_root.join(&sub).join(kind.dir_name());
        render_dir(&mut report, sink, kind, &input_dir, &output_dir, |input, base| {
            let rows = read_metrics(input)?;
            Ok(Chart::Line(metrics_chart(base, &rows)))
        })?;
    }

    Ok(report)
}

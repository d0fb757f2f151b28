//! Heatmaps of confusion-matrix CSVs

use crate::config::VizConfig;
use crate::io::{read_confusion_table, ArtifactKind};
use crate::render::{Chart, ChartSink};
use crate::Result;

use super::charts::table_heatmap;
use super::{render_dir, BatchReport};

/// Render `<class_dir>/confusion_matrices/*_confusion_matrix.csv` for each
/// configured class directory
pub fn run_heatmaps(config: &VizConfig, sink: &mut dyn ChartSink) -> Result<BatchReport> {
    let kind = ArtifactKind::ConfusionMatrix;
    let mut report = BatchReport::new("heatmaps");

    for class_dir in &config.class_dirs {
        let input_dir = config.input_root.join(class_dir).join(kind.dir_name());
        if !input_dir.is_dir() {
            report.skip(class_dir.as_str(), format!("no {} directory", kind.dir_name()));
            continue;
        }
        let output_dir = config.output_root.join(class_dir).join(kind.dir_name());
        render_dir(&mut report, sink, kind, &input_dir, &output_dir, |input, base| {
            let table = read_confusion_table(input)?;
            Ok(Chart::Heatmap(table_heatmap(base, &table)))
        })?;
    }

    Ok(report)
}

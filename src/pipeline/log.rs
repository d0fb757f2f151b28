//! Confusion matrices from an evaluation log

use crate::config::VizConfig;
use crate::eval::log_parser::parse_report_file;
use crate::eval::{confusion_matrix, PredictionRecords};
use crate::io::sanitize_filename;
use crate::render::{Chart, ChartSink};
use crate::Result;

use super::charts::log_heatmap;
use super::BatchReport;

/// Parse `config.log_file` and render one matrix per non-empty record.
///
/// A log that cannot be read or parsed fails the whole run.
pub fn run_log(config: &VizConfig, sink: &mut dyn ChartSink) -> Result<BatchReport> {
    let records = parse_report_file(&config.log_file)?;
    tracing::debug!(
        log = %config.log_file.display(),
        records = records.len(),
        "evaluation log parsed"
    );
    Ok(render_records(&records, config, sink))
}

/// Render every non-empty record of an already parsed log
pub fn render_records(
    records: &PredictionRecords,
    config: &VizConfig,
    sink: &mut dyn ChartSink,
) -> BatchReport {
    let mut report = BatchReport::new("log");

    for missing in records.missing() {
        report.skip(format!("{}/{}", missing.representation, missing.algorithm), missing.to_string());
    }

    for (representation, algorithm, record) in records.iter().filter(|(_, _, r)| !r.is_empty()) {

        let rep = sanitize_filename(representation);
        let alg = sanitize_filename(algorithm.as_str());
        let path = config.log_output_dir.join(format!("{rep}_{alg}_confusion_matrix.png"));

        let matrix = confusion_matrix(record.predicted_labels(), record.true_labels());
        let chart = Chart::Heatmap(log_heatmap(&rep, &alg, &matrix));
        let outcome = sink.render(&chart, &path);
        report.record(path, outcome);
    }

    report
}

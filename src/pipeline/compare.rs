//! KNN against KMeans across class counts

use std::collections::{BTreeMap, BTreeSet};

use crate::config::{class_count, VizConfig};
use crate::eval::Algorithm;
use crate::io::{file_name, files_with_suffix, read_metrics, ArtifactKind, MetricsRow};
use crate::render::{Bar, BarChart, Chart, ChartSink};
use crate::Result;

use super::charts::COMPARISON_FIGSIZE;
use super::BatchReport;

/// Score compared across algorithms
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Precision,
    Recall,
    F1Score,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Precision, Metric::Recall, Metric::F1Score];

    /// Column name in the metrics CSV
    pub fn name(self) -> &'static str {
        match self {
            Metric::Precision => "Precision",
            Metric::Recall => "Recall",
            Metric::F1Score => "F1-Score",
        }
    }

    pub fn value(self, row: &MetricsRow) -> f64 {
        match self {
            Metric::Precision => row.precision,
            Metric::Recall => row.recall,
            Metric::F1Score => row.f1_score,
        }
    }

    /// Output file name, e.g. `comparison_f1-score.png`
    pub fn file_name(self) -> String {
        format!("comparison_{}.png", self.name().to_lowercase())
    }
}

/// One class row of a metrics file, tagged with where it came from
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    pub algorithm: Algorithm,
    pub class_count: u32,
    pub metrics: MetricsRow,
}

/// Mean and sample standard deviation.
///
/// The deviation is `None` for a single value; `None` overall for no values.
pub fn sample_stats(values: &[f64]) -> Option<(f64, Option<f64>)> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let std = (values.len() > 1).then(|| {
        let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (ss / (n - 1.0)).sqrt()
    });
    Some((mean, std))
}

/// Grouped bars: x is the class count, hue the algorithm
pub fn comparison_chart(metric: Metric, rows: &[ComparisonRow]) -> BarChart {
    let counts: BTreeSet<u32> = rows.iter().map(|r| r.class_count).collect();
    let algorithms: BTreeSet<Algorithm> = rows.iter().map(|r| r.algorithm).collect();

    let mut values: BTreeMap<(u32, Algorithm), Vec<f64>> = BTreeMap::new();
    for row in rows {
        values.entry((row.class_count, row.algorithm)).or_default().push(metric.value(&row.metrics));
    }

    let mut bars = Vec::new();
    for (group, count) in counts.iter().enumerate() {
        for (hue, alg) in algorithms.iter().enumerate() {
            if let Some((value, error)) = values.get(&(*count, *alg)).and_then(|v| sample_stats(v)) {
                bars.push(Bar { group, hue, value, error });
            }
        }
    }

    BarChart {
        title: format!("Comparaison de {} par algorithme et nombre de classes", metric.name()),
        x_label: "Nombre de Classes".to_string(),
        y_label: format!("{} (%)", metric.name()),
        groups: counts.iter().map(u32::to_string).collect(),
        hues: algorithms.iter().map(|a| a.as_str().to_string()).collect(),
        bars,
        figsize: COMPARISON_FIGSIZE,
    }
}

/// Collect the metrics of every configured class directory.
fn collect_rows(config: &VizConfig, report: &mut BatchReport) -> Result<Vec<ComparisonRow>> {
    let kind = ArtifactKind::Metrics;
    let mut rows = Vec::new();

    for class_dir in &config.class_dirs {
        let Some(count) = class_count(class_dir) else {
            report.skip(class_dir.as_str(), "directory name has no class count");
            continue;
        };
        let metrics_dir = config.input_root.join(class_dir).join(kind.dir_name());
        if !metrics_dir.is_dir() {
            report.skip(class_dir.as_str(), format!("no {} directory", kind.dir_name()));
            continue;
        }

        for input in files_with_suffix(&metrics_dir, kind.input_suffix())? {
            let algorithm = Algorithm::from_file_name(file_name(&input));
            match read_metrics(&input) {
                Ok(metrics) => rows.extend(metrics.into_iter().map(|metrics| ComparisonRow {
                    algorithm,
                    class_count: count,
                    metrics,
                })),
                Err(e) => report.fail(&input, &e.into()),
            }
        }
    }

    Ok(rows)
}

/// Render one comparison chart per metric into `config.comparison_dir`
pub fn run_compare(config: &VizConfig, sink: &mut dyn ChartSink) -> Result<BatchReport> {
    let mut report = BatchReport::new("compare");
    let rows = collect_rows(config, &mut report)?;
    if rows.is_empty() {
        report.skip("comparison", "no metrics rows found");
        return Ok(report);
    }
    tracing::debug!(rows = rows.len(), "metrics rows collected for comparison");

    for metric in Metric::ALL {
        let path = config.comparison_dir.join(metric.file_name());
        let chart = Chart::Bars(comparison_chart(metric, &rows));
        let outcome = sink.render(&chart, &path);
        report.record(path, outcome);
    }

    Ok(report)
}

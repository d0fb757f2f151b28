//! Conversion of loaded tables into chart descriptions

use crate::eval::ConfusionMatrix;
use crate::io::{ConfusionTable, MetricsRow};
use crate::render::{Heatmap, LineChart, MarkerShape, Series};

pub const METRICS_FIGSIZE: (u32, u32) = (12, 6);
pub const HEATMAP_FIGSIZE: (u32, u32) = (10, 8);
pub const PR_FIGSIZE: (u32, u32) = (12, 8);
pub const COMPARISON_FIGSIZE: (u32, u32) = (14, 8);
pub const LOG_MATRIX_FIGSIZE: (u32, u32) = (8, 8);

/// Precision, recall and F1 per class, as percentages
pub fn metrics_chart(base: &str, rows: &[MetricsRow]) -> LineChart {
    let series = |name: &str, marker, value: fn(&MetricsRow) -> f64| Series {
        name: name.to_string(),
        values: rows.iter().map(value).collect(),
        marker,
    };

    LineChart {
        title: format!("Metrics Visualization for {base}"),
        x_label: "Class".to_string(),
        y_label: "Percentage".to_string(),
        categories: rows.iter().map(|r| r.class.clone()).collect(),
        series: vec![
            series("Precision", MarkerShape::Circle, |r| r.precision),
            series("Recall", MarkerShape::Triangle, |r| r.recall),
            series("F1-Score", MarkerShape::Cross, |r| r.f1_score),
        ],
        y_range: (0.0, 110.0),
        figsize: METRICS_FIGSIZE,
    }
}

/// Heatmap of a confusion-matrix CSV
pub fn table_heatmap(base: &str, table: &ConfusionTable) -> Heatmap {
    Heatmap {
        title: format!("Confusion Matrix - {base}"),
        x_label: "True Label".to_string(),
        y_label: "Predicted Label".to_string(),
        row_labels: table.row_labels.clone(),
        column_labels: table.column_labels.clone(),
        counts: table.counts.clone(),
        figsize: HEATMAP_FIGSIZE,
    }
}

/// Heatmap of a matrix built from log predictions.
///
/// `representation` and `algorithm` are expected to be sanitized already.
pub fn log_heatmap(representation: &str, algorithm: &str, matrix: &ConfusionMatrix) -> Heatmap {
    let labels: Vec<String> = matrix.labels().iter().map(i64::to_string).collect();
    Heatmap {
        title: format!("Matrice de confusion {algorithm} pour {representation}"),
        x_label: "Predicted label".to_string(),
        y_label: "True label".to_string(),
        row_labels: labels.clone(),
        column_labels: labels,
        counts: matrix
            .matrix()
            .iter()
            .map(|row| row.iter().map(|&c| c as u64).collect())
            .collect(),
        figsize: LOG_MATRIX_FIGSIZE,
    }
}

//! CSV artifacts written by the evaluation binary

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Sentinel row holding the overall scores in a metrics CSV
pub const GLOBAL_ROW: &str = "Global";

/// CSV artifact that could not be loaded
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("Failed to read {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid percentage {value:?} in {path}\n  → Expected a number followed by '%'")]
    Percentage { path: PathBuf, value: String },

    #[error("Invalid count {value:?} at row {row} of {path}")]
    Count { path: PathBuf, row: usize, value: String },

    #[error("Row {row} of {path} has {found} cells, expected {expected}")]
    RowWidth { path: PathBuf, row: usize, found: usize, expected: usize },

    #[error("Confusion matrix in {path} is not square: {rows} rows, {columns} columns")]
    NotSquare { path: PathBuf, rows: usize, columns: usize },
}

impl TableError {
    fn csv(path: &Path, source: csv::Error) -> Self {
        Self::Csv { path: path.to_path_buf(), source }
    }
}

fn open(path: &Path) -> Result<File, TableError> {
    File::open(path).map_err(|e| TableError::csv(path, e.into()))
}

fn reader<R: std::io::Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new().trim(csv::Trim::All).flexible(true).from_reader(source)
}

/// Parse `"<number>%"` into the number. The `%` is optional.
pub fn parse_percentage(value: &str) -> Option<f64> {
    value.trim().trim_end_matches('%').trim_end().parse::<f64>().ok()
}

#[derive(Debug, Deserialize)]
struct RawMetricsRow {
    #[serde(rename = "Class")]
    class: String,
    #[serde(rename = "Precision")]
    precision: String,
    #[serde(rename = "Recall")]
    recall: String,
    #[serde(rename = "F1-Score")]
    f1_score: String,
}

/// Per-class scores from a metrics CSV, as percentages
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MetricsRow {
    pub class: String,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

/// Read a metrics CSV, dropping the `Global` row.
pub fn read_metrics(path: &Path) -> Result<Vec<MetricsRow>, TableError> {
    parse_metrics(open(path)?, path)
}

/// Parse metrics CSV content; `path` is only used in error messages.
pub fn parse_metrics<R: std::io::Read>(
    source: R,
    path: &Path,
) -> Result<Vec<MetricsRow>, TableError> {
    let percent = |value: &str| {
        parse_percentage(value).ok_or_else(|| TableError::Percentage {
            path: path.to_path_buf(),
            value: value.to_string(),
        })
    };

    let mut rows = Vec::new();
    for raw in reader(source).deserialize::<RawMetricsRow>() {
        let raw = raw.map_err(|e| TableError::csv(path, e))?;
        if raw.class == GLOBAL_ROW {
            continue;
        }
        rows.push(MetricsRow {
            precision: percent(&raw.precision)?,
            recall: percent(&raw.recall)?,
            f1_score: percent(&raw.f1_score)?,
            class: raw.class,
        });
    }
    Ok(rows)
}

/// Square count table: rows are true classes, columns predicted classes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfusionTable {
    pub row_labels: Vec<String>,
    pub column_labels: Vec<String>,
    pub counts: Vec<Vec<u64>>,
}

/// Read a confusion-matrix CSV whose first column is the row label.
pub fn read_confusion_table(path: &Path) -> Result<ConfusionTable, TableError> {
    parse_confusion_table(open(path)?, path)
}

/// Parse confusion-matrix CSV content; `path` is only used in error messages.
pub fn parse_confusion_table<R: std::io::Read>(
    source: R,
    path: &Path,
) -> Result<ConfusionTable, TableError> {
    let mut rdr = reader(source);
    let headers = rdr.headers().map_err(|e| TableError::csv(path, e))?.clone();
    let width = headers.len();
    let column_labels: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();

    let mut row_labels = Vec::new();
    let mut counts = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let record = record.map_err(|e| TableError::csv(path, e))?;
        let row = idx + 1;
        if record.len() != width {
            return Err(TableError::RowWidth {
                path: path.to_path_buf(),
                row,
                found: record.len(),
                expected: width,
            });
        }
        let values = record
            .iter()
            .skip(1)
            .map(|cell| {
                cell.parse::<u64>().map_err(|_| TableError::Count {
                    path: path.to_path_buf(),
                    row,
                    value: cell.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        row_labels.push(record.get(0).unwrap_or_default().to_string());
        counts.push(values);
    }

    if row_labels.len() != column_labels.len() {
        return Err(TableError::NotSquare {
            path: path.to_path_buf(),
            rows: row_labels.len(),
            columns: column_labels.len(),
        });
    }

    Ok(ConfusionTable { row_labels, column_labels, counts })
}

/// One scored sample from a precision-recall data CSV
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct PrSample {
    #[serde(rename = "TrueLabel")]
    pub true_label: i64,
    #[serde(rename = "ConfidenceScore")]
    pub confidence_score: f64,
}

/// Read a precision-recall data CSV.
pub fn read_pr_samples(path: &Path) -> Result<Vec<PrSample>, TableError> {
    parse_pr_samples(open(path)?, path)
}

/// Parse precision-recall data CSV content; `path` is only used in error messages.
pub fn parse_pr_samples<R: std::io::Read>(
    source: R,
    path: &Path,
) -> Result<Vec<PrSample>, TableError> {
    reader(source)
        .deserialize::<PrSample>()
        .map(|row| row.map_err(|e| TableError::csv(path, e)))
        .collect()
}

/// Split samples into parallel label and score vectors.
pub fn split_samples(samples: &[PrSample]) -> (Vec<i64>, Vec<f64>) {
    samples.iter().map(|s| (s.true_label, s.confidence_score)).unzip()
}

//! Per-run summary of written, skipped and failed charts

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::Error;

/// An input that produced no chart, without being an error
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Skipped {
    pub item: String,
    pub reason: String,
}

/// An input whose chart could not be produced
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Failure {
    pub path: PathBuf,
    pub code: &'static str,
    pub message: String,
}

/// Outcome of one pipeline run
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BatchReport {
    pub pipeline: String,
    pub written: Vec<PathBuf>,
    pub skipped: Vec<Skipped>,
    pub failed: Vec<Failure>,
}

impl BatchReport {
    pub fn new(pipeline: impl Into<String>) -> Self {
        Self { pipeline: pipeline.into(), ..Default::default() }
    }

    pub fn wrote(&mut self, path: PathBuf) {
        tracing::info!(pipeline = %self.pipeline, path = %path.display(), "chart written");
        self.written.push(path);
    }

    pub fn skip(&mut self, item: impl Into<String>, reason: impl Into<String>) {
        let skipped = Skipped { item: item.into(), reason: reason.into() };
        tracing::warn!(
            pipeline = %self.pipeline,
            item = %skipped.item,
            reason = %skipped.reason,
            "skipped"
        );
        self.skipped.push(skipped);
    }

    pub fn fail(&mut self, path: &Path, error: &Error) {
        tracing::error!(
            pipeline = %self.pipeline,
            path = %path.display(),
            code = error.code(),
            "{error}"
        );
        self.failed.push(Failure {
            path: path.to_path_buf(),
            code: error.code(),
            message: error.to_string(),
        });
    }

    /// Record the result of producing the chart at `path`
    pub fn record(&mut self, path: PathBuf, outcome: crate::Result<()>) {
        match outcome {
            Ok(()) => self.wrote(path),
            Err(e) => self.fail(&path, &e),
        }
    }

    /// Fold another run into this one
    pub fn absorb(&mut self, other: BatchReport) {
        self.written.extend(other.written);
        self.skipped.extend(other.skipped);
        self.failed.extend(other.failed);
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} written, {} skipped, {} failed",
            self.pipeline,
            self.written.len(),
            self.skipped.len(),
            self.failed.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_outcomes() {
        let mut report = BatchReport::new("metrics");
        report.record(PathBuf::from("a.png"), Ok(()));
        report.record(PathBuf::from("b.png"), Err(Error::render("b.png", "backend")));
        report.skip("ART/KMeans", "no data");

        assert_eq!(report.written, vec![PathBuf::from("a.png")]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].code, "E020");
        assert!(!report.is_success());
        assert_eq!(report.to_string(), "metrics: 1 written, 1 skipped, 1 failed");
    }

    #[test]
    fn test_absorb_keeps_name() {
        let mut all = BatchReport::new("all");
        let mut part = BatchReport::new("heatmaps");
        part.wrote(PathBuf::from("x.png"));
        all.absorb(part);

        assert_eq!(all.pipeline, "all");
        assert_eq!(all.written.len(), 1);
        assert!(all.is_success());
    }

    #[test]
    fn test_serializes_to_json() {
        let mut report = BatchReport::new("log");
        report.skip("ART/KMeans", "no data");
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["pipeline"], "log");
        assert_eq!(json["skipped"][0]["reason"], "no data");
        assert!(json["failed"].as_array().unwrap().is_empty());
    }
}

//! End-to-end runs of the pipelines over a temporary results tree
//!
//! Charts are captured by a recording sink, so these tests need neither
//! fonts nor PNG encoding.

use evalviz::config::{ChartStyle, VizConfig};
use evalviz::eval::{parse_report, rank_classes, Algorithm};
use evalviz::io::{parse_metrics, sanitize_filename};
use evalviz::pipeline::{run_all, run_log, run_pr_curves};
use evalviz::render::{Chart, ChartSink, MemorySink, PngRenderer};
use evalviz::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const REPORT: &str = "\
=== Évaluation pour la représentation : ART ===
Classification avec KNN
Prédiction finale : 2, Confiance : 91.2%
Prédiction finale : 2, Confiance : 84%
Prédiction finale : 5, Confiance : 47.5%
Clustering avec K-Means
Prédiction finale : 1, Confiance : 60%
Évaluation pour la représentation : Yang
Classification avec KNN
";

struct Tree {
    _dir: TempDir,
    root: PathBuf,
    config: VizConfig,
}

fn results_tree() -> Tree {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("results");
    for class_dir in ["10_classes", "18_classes"] {
        let base = root.join(class_dir);
        for sub in ["metrics", "confusion_matrices", "precision_recall_data"] {
            fs::create_dir_all(base.join(sub)).unwrap();
        }
        for alg in ["KNN", "KMeans"] {
            fs::write(
                base.join(format!("metrics/GFD_{alg}_metrics.csv")),
                "Class,Precision,Recall,F1-Score\nGlobal,70%,70%,70%\ncat,80%,70%,75%\ndog,60%,65%,62.5%\n",
            )
            .unwrap();
        }
        fs::write(
            base.join("confusion_matrices/GFD_confusion_matrix.csv"),
            ",cat,dog\ncat,8,2\ndog,1,9\n",
        )
        .unwrap();
        fs::write(
            base.join("precision_recall_data/GFD_pr_data.csv"),
            "TrueLabel,ConfidenceScore\n0,0.9\n0,0.1\n1,0.8\n1,0.2\n2,0.7\n",
        )
        .unwrap();
    }
    let log_file = dir.path().join("in.txt");
    fs::write(&log_file, REPORT).unwrap();

    let config = VizConfig { log_file, ..VizConfig::default().with_input_root(root.clone()) };
    Tree { _dir: dir, root, config }
}

/// Sink that fails for every path containing `needle`
struct FailingSink {
    needle: &'static str,
    inner: MemorySink,
}

impl ChartSink for FailingSink {
    fn render(&mut self, chart: &Chart, path: &Path) -> Result<()> {
        if path.to_string_lossy().contains(self.needle) {
            return Err(Error::render(path, "backend refused"));
        }
        self.inner.render(chart, path)
    }
}

#[test]
fn test_report_scenario() {
    let records = parse_report(REPORT.lines()).unwrap();

    let knn = records.get("ART ===", Algorithm::Knn).unwrap();
    assert_eq!(knn.true_labels(), &[2, 2, 5]);
    assert_eq!(knn.predicted_labels(), &[2, 2, 5]);
    assert_eq!(records.get("ART ===", Algorithm::KMeans).unwrap().len(), 1);

    let missing: Vec<String> = records.missing().iter().map(ToString::to_string).collect();
    assert_eq!(missing, vec!["no predictions for Yang with KNN", "no predictions for Yang with KMeans"]);
    assert_eq!(sanitize_filename("ART ==="), "ART");
}

#[test]
fn test_metrics_scenario() {
    let csv = "Class,Precision,Recall,F1-Score\nGlobal,90%,90%,90%\ncat,80%,70%,75%\n";
    let rows = parse_metrics(csv.as_bytes(), Path::new("x_metrics.csv")).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].class, "cat");
    assert_eq!((rows[0].precision, rows[0].recall, rows[0].f1_score), (80.0, 70.0, 75.0));
}

#[test]
fn test_ranking_scenario() {
    let ranking = rank_classes(&[0, 0, 1, 1], &[0.9, 0.1, 0.8, 0.2]).unwrap();
    let selection = ranking.select(3);
    assert_eq!(selection.best.len(), 2);
    assert_eq!(selection.worst.len(), 2);
    assert!(selection.overlaps());
    assert_eq!(selection.distinct().len(), 2);
}

#[test]
fn test_log_pipeline_paths() {
    let tree = results_tree();
    let mut sink = MemorySink::new();
    let report = run_log(&tree.config, &mut sink).unwrap();

    let dir = tree.root.join("confusion_matrices");
    assert_eq!(
        report.written,
        vec![dir.join("ART_KNN_confusion_matrix.png"), dir.join("ART_KMeans_confusion_matrix.png")]
    );
    let reasons: Vec<&str> = report.skipped.iter().map(|s| s.reason.as_str()).collect();
    assert_eq!(reasons, vec!["no predictions for Yang with KNN", "no predictions for Yang with KMeans"]);
    assert_eq!(report.skipped[0].item, "Yang/KNN");
    assert!(report.is_success());
}

#[test]
fn test_run_all_writes_png_files() {
    let tree = results_tree();
    let mut renderer = PngRenderer::new(ChartStyle { dpi: 20 });
    let report = run_all(&tree.config, &mut renderer);

    assert!(report.is_success(), "{:?}", report.failed);
    assert_eq!(report.written.len(), 13);
    assert!(report.written.iter().all(|p| p.is_file()));
}

#[test]
fn test_run_all_writes_every_chart() {
    let tree = results_tree();
    let mut sink = MemorySink::new();
    let report = run_all(&tree.config, &mut sink);

    assert!(report.is_success(), "{:?}", report.failed);
    // log 2, metrics 4, heatmaps 2, pr-curves 2, compare 3
    assert_eq!(report.written.len(), 13);
    assert_eq!(sink.len(), 13);

    let viz = tree.root.join("Visualisations");
    for expected in [
        viz.join("10_classes/metrics/GFD_KMeans_metrics.png"),
        viz.join("18_classes/metrics/GFD_KNN_metrics.png"),
        viz.join("18_classes/confusion_matrices/GFD_confusion_matrix.png"),
        tree.root.join("Visualisations_PR/10_classes/precision_recall_data/GFD_pr_curve_grouped.png"),
        tree.root.join("comparisons_visualizations/comparison_f1-score.png"),
    ] {
        assert!(sink.get(&expected).is_some(), "missing {}", expected.display());
    }
}

#[test]
fn test_pr_curve_legends() {
    let tree = results_tree();
    let mut sink = MemorySink::new();
    run_pr_curves(&tree.config, &mut sink).unwrap();

    let (_, chart) = &sink.charts[0];
    match chart {
        Chart::Curves(curves) => {
            assert_eq!(curves.curves.len(), 3);
            assert!(curves.curves.iter().all(|c| c.label.starts_with("Class ")));
            assert!(curves.curves.iter().all(|c| c.label.contains("(AUC=")));
        }
        other => panic!("expected curves, got {other:?}"),
    }
}

#[test]
fn test_render_failure_does_not_stop_batch() {
    let tree = results_tree();
    let mut sink = FailingSink { needle: "18_classes", inner: MemorySink::new() };
    let report = run_all(&tree.config, &mut sink);

    // metrics 2, heatmaps 1, pr-curves 1 under 18_classes
    assert_eq!(report.failed.len(), 4);
    assert!(report.failed.iter().all(|f| f.code == "E020"));
    assert_eq!(report.written.len(), 9);
    assert_eq!(sink.inner.len(), 9);
}

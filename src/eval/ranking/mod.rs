//! Per-class precision-recall AUC ranking
//!
//! Every distinct true label is scored one-vs-rest against the shared
//! confidence scores, classes are ordered by the area under their
//! precision-recall curve, and the extremes are selected for charting.

mod auc;
mod curve;
mod rank;


pub use auc::auc;
pub use curve::{precision_recall_curve, PrecisionRecallCurve};
pub use rank::{
    class_curve, one_vs_rest, rank_classes, ClassAuc, ClassRanking, ClassSelection,
    DEFAULT_TOP_K,
};

/// Unusable input to curve or ranking computations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RankError {
    #[error("Label/score length mismatch: {labels} labels, {scores} scores")]
    LengthMismatch { labels: usize, scores: usize },

    #[error("Cannot rank classes of an empty sample")]
    Empty,

    #[error("Score at index {index} is not finite: {value}")]
    NonFiniteScore { index: usize, value: f64 },

    #[error("Curve coordinates differ in length: {x} x values, {y} y values")]
    CurveShape { x: usize, y: usize },

    #[error("At least 2 points are needed to compute an area, got {0}")]
    TooFewPoints(usize),

    #[error("Curve x values are neither increasing nor decreasing\n  → Sort the points by recall first")]
    NonMonotonic,
}

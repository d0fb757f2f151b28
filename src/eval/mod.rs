//! Evaluation result processing
//!
//! ## Architecture
//!
//! - `log_parser`: evaluation report → label sequences per (representation, algorithm)
//! - `ranking`: per-class precision-recall AUC, best/worst class selection
//! - `classification`: confusion matrix over integer labels
//!
//! ## Example
//!
//! ```
//! use evalviz::eval::{parse_report, rank_classes, Algorithm, DEFAULT_TOP_K};
//!
//! let records = parse_report([
//!     "Évaluation pour la représentation : ART",
//!     "Classification avec KNN",
//!     "Prédiction finale : 2, confidence : 91.2%",
//! ])?;
//! assert_eq!(records.get("ART", Algorithm::Knn).unwrap().predicted_labels(), &[2]);
//!
//! let ranking = rank_classes(&[0, 0, 1, 1], &[0.9, 0.1, 0.8, 0.2])?;
//! assert_eq!(ranking.select(DEFAULT_TOP_K).distinct().len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod classification;
pub mod log_parser;
pub mod ranking;

pub use classification::{confusion_matrix, ConfusionMatrix};
pub use log_parser::{
    parse_report, Algorithm, MissingData, ParseError, PredictionRecord, PredictionRecords,
};
pub use ranking::{
    rank_classes, ClassAuc, ClassRanking, ClassSelection, PrecisionRecallCurve, RankError,
    DEFAULT_TOP_K,
};

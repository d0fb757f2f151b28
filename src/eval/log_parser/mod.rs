//! Evaluation report parsing
//!
//! Turns the free-text report printed by the evaluation binary into label
//! sequences per (representation, algorithm):
//!
//! ```text
//! Évaluation pour la représentation : ART
//! === Classification avec KNN ===
//! Prédiction finale : 2, confidence : 91.2%
//! ```
//!
//! The parser is a pure fold over the lines with an explicit
//! [`ParserState`]; marker detection is table driven (see [`markers`]).

pub mod markers;
mod parser;
mod record;


pub use markers::{Algorithm, Marker, Transition, REPORT_MARKERS};
pub use parser::{
    parse_prediction_line, parse_report, parse_report_file, LogParser, ParseError, ParserState,
    Prediction,
};
pub use record::{MissingData, PredictionRecord, PredictionRecords};

//! Line-oriented report parser

use std::path::Path;

use super::markers::{match_marker, Algorithm, Marker, Transition, REPORT_MARKERS};
use super::record::PredictionRecords;

/// Malformed prediction line inside a valid parsing context
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Malformed prediction at line {line_number}: {reason}\n  Line: {line:?}")]
pub struct ParseError {
    /// 1-based line number in the report
    pub line_number: usize,
    /// Raw line content
    pub line: String,
    /// What was wrong with it
    pub reason: String,
}

impl ParseError {
    pub fn new(line_number: usize, line: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { line_number, line: line.into(), reason: reason.into() }
    }
}

/// Label and confidence carried by a prediction line
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prediction {
    pub label: i64,
    /// Confidence as a fraction (the report prints a percentage)
    pub confidence: f64,
}

/// Parse the fields of a prediction line.
///
/// Expected shape: `<text> : <int>, <text> : <float>%`. Each field's value
/// is the text after its last `:`.
pub fn parse_prediction_line(line: &str) -> Result<Prediction, String> {
    let mut fields = line.split(',');
    let label_field = fields.next().unwrap_or_default();
    let confidence_field = fields.next().ok_or_else(|| "missing confidence field".to_string())?;

    let label_text = field_value(label_field);
    let label = label_text
        .parse::<i64>()
        .map_err(|_| format!("label {label_text:?} is not an integer"))?;

    let confidence_text = field_value(confidence_field).trim_end_matches('%').trim_end();
    let percent = confidence_text
        .parse::<f64>()
        .map_err(|_| format!("confidence {confidence_text:?} is not a number"))?;
    if !percent.is_finite() {
        return Err(format!("confidence {confidence_text:?} is not finite"));
    }

    Ok(Prediction { label, confidence: percent / 100.0 })
}

fn field_value(field: &str) -> &str {
    field.rsplit(':').next().unwrap_or(field).trim()
}

/// Context carried from one line to the next
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserState {
    pub representation: Option<String>,
    pub algorithm: Option<Algorithm>,
}

/// Report parser driven by a marker table
#[derive(Clone, Copy, Debug)]
pub struct LogParser<'m> {
    markers: &'m [Marker],
}

impl Default for LogParser<'static> {
    fn default() -> Self {
        Self { markers: REPORT_MARKERS }
    }
}

impl<'m> LogParser<'m> {
    /// Parser recognizing a custom marker table
    pub fn with_markers(markers: &'m [Marker]) -> Self {
        Self { markers }
    }

    /// Fold the report lines into prediction records.
    pub fn parse<I, S>(&self, lines: I) -> Result<PredictionRecords, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (_, records) = lines.into_iter().enumerate().try_fold(
            (ParserState::default(), PredictionRecords::default()),
            |(state, mut records), (idx, raw)| {
                let state = self.step(state, &mut records, idx + 1, raw.as_ref())?;
                Ok::<_, ParseError>((state, records))
            },
        )?;
        Ok(records)
    }

    /// Apply one line to the state, appending to `records` on predictions.
    pub fn step(
        &self,
        mut state: ParserState,
        records: &mut PredictionRecords,
        line_number: usize,
        raw: &str,
    ) -> Result<ParserState, ParseError> {
        let line = raw.trim();
        match match_marker(self.markers, line) {
            Some(Transition::Representation) => {
                let name = line.rsplit(':').next().unwrap_or(line).trim();
                records.ensure_representation(name);
                state.representation = Some(name.to_string());
            }
            Some(Transition::Algorithm(algorithm)) => state.algorithm = Some(algorithm),
            Some(Transition::Prediction) => {
                if let (Some(rep), Some(alg)) = (&state.representation, state.algorithm) {
                    let prediction = parse_prediction_line(line)
                        .map_err(|reason| ParseError::new(line_number, raw, reason))?;
                    if let Some(record) = records.record_mut(rep, alg) {
                        record.push(prediction.label);
                    }
                }
            }
            None => {}
        }
        Ok(state)
    }
}

/// Parse a report with the default marker table.
pub fn parse_report<I, S>(lines: I) -> Result<PredictionRecords, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    LogParser::default().parse(lines)
}

/// Read and parse a report file.
pub fn parse_report_file(path: &Path) -> crate::Result<PredictionRecords> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| crate::Error::io(format!("reading report {}", path.display()), e))?;
    Ok(parse_report(text.lines())?)
}

//! Prediction records accumulated from an evaluation report

use std::collections::BTreeMap;
use std::fmt;

use super::markers::Algorithm;

/// Label sequences for one (representation, algorithm) pair
///
/// Both sequences always have the same length: [`PredictionRecord::push`]
/// is the only mutation and appends to both.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PredictionRecord {
    true_labels: Vec<i64>,
    predicted_labels: Vec<i64>,
}

impl PredictionRecord {
    /// Append one prediction.
    ///
    /// The report carries no ground truth, so the predicted label is also
    /// recorded as the true label.
    pub fn push(&mut self, predicted: i64) {
        self.true_labels.push(predicted);
        self.predicted_labels.push(predicted);
    }

    pub fn true_labels(&self) -> &[i64] {
        &self.true_labels
    }

    pub fn predicted_labels(&self) -> &[i64] {
        &self.predicted_labels
    }

    pub fn len(&self) -> usize {
        self.predicted_labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicted_labels.is_empty()
    }
}

/// A (representation, algorithm) pair with no predictions
///
/// Reported and skipped by callers, never raised as an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingData {
    pub representation: String,
    pub algorithm: Algorithm,
}

impl fmt::Display for MissingData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no predictions for {} with {}", self.representation, self.algorithm)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct RepresentationEntry {
    name: String,
    slots: BTreeMap<Algorithm, PredictionRecord>,
}

/// All records produced by one parse, in the order representations appeared
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PredictionRecords {
    entries: Vec<RepresentationEntry>,
}

impl PredictionRecords {
    /// Register a representation with empty slots for every algorithm.
    ///
    /// Existing records are left untouched.
    pub fn ensure_representation(&mut self, name: &str) {
        if self.position(name).is_none() {
            let slots = Algorithm::ALL.iter().map(|&a| (a, PredictionRecord::default())).collect();
            self.entries.push(RepresentationEntry { name: name.to_string(), slots });
        }
    }

    /// Mutable record for a pair, if the representation has been seen
    pub fn record_mut(
        &mut self,
        representation: &str,
        algorithm: Algorithm,
    ) -> Option<&mut PredictionRecord> {
        let idx = self.position(representation)?;
        Some(self.entries[idx].slots.entry(algorithm).or_default())
    }

    pub fn get(&self, representation: &str, algorithm: Algorithm) -> Option<&PredictionRecord> {
        let idx = self.position(representation)?;
        self.entries[idx].slots.get(&algorithm)
    }

    /// Representation names in first-seen order
    pub fn representations(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Every record, grouped by representation
    pub fn iter(&self) -> impl Iterator<Item = (&str, Algorithm, &PredictionRecord)> {
        self.entries
            .iter()
            .flat_map(|e| e.slots.iter().map(move |(&alg, rec)| (e.name.as_str(), alg, rec)))
    }

    /// Pairs that received no predictions
    pub fn missing(&self) -> Vec<MissingData> {
        self.iter()
            .filter(|(_, _, rec)| rec.is_empty())
            .map(|(rep, alg, _)| MissingData { representation: rep.to_string(), algorithm: alg })
            .collect()
    }

    /// Number of (representation, algorithm) records
    pub fn len(&self) -> usize {
        self.entries.iter().map(|e| e.slots.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }
}

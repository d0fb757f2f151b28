//! Confusion matrix over arbitrary integer class labels

use std::fmt;

/// Confusion matrix for multi-class classification
///
/// Rows and columns follow `labels`, the sorted distinct labels seen in
/// either sequence. Element [i][j] counts samples whose true label is
/// `labels[i]` and predicted label is `labels[j]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfusionMatrix {
    /// The matrix data: matrix[true_index][predicted_index] = count
    matrix: Vec<Vec<usize>>,
    /// Class label of each row/column
    labels: Vec<i64>,
}

impl ConfusionMatrix {
    /// Create an all-zero matrix over the given labels
    pub fn new(mut labels: Vec<i64>) -> Self {
        labels.sort_unstable();
        labels.dedup();
        let n = labels.len();
        Self { matrix: vec![vec![0; n]; n], labels }
    }

    /// Create from predictions and ground truth
    pub fn from_predictions(y_pred: &[i64], y_true: &[i64]) -> Self {
        assert_eq!(y_pred.len(), y_true.len(), "Predictions and targets must have same length");

        let mut cm = Self::new(y_pred.iter().chain(y_true).copied().collect());
        for (&pred, &true_label) in y_pred.iter().zip(y_true) {
            cm.add(true_label, pred);
        }
        cm
    }

    /// Count one sample. Labels outside the matrix are ignored.
    pub fn add(&mut self, true_label: i64, predicted_label: i64) {
        if let (Some(i), Some(j)) = (self.index_of(true_label), self.index_of(predicted_label)) {
            self.matrix[i][j] += 1;
        }
    }

    /// Get the raw matrix
    pub fn matrix(&self) -> &Vec<Vec<usize>> {
        &self.matrix
    }

    /// Get the class labels
    pub fn labels(&self) -> &[i64] {
        &self.labels
    }

    /// Get number of classes
    pub fn n_classes(&self) -> usize {
        self.labels.len()
    }

    /// Count for a (true, predicted) label pair; 0 for unknown labels
    pub fn get(&self, true_label: i64, predicted_label: i64) -> usize {
        match (self.index_of(true_label), self.index_of(predicted_label)) {
            (Some(i), Some(j)) => self.matrix[i][j],
            _ => 0,
        }
    }

    /// Total number of samples
    pub fn total(&self) -> usize {
        self.matrix.iter().flatten().sum()
    }

    /// Calculate accuracy
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let correct: usize = (0..self.n_classes()).map(|i| self.matrix[i][i]).sum();
        correct as f64 / total as f64
    }

    /// True when every off-diagonal count is zero
    pub fn is_diagonal(&self) -> bool {
        self.matrix
            .iter()
            .enumerate()
            .all(|(i, row)| row.iter().enumerate().all(|(j, &c)| i == j || c == 0))
    }

    fn index_of(&self, label: i64) -> Option<usize> {
        self.labels.binary_search(&label).ok()
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix:")?;

        write!(f, "{:>10}", "")?;
        for label in &self.labels {
            write!(f, " {:>8}", format!("Pred {label}"))?;
        }
        writeln!(f)?;

        for (label, row) in self.labels.iter().zip(&self.matrix) {
            write!(f, "{:>10}", format!("True {label}"))?;
            for count in row {
                write!(f, " {count:>8}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

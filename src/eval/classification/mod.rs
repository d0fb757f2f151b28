//! Confusion matrix construction
//!
//! Cross-tabulates true against predicted labels. Labels are arbitrary
//! integers; the matrix axes are their sorted distinct values.

mod confusion;


pub use confusion::ConfusionMatrix;

/// Compute confusion matrix from predictions and ground truth
///
/// # Arguments
/// * `y_pred` - Predicted class labels
/// * `y_true` - Ground truth class labels
///
/// # Example
/// ```
/// use evalviz::eval::confusion_matrix;
///
/// let y_pred = vec![1, 2, 2, 5];
/// let y_true = vec![1, 2, 1, 5];
/// let cm = confusion_matrix(&y_pred, &y_true);
///
/// assert_eq!(cm.labels(), &[1, 2, 5]);
/// assert_eq!(cm.get(1, 2), 1); // True 1, predicted 2
/// ```
pub fn confusion_matrix(y_pred: &[i64], y_true: &[i64]) -> ConfusionMatrix {
    ConfusionMatrix::from_predictions(y_pred, y_true)
}

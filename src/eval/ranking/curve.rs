//! One-vs-rest precision-recall curve

use super::RankError;

/// Precision-recall pairs from a descending threshold sweep
///
/// Points are stored in decreasing recall order and end with the
/// conventional `(recall 0, precision 1)` point, matching scikit-learn's
/// `precision_recall_curve`. `thresholds` has one entry less than the
/// point arrays and is increasing.
#[derive(Clone, Debug, PartialEq)]
pub struct PrecisionRecallCurve {
    pub precision: Vec<f64>,
    pub recall: Vec<f64>,
    pub thresholds: Vec<f64>,
}

impl PrecisionRecallCurve {
    /// `(recall, precision)` points in stored order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.recall.iter().copied().zip(self.precision.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.precision.len()
    }

    pub fn is_empty(&self) -> bool {
        self.precision.is_empty()
    }
}

/// Check that labels and scores can be swept.
pub(crate) fn check_inputs(labels: usize, scores: &[f64]) -> Result<(), RankError> {
    if labels != scores.len() {
        return Err(RankError::LengthMismatch { labels, scores: scores.len() });
    }
    if scores.is_empty() {
        return Err(RankError::Empty);
    }
    if let Some((index, &value)) = scores.iter().enumerate().find(|(_, s)| !s.is_finite()) {
        return Err(RankError::NonFiniteScore { index, value });
    }
    Ok(())
}

/// Compute the precision-recall curve of a binary problem.
///
/// A threshold is placed at every distinct score. When there are no
/// positive samples recall is reported as 1 everywhere.
pub fn precision_recall_curve(
    is_positive: &[bool],
    scores: &[f64],
) -> Result<PrecisionRecallCurve, RankError> {
    check_inputs(is_positive.len(), scores)?;

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut tps = Vec::new();
    let mut fps = Vec::new();
    let mut thresholds = Vec::new();
    let (mut tp, mut fp) = (0usize, 0usize);

    for (pos, &idx) in order.iter().enumerate() {
        if is_positive[idx] {
            tp += 1;
        } else {
            fp += 1;
        }
        let last_of_run = order.get(pos + 1).map_or(true, |&next| scores[next] != scores[idx]);
        if last_of_run {
            tps.push(tp as f64);
            fps.push(fp as f64);
            thresholds.push(scores[idx]);
        }
    }

    let total_pos = tp as f64;
    let mut precision: Vec<f64> =
        tps.iter().zip(&fps).rev().map(|(&t, &f)| t / (t + f)).collect();
    let mut recall: Vec<f64> = if total_pos > 0.0 {
        tps.iter().rev().map(|&t| t / total_pos).collect()
    } else {
        vec![1.0; tps.len()]
    };
    thresholds.reverse();

    precision.push(1.0);
    recall.push(0.0);

    Ok(PrecisionRecallCurve { precision, recall, thresholds })
}

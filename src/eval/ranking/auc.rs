//! Trapezoidal area under a curve

use super::RankError;

/// Area under the curve `y(x)` by the trapezoidal rule.
///
/// `x` must be monotonic, either increasing or decreasing; the points are
/// integrated in the order given and the sign is corrected for decreasing
/// `x`. Unsorted input is rejected because its area is meaningless.
pub fn auc(x: &[f64], y: &[f64]) -> Result<f64, RankError> {
    if x.len() != y.len() {
        return Err(RankError::CurveShape { x: x.len(), y: y.len() });
    }
    if x.len() < 2 {
        return Err(RankError::TooFewPoints(x.len()));
    }

    let increasing = x.windows(2).all(|w| w[1] >= w[0]);
    let decreasing = x.windows(2).all(|w| w[1] <= w[0]);
    let direction = match (increasing, decreasing) {
        (true, _) => 1.0,
        (false, true) => -1.0,
        (false, false) => return Err(RankError::NonMonotonic),
    };

    let area: f64 = x
        .windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| (xs[1] - xs[0]) * (ys[0] + ys[1]) / 2.0)
        .sum();

    Ok(direction * area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_unit_square() {
        assert_abs_diff_eq!(auc(&[0.0, 1.0], &[1.0, 1.0]).unwrap(), 1.0);
    }

    #[test]
    fn test_triangle() {
        assert_abs_diff_eq!(auc(&[0.0, 1.0], &[0.0, 1.0]).unwrap(), 0.5);
    }

    #[test]
    fn test_decreasing_x_gives_positive_area() {
        let up = auc(&[0.0, 0.5, 1.0], &[1.0, 0.5, 0.25]).unwrap();
        let down = auc(&[1.0, 0.5, 0.0], &[0.25, 0.5, 1.0]).unwrap();
        assert_abs_diff_eq!(up, down, epsilon = 1e-12);
        assert!(down > 0.0);
    }

    #[test]
    fn test_vertical_segments_add_nothing() {
        let area = auc(&[1.0, 1.0, 0.5, 0.0], &[0.5, 0.9, 0.5, 1.0]).unwrap();
        assert_abs_diff_eq!(area, 0.5 * 0.7 + 0.5 * 0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_unsorted_x() {
        assert_eq!(auc(&[0.0, 1.0, 0.5], &[1.0, 1.0, 1.0]), Err(RankError::NonMonotonic));
    }

    #[test]
    fn test_rejects_short_input() {
        assert_eq!(auc(&[0.5], &[1.0]), Err(RankError::TooFewPoints(1)));
        assert!(matches!(auc(&[0.0, 1.0], &[1.0]), Err(RankError::CurveShape { x: 2, y: 1 })));
    }
}

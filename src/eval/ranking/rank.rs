//! Per-class AUC ranking and best/worst selection

use std::collections::HashSet;

use super::auc::auc;
use super::curve::{check_inputs, precision_recall_curve, PrecisionRecallCurve};
use super::RankError;

/// Number of best and worst classes charted by default
pub const DEFAULT_TOP_K: usize = 3;

/// Area under one class's precision-recall curve
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassAuc {
    pub class_label: i64,
    pub auc: f64,
}

/// Indicator vector for `class` against every other label
pub fn one_vs_rest(labels: &[i64], class: i64) -> Vec<bool> {
    labels.iter().map(|&l| l == class).collect()
}

/// Precision-recall curve of `class` treated as the positive label
pub fn class_curve(
    labels: &[i64],
    scores: &[f64],
    class: i64,
) -> Result<PrecisionRecallCurve, RankError> {
    precision_recall_curve(&one_vs_rest(labels, class), scores)
}

/// Classes ordered by ascending AUC, ties by ascending label
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassRanking {
    classes: Vec<ClassAuc>,
}

impl ClassRanking {
    pub fn as_slice(&self) -> &[ClassAuc] {
        &self.classes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassAuc> {
        self.classes.iter()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// AUC of a class, if it was ranked
    pub fn auc_of(&self, class_label: i64) -> Option<f64> {
        self.classes.iter().find(|c| c.class_label == class_label).map(|c| c.auc)
    }

    /// The `k` lowest-AUC classes, lowest first
    pub fn worst(&self, k: usize) -> &[ClassAuc] {
        &self.classes[..k.min(self.classes.len())]
    }

    /// The `k` highest-AUC classes, in ranking order (highest last)
    pub fn best(&self, k: usize) -> &[ClassAuc] {
        &self.classes[self.classes.len().saturating_sub(k)..]
    }

    pub fn select(&self, k: usize) -> ClassSelection {
        ClassSelection { best: self.best(k).to_vec(), worst: self.worst(k).to_vec() }
    }
}

impl<'a> IntoIterator for &'a ClassRanking {
    type Item = &'a ClassAuc;
    type IntoIter = std::slice::Iter<'a, ClassAuc>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.iter()
    }
}

/// Best and worst classes picked for display
///
/// With fewer than `2k` classes the two lists share entries.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassSelection {
    pub best: Vec<ClassAuc>,
    pub worst: Vec<ClassAuc>,
}

impl ClassSelection {
    pub fn overlaps(&self) -> bool {
        self.best.iter().any(|b| self.worst.iter().any(|w| w.class_label == b.class_label))
    }

    /// Classes to draw: best then worst, each class once
    pub fn distinct(&self) -> Vec<ClassAuc> {
        let mut seen = HashSet::new();
        self.best
            .iter()
            .chain(&self.worst)
            .filter(|c| seen.insert(c.class_label))
            .copied()
            .collect()
    }
}

/// Rank every class present in `labels` by the AUC of its one-vs-rest
/// precision-recall curve.
///
/// # Errors
///
/// Fails when `labels` and `scores` differ in length, are empty, or a score
/// is not finite.
///
/// # Example
///
/// ```
/// use evalviz::eval::ranking::rank_classes;
///
/// let ranking = rank_classes(&[0, 0, 1, 1], &[0.9, 0.1, 0.8, 0.2]).unwrap();
/// assert_eq!(ranking.as_slice()[0].class_label, 1);
/// assert_eq!(ranking.as_slice()[1].class_label, 0);
/// ```
pub fn rank_classes(labels: &[i64], scores: &[f64]) -> Result<ClassRanking, RankError> {
    check_inputs(labels.len(), scores)?;

    let mut classes: Vec<i64> = labels.to_vec();
    classes.sort_unstable();
    classes.dedup();

    let mut ranked = classes
        .into_iter()
        .map(|class| {
            let curve = class_curve(labels, scores, class)?;
            let area = auc(&curve.recall, &curve.precision)?;
            Ok(ClassAuc { class_label: class, auc: area })
        })
        .collect::<Result<Vec<_>, RankError>>()?;

    ranked.sort_by(|a, b| a.auc.total_cmp(&b.auc).then(a.class_label.cmp(&b.class_label)));

    Ok(ClassRanking { classes: ranked })
}

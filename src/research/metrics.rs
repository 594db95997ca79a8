use fixedbitset::FixedBitSet;
use serde::{Serialize, Deserialize};

use crate::Label;
use crate::common::checker;


/// Precision and recall of the class `1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrecisionRecall {
    /// `tp / (tp + fp)`, or `0` if nothing is predicted positive.
    pub precision: f64,
    /// `tp / (tp + fn)`, or `0` if nothing is positive.
    pub recall: f64,
    /// Number of true positives.
    pub true_positives: usize,
    /// Number of false positives.
    pub false_positives: usize,
    /// Number of false negatives.
    pub false_negatives: usize,
}


fn positives(labels: &[Label]) -> FixedBitSet {
    let mut set = FixedBitSet::with_capacity(labels.len());
    labels.iter()
        .enumerate()
        .filter(|(_, y)| **y != 0)
        .for_each(|(i, _)| { set.insert(i); });
    set
}


fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 { 0.0 } else { num as f64 / den as f64 }
}


/// Computes the precision and the recall of `predictions`
/// against `truth`. A label is positive if it is non-zero.
pub fn precision_recall(predictions: &[Label], truth: &[Label])
    -> PrecisionRecall
{
    checker::check_same_length(predictions, truth);
    let predicted = positives(predictions);
    let actual = positives(truth);

    let true_positives = predicted.intersection(&actual).count();
    let false_positives = predicted.difference(&actual).count();
    let false_negatives = actual.difference(&predicted).count();

    PrecisionRecall {
        precision: ratio(true_positives, true_positives + false_positives),
        recall: ratio(true_positives, true_positives + false_negatives),
        true_positives,
        false_positives,
        false_negatives,
    }
}

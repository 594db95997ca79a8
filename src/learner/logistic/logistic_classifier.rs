use serde::{
    Serialize,
    Deserialize,
};

use crate::{Classifier, Label, Sample};
use crate::common::utils;


/// Linear classifier `x ↦ [w·x + b > 0]`
/// returned by [`LogisticRegression`](super::LogisticRegression).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticClassifier {
    pub(super) weights: Vec<f64>,
    pub(super) intercept: f64,
}


impl LogisticClassifier {
    /// Returns the weight vector `w`.
    pub fn weights(&self) -> &[f64] {
        &self.weights[..]
    }


    /// Returns the intercept `b`.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }


    /// Returns the probability that the i'th row belongs to the class `1`.
    pub fn probability(&self, sample: &Sample, row: usize) -> f64 {
        utils::sigmoid(self.confidence(sample, row))
    }
}


impl Classifier for LogisticClassifier {
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        self.weights.iter()
            .zip(sample.features())
            .map(|(w, feat)| w * feat[row])
            .sum::<f64>()
            + self.intercept
    }


    fn predict(&self, sample: &Sample, row: usize) -> Label {
        if self.confidence(sample, row) > 0.0 { 1 } else { 0 }
    }
}

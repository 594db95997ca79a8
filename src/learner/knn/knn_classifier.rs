use rayon::prelude::*;

use serde::{
    Serialize,
    Deserialize,
};

use crate::{Classifier, Label, Sample};


/// Majority vote over the `k` nearest training examples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnnClassifier {
    pub(super) k: usize,
    pub(super) points: Vec<Vec<f64>>,
    pub(super) labels: Vec<Label>,
}


impl KnnClassifier {
    /// Returns the number of neighbors that vote.
    pub fn k(&self) -> usize {
        self.k
    }


    /// Returns the indices of the `k` training examples
    /// nearest to the i'th row of `sample`,
    /// from the nearest to the farthest.
    /// Ties in distance are broken by the training order.
    pub fn neighbors(&self, sample: &Sample, row: usize) -> Vec<usize> {
        let x = sample.row(row);
        let mut dist = self.points.iter()
            .map(|p| {
                p.iter()
                    .zip(&x)
                    .map(|(a, b)| (a - b).powi(2))
                    .sum::<f64>()
            })
            .enumerate()
            .collect::<Vec<_>>();

        // `sort_by` is stable.
        dist.sort_by(|(_, a), (_, b)| a.total_cmp(b));
        dist.into_iter()
            .take(self.k)
            .map(|(i, _)| i)
            .collect()
    }
}


impl Classifier for KnnClassifier {
    /// The fraction of positive votes minus the one of negative votes.
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        let votes = self.neighbors(sample, row)
            .into_iter()
            .map(|i| if self.labels[i] == 1 { 1.0 } else { -1.0 })
            .sum::<f64>();
        votes / self.k as f64
    }


    // A tie goes to the class `0`.
    fn predict(&self, sample: &Sample, row: usize) -> Label {
        if self.confidence(sample, row) > 0.0 { 1 } else { 0 }
    }


    fn predict_all(&self, sample: &Sample) -> Vec<Label> {
        let n_sample = sample.shape().0;
        (0..n_sample).into_par_iter()
            .map(|row| self.predict(sample, row))
            .collect()
    }
}

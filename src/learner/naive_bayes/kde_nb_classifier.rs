use rayon::prelude::*;

use serde::{
    Serialize,
    Deserialize,
};

use crate::{Classifier, Label, Sample};

use super::probability::{Probability, KernelDensity};


/// Naive Bayes classifier with kernel density estimates
/// as the class-conditional densities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KdeNBClassifier {
    pub(super) log_prior_n: f64,
    pub(super) log_prior_p: f64,

    /// Pairs of densities `(class 0, class 1)`, one per feature.
    pub(super) densities: Vec<(KernelDensity, KernelDensity)>,
}


impl KdeNBClassifier {
    /// Returns the logarithmic priors of the classes `0` and `1`.
    pub fn log_priors(&self) -> (f64, f64) {
        (self.log_prior_n, self.log_prior_p)
    }


    /// Computes the unnormalized log-posteriors
    /// `ln P(c) + Σ_f ln p(x_f | c)` of the classes `0` and `1`
    /// for the given instance.
    pub fn log_scores(&self, sample: &Sample, row: usize) -> (f64, f64) {
        self.densities.iter()
            .zip(sample.features())
            .fold(
                (self.log_prior_n, self.log_prior_p),
                |(score_n, score_p), ((dens_n, dens_p), feat)| {
                    let x = feat[row];
                    (
                        score_n + dens_n.log_probability(x),
                        score_p + dens_p.log_probability(x),
                    )
                }
            )
    }
}


impl Classifier for KdeNBClassifier {
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        let (n, p) = self.log_scores(sample, row);
        p - n
    }


    // Compares the scores directly since `-inf - -inf` is `NaN`.
    fn predict(&self, sample: &Sample, row: usize) -> Label {
        let (n, p) = self.log_scores(sample, row);
        if p >= n { 1 } else { 0 }
    }


    fn predict_all(&self, sample: &Sample) -> Vec<Label> {
        let n_sample = sample.shape().0;
        (0..n_sample).into_par_iter()
            .map(|row| self.predict(sample, row))
            .collect()
    }
}

use rayon::prelude::*;

use crate::{Learner, Sample};
use crate::common::checker;

use super::probability::{
    Kernel,
    KernelDensity,
};
use super::kde_nb_classifier::*;


/// A factory that produces a [`KdeNBClassifier`].
/// For each class and each feature,
/// `KdeNB` fits one kernel density estimate
/// of the feature values of the examples in the class.
///
/// # Example
/// ```no_run
/// use miniclassify::prelude::*;
///
/// let nbayes = KdeNB::init(0.2)
///     .kernel(Kernel::Gaussian);
/// let f = nbayes.fit(&train);
/// let predictions = f.predict_all(&test);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KdeNB {
    bandwidth: f64,
    kernel: Kernel,
}


impl KdeNB {
    /// Initializes the `KdeNB` instance with the Gaussian kernel.
    pub fn init(bandwidth: f64) -> Self {
        checker::check_bandwidth(bandwidth);
        Self { bandwidth, kernel: Kernel::Gaussian, }
    }


    /// Set the smoothing kernel.
    /// Default is `Kernel::Gaussian`.
    pub fn kernel(mut self, kernel: Kernel) -> Self {
        self.kernel = kernel;
        self
    }


    /// Returns the bandwidth.
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }
}


impl Learner for KdeNB {
    type Hypothesis = KdeNBClassifier;


    fn name(&self) -> &str {
        "KDE Naive Bayes"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = vec![
            ("Bandwidth", format!("{}", self.bandwidth)),
            ("Kernel", format!("{:?}", self.kernel)),
        ];
        Some(info)
    }


    fn fit(&self, sample: &Sample) -> Self::Hypothesis {
        checker::check_both_classes(sample);

        let n_sample = sample.shape().0 as f64;
        let ix_n = sample.indices_of(0);
        let ix_p = sample.indices_of(1);

        let log_prior_n = (ix_n.len() as f64 / n_sample).ln();
        let log_prior_p = (ix_p.len() as f64 / n_sample).ln();


        // One density per feature for each class.
        let densities = sample.features()
            .par_iter()
            .map(|feat| {
                let fit = |ix: &[usize]| {
                    let points = ix.iter()
                        .map(|&i| feat[i])
                        .collect::<Vec<_>>();
                    KernelDensity::new(self.kernel, self.bandwidth, points)
                };
                (fit(&ix_n[..]), fit(&ix_p[..]))
            })
            .collect::<Vec<_>>();


        KdeNBClassifier {
            log_prior_n,
            log_prior_p,
            densities,
        }
    }
}

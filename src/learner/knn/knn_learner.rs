use crate::{Learner, Sample};
use crate::common::checker;

use super::knn_classifier::KnnClassifier;


/// The k-nearest-neighbors learner.
/// Training just memorizes the sample;
/// the classifier votes among the `k` training examples
/// closest to the query in the Euclidean distance.
///
/// # Example
/// ```no_run
/// use miniclassify::prelude::*;
///
/// let f = Knn::init(5).fit(&train);
/// let predictions = f.predict_all(&test);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Knn {
    k: usize,
}


impl Knn {
    /// Initializes the `Knn` instance with `k` neighbors.
    pub fn init(k: usize) -> Self {
        checker::check_n_neighbors(k);
        Self { k }
    }


    /// Returns the number of neighbors.
    pub fn k(&self) -> usize {
        self.k
    }
}


impl Learner for Knn {
    type Hypothesis = KnnClassifier;


    fn name(&self) -> &str {
        "k-Nearest Neighbors"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        Some(vec![("k", format!("{}", self.k))])
    }


    fn fit(&self, sample: &Sample) -> Self::Hypothesis {
        checker::check_sample(sample);

        let n_sample = sample.shape().0;
        let points = (0..n_sample).map(|i| sample.row(i))
            .collect::<Vec<_>>();
        let labels = sample.labels();

        KnnClassifier {
            k: self.k.min(n_sample),
            points,
            labels,
        }
    }
}

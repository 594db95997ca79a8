//! Defines the `Learner` trait.
use crate::{Classifier, Sample};


/// A trait that defines the behavor of a learning algorithm.
/// A learner keeps its hyperparameters and
/// returns a [`Classifier`] fitted on a given training sample.
pub trait Learner {
    /// The classifier type returned by this learner.
    type Hypothesis: Classifier;


    /// Returns the name of the learner.
    fn name(&self) -> &str;


    /// Returns the hyperparameters as `(name, value)` pairs.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Fits a classifier on `sample`.
    /// The target of `sample` must take values in `{0, 1}`.
    fn fit(&self, sample: &Sample) -> Self::Hypothesis;
}

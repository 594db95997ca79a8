//! Defines the [`Classifier`] trait implemented by every hypothesis
//! that a [`Learner`](crate::Learner) returns.
use crate::Sample;


/// Binary class label. Takes the value `0` or `1`.
pub type Label = i64;


/// A trait that defines the behavor of binary classifier.
/// You only need to implement `confidence` method.
pub trait Classifier {
    /// Computes the confidence of the i'th row of the `sample`.
    /// A non-negative value votes for the class `1`.
    fn confidence(&self, sample: &Sample, row: usize) -> f64;


    /// Predicts the label of the i'th row of the `sample`.
    fn predict(&self, sample: &Sample, row: usize) -> Label {
        let conf = self.confidence(sample, row);
        if conf >= 0.0 { 1 } else { 0 }
    }


    /// Predicts the labels of `sample`.
    fn predict_all(&self, sample: &Sample) -> Vec<Label>
    {
        let n_sample = sample.shape().0;
        (0..n_sample).map(|row| self.predict(sample, row))
            .collect::<Vec<_>>()
    }
}

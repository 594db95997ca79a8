use serde::{Serialize, Deserialize};

use crate::{Classifier, Label, Learner, Sample};


/// Zero-one loss of a single prediction.
pub fn zero_one_loss(true_label: Label, prediction: Label) -> f64 {
    if true_label == prediction { 0.0 } else { 1.0 }
}


/// The fraction of misclassified examples, i.e., `1 - accuracy`.
/// Returns `0` for an empty sample.
pub fn zero_one_error<H>(sample: &Sample, f: &H) -> f64
    where H: Classifier + ?Sized
{
    let n_sample = sample.shape().0;
    if n_sample == 0 { return 0.0; }

    error_of_predictions(&f.predict_all(sample), &sample.labels())
}


/// The fraction of `predictions` that differ from `truth`.
pub fn error_of_predictions(predictions: &[Label], truth: &[Label]) -> f64 {
    crate::common::checker::check_same_length(predictions, truth);
    if truth.is_empty() { return 0.0; }

    predictions.iter()
        .zip(truth)
        .map(|(&hx, &y)| zero_one_loss(y, hx))
        .sum::<f64>()
        / truth.len() as f64
}


/// Fits `learner` on `train` and
/// returns the errors on `train` and on `validation`.
pub fn train_and_validation_error<L>(
    learner: &L,
    train: &Sample,
    validation: &Sample,
) -> (f64, f64)
    where L: Learner,
{
    let f = learner.fit(train);
    (zero_one_error(train, &f), zero_one_error(validation, &f))
}


/// The error and the predictions of a classifier on the test sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestOutcome {
    /// Test error.
    pub error: f64,
    /// Predicted labels of the test examples.
    pub predictions: Vec<Label>,
}


/// Fits `learner` on the whole `train` sample and
/// evaluates the resulting classifier on `test`.
pub fn test_error<L>(learner: &L, train: &Sample, test: &Sample)
    -> TestOutcome
    where L: Learner,
{
    let f = learner.fit(train);
    let predictions = f.predict_all(test);
    let error = error_of_predictions(&predictions, &test.labels());
    TestOutcome { error, predictions }
}

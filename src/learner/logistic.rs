/// Defines the regularized logistic regression learner.
mod logistic_regression;
/// Defines the linear classifier returned by `LogisticRegression`.
mod logistic_classifier;

pub use logistic_regression::LogisticRegression;
pub use logistic_classifier::LogisticClassifier;

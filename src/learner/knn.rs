/// Defines the k-nearest-neighbors learner.
mod knn_learner;
/// Defines the classifier returned by `Knn`.
mod knn_classifier;

pub use knn_learner::Knn;
pub use knn_classifier::KnnClassifier;

/// Defines the kernel density Naive Bayes learner.
mod kde_nb;
/// Defines Naive Bayes Classifiers returned by `KdeNB`.
mod kde_nb_classifier;

/// Defines kernel density estimators.
mod probability;

pub use kde_nb::KdeNB;
pub use kde_nb_classifier::KdeNBClassifier;
pub use probability::{Probability, KernelDensity, Kernel};

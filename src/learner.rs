//! The files in `learner/` directory defines
//! the `Learner` trait and the three classifier families compared
//! by this crate.

/// Provides the `Learner` trait.
pub mod core;

/// Names the classifier families and builds them from a hyperparameter.
pub mod kind;

/// Defines Naive Bayes with kernel density estimates.
pub mod naive_bayes;

/// Defines L2-regularized logistic regression.
pub mod logistic;

/// Defines k-nearest-neighbors.
pub mod knn;


pub use self::core::Learner;

pub use self::kind::{
    ClassifierKind,
    AnyLearner,
    AnyClassifier,
};

pub use self::naive_bayes::{
    KdeNB,
    KdeNBClassifier,
    Kernel,
    KernelDensity,
    Probability,
};

pub use self::logistic::{
    LogisticRegression,
    LogisticClassifier,
};

pub use self::knn::{
    Knn,
    KnnClassifier,
};

#![warn(missing_docs)]

//! 
//! A crate that compares binary classifiers.
//! 
//! Three classifier families are tuned by cross validation
//! and compared on a held-out test sample.
//! 
//! - Naive Bayes with kernel density estimates
//!     For each class and each feature,
//!     the class-conditional density is a kernel density estimate.
//!     The hyperparameter is the kernel bandwidth.
//! 
//! - Logistic regression
//!     L2-regularized, tuned by the inverse regularization strength `C`.
//! 
//! - k-nearest-neighbors
//!     Majority vote among the `k` nearest training examples.
//! 
//! For each family, [`Sweep`](research::Sweep) estimates
//! the training and validation errors over a hyperparameter grid
//! with [`StratifiedKFold`](research::StratifiedKFold).
//! The best value is used to retrain on the whole training sample,
//! and the test predictions of every pair of families are compared
//! with [`McNemar`](research::McNemar)'s test.
//! [`Experiment`](experiment::Experiment) runs the whole pipeline.

pub mod common;
pub mod sample;
pub mod classifier;
pub mod learner;
pub mod research;
pub mod experiment;

/// Exports the standard learners, traits and tools.
pub mod prelude;


pub use sample::{
    Sample,
    SampleReader,
    Feature,
    Scaling,
    Scaler,
    standardize,
    normalize,
};

pub use classifier::{
    Classifier,
    Label,
};

pub use learner::{
    Learner,
    ClassifierKind,
    AnyLearner,
    AnyClassifier,
    KdeNB,
    KdeNBClassifier,
    Kernel,
    LogisticRegression,
    LogisticClassifier,
    Knn,
    KnnClassifier,
};

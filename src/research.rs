//! This directory provides the tools that compare classifiers:
//! - stratified cross validation,
//! - hyperparameter sweeps and their error curves,
//! - test errors, precision and recall,
//! - McNemar's test.

/// Provides the stratified k-fold cross validation.
pub mod cross_validation;

/// Defines loss functions and the train/validation/test errors.
pub mod loss_functions;

/// Provides the hyperparameter sweep.
pub mod sweep;

/// Provides McNemar's test.
pub mod mcnemar;

/// Provides precision and recall.
pub mod metrics;

/// Plots error curves.
pub mod plot;


pub use cross_validation::StratifiedKFold;

pub use loss_functions::{
    zero_one_loss,
    zero_one_error,
    error_of_predictions,
    train_and_validation_error,
    test_error,
    TestOutcome,
};

pub use sweep::{
    Sweep,
    SweepPoint,
    SweepResult,
};

pub use mcnemar::{
    correctness,
    McNemar,
    Verdict,
    Comparison,
};

pub use metrics::{
    precision_recall,
    PrecisionRecall,
};

pub use plot::ErrorCurvePlot;

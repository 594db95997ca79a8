//! Exports the standard learners, traits and tools.
//! 
pub use crate::sample::{
    Sample,
    SampleReader,
    Scaling,
    Scaler,
    standardize,
    normalize,
};


pub use crate::classifier::{
    Classifier,
    Label,
};


pub use crate::learner::{
    // Learner trait
    Learner,
    ClassifierKind,


    // Naive Bayes
    KdeNB,
    KdeNBClassifier,
    Kernel,


    // Logistic regression
    LogisticRegression,
    LogisticClassifier,


    // k-nearest-neighbors
    Knn,
    KnnClassifier,
};


pub use crate::research::{
    StratifiedKFold,
    Sweep,
    SweepPoint,
    SweepResult,
    ErrorCurvePlot,
    McNemar,
    Comparison,
    Verdict,
    PrecisionRecall,
    TestOutcome,
    zero_one_error,
    error_of_predictions,
    train_and_validation_error,
    test_error,
    precision_recall,
};

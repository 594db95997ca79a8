use std::fmt;

use serde::{
    Serialize,
    Deserialize,
};

use crate::{Classifier, Label, Learner, Sample};
use super::{
    KdeNB,
    KdeNBClassifier,
    LogisticRegression,
    LogisticClassifier,
    Knn,
    KnnClassifier,
};


/// The classifier families compared by this crate.
/// Each family is tuned by one hyperparameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierKind {
    /// Naive Bayes with kernel density estimates,
    /// tuned by the bandwidth.
    NaiveBayes,
    /// Logistic regression, tuned by `C`.
    Logistic,
    /// k-nearest-neighbors, tuned by `k`.
    Knn,
}


impl ClassifierKind {
    /// All the families, in the reporting order.
    pub const ALL: [ClassifierKind; 3] = [
        ClassifierKind::NaiveBayes,
        ClassifierKind::Logistic,
        ClassifierKind::Knn,
    ];


    /// Returns the name of the hyperparameter.
    pub fn hyperparameter(&self) -> &'static str {
        match self {
            Self::NaiveBayes => "bandwidth",
            Self::Logistic => "C",
            Self::Knn => "k",
        }
    }


    /// Returns a short name usable in file names.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::NaiveBayes => "naive_bayes",
            Self::Logistic => "logistic",
            Self::Knn => "knn",
        }
    }


    /// The default hyperparameter grid:
    /// - bandwidth: `0.02, 0.04, ..., 0.60`,
    /// - `C`: `1e-2, 1e-1, ..., 1e12`,
    /// - `k`: `1, 3, ..., 39`.
    pub fn default_grid(&self) -> Vec<f64> {
        match self {
            Self::NaiveBayes => (1..=30).map(|i| i as f64 * 0.02).collect(),
            Self::Logistic => (-2..=12).map(|e| 10f64.powi(e)).collect(),
            Self::Knn => (0..20).map(|i| (2 * i + 1) as f64).collect(),
        }
    }


    /// Builds the learner of this family with the hyperparameter `value`.
    /// For `Knn`, `value` is rounded to the nearest integer.
    pub fn learner(&self, value: f64) -> AnyLearner {
        match self {
            Self::NaiveBayes => AnyLearner::NaiveBayes(KdeNB::init(value)),
            Self::Logistic => {
                AnyLearner::Logistic(LogisticRegression::init(value))
            },
            Self::Knn => {
                assert!(value >= 1.0, "`k` must be at least 1. got {value}.");
                AnyLearner::Knn(Knn::init(value.round() as usize))
            },
        }
    }
}


impl fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NaiveBayes => "Naive Bayes",
            Self::Logistic => "Logistic Regression",
            Self::Knn => "k-Nearest Neighbors",
        };
        write!(f, "{name}")
    }
}


/// One learner of any family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyLearner {
    /// See [`KdeNB`].
    NaiveBayes(KdeNB),
    /// See [`LogisticRegression`].
    Logistic(LogisticRegression),
    /// See [`Knn`].
    Knn(Knn),
}


/// The classifier returned by [`AnyLearner`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnyClassifier {
    /// See [`KdeNBClassifier`].
    NaiveBayes(KdeNBClassifier),
    /// See [`LogisticClassifier`].
    Logistic(LogisticClassifier),
    /// See [`KnnClassifier`].
    Knn(KnnClassifier),
}


impl Learner for AnyLearner {
    type Hypothesis = AnyClassifier;


    fn name(&self) -> &str {
        match self {
            Self::NaiveBayes(l) => l.name(),
            Self::Logistic(l) => l.name(),
            Self::Knn(l) => l.name(),
        }
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        match self {
            Self::NaiveBayes(l) => l.info(),
            Self::Logistic(l) => l.info(),
            Self::Knn(l) => l.info(),
        }
    }


    fn fit(&self, sample: &Sample) -> Self::Hypothesis {
        match self {
            Self::NaiveBayes(l) => AnyClassifier::NaiveBayes(l.fit(sample)),
            Self::Logistic(l) => AnyClassifier::Logistic(l.fit(sample)),
            Self::Knn(l) => AnyClassifier::Knn(l.fit(sample)),
        }
    }
}


impl Classifier for AnyClassifier {
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        match self {
            Self::NaiveBayes(h) => h.confidence(sample, row),
            Self::Logistic(h) => h.confidence(sample, row),
            Self::Knn(h) => h.confidence(sample, row),
        }
    }


    fn predict(&self, sample: &Sample, row: usize) -> Label {
        match self {
            Self::NaiveBayes(h) => h.predict(sample, row),
            Self::Logistic(h) => h.predict(sample, row),
            Self::Knn(h) => h.predict(sample, row),
        }
    }


    fn predict_all(&self, sample: &Sample) -> Vec<Label> {
        match self {
            Self::NaiveBayes(h) => h.predict_all(sample),
            Self::Logistic(h) => h.predict_all(sample),
            Self::Knn(h) => h.predict_all(sample),
        }
    }
}

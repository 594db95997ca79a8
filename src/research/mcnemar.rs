//! McNemar's test with the continuity correction.
use fixedbitset::FixedBitSet;
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::Label;
use crate::common::checker;
use crate::common::constants::CHI2_CRITICAL_95;


/// Returns the set of rows where `predictions` agree with `truth`.
pub fn correctness(predictions: &[Label], truth: &[Label]) -> FixedBitSet {
    checker::check_same_length(predictions, truth);
    let mut correct = FixedBitSet::with_capacity(truth.len());
    predictions.iter()
        .zip(truth)
        .enumerate()
        .filter(|(_, (p, y))| p == y)
        .for_each(|(i, _)| { correct.insert(i); });
    correct
}


/// The contingency counts and the statistic of McNemar's test
/// between two classifiers evaluated on the same examples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct McNemar {
    /// Number of examples the first classifier misclassifies
    /// and the second one classifies correctly.
    pub e01: usize,
    /// Number of examples the second classifier misclassifies
    /// and the first one classifies correctly.
    pub e10: usize,
    /// `(|e01 - e10| - 1)^2 / (e01 + e10)`.
    pub statistic: f64,
}


impl McNemar {
    /// Compares the predictions of two classifiers.
    /// When the classifiers never disagree on correctness,
    /// the statistic is `0`.
    pub fn compare(
        predictions1: &[Label],
        predictions2: &[Label],
        truth: &[Label],
    ) -> Self
    {
        let correct1 = correctness(predictions1, truth);
        let correct2 = correctness(predictions2, truth);

        let e01 = correct2.difference(&correct1).count();
        let e10 = correct1.difference(&correct2).count();

        let statistic = if e01 + e10 == 0 {
            0.0
        } else {
            let diff = (e01 as f64 - e10 as f64).abs() - 1.0;
            diff.powi(2) / (e01 + e10) as f64
        };

        Self { e01, e10, statistic }
    }


    /// Returns `true` if the classifiers differ
    /// at the 95% confidence level.
    pub fn is_significant(&self) -> bool {
        self.statistic >= CHI2_CRITICAL_95
    }


    /// Decides which classifier is better.
    /// The test errors break the symmetry of a significant difference.
    pub fn verdict(&self, error1: f64, error2: f64) -> Verdict {
        if !self.is_significant() {
            Verdict::NotSignificant
        } else if error1 < error2 {
            Verdict::FirstBetter
        } else if error1 > error2 {
            Verdict::SecondBetter
        } else {
            Verdict::SignificantTie
        }
    }
}


/// The outcome of McNemar's test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The classifiers are not significantly different.
    NotSignificant,
    /// Significantly different, the first one has the smaller test error.
    FirstBetter,
    /// Significantly different, the second one has the smaller test error.
    SecondBetter,
    /// Significantly different but with the same test error.
    SignificantTie,
}


/// A named pairwise comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Name of the first classifier.
    pub first: String,
    /// Name of the second classifier.
    pub second: String,
    /// Test statistics.
    pub mcnemar: McNemar,
    /// The decision.
    pub verdict: Verdict,
}


impl Comparison {
    /// Runs McNemar's test on two named classifiers.
    pub fn new<S, T>(
        (first, predictions1, error1): (S, &[Label], f64),
        (second, predictions2, error2): (T, &[Label], f64),
        truth: &[Label],
    ) -> Self
        where S: ToString,
              T: ToString,
    {
        let mcnemar = McNemar::compare(predictions1, predictions2, truth);
        let verdict = mcnemar.verdict(error1, error2);
        Self {
            first: first.to_string(),
            second: second.to_string(),
            mcnemar,
            verdict,
        }
    }
}


impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (c1, c2) = (&self.first, &self.second);
        match self.verdict {
            Verdict::NotSignificant => write!(
                f,
                "Classifier \"{c1}\" and \"{c2}\" \
                 are not significantly different"
            ),
            Verdict::FirstBetter => write!(
                f,
                "Classifier \"{c1}\" and \"{c2}\" \
                 are significantly different, \
                 and {c1} is likely better than {c2}"
            ),
            Verdict::SecondBetter => write!(
                f,
                "Classifier \"{c1}\" and \"{c2}\" \
                 are significantly different, \
                 and {c2} is likely better than {c1}"
            ),
            Verdict::SignificantTie => write!(
                f,
                "Classifier \"{c1}\" and \"{c2}\" \
                 are significantly different, \
                 but their score is the same"
            ),
        }
    }
}

use serde::{Serialize, Deserialize};

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::ClassifierKind;
use crate::research::{Comparison, SweepPoint};


/// The result of one classifier family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierReport {
    /// The classifier family.
    pub kind: ClassifierKind,
    /// The hyperparameter value with the smallest validation error.
    pub best_value: f64,
    /// The validation error of `best_value`.
    pub best_valid_error: f64,
    /// The error on the test sample after retraining
    /// on the whole training sample.
    pub test_error: f64,
    /// Precision of the test predictions.
    pub precision: f64,
    /// Recall of the test predictions.
    pub recall: f64,
    /// The cross validation curve.
    pub curve: Vec<SweepPoint>,
}


/// The result of an [`Experiment`](super::Experiment).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// One entry per classifier family.
    pub classifiers: Vec<ClassifierReport>,
    /// McNemar's test for every pair of families.
    pub comparisons: Vec<Comparison>,
}


impl Report {
    /// Returns the entry of `kind`, if any.
    pub fn classifier(&self, kind: ClassifierKind)
        -> Option<&ClassifierReport>
    {
        self.classifiers.iter().find(|c| c.kind == kind)
    }


    /// Write the report as a JSON file.
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
        fs::write(path, json)
    }
}


impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.classifiers {
            writeln!(
                f,
                "{:<22} best {:<9} = {:<10} valid. error = {:.4}, \
                 test error = {:.4}, precision = {:.4}, recall = {:.4}",
                c.kind.to_string(),
                c.kind.hyperparameter(),
                c.best_value,
                c.best_valid_error,
                c.test_error,
                c.precision,
                c.recall,
            )?;
        }
        for comparison in &self.comparisons {
            writeln!(
                f,
                "{comparison} (e01 = {}, e10 = {}, statistic = {:.4})",
                comparison.mcnemar.e01,
                comparison.mcnemar.e10,
                comparison.mcnemar.statistic,
            )?;
        }
        Ok(())
    }
}

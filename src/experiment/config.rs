use serde::{Serialize, Deserialize};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{ClassifierKind, Scaling};
use crate::common::constants::{DEFAULT_N_FOLDS, DEFAULT_SEED};


/// The configuration of an [`Experiment`](super::Experiment).
/// Every field has a default value,
/// so a JSON file only needs the fields that differ.
/// ```json
/// {
///     "train_file": "TP1_train.tsv",
///     "test_file": "TP1_test.tsv",
///     "scaling": "standardize",
///     "k_values": [1, 3, 5, 7]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// The training file. The last column is the class label.
    pub train_file: PathBuf,
    /// The test file, in the same format as `train_file`.
    pub test_file: PathBuf,
    /// Column delimiter of both files.
    pub delimiter: char,
    /// Whether both files start with a header row.
    pub has_header: bool,
    /// Rescaling fitted on the training sample.
    pub scaling: Scaling,
    /// Number of cross validation folds.
    pub n_folds: usize,
    /// Seed for every shuffle.
    pub seed: u64,
    /// Whether to shuffle the training sample.
    pub shuffle: bool,
    /// Directory of the CSV curves, the plots and `report.json`.
    pub output_dir: PathBuf,
    /// Whether to draw the error curves.
    pub plot: bool,
    /// Whether to plot `log10(C)` for logistic regression.
    pub log_x_axis: bool,
    /// Whether to print the progress.
    pub verbose: bool,
    /// Bandwidths tried for Naive Bayes.
    pub bandwidths: Vec<f64>,
    /// Values of `C` tried for logistic regression.
    pub c_values: Vec<f64>,
    /// Values of `k` tried for k-nearest-neighbors.
    pub k_values: Vec<f64>,
}


impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            train_file: PathBuf::from("train.txt"),
            test_file: PathBuf::from("test.txt"),
            delimiter: '\t',
            has_header: false,
            scaling: Scaling::Standardize,
            n_folds: DEFAULT_N_FOLDS,
            seed: DEFAULT_SEED,
            shuffle: true,
            output_dir: PathBuf::from("."),
            plot: true,
            log_x_axis: true,
            verbose: true,
            bandwidths: ClassifierKind::NaiveBayes.default_grid(),
            c_values: ClassifierKind::Logistic.default_grid(),
            k_values: ClassifierKind::Knn.default_grid(),
        }
    }
}


impl ExperimentConfig {
    /// Read the configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }


    /// Parse the configuration from a JSON string.
    pub fn from_json(text: &str) -> io::Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
    }


    /// Returns the hyperparameter grid of `kind`.
    pub fn grid(&self, kind: ClassifierKind) -> &[f64] {
        match kind {
            ClassifierKind::NaiveBayes => &self.bandwidths[..],
            ClassifierKind::Logistic => &self.c_values[..],
            ClassifierKind::Knn => &self.k_values[..],
        }
    }
}

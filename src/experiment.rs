//! The end-to-end comparison:
//! load, rescale, sweep, plot, test, and compare.

/// Defines the configuration of an experiment.
pub mod config;

/// Defines the report of an experiment.
pub mod report;

/// Runs an experiment.
pub mod runner;


pub use config::ExperimentConfig;
pub use report::{Report, ClassifierReport};
pub use runner::Experiment;

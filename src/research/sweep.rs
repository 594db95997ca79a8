use rayon::prelude::*;
use colored::Colorize;
use serde::{Serialize, Deserialize};

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::{ClassifierKind, Sample};
use super::loss_functions::train_and_validation_error;

const HEADER: &str = "Value,TrainError,ValidError\n";
const WIDTH: usize = 12;
const PREC_WIDTH: usize = 5;


/// Cross validation errors of one hyperparameter value,
/// averaged over the folds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// The hyperparameter value.
    pub value: f64,
    /// Mean training error over the folds.
    pub train_error: f64,
    /// Mean validation error over the folds.
    pub valid_error: f64,
}


/// The error curves of a classifier family over a hyperparameter grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    /// The swept classifier family.
    pub kind: ClassifierKind,
    /// One point per grid value, in the grid order.
    pub points: Vec<SweepPoint>,
}


impl SweepResult {
    /// Returns the point with the smallest validation error.
    /// The earliest grid value wins ties.
    pub fn best(&self) -> SweepPoint {
        let mut points = self.points.iter();
        let first = *points.next()
            .expect("The sweep has no grid value");
        points.fold(first, |best, &p| {
            if p.valid_error < best.valid_error { p } else { best }
        })
    }


    /// Write the error curves to a CSV file.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let mut file = File::create(path)?;
        file.write_all(HEADER.as_bytes())?;
        for p in &self.points {
            let line = format!(
                "{},{},{}\n", p.value, p.train_error, p.valid_error
            );
            file.write_all(line.as_bytes())?;
        }
        Ok(())
    }
}


/// Cross validation sweep of one classifier family
/// over a grid of hyperparameter values.
///
/// # Example
/// ```no_run
/// use miniclassify::prelude::*;
///
/// let folds = StratifiedKFold::new(&train)
///     .shuffle()
///     .collect::<Vec<_>>();
/// let result = Sweep::new(ClassifierKind::Knn)
///     .grid(vec![1.0, 3.0, 5.0])
///     .run(&folds);
/// let best = result.best();
/// println!("best k = {}", best.value);
/// ```
pub struct Sweep {
    kind: ClassifierKind,
    grid: Vec<f64>,
    verbose: bool,
}


impl Sweep {
    /// Construct a new sweep with the default grid of `kind`.
    /// See [`ClassifierKind::default_grid`].
    pub fn new(kind: ClassifierKind) -> Self {
        Self {
            kind,
            grid: kind.default_grid(),
            verbose: false,
        }
    }


    /// Set the hyperparameter grid.
    pub fn grid(mut self, grid: Vec<f64>) -> Self {
        assert!(!grid.is_empty(), "The grid must have a value.");
        self.grid = grid;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, the errors of each grid value are printed.
    /// Default vaule is `false.`
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Run the sweep over the given `(train, validation)` folds.
    /// The grid values are evaluated in parallel.
    pub fn run(&self, folds: &[(Sample, Sample)]) -> SweepResult {
        assert!(!folds.is_empty(), "The cross validation has no fold.");
        let n_folds = folds.len() as f64;

        let points = self.grid.par_iter()
            .map(|&value| {
                let learner = self.kind.learner(value);
                let (train_error, valid_error) = folds.iter()
                    .map(|(train, valid)| {
                        train_and_validation_error(&learner, train, valid)
                    })
                    .fold((0.0, 0.0), |(t, v), (te, ve)| (t + te, v + ve));

                SweepPoint {
                    value,
                    train_error: train_error / n_folds,
                    valid_error: valid_error / n_folds,
                }
            })
            .collect::<Vec<_>>();

        if self.verbose {
            self.print(&points);
        }

        SweepResult { kind: self.kind, points, }
    }


    fn print(&self, points: &[SweepPoint]) {
        let name = self.kind.hyperparameter();
        println!("{}", format!("  [{}]", self.kind).bold().cyan());
        for p in points {
            println!(
                "    {}    {}    {}",
                format!("[{name} {:>WIDTH$.PREC_WIDTH$e}]", p.value).bold(),
                format!("[TRAIN {:>WIDTH$.PREC_WIDTH$}]", p.train_error)
                    .green(),
                format!("[VALID {:>WIDTH$.PREC_WIDTH$}]", p.valid_error)
                    .yellow(),
            );
        }
    }
}

use colored::Colorize;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::{
    ClassifierKind,
    Label,
    Learner,
    Sample,
    SampleReader,
    Scaler,
};
use crate::research::{
    StratifiedKFold,
    Sweep,
    SweepResult,
    ErrorCurvePlot,
    Comparison,
    TestOutcome,
    test_error,
    precision_recall,
};
use super::config::ExperimentConfig;
use super::report::{Report, ClassifierReport};

const REPORT_FILE: &str = "report.json";
const FULL_WIDTH: usize = 60;


/// Runs the whole comparison described by an [`ExperimentConfig`].
///
/// # Example
/// ```no_run
/// use miniclassify::experiment::{Experiment, ExperimentConfig};
///
/// let config = ExperimentConfig::from_json_file("config.json").unwrap();
/// let report = Experiment::new(config).run().unwrap();
/// println!("{report}");
/// ```
pub struct Experiment {
    config: ExperimentConfig,
}


impl Experiment {
    /// Construct a new experiment.
    pub fn new(config: ExperimentConfig) -> Self {
        Self { config }
    }


    /// Returns the configuration.
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }


    /// Reads the training and the test samples,
    /// rescaled with the statistics of the training sample.
    pub fn load(&self) -> io::Result<(Sample, Sample)> {
        let config = &self.config;
        let read = |file: &PathBuf| {
            SampleReader::new()
                .file(file)
                .has_header(config.has_header)
                .delimiter(config.delimiter)
                .read()
        };
        let mut train = read(&config.train_file)?;
        let mut test = read(&config.test_file)?;
        check_labels(&train, &config.train_file, true)?;
        check_labels(&test, &config.test_file, false)?;

        if train.shape().1 != test.shape().1 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "The training sample has {} features \
                     but the test sample has {}.",
                    train.shape().1, test.shape().1,
                ),
            ));
        }

        let scaler = Scaler::fit(&train, config.scaling);
        scaler.transform(&mut train);
        scaler.transform(&mut test);

        if config.shuffle {
            train.shuffle(config.seed);
        }
        Ok((train, test))
    }


    /// Run the experiment and write the curves, the plots, and
    /// `report.json` to the output directory.
    pub fn run(&self) -> io::Result<Report> {
        let config = &self.config;
        let now = Instant::now();

        let (train, test) = self.load()?;
        fs::create_dir_all(&config.output_dir)?;

        if config.verbose {
            self.print_header(&train, &test);
        }

        let mut cv = StratifiedKFold::new(&train)
            .n_folds(config.n_folds)
            .seed(config.seed)
            .verbose(config.verbose);
        if config.shuffle {
            cv = cv.shuffle();
        }
        let folds = cv.collect::<Vec<_>>();

        let truth = test.labels();
        let mut classifiers = Vec::with_capacity(ClassifierKind::ALL.len());
        let mut outcomes = Vec::with_capacity(ClassifierKind::ALL.len());
        for kind in ClassifierKind::ALL {
            let result = Sweep::new(kind)
                .grid(config.grid(kind).to_vec())
                .verbose(config.verbose)
                .run(&folds);
            self.save_curve(&result)?;

            let best = result.best();
            let learner = kind.learner(best.value);
            let outcome = test_error(&learner, &train, &test);
            let pr = precision_recall(&outcome.predictions, &truth);

            if config.verbose {
                print_best(&learner, &outcome);
            }

            classifiers.push(ClassifierReport {
                kind,
                best_value: best.value,
                best_valid_error: best.valid_error,
                test_error: outcome.error,
                precision: pr.precision,
                recall: pr.recall,
                curve: result.points,
            });
            outcomes.push((kind, outcome));
        }

        let comparisons = pairwise_comparisons(&outcomes, &truth);
        let report = Report { classifiers, comparisons };
        report.write_json(config.output_dir.join(REPORT_FILE))?;

        if config.verbose {
            let time = now.elapsed().as_millis();
            println!(
                "{}",
                format!("  [FINISHED in {time} ms]").bold().red()
            );
            println!("{}", "-".repeat(FULL_WIDTH).bold());
        }
        Ok(report)
    }


    /// Writes the CSV curve and, if enabled, the PNG/SVG plots.
    fn save_curve(&self, result: &SweepResult) -> io::Result<()> {
        let config = &self.config;
        let stem = result.kind.file_stem();
        result.write_csv(config.output_dir.join(format!("{stem}_cv.csv")))?;

        if config.plot {
            let plot = ErrorCurvePlot::new(result)
                .log_x_axis(config.log_x_axis);
            let to_io = |e: Box<dyn std::error::Error>| {
                io::Error::new(io::ErrorKind::Other, e.to_string())
            };
            plot.save_png(config.output_dir.join(format!("{stem}_cv.png")))
                .map_err(to_io)?;
            plot.save_svg(config.output_dir.join(format!("{stem}_cv.svg")))
                .map_err(to_io)?;
        }
        Ok(())
    }


    fn print_header(&self, train: &Sample, test: &Sample) {
        let (n_train, n_feature) = train.shape();
        let n_test = test.shape().0;
        println!("{}", "-".repeat(FULL_WIDTH).bold());
        println!(
            "{}    {}    {}    {}",
            "  [COMPARING]".bold().red(),
            format!("[TRAIN {n_train}]").bold().green(),
            format!("[TEST {n_test}]").bold().yellow(),
            format!("[FEATURES {n_feature}]").bold(),
        );
        println!("{}", "-".repeat(FULL_WIDTH).bold());
    }
}


/// Returns `InvalidData` unless every label of `sample` is `0` or `1`.
/// A training sample must also contain both classes.
fn check_labels(sample: &Sample, file: &Path, is_train: bool)
    -> io::Result<()>
{
    let invalid = |message: String| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{}: {message}", file.display()),
        )
    };

    if let Some(y) = sample.target().iter().find(|&&y| y != 0.0 && y != 1.0) {
        return Err(invalid(format!("the label {y} is neither 0 nor 1.")));
    }

    if is_train {
        for label in [0, 1] {
            if sample.indices_of(label).is_empty() {
                return Err(invalid(format!("no example of the class {label}.")));
            }
        }
    }
    Ok(())
}


fn print_best<L: Learner>(learner: &L, outcome: &TestOutcome) {
    let info = learner.info()
        .unwrap_or_default()
        .into_iter()
        .map(|(name, value)| format!("{name} = {value}"))
        .collect::<Vec<_>>()
        .join(", ");
    println!(
        "    {}    {}",
        format!("[BEST {}: {info}]", learner.name()).bold().magenta(),
        format!("[TEST {:>.5}]", outcome.error).bold().yellow(),
    );
}


/// McNemar's test for every pair of outcomes, in the given order.
fn pairwise_comparisons(
    outcomes: &[(ClassifierKind, TestOutcome)],
    truth: &[Label],
) -> Vec<Comparison>
{
    let mut comparisons = Vec::new();
    for (i, (kind1, out1)) in outcomes.iter().enumerate() {
        for (kind2, out2) in &outcomes[i + 1..] {
            comparisons.push(Comparison::new(
                (kind1, &out1.predictions[..], out1.error),
                (kind2, &out2.predictions[..], out2.error),
                truth,
            ));
        }
    }
    comparisons
}

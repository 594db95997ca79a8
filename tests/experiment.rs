use miniclassify::prelude::*;
use miniclassify::experiment::{Experiment, ExperimentConfig};
use rand::prelude::*;
use rand_distr::Normal;

use std::fs;
use std::path::{Path, PathBuf};


// Writes `2 * n_per_class` rows of two Gaussian blobs
// in the tab separated format, the label being the last column.
fn write_blobs(path: &Path, n_per_class: usize, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 1.0).unwrap();

    let mut text = String::new();
    for (label, center) in [(0, 0.0), (1, 4.0)] {
        for _ in 0..n_per_class {
            let x = center + rng.sample(noise);
            let y = 10.0 * (center + rng.sample(noise));
            text.push_str(&format!("{x}\t{y}\t{label}\n"));
        }
    }
    fs::write(path, text).unwrap();
}


fn workspace(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join(format!("miniclassify-{name}-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    write_blobs(&dir.join("train.txt"), 30, 1);
    write_blobs(&dir.join("test.txt"), 20, 2);
    dir
}


fn config(dir: &Path) -> ExperimentConfig {
    ExperimentConfig {
        train_file: dir.join("train.txt"),
        test_file: dir.join("test.txt"),
        output_dir: dir.join("out"),
        n_folds: 3,
        plot: false,
        verbose: false,
        bandwidths: vec![0.1, 0.3],
        c_values: vec![1e-2, 1.0, 1e2],
        k_values: vec![1.0, 5.0],
        ..ExperimentConfig::default()
    }
}


#[test]
fn config_fields_default_when_missing() {
    let config = ExperimentConfig::from_json(
        r#"{ "train_file": "a.tsv", "scaling": "normalize", "k_values": [1, 3] }"#
    ).unwrap();

    assert_eq!(config.train_file, PathBuf::from("a.tsv"));
    assert_eq!(config.test_file, PathBuf::from("test.txt"));
    assert_eq!(config.scaling, Scaling::Normalize);
    assert_eq!(config.delimiter, '\t');
    assert_eq!(config.n_folds, 5);
    assert_eq!(config.seed, 1234);
    assert_eq!(config.grid(ClassifierKind::Knn), &[1.0, 3.0]);
    assert_eq!(
        config.grid(ClassifierKind::Logistic),
        &ClassifierKind::Logistic.default_grid()[..]
    );
}


#[test]
fn malformed_config_is_an_error() {
    let err = ExperimentConfig::from_json("{ \"n_folds\": \"five\" }")
        .unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}


#[test]
fn load_rescales_both_samples_with_the_training_statistics() {
    let dir = workspace("load");
    let config = ExperimentConfig {
        scaling: Scaling::Normalize,
        shuffle: false,
        ..config(&dir)
    };
    let (train, test) = Experiment::new(config).load().unwrap();

    assert_eq!(train.shape(), (60, 2));
    assert_eq!(test.shape(), (40, 2));

    let (lo, hi) = train.features()
        .iter()
        .flat_map(|feat| feat.vals().iter().copied())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
            (lo.min(x), hi.max(x))
        });
    assert!(lo.abs() < 1e-12);
    assert!((hi - 1.0).abs() < 1e-12);
    // The target is untouched and not shuffled.
    assert_eq!(train.target()[0], 0.0);
    assert_eq!(train.target()[59], 1.0);

    fs::remove_dir_all(&dir).unwrap();
}


#[test]
fn run_compares_every_pair() {
    let dir = workspace("run");
    let config = config(&dir);
    let output_dir = config.output_dir.clone();

    let report = Experiment::new(config).run().unwrap();

    assert_eq!(report.classifiers.len(), 3);
    for kind in ClassifierKind::ALL {
        let entry = report.classifier(kind).unwrap();
        assert_eq!(entry.curve.len(), match kind {
            ClassifierKind::NaiveBayes => 2,
            ClassifierKind::Logistic => 3,
            ClassifierKind::Knn => 2,
        });
        assert!(entry.test_error < 0.3, "{kind}: {}", entry.test_error);
        assert!((0.0..=1.0).contains(&entry.precision));
        assert!((0.0..=1.0).contains(&entry.recall));

        let csv = output_dir.join(format!("{}_cv.csv", kind.file_stem()));
        assert!(csv.exists(), "{} is missing", csv.display());
    }

    let pairs = report.comparisons.iter()
        .map(|c| (c.first.as_str(), c.second.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(pairs, vec![
        ("Naive Bayes", "Logistic Regression"),
        ("Naive Bayes", "k-Nearest Neighbors"),
        ("Logistic Regression", "k-Nearest Neighbors"),
    ]);

    let json = fs::read_to_string(output_dir.join("report.json")).unwrap();
    assert!(json.contains("\"naive_bayes\""));
    assert!(json.contains("\"comparisons\""));

    fs::remove_dir_all(&dir).unwrap();
}


// Appends a row whose label is `2`.
fn append_bad_label(path: &Path) {
    let mut text = fs::read_to_string(path).unwrap();
    text.push_str("0.5\t1.0\t2\n");
    fs::write(path, text).unwrap();
}


#[test]
fn label_outside_zero_and_one_in_the_test_file_is_an_error() {
    let dir = workspace("bad-test-label");
    append_bad_label(&dir.join("test.txt"));

    let err = Experiment::new(config(&dir)).run().unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    assert!(err.to_string().contains("test.txt"), "{err}");
    assert!(!dir.join("out").join("report.json").exists());

    fs::remove_dir_all(&dir).unwrap();
}


#[test]
fn label_outside_zero_and_one_in_the_training_file_is_an_error() {
    let dir = workspace("bad-train-label");
    append_bad_label(&dir.join("train.txt"));

    let err = Experiment::new(config(&dir)).load().unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    assert!(err.to_string().contains("train.txt"), "{err}");

    fs::remove_dir_all(&dir).unwrap();
}


#[test]
fn training_file_with_a_single_class_is_an_error() {
    let dir = workspace("single-class");
    fs::write(dir.join("train.txt"), "0.1\t0.2\t1\n0.3\t0.4\t1\n").unwrap();

    let err = Experiment::new(config(&dir)).load().unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    assert!(err.to_string().contains("class 0"), "{err}");

    fs::remove_dir_all(&dir).unwrap();
}


#[test]
fn run_draws_the_error_curves() {
    let dir = workspace("plot");
    let config = ExperimentConfig {
        plot: true,
        ..config(&dir)
    };
    let output_dir = config.output_dir.clone();

    Experiment::new(config).run().unwrap();

    for kind in ClassifierKind::ALL {
        for ext in ["png", "svg"] {
            let path = output_dir.join(format!("{}_cv.{ext}", kind.file_stem()));
            let size = fs::metadata(&path)
                .unwrap_or_else(|_| panic!("{} is missing", path.display()))
                .len();
            assert!(size > 0, "{} is empty", path.display());
        }
    }

    fs::remove_dir_all(&dir).unwrap();
}


#[test]
fn missing_file_is_an_io_error() {
    let config = ExperimentConfig {
        train_file: PathBuf::from("/nonexistent/miniclassify/train.txt"),
        verbose: false,
        ..ExperimentConfig::default()
    };
    let err = Experiment::new(config).run().unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

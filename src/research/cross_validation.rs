use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use colored::Colorize;

use crate::Sample;
use crate::common::checker;
use crate::common::constants::{DEFAULT_N_FOLDS, DEFAULT_SEED};

use std::iter::Iterator;

const WIDTH: usize = 9;


/// A struct that generates
/// pairs of training/validation sample for stratified cross validation.
/// The examples of each class are dealt to the folds in turn,
/// so that every fold keeps the class proportion of the whole sample.
/// # Example
/// ```no_run
/// use miniclassify::prelude::*;
///
/// let sample = SampleReader::new()
///     .file(path)
///     .delimiter('\t')
///     .read()
///     .unwrap();
/// let cv = StratifiedKFold::new(&sample)
///     .n_folds(5)
///     .verbose(true)
///     .seed(777)
///     .shuffle();
/// for (train, valid) in cv {
///     let f = KdeNB::init(0.1).fit(&train);
///     let train_error = zero_one_error(&train, &f);
///     let valid_error = zero_one_error(&valid, &f);
///     println!("[train: {train_error}] [valid: {valid_error}]");
/// }
/// ```
pub struct StratifiedKFold<'a> {
    current_fold: usize,
    n_folds: usize,
    seed: u64,
    sample: &'a Sample,
    // Indices of the examples of class `0` and of class `1`.
    per_class: [Vec<usize>; 2],
    verbose: bool,
}


impl<'a> StratifiedKFold<'a> {
    /// Construct a new instance of `StratifiedKFold.`
    /// The target of `sample` must take values in `{0, 1}`.
    #[inline]
    pub fn new(sample: &'a Sample) -> Self {
        checker::check_both_classes(sample);
        let per_class = [sample.indices_of(0), sample.indices_of(1)];
        Self {
            current_fold: 0,
            n_folds: DEFAULT_N_FOLDS,
            seed: DEFAULT_SEED,
            verbose: false,
            sample,
            per_class,
        }
    }


    /// Set the number of folds.
    /// Default value is `5.`
    #[inline]
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        checker::check_n_folds(n_folds);
        self.n_folds = n_folds;
        self
    }


    /// Set the seed of the randomness for shuffling.
    /// Call this method before [`StratifiedKFold::shuffle`].
    /// Default vaule is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `StratifiedKFold` prints some information
    /// when generating a train/validation pair.
    /// Default vaule is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Shuffle the examples of each class.
    /// By default, `StratifiedKFold` does not shuffle the sample.
    #[inline]
    pub fn shuffle(mut self) -> Self {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.per_class.iter_mut()
            .for_each(|ix| { ix.shuffle(&mut rng); });
        self
    }


    /// Returns the training/validation indices for the `i`th fold.
    /// Both index vectors are sorted in ascending order.
    pub fn fold_indices(&self, i: usize) -> (Vec<usize>, Vec<usize>) {
        assert!(i < self.n_folds, "fold {i} does not exist");
        for (label, ix) in self.per_class.iter().enumerate() {
            assert!(
                ix.len() >= self.n_folds,
                "The class {label} has {} examples, \
                 fewer than the number of folds {}.",
                ix.len(), self.n_folds,
            );
        }

        let n_sample = self.sample.shape().0;
        let mut is_valid = vec![false; n_sample];
        self.per_class.iter()
            .flat_map(|ix| ix.iter().skip(i).step_by(self.n_folds))
            .for_each(|&k| { is_valid[k] = true; });

        (0..n_sample).partition(|&k| !is_valid[k])
    }


    /// Returns the training/validation indices of all the folds.
    pub fn folds(&self) -> Vec<(Vec<usize>, Vec<usize>)> {
        (0..self.n_folds).map(|i| self.fold_indices(i))
            .collect()
    }


    /// Returns the training/validation sample for `i`th fold.
    #[inline]
    fn fold_at(&self, i: usize) -> (Sample, Sample) {
        let (train, valid) = self.fold_indices(i);
        (self.sample.subset(train), self.sample.subset(valid))
    }
}


impl<'a> Iterator for StratifiedKFold<'a> {
    type Item = (Sample, Sample);
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_fold >= self.n_folds { return None; }

        let output = self.fold_at(self.current_fold);
        self.current_fold += 1;

        if self.verbose {
            let train_size = output.0.shape().0;
            let valid_size = output.1.shape().0;
            println!(
                "{}    {}    {}",
                format!("  [{: >3}'th fold]", self.current_fold).bold().red(),
                format!("[TRAIN {:>WIDTH$}]", train_size).bold().green(),
                format!("[VALID {:>WIDTH$}]", valid_size).bold().yellow(),
            );
        }

        Some(output)
    }
}

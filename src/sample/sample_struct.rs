use std::path::Path;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::collections::{HashMap, HashSet};
use std::ops::Index;

use polars::prelude::*;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use rayon::prelude::*;

use crate::Label;
use super::feature_struct::*;


/// Struct `Sample` holds a batch sample with the dense format.
/// Each feature is stored column by column.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) target: Vec<f64>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


/// Builds an `InvalidData` error.
pub(super) fn invalid_data<S: ToString>(message: S) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message.to_string())
}


fn series_to_vec(series: &Series) -> io::Result<Vec<f64>> {
    let series = series.cast(&DataType::Float64)
        .map_err(invalid_data)?;
    let name = series.name().to_string();
    series.f64()
        .map_err(invalid_data)?
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| {
            invalid_data(format!("The column \"{name}\" has a null value."))
        })
}


impl Sample {
    /// Construct a `Sample` from feature columns and the target.
    /// 
    /// This method panics when the columns have different lengths.
    pub fn from_features(features: Vec<Feature>, target: Vec<f64>) -> Self {
        let n_sample = target.len();
        assert!(
            features.iter().all(|feat| feat.len() == n_sample),
            "Every feature must have {n_sample} values."
        );
        let n_feature = features.len();
        let name_to_index = index_names(&features);
        Self { name_to_index, features, target, n_sample, n_feature, }
    }


    /// Construct a `Sample` from rows of feature values and the labels.
    /// Features get the default names `Feat. [1]`, `Feat. [2]`, ...
    pub fn from_rows<T>(rows: &[T], target: Vec<f64>) -> Self
        where T: AsRef<[f64]>
    {
        assert_eq!(rows.len(), target.len());
        let n_feature = rows.first()
            .map(|row| row.as_ref().len())
            .unwrap_or(0);
        let mut features = default_features(n_feature);
        for row in rows {
            let row = row.as_ref();
            assert_eq!(row.len(), n_feature, "Rows must have the same length.");
            features.iter_mut()
                .zip(row)
                .for_each(|(feat, &x)| { feat.append(x); });
        }
        Self::from_features(features, target)
    }


    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// This method takes the ownership for the given pair
    /// `data` and `target`.
    pub fn from_dataframe(data: DataFrame, target: Series)
        -> io::Result<Self>
    {
        let (n_sample, _) = data.shape();
        let target = series_to_vec(&target)?;
        if target.len() != n_sample {
            return Err(invalid_data(format!(
                "The target has {} values but the data has {n_sample} rows.",
                target.len(),
            )));
        }

        let features = data.get_columns()
            .par_iter()
            .map(|series| -> io::Result<Feature> {
                let vals = series_to_vec(series)?;
                Ok(Feature::from_vals(series.name(), vals))
            })
            .collect::<io::Result<Vec<_>>>()?;

        Ok(Self::from_features(features, target))
    }


    /// Read a delimited text file to `Sample` type.
    /// This method returns `Err` if the file does not exist
    /// or contains a non-numerical value.
    /// 
    /// If the file does not have a header row,
    /// this method assigns a default name for each column:
    /// `Feat. [1]`, `Feat. [2]`, ..., `Feat. [n]`.
    /// 
    /// **Do not forget** to call [`Sample::set_target`] or
    /// [`Sample::set_target_last`] to assign the class label.
    pub fn from_csv<P>(file: P, has_header: bool, delimiter: char)
        -> io::Result<Self>
        where P: AsRef<Path>,
    {
        // Open the given `file`.
        let file = File::open(file)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader, has_header, delimiter)
    }


    /// Read a delimited text from [`BufReader`].
    pub fn from_reader<R>(
        reader: BufReader<R>,
        has_header: bool,
        delimiter: char,
    ) -> io::Result<Self>
        where R: Read,
    {
        let mut features: Option<Vec<Feature>> = None;
        let mut n_sample = 0_usize;

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() { continue; }

            let cells = split_line(line, delimiter);

            // The first non-empty line is the header, if any.
            if features.is_none() && has_header {
                features = Some(
                    cells.into_iter()
                        .map(Feature::new)
                        .collect()
                );
                continue;
            }

            let xs = cells.into_iter()
                .map(|x| {
                    x.parse::<f64>()
                        .map_err(|_| invalid_data(format!(
                            "The file contains non-numerical value. \
                            Got \"{x}\" in Line {}", i + 1
                        )))
                })
                .collect::<io::Result<Vec<_>>>()?;

            let features = features.get_or_insert_with(|| {
                default_features(xs.len())
            });

            if features.len() != xs.len() {
                return Err(invalid_data(format!(
                    "Line {} has {} columns, expected {}.",
                    i + 1, xs.len(), features.len(),
                )));
            }

            features.iter_mut()
                .zip(xs)
                .for_each(|(feat, x)| { feat.append(x); });
            n_sample += 1;
        }

        let features = features.unwrap_or_default();
        let n_feature = features.len();
        let name_to_index = index_names(&features);

        let sample = Self {
            name_to_index,
            features,
            target: Vec::with_capacity(0),
            n_sample,
            n_feature,
        };
        Ok(sample)
    }


    /// Returns the slice of target values.
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }


    /// Returns the target values as binary labels.
    pub fn labels(&self) -> Vec<Label> {
        self.target.iter()
            .map(|&y| y as Label)
            .collect()
    }


    /// Returns a slice of the features.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    pub(crate) fn features_mut(&mut self) -> &mut [Feature] {
        &mut self.features[..]
    }


    /// Set the feature of name `target` to `self.target`.
    /// The old value assigned to `self.target` will be dropped.
    pub fn set_target<S: AsRef<str>>(mut self, target: S) -> Self {
        let target = target.as_ref();
        let pos = self.features.iter()
            .position(|feat| feat.name() == target)
            .unwrap_or_else(|| {
                panic!("The target class \"{target}\" does not exist")
            });

        self.take_target_at(pos);
        self
    }


    /// Set the last column to `self.target`.
    pub fn set_target_last(mut self) -> Self {
        assert!(self.n_feature > 0, "The sample has no column.");
        let pos = self.n_feature - 1;
        self.take_target_at(pos);
        self
    }


    fn take_target_at(&mut self, pos: usize) {
        self.target = self.features.remove(pos).into_vals();
        self.n_feature -= 1;
        self.name_to_index = index_names(&self.features);
    }


    /// Returns the pair of the number of examples and
    /// the number of features
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns the `idx`-th instance `(x, y)`.
    pub fn at(&self, idx: usize) -> (Vec<f64>, f64) {
        let x = self.row(idx);
        let y = self.target[idx];

        (x, y)
    }


    /// Returns the feature values of the `idx`-th instance.
    pub fn row(&self, idx: usize) -> Vec<f64> {
        self.features.iter()
            .map(|feat| feat[idx])
            .collect()
    }


    /// Returns the examples at `ix`, in the given order.
    pub fn subset<T>(&self, ix: T) -> Sample
        where T: AsRef<[usize]>
    {
        let ix = ix.as_ref();
        let features = self.features.par_iter()
            .map(|feat| feat.gather(ix))
            .collect::<Vec<_>>();
        let target = if self.target.is_empty() {
            Vec::with_capacity(0)
        } else {
            ix.iter().map(|&i| self.target[i]).collect()
        };

        Self {
            name_to_index: self.name_to_index.clone(),
            features,
            target,
            n_sample: ix.len(),
            n_feature: self.n_feature,
        }
    }


    /// Shuffle the examples with the seeded random number generator.
    pub fn shuffle(&mut self, seed: u64) {
        let mut ix = (0..self.n_sample).collect::<Vec<_>>();
        let mut rng = StdRng::seed_from_u64(seed);
        ix.shuffle(&mut rng);
        *self = self.subset(&ix);
    }


    /// Returns the indices of the examples whose label is `label`.
    pub fn indices_of(&self, label: Label) -> Vec<usize> {
        self.target.iter()
            .enumerate()
            .filter_map(|(i, &y)| (y as Label == label).then_some(i))
            .collect()
    }


    fn target_is_specified(&self) {
        if self.n_sample != self.target.len() {
            panic!(
                "The target class is not specified.\n\
                 Use `Sample::set_target(\"Column Name\")`."
            );
        }
    }


    /// Check whether `self` is
    /// a training set for binary classification or not.
    /// The labels must take exactly two values, `0` and `1`.
    pub fn is_valid_binary_instance(&self) {
        // Check whether the target column is specified.
        self.target_is_specified();

        // Check whether the target values can be converted into integers.
        let non_integers = self.target.iter()
            .filter(|&yi| !yi.trunc().eq(yi))
            .collect::<Vec<_>>();
        if !non_integers.is_empty() {
            let line = non_integers.iter().take(5)
                .map(|yi| yi.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            panic!(
                "Target values are non-integer types.\n\
                 Ex. [{line}, ...]."
            );
        }

        let set = self.target.iter()
            .map(|&yi| yi as Label)
            .collect::<HashSet<_>>();
        let n_label = set.len();
        assert_eq!(
            n_label, 2,
            "Expected 2 kinds of target values, got {n_label} kinds."
        );

        let is_binary = set.iter().all(|y| *y == 0 || *y == 1);
        if !is_binary {
            let mut labels = set.into_iter().collect::<Vec<_>>();
            labels.sort_unstable();
            panic!(
                "The target values must be 0 or 1. \
                 Currently, the labels are: {labels:?}."
            );
        }
    }
}


// A space delimiter splits on any run of whitespaces,
// any other delimiter splits on itself only.
fn split_line(line: &str, delimiter: char) -> Vec<&str> {
    if delimiter == ' ' {
        line.split_whitespace().collect()
    } else {
        line.split(delimiter)
            .map(|x| x.trim())
            .collect()
    }
}


fn default_features(n_feature: usize) -> Vec<Feature> {
    (1..=n_feature).map(|i| Feature::new(format!("Feat. [{i}]")))
        .collect()
}


fn index_names(features: &[Feature]) -> HashMap<String, usize> {
    features.iter()
        .enumerate()
        .map(|(i, f)| (f.name().to_string(), i))
        .collect()
}


impl<S> Index<S> for Sample
    where S: AsRef<str>
{
    type Output = Feature;


    fn index(&self, name: S) -> &Self::Output {
        let name: &str = name.as_ref();
        let k = *self.name_to_index.get(name)
            .unwrap_or_else(|| panic!("No feature named \"{name}\""));
        &self.features[k]
    }
}

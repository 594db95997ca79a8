use std::ops::{Index, IndexMut};

use crate::common::constants::BUFFER_SIZE;


/// A named dense column of a [`Sample`](crate::Sample).
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub(crate) name: String,
    pub(crate) vals: Vec<f64>,
}


impl Feature {
    /// Construct an empty feature named `name`.
    pub fn new<T: ToString>(name: T) -> Self {
        Self {
            name: name.to_string(),
            vals: Vec::with_capacity(BUFFER_SIZE),
        }
    }


    /// Construct a feature from its values.
    pub fn from_vals<T: ToString>(name: T, vals: Vec<f64>) -> Self {
        Self { name: name.to_string(), vals, }
    }


    /// Get the feature name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns the values of this feature.
    pub fn vals(&self) -> &[f64] {
        &self.vals[..]
    }


    pub(crate) fn vals_mut(&mut self) -> &mut [f64] {
        &mut self.vals[..]
    }


    pub(crate) fn append(&mut self, val: f64) {
        self.vals.push(val);
    }


    pub(crate) fn into_vals(self) -> Vec<f64> {
        self.vals
    }


    /// Returns the values at `ix`, in that order.
    pub(crate) fn gather(&self, ix: &[usize]) -> Self {
        let vals = ix.iter()
            .map(|&i| self.vals[i])
            .collect();
        Self { name: self.name.clone(), vals, }
    }


    /// Returns the number of items in this feature.
    pub fn len(&self) -> usize {
        self.vals.len()
    }


    /// Returns `true` if the feature has no value.
    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }


    /// Returns the mean of this feature.
    /// Returns `NaN` for an empty feature.
    pub fn mean(&self) -> f64 {
        self.vals.iter().sum::<f64>() / self.vals.len() as f64
    }


    /// Returns the pair of the minimum and the maximum value.
    pub fn min_max(&self) -> (f64, f64) {
        self.vals.iter()
            .fold(
                (f64::INFINITY, f64::NEG_INFINITY),
                |(lo, hi), &v| (lo.min(v), hi.max(v))
            )
    }
}


impl Index<usize> for Feature {
    type Output = f64;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.vals[idx]
    }
}


impl IndexMut<usize> for Feature {
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        &mut self.vals[idx]
    }
}

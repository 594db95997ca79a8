//! Rescaling of the feature columns.
//!
//! Both rescalings share their spread statistic across the features:
//! standardization divides by the standard deviation of all feature values
//! pooled together, normalization by the global range.
use serde::{Serialize, Deserialize};

use super::sample_struct::Sample;


/// The rescaling applied to a [`Sample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scaling {
    /// Subtract the per-feature mean and divide by the pooled
    /// standard deviation.
    Standardize,
    /// Map the global range `[min, max]` onto `[0, 1]`.
    Normalize,
}


/// Statistics captured from a training sample.
/// Applying the same `Scaler` to a test sample keeps both
/// on the scale of the training data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    scaling: Scaling,
    shifts: Vec<f64>,
    divisor: f64,
}


impl Scaler {
    /// Computes the statistics of `sample` for `scaling`.
    pub fn fit(sample: &Sample, scaling: Scaling) -> Self {
        let features = sample.features();
        let (shifts, divisor) = match scaling {
            Scaling::Standardize => {
                let shifts = features.iter()
                    .map(|feat| feat.mean())
                    .collect::<Vec<_>>();
                (shifts, pooled_std(sample))
            },
            Scaling::Normalize => {
                let (lo, hi) = features.iter()
                    .map(|feat| feat.min_max())
                    .fold(
                        (f64::INFINITY, f64::NEG_INFINITY),
                        |(lo, hi), (l, h)| (lo.min(l), hi.max(h))
                    );
                (vec![lo; features.len()], hi - lo)
            },
        };

        // A constant sample is only shifted.
        let divisor = if divisor > 0.0 && divisor.is_finite() {
            divisor
        } else {
            1.0
        };

        Self { scaling, shifts, divisor, }
    }


    /// Returns the rescaling kind.
    pub fn scaling(&self) -> Scaling {
        self.scaling
    }


    /// Returns the value subtracted from each feature.
    pub fn shifts(&self) -> &[f64] {
        &self.shifts[..]
    }


    /// Returns the value every shifted feature is divided by.
    pub fn divisor(&self) -> f64 {
        self.divisor
    }


    /// Rescales the features of `sample` in place.
    /// The target is left untouched.
    pub fn transform(&self, sample: &mut Sample) {
        assert_eq!(
            sample.shape().1, self.shifts.len(),
            "The scaler was fitted on {} features, got {}.",
            self.shifts.len(), sample.shape().1,
        );
        let divisor = self.divisor;
        sample.features_mut()
            .iter_mut()
            .zip(&self.shifts)
            .for_each(|(feat, &shift)| {
                feat.vals_mut()
                    .iter_mut()
                    .for_each(|x| { *x = (*x - shift) / divisor; });
            });
    }
}


/// Standardize `sample` with its own statistics.
pub fn standardize(sample: &mut Sample) -> Scaler {
    let scaler = Scaler::fit(sample, Scaling::Standardize);
    scaler.transform(sample);
    scaler
}


/// Normalize `sample` with its own statistics.
pub fn normalize(sample: &mut Sample) -> Scaler {
    let scaler = Scaler::fit(sample, Scaling::Normalize);
    scaler.transform(sample);
    scaler
}


/// The population standard deviation of all the feature values.
fn pooled_std(sample: &Sample) -> f64 {
    let features = sample.features();
    let n_values = features.iter()
        .map(|feat| feat.len())
        .sum::<usize>() as f64;

    let mean = features.iter()
        .flat_map(|feat| feat.vals())
        .sum::<f64>()
        / n_values;

    let var = features.iter()
        .flat_map(|feat| feat.vals())
        .map(|x| (x - mean).powi(2))
        .sum::<f64>()
        / n_values;
    var.sqrt()
}

use serde::{
    Serialize,
    Deserialize,
};

use core::f64::consts::PI;
use crate::common::utils;


/// A univariate probability density.
pub trait Probability {
    /// Returns the logarithm of the density at `x`.
    fn log_probability(&self, x: f64) -> f64;

    /// Returns the density at `x`.
    fn probability(&self, x: f64) -> f64 {
        self.log_probability(x).exp()
    }
}


/// Smoothing kernels for [`KernelDensity`].
/// Each kernel is normalized so that it integrates to `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kernel {
    /// `exp(-u^2 / 2) / sqrt(2π)`.
    Gaussian,
    /// `3/4 (1 - u^2)` on `|u| < 1`.
    Epanechnikov,
    /// `1/2` on `|u| < 1`.
    Tophat,
    /// `exp(-|u|) / 2`.
    Exponential,
}


impl Kernel {
    /// Returns `ln K(u)`.
    #[inline(always)]
    pub fn log_kernel(&self, u: f64) -> f64 {
        match self {
            Self::Gaussian => -0.5 * (u * u + (2.0 * PI).ln()),
            Self::Epanechnikov => {
                if u.abs() < 1.0 {
                    (0.75 * (1.0 - u * u)).ln()
                } else {
                    f64::NEG_INFINITY
                }
            },
            Self::Tophat => {
                if u.abs() < 1.0 { 0.5_f64.ln() } else { f64::NEG_INFINITY }
            },
            Self::Exponential => -u.abs() - 2.0_f64.ln(),
        }
    }
}


/// A one-dimensional kernel density estimate.
/// The density at `x` is
/// `1/(n h) Σ_i K((x - x_i) / h)`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct KernelDensity {
    pub(super) kernel: Kernel,
    pub(super) bandwidth: f64,
    pub(super) points: Vec<f64>,
}


impl KernelDensity {
    /// Fit the estimate on `points`.
    pub fn new(kernel: Kernel, bandwidth: f64, points: Vec<f64>) -> Self {
        assert!(!points.is_empty(), "cannot estimate a density from no point");
        Self { kernel, bandwidth, points, }
    }
}


impl Probability for KernelDensity {
    #[inline(always)]
    fn log_probability(&self, x: f64) -> f64 {
        let h = self.bandwidth;
        let n = self.points.len() as f64;

        let log_sum = utils::log_sum_exp(
            self.points.iter()
                .map(|&xi| self.kernel.log_kernel((x - xi) / h))
        );

        log_sum - n.ln() - h.ln()
    }
}

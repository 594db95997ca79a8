use crate::{Learner, Sample};
use crate::common::{checker, utils};
use crate::common::constants::{NEWTON_TOLERANCE, NEWTON_MAX_ITER};

use super::logistic_classifier::LogisticClassifier;


// Armijo constant for the backtracking line search.
const ARMIJO: f64 = 1e-4;
// Smallest step size the line search tries.
const MIN_STEP: f64 = 1e-12;
// Diagonal shift used when the Hessian is numerically singular.
const JITTER: f64 = 1e-8;


/// L2-regularized logistic regression.
/// `LogisticRegression` minimizes
/// ```text
/// 0.5 ||w||^2 + C Σ_i ln(1 + exp(-ỹ_i (w·x_i + b)))
/// ```
/// where `ỹ_i = 2 y_i - 1`.
/// The intercept `b` is not regularized.
/// Larger `C` means weaker regularization.
///
/// # Example
/// ```no_run
/// use miniclassify::prelude::*;
///
/// let logistic = LogisticRegression::init(1e3)
///     .tolerance(1e-8)
///     .max_iter(50);
/// let f = logistic.fit(&train);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogisticRegression {
    c: f64,
    tolerance: f64,
    max_iter: usize,
}


impl LogisticRegression {
    /// Initializes the `LogisticRegression` instance
    /// with the inverse regularization strength `c`.
    pub fn init(c: f64) -> Self {
        checker::check_inverse_regularization(c);
        Self {
            c,
            tolerance: NEWTON_TOLERANCE,
            max_iter: NEWTON_MAX_ITER,
        }
    }


    /// Set the tolerance on the infinity norm of the gradient.
    /// Default is `1e-10`.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        assert!(tolerance > 0.0, "tolerance must be positive");
        self.tolerance = tolerance;
        self
    }


    /// Set the maximal number of Newton iterations.
    /// Default is `100`.
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }


    /// Returns the inverse regularization strength.
    pub fn c(&self) -> f64 {
        self.c
    }


    /// The objective value at `theta = (w, b)`.
    fn objective(&self, rows: &[Vec<f64>], y: &[f64], theta: &[f64]) -> f64 {
        let d = theta.len() - 1;
        let reg = 0.5 * utils::inner_product(&theta[..d], &theta[..d]);
        let loss = rows.iter()
            .zip(y)
            .map(|(x, &yi)| {
                let z = utils::inner_product(&theta[..d], x) + theta[d];
                let sign = 2.0 * yi - 1.0;
                utils::log_one_plus_exp(-sign * z)
            })
            .sum::<f64>();
        reg + self.c * loss
    }


    /// The gradient and the Hessian at `theta = (w, b)`.
    fn derivatives(&self, rows: &[Vec<f64>], y: &[f64], theta: &[f64])
        -> (Vec<f64>, Vec<Vec<f64>>)
    {
        let dim = theta.len();
        let d = dim - 1;

        let mut grad = theta.to_vec();
        grad[d] = 0.0;
        let mut hess = vec![vec![0f64; dim]; dim];
        (0..d).for_each(|j| { hess[j][j] = 1.0; });

        for (x, &yi) in rows.iter().zip(y) {
            let z = utils::inner_product(&theta[..d], x) + theta[d];
            let p = utils::sigmoid(z);
            let r = self.c * (p - yi);
            let s = self.c * p * (1.0 - p);

            for j in 0..dim {
                let xj = if j < d { x[j] } else { 1.0 };
                grad[j] += r * xj;
                for k in 0..=j {
                    let xk = if k < d { x[k] } else { 1.0 };
                    hess[j][k] += s * xj * xk;
                }
            }
        }

        // Fill the upper triangle.
        for j in 0..dim {
            for k in (j + 1)..dim {
                hess[j][k] = hess[k][j];
            }
        }
        (grad, hess)
    }


    /// Newton direction `-H^{-1} g`,
    /// or the steepest descent direction if `H` is singular.
    fn direction(grad: &[f64], mut hess: Vec<Vec<f64>>) -> Vec<f64> {
        let neg_grad = grad.iter().map(|g| -g).collect::<Vec<_>>();
        if let Some(d) = utils::cholesky_solve(&hess, &neg_grad) {
            return d;
        }

        let scale = (0..hess.len())
            .map(|j| hess[j][j].abs())
            .fold(1.0, f64::max);
        (0..hess.len()).for_each(|j| { hess[j][j] += JITTER * scale; });
        utils::cholesky_solve(&hess, &neg_grad)
            .unwrap_or(neg_grad)
    }
}


impl Learner for LogisticRegression {
    type Hypothesis = LogisticClassifier;


    fn name(&self) -> &str {
        "Logistic Regression"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = vec![
            ("C", format!("{}", self.c)),
            ("Tolerance", format!("{}", self.tolerance)),
            ("Max. iter", format!("{}", self.max_iter)),
        ];
        Some(info)
    }


    fn fit(&self, sample: &Sample) -> Self::Hypothesis {
        checker::check_sample(sample);

        let (n_sample, n_feature) = sample.shape();
        let rows = (0..n_sample).map(|i| sample.row(i))
            .collect::<Vec<_>>();
        let y = sample.target();

        let mut theta = vec![0f64; n_feature + 1];
        let mut obj = self.objective(&rows, y, &theta);

        for _ in 0..self.max_iter {
            let (grad, hess) = self.derivatives(&rows, y, &theta);

            let grad_norm = grad.iter()
                .fold(0f64, |acc, g| acc.max(g.abs()));
            if grad_norm < self.tolerance { break; }

            let dir = Self::direction(&grad, hess);
            let slope = utils::inner_product(&grad, &dir);

            // Backtracking line search.
            let mut step = 1.0;
            let mut next = theta.clone();
            let mut next_obj = obj;
            while step >= MIN_STEP {
                next.iter_mut()
                    .zip(theta.iter().zip(&dir))
                    .for_each(|(nx, (t, d))| { *nx = t + step * d; });
                next_obj = self.objective(&rows, y, &next);
                if next_obj <= obj + ARMIJO * step * slope { break; }
                step *= 0.5;
            }

            // No further progress is possible.
            if step < MIN_STEP || next_obj > obj { break; }

            theta = next;
            obj = next_obj;
        }

        let intercept = theta.pop().unwrap_or(0.0);
        LogisticClassifier { weights: theta, intercept, }
    }
}

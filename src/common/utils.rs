//! This file provides some common functions
//! such as log-sum-exp.


/// Computes `ln(Σ exp(x_i))` without overflow.
/// Returns `-inf` for an empty iterator.
#[inline(always)]
pub(crate) fn log_sum_exp<I>(iter: I) -> f64
    where I: IntoIterator<Item = f64>,
{
    let items = iter.into_iter().collect::<Vec<_>>();
    let max = items.iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    if max == f64::NEG_INFINITY { return max; }

    let sum = items.into_iter()
        .map(|x| (x - max).exp())
        .sum::<f64>();
    max + sum.ln()
}


/// Compute the inner-product of the given two slices.
#[inline(always)]
pub(crate) fn inner_product(v1: &[f64], v2: &[f64]) -> f64 {
    v1.iter()
        .zip(v2)
        .map(|(a, b)| a * b)
        .sum::<f64>()
}


/// Numerically stable `ln(1 + exp(x))`.
#[inline(always)]
pub(crate) fn log_one_plus_exp(x: f64) -> f64 {
    if x > 0.0 {
        x + (-x).exp().ln_1p()
    } else {
        x.exp().ln_1p()
    }
}


/// Numerically stable logistic function `1 / (1 + exp(-x))`.
#[inline(always)]
pub(crate) fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}


/// Solves `a x = b` for a symmetric positive definite `a`
/// by the Cholesky decomposition.
/// Returns `None` if `a` is not positive definite.
pub(crate) fn cholesky_solve(a: &[Vec<f64>], b: &[f64]) -> Option<Vec<f64>> {
    let n = b.len();
    let mut l = vec![vec![0f64; n]; n];

    for i in 0..n {
        for j in 0..=i {
            let s = inner_product(&l[i][..j], &l[j][..j]);
            if i == j {
                let d = a[i][i] - s;
                if d <= 0.0 || !d.is_finite() { return None; }
                l[i][j] = d.sqrt();
            } else {
                l[i][j] = (a[i][j] - s) / l[j][j];
            }
        }
    }

    // Forward substitution: l z = b
    let mut z = vec![0f64; n];
    for i in 0..n {
        let s = inner_product(&l[i][..i], &z[..i]);
        z[i] = (b[i] - s) / l[i][i];
    }

    // Backward substitution: l^T x = z
    let mut x = vec![0f64; n];
    for i in (0..n).rev() {
        let s = ((i + 1)..n).map(|k| l[k][i] * x[k]).sum::<f64>();
        x[i] = (z[i] - s) / l[i][i];
    }
    Some(x)
}

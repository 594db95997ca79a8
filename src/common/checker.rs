//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::Sample;


/// Check whether the training sample is valid or not.
#[inline(always)]
pub(crate) fn check_sample(sample: &Sample)
{
    let (n_sample, n_feature) = sample.shape();


    // `data` and `target` must have the length greater than `0`.
    assert!(n_sample > 0, "The sample is empty.");


    // `data` must have a feature.
    assert!(n_feature > 0, "The sample has no feature.");


    assert_eq!(
        n_sample, sample.target().len(),
        "The target class is not specified. \
         Use `Sample::set_target(\"Column Name\")`."
    );
}


/// Check whether the training sample has both classes `0` and `1`.
#[inline(always)]
pub(crate) fn check_both_classes(sample: &Sample) {
    check_sample(sample);
    let n_pos = sample.target()
        .iter()
        .filter(|&&y| y == 1.0)
        .count();
    let n_neg = sample.shape().0 - n_pos;
    assert!(
        n_pos > 0 && n_neg > 0,
        "The training sample must contain both classes. \
         Got {n_neg} negative and {n_pos} positive examples."
    );
}


/// Check the kernel bandwidth.
#[inline(always)]
pub(crate) fn check_bandwidth(bandwidth: f64) {
    assert!(
        bandwidth > 0.0 && bandwidth.is_finite(),
        "bandwidth must be a positive finite number. got {bandwidth}."
    );
}


/// Check the inverse regularization strength.
#[inline(always)]
pub(crate) fn check_inverse_regularization(c: f64) {
    assert!(
        c > 0.0 && c.is_finite(),
        "`C` must be a positive finite number. got {c}."
    );
}


/// Check the number of neighbors.
#[inline(always)]
pub(crate) fn check_n_neighbors(k: usize) {
    assert!(k > 0, "the number of neighbors must be positive.");
}


/// Check the number of folds.
#[inline(always)]
pub(crate) fn check_n_folds(n_folds: usize) {
    assert!(
        n_folds >= 2,
        "the number of folds must be at least 2. got {n_folds}."
    );
}


/// Check whether two label vectors are comparable.
#[inline(always)]
pub(crate) fn check_same_length<T, U>(lhs: &[T], rhs: &[U]) {
    assert_eq!(
        lhs.len(), rhs.len(),
        "length mismatch: {} predictions vs {} labels.",
        lhs.len(), rhs.len(),
    );
}

//! Numeric constants.

/// Default stopping tolerance of the logistic regression solver.
pub const NEWTON_TOLERANCE: f64 = 1e-10;

/// Default maximal number of Newton iterations.
pub const NEWTON_MAX_ITER: usize = 100;

/// Critical value of the chi-squared distribution
/// with one degree of freedom at the 95% confidence level.
pub const CHI2_CRITICAL_95: f64 = 3.84;

/// Default number of folds for the cross validation.
pub const DEFAULT_N_FOLDS: usize = 5;

/// Default seed for shuffling.
pub const DEFAULT_SEED: u64 = 1234;

/// Initial capacity of each feature column.
pub const BUFFER_SIZE: usize = 256;

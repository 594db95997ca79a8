//! Defines some common functions used in this library.

/// Defines numeric constants shared by the learners and tests.
pub mod constants;

/// Defines some useful functions such as log-sum-exp.
pub(crate) mod utils;

/// Defines some checker functions.
pub(crate) mod checker;

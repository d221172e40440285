use std::fmt::Debug;

use thiserror::Error;

/// Validation errors returned by the checked pair-sum search.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PairSumError<T: Debug> {
    /// The input contained `value` more than once.
    #[error("duplicate value {value:?} in pair-sum input; values must be distinct")]
    DuplicateValue { value: T },
}

/// Errors reported by [run_all](crate::utils::self_check::run_all).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelfCheckError {
    #[error("self-check `{check}` failed: {detail}")]
    CheckFailed { check: &'static str, detail: String },
}

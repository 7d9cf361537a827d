//! Errors raised while interpreting or evaluating fizzbuzz input.

use thiserror::Error;

/// Failure modes of the fizzbuzz API.
///
/// Evaluating a well-typed number never fails; errors only come from
/// loosely-typed input and from range specifications.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FizzBuzzError {
    /// Input was not a number, a list of integers, or a range.
    #[error("expected a number, a list of integers or a range, found {found}")]
    Type { found: String },

    /// A range was given a step of zero.
    #[error("step cannot be zero")]
    ZeroStep,
}

impl FizzBuzzError {
    pub(crate) fn type_error(found: impl Into<String>) -> Self {
        Self::Type {
            found: found.into(),
        }
    }
}

//! Stable exit codes for the `fizzbuzz` binary.

use fizzbuzz::FizzBuzzError;

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed for a reason other than its input (config, I/O).
pub const FAILURE: i32 = 1;
/// Input was rejected: non-numeric value or zero step.
pub const INVALID_INPUT: i32 = 3;

/// Pick the exit code for an error returned by a command.
pub fn for_error(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<FizzBuzzError>().is_some() {
        INVALID_INPUT
    } else {
        FAILURE
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{Context, anyhow};

    use super::*;

    #[test]
    fn fizzbuzz_errors_are_invalid_input_through_context() {
        let err = Err::<(), _>(FizzBuzzError::ZeroStep)
            .context("evaluate range")
            .unwrap_err();
        assert_eq!(for_error(&err), INVALID_INPUT);
    }

    #[test]
    fn other_errors_are_failures() {
        assert_eq!(for_error(&anyhow!("read fizzbuzz.toml")), FAILURE);
    }
}

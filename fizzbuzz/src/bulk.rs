//! Bulk evaluation over lists and ranges.

use std::borrow::Cow;
use std::iter::Copied;
use std::slice;

use tracing::debug;

use crate::error::FizzBuzzError;
use crate::range::{RangeSpec, RangeValues};
use crate::rules::evaluate;

/// Separator placed between answers by [`evaluate_many`].
pub const SEPARATOR: &str = ", ";

/// A sequence of integers to evaluate in one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bulk {
    List(Vec<i64>),
    Range(RangeSpec),
}

impl From<Vec<i64>> for Bulk {
    fn from(values: Vec<i64>) -> Self {
        Self::List(values)
    }
}

impl From<RangeSpec> for Bulk {
    fn from(spec: RangeSpec) -> Self {
        Self::Range(spec)
    }
}

impl Bulk {
    /// Iterate the integers this input describes, in evaluation order.
    pub fn values(&self) -> Result<BulkValues<'_>, FizzBuzzError> {
        match self {
            Self::List(values) => Ok(BulkValues::List(values.iter().copied())),
            Self::Range(spec) => spec.values().map(BulkValues::Range),
        }
    }
}

/// Iterator returned by [`Bulk::values`].
#[derive(Debug, Clone)]
pub enum BulkValues<'a> {
    List(Copied<slice::Iter<'a, i64>>),
    Range(RangeValues),
}

impl Iterator for BulkValues<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        match self {
            Self::List(values) => values.next(),
            Self::Range(values) => values.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::List(values) => values.size_hint(),
            Self::Range(values) => values.size_hint(),
        }
    }
}

/// Lazily yield the answer for each value of `input`.
pub fn answers(
    input: &Bulk,
) -> Result<impl Iterator<Item = Cow<'static, str>> + '_, FizzBuzzError> {
    Ok(input.values()?.map(|value| evaluate(&value)))
}

/// Evaluate every value of `input` and join the answers with `", "`.
///
/// An input yielding no values produces an empty string.
pub fn evaluate_many(input: &Bulk) -> Result<String, FizzBuzzError> {
    let mut joined = String::new();
    let mut count = 0_usize;
    for answer in answers(input)? {
        if count > 0 {
            joined.push_str(SEPARATOR);
        }
        joined.push_str(&answer);
        count += 1;
    }
    debug!(count, "bulk evaluation finished");
    Ok(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_one_to_fifteen() {
        let input = Bulk::from((1..=15).collect::<Vec<i64>>());
        assert_eq!(
            evaluate_many(&input).expect("evaluate"),
            "1, 2, fizz, 4, buzz, fizz, 7, 8, fizz, buzz, 11, fizz, 13, 14, fizzbuzz"
        );
    }

    #[test]
    fn list_keeps_input_order() {
        let input = Bulk::from(vec![15, 1, 5, 3]);
        assert_eq!(
            evaluate_many(&input).expect("evaluate"),
            "fizzbuzz, 1, buzz, fizz"
        );
    }

    #[test]
    fn range_matches_list_form() {
        let from_range = evaluate_many(&RangeSpec::new(1, 16).into()).expect("range");
        let from_list = evaluate_many(&(1..16).collect::<Vec<i64>>().into()).expect("list");
        assert_eq!(from_range, from_list);
    }

    #[test]
    fn descending_range() {
        let input = Bulk::from(RangeSpec::new(15, 0).with_step(-3));
        assert_eq!(
            evaluate_many(&input).expect("evaluate"),
            "fizzbuzz, fizz, fizz, fizz, fizz"
        );
    }

    #[test]
    fn zero_step_errors() {
        let input = Bulk::from(RangeSpec::new(1, 16).with_step(0));
        assert_eq!(evaluate_many(&input), Err(FizzBuzzError::ZeroStep));
        assert!(answers(&input).is_err());
    }

    #[test]
    fn empty_inputs_yield_empty_string() {
        assert_eq!(evaluate_many(&Bulk::List(Vec::new())).expect("list"), "");
        assert_eq!(
            evaluate_many(&RangeSpec::new(10, 1).into()).expect("range"),
            ""
        );
    }

    #[test]
    fn answers_are_lazy_and_ordered() {
        let input = Bulk::from(RangeSpec::new(1, i64::MAX));
        let first: Vec<Cow<'static, str>> = answers(&input).expect("answers").take(5).collect();
        assert_eq!(first, vec!["1", "2", "fizz", "4", "buzz"]);
    }
}

//! Loosely-typed input: command-line tokens and JSON values.
//!
//! Everything that is not a number, a list of integers or a range object is a
//! [`FizzBuzzError::Type`].

use std::borrow::Cow;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::{Number, Value};

use crate::bulk::{Bulk, evaluate_many};
use crate::error::FizzBuzzError;
use crate::range::RangeSpec;
use crate::rules::evaluate;

/// A single number.
///
/// Integers are held as `i128` so every JSON integer (`i64` and `u64`) keeps
/// its exact value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Int(i128),
    Float(f64),
}

impl Scalar {
    pub fn evaluate(&self) -> Cow<'static, str> {
        match self {
            Self::Int(value) => evaluate(value),
            Self::Float(value) => evaluate(value),
        }
    }
}

/// Integers first, then finite floats. `nan` and `inf` are rejected as text.
///
/// An integer literal outside `i128` is a type error rather than a lossy float.
impl FromStr for Scalar {
    type Err = FizzBuzzError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if let Ok(value) = trimmed.parse::<i128>() {
            return Ok(Self::Int(value));
        }
        if is_integer_literal(trimmed) {
            return Err(FizzBuzzError::type_error(format!(
                "integer out of range {raw:?}"
            )));
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Self::Float(value)),
            _ => Err(FizzBuzzError::type_error(format!("text {raw:?}"))),
        }
    }
}

fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
}

/// Anything the fizzbuzz entry point accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Scalar(Scalar),
    Bulk(Bulk),
}

impl Input {
    /// Evaluate a scalar to its answer, or bulk input to joined answers.
    pub fn evaluate(&self) -> Result<String, FizzBuzzError> {
        match self {
            Self::Scalar(scalar) => Ok(scalar.evaluate().into_owned()),
            Self::Bulk(bulk) => evaluate_many(bulk),
        }
    }
}

impl From<Scalar> for Input {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<Bulk> for Input {
    fn from(bulk: Bulk) -> Self {
        Self::Bulk(bulk)
    }
}

impl TryFrom<&Value> for Input {
    type Error = FizzBuzzError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(number) => Ok(Self::Scalar(scalar_from_number(number))),
            Value::Array(items) => {
                let values = items
                    .iter()
                    .map(integer_from_json)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self::Bulk(Bulk::List(values)))
            }
            Value::Object(_) => RangeSpec::deserialize(value)
                .map(|spec| Self::Bulk(Bulk::Range(spec)))
                .map_err(|err| FizzBuzzError::type_error(format!("object ({err})"))),
            other => Err(FizzBuzzError::type_error(describe(other))),
        }
    }
}

fn scalar_from_number(number: &Number) -> Scalar {
    if let Some(value) = number.as_i64() {
        return Scalar::Int(i128::from(value));
    }
    if let Some(value) = number.as_u64() {
        return Scalar::Int(i128::from(value));
    }
    Scalar::Float(number.as_f64().unwrap_or(f64::NAN))
}

/// List elements must be integers; whole floats such as `3.0` are accepted.
fn integer_from_json(value: &Value) -> Result<i64, FizzBuzzError> {
    if let Some(int) = value.as_i64() {
        return Ok(int);
    }
    let whole = value
        .as_f64()
        .filter(|float| float.fract() == 0.0 && *float >= i64::MIN as f64 && *float < i64::MAX as f64);
    if let Some(float) = whole {
        return Ok(float as i64);
    }
    Err(FizzBuzzError::type_error(format!(
        "list element {}",
        describe(value)
    )))
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => format!("boolean {flag}"),
        Value::Number(number) => format!("number {number}"),
        Value::String(text) => format!("string {text:?}"),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}

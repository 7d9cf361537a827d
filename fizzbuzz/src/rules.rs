//! Rule evaluation for a single value.
//!
//! A value is checked against [`RULES`] in order. The labels of every matching
//! rule are concatenated; a value matching no rule is rendered with its
//! `Display` form.

use std::borrow::Cow;
use std::fmt::Display;
use std::ops::Rem;

/// A labelled divisibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    divisor: u8,
    label: &'static str,
}

/// The fixed rule set. Order decides concatenation order.
pub const RULES: &[Rule] = &[Rule::new(3, "fizz"), Rule::new(5, "buzz")];

impl Rule {
    const fn new(divisor: u8, label: &'static str) -> Self {
        Self { divisor, label }
    }

    pub fn divisor(&self) -> u8 {
        self.divisor
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// True if `value` is directly divisible by this rule's divisor.
    ///
    /// A type that cannot represent the divisor or zero never matches.
    pub fn matches<Num>(&self, value: &Num) -> bool
    where
        Num: TryFrom<u8> + PartialEq,
        for<'a> &'a Num: Rem<Num, Output = Num>,
    {
        let (Ok(divisor), Ok(zero)) = (Num::try_from(self.divisor), Num::try_from(0_u8)) else {
            return false;
        };
        value % divisor == zero
    }
}

/// Return the fizzbuzz answer for `value`.
///
/// A single matching label is returned borrowed; concatenations and numbers
/// are allocated.
pub fn evaluate<Num>(value: &Num) -> Cow<'static, str>
where
    Num: TryFrom<u8> + Display + PartialEq,
    for<'a> &'a Num: Rem<Num, Output = Num>,
{
    RULES
        .iter()
        .filter(|rule| rule.matches(value))
        .fold(None, |answer: Option<Cow<'static, str>>, rule| {
            Some(match answer {
                None => Cow::Borrowed(rule.label),
                Some(prefix) => Cow::Owned(prefix.into_owned() + rule.label),
            })
        })
        .unwrap_or_else(|| Cow::Owned(value.to_string()))
}

/// Used to obtain the fizzbuzz answer for a number.
///
/// Implemented for every type which:
/// - can be built from the `u8` constants `0`, `3` and `5` (`TryFrom<u8>`),
/// - supports `&Num % Num` and equality,
/// - implements `Display` for the fall-through case.
///
/// That covers all primitive integers and floats. Floats with a fractional
/// part never match a rule and render as themselves (`3.2` -> `"3.2"`).
pub trait FizzBuzz {
    fn fizzbuzz(&self) -> Cow<'static, str>;
}

impl<Num> FizzBuzz for Num
where
    Num: TryFrom<u8> + Display + PartialEq,
    for<'a> &'a Num: Rem<Num, Output = Num>,
{
    fn fizzbuzz(&self) -> Cow<'static, str> {
        evaluate(self)
    }
}

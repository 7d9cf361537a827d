//! The fizzbuzz counting game as a library.
//!
//! A number is answered with `fizz` if divisible by 3, `buzz` if divisible by
//! 5, `fizzbuzz` if divisible by both, and with itself otherwise.
//!
//! - **[`rules`]**: the ordered rule set and single-value evaluation, generic
//!   over every primitive number type.
//! - **[`range`]**: start/stop/step ranges with explicit generation.
//! - **[`bulk`]**: evaluation over lists and ranges, joined with `", "`.
//! - **[`input`]**: classification of loosely-typed input (JSON values, text).
//!
//! ## Example usage for single items:
//!
//! ```
//! use fizzbuzz::{FizzBuzz, evaluate};
//!
//! assert_eq!(evaluate(&1), "1");
//! assert_eq!(3.fizzbuzz(), "fizz");
//! assert_eq!(15.0_f64.fizzbuzz(), "fizzbuzz");
//! ```
//!
//! ## Example usage for multiple items:
//!
//! ```
//! use fizzbuzz::{Bulk, FizzBuzzError, RangeSpec, evaluate_many};
//!
//! let listed = evaluate_many(&Bulk::from(vec![1, 2, 3, 4, 5]))?;
//! assert_eq!(listed, "1, 2, fizz, 4, buzz");
//!
//! let ranged = evaluate_many(&RangeSpec::new(15, 0).with_step(-3).into())?;
//! assert_eq!(ranged, "fizzbuzz, fizz, fizz, fizz, fizz");
//! # Ok::<(), FizzBuzzError>(())
//! ```

pub mod bulk;
pub mod error;
pub mod input;
pub mod range;
pub mod rules;

pub use bulk::{Bulk, answers, evaluate_many};
pub use error::FizzBuzzError;
pub use input::{Input, Scalar};
pub use range::RangeSpec;
pub use rules::{FizzBuzz, RULES, Rule, evaluate};

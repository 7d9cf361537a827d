//! Range generation agrees with std ranges, and bulk answers agree with
//! single-value evaluation.

use fizzbuzz::{Bulk, RangeSpec, answers, evaluate, evaluate_many};
use proptest::prelude::*;

proptest! {
    #[test]
    fn ascending_matches_step_by(start in -1000_i64..1000, stop in -1000_i64..1000, step in 1_i64..50) {
        let generated: Vec<i64> = RangeSpec::new(start, stop).with_step(step).values().unwrap().collect();
        let reference: Vec<i64> = (start..stop).step_by(step as usize).collect();
        prop_assert_eq!(generated, reference);
    }

    #[test]
    fn descending_matches_reversed_step_by(start in -1000_i64..1000, stop in -1000_i64..1000, step in -50_i64..0) {
        let generated: Vec<i64> = RangeSpec::new(start, stop).with_step(step).values().unwrap().collect();
        let reference: Vec<i64> = (stop + 1..=start).rev().step_by(step.unsigned_abs() as usize).collect();
        prop_assert_eq!(generated, reference);
    }

    #[test]
    fn size_hint_matches_count(start in -1000_i64..1000, stop in -1000_i64..1000, step in -50_i64..50) {
        prop_assume!(step != 0);
        let values = RangeSpec::new(start, stop).with_step(step).values().unwrap();
        let (lower, upper) = values.size_hint();
        let count = values.count();
        prop_assert_eq!(lower, count);
        prop_assert_eq!(upper, Some(count));
    }

    #[test]
    fn joined_answers_split_back_into_answers(values in prop::collection::vec(-10_000_i64..10_000, 0..64)) {
        let joined = evaluate_many(&Bulk::from(values.clone())).unwrap();
        let expected: Vec<String> = values.iter().map(|value| evaluate(value).into_owned()).collect();
        prop_assert_eq!(joined, expected.join(", "));
        let lazy: Vec<String> = answers(&Bulk::from(values)).unwrap().map(|answer| answer.into_owned()).collect();
        prop_assert_eq!(lazy, expected);
    }
}

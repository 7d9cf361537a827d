//! Start/stop/step ranges for bulk evaluation.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::error::FizzBuzzError;

/// Half-open range of integers: `start` inclusive, `stop` exclusive.
///
/// A negative `step` walks downwards. `step` defaults to `1` when omitted
/// from serialized input. A zero step is rejected by [`RangeSpec::values`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeSpec {
    pub start: i64,
    pub stop: i64,
    #[serde(default = "default_step")]
    pub step: i64,
}

fn default_step() -> i64 {
    1
}

impl RangeSpec {
    /// Range from `start` up to `stop` with a step of one.
    pub fn new(start: i64, stop: i64) -> Self {
        Self {
            start,
            stop,
            step: default_step(),
        }
    }

    pub fn with_step(self, step: i64) -> Self {
        Self { step, ..self }
    }

    /// Iterate the integers described by this range.
    pub fn values(&self) -> Result<RangeValues, FizzBuzzError> {
        if self.step == 0 {
            return Err(FizzBuzzError::ZeroStep);
        }
        Ok(RangeValues {
            next: Some(self.start),
            stop: self.stop,
            step: self.step,
        })
    }
}

/// Iterator over the integers of a [`RangeSpec`].
///
/// Ends at `stop` or when the next value would overflow `i64`.
#[derive(Debug, Clone)]
pub struct RangeValues {
    next: Option<i64>,
    stop: i64,
    step: i64,
}

impl RangeValues {
    fn in_bounds(&self, value: i64) -> bool {
        if self.step > 0 {
            value < self.stop
        } else {
            value > self.stop
        }
    }

    fn remaining(&self) -> u128 {
        let Some(current) = self.next else {
            return 0;
        };
        let span = if self.step > 0 {
            i128::from(self.stop) - i128::from(current)
        } else {
            i128::from(current) - i128::from(self.stop)
        };
        if span <= 0 {
            return 0;
        }
        let step = u128::from(self.step.unsigned_abs());
        (span as u128).div_ceil(step)
    }
}

impl Iterator for RangeValues {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let current = self.next?;
        if !self.in_bounds(current) {
            self.next = None;
            return None;
        }
        self.next = current.checked_add(self.step);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for RangeValues {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(spec: RangeSpec) -> Vec<i64> {
        spec.values().expect("non-zero step").collect()
    }

    #[test]
    fn ascending_excludes_stop() {
        assert_eq!(collect(RangeSpec::new(1, 6)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn descending_with_negative_step() {
        assert_eq!(
            collect(RangeSpec::new(15, 0).with_step(-3)),
            vec![15, 12, 9, 6, 3]
        );
    }

    #[test]
    fn step_overshooting_stop_ends_range() {
        assert_eq!(collect(RangeSpec::new(0, 10).with_step(4)), vec![0, 4, 8]);
    }

    #[test]
    fn empty_when_direction_points_away_from_stop() {
        assert!(collect(RangeSpec::new(5, 1)).is_empty());
        assert!(collect(RangeSpec::new(1, 5).with_step(-1)).is_empty());
        assert!(collect(RangeSpec::new(3, 3)).is_empty());
    }

    #[test]
    fn zero_step_is_rejected() {
        let err = RangeSpec::new(1, 16).with_step(0).values().unwrap_err();
        assert_eq!(err, FizzBuzzError::ZeroStep);
    }

    #[test]
    fn stops_before_overflow() {
        let values = collect(RangeSpec::new(i64::MAX - 2, i64::MAX).with_step(5));
        assert_eq!(values, vec![i64::MAX - 2]);
        let values = collect(RangeSpec::new(i64::MIN + 1, i64::MIN).with_step(-1));
        assert_eq!(values, vec![i64::MIN + 1]);
    }

    #[test]
    fn size_hint_is_exact() {
        let values = RangeSpec::new(15, 0).with_step(-3).values().expect("values");
        assert_eq!(values.size_hint(), (5, Some(5)));
        let values = RangeSpec::new(0, 10).with_step(4).values().expect("values");
        assert_eq!(values.size_hint(), (3, Some(3)));
        let values = RangeSpec::new(5, 1).values().expect("values");
        assert_eq!(values.size_hint(), (0, Some(0)));
    }

    #[test]
    fn step_defaults_to_one_when_deserialized() {
        let spec: RangeSpec = serde_json::from_str(r#"{"start": 1, "stop": 16}"#).expect("parse");
        assert_eq!(spec, RangeSpec::new(1, 16));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let parsed: Result<RangeSpec, _> =
            serde_json::from_str(r#"{"start": 1, "stop": 16, "stride": 2}"#);
        assert!(parsed.is_err());
    }
}

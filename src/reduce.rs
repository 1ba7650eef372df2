//! Flat-run reduction
//!
//! A controller that sits on one value for many messages produces long runs
//! of identical samples. Only the points where a run starts and ends carry
//! information; everything strictly inside a run is dropped.
//!
//! The reducer compares elements on a key chosen by the caller, so the field
//! that decides equality is always explicit ([`CurveAxis`] for curve points,
//! any closure for other element types).

use crate::curve::CurvePoint;
use serde::{Deserialize, Serialize};

/// Which field of a [`CurvePoint`] the reducer compares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CurveAxis {
    Time,
    #[default]
    Value,
}

impl CurveAxis {
    #[must_use]
    #[inline]
    pub fn of(&self, point: &CurvePoint) -> f64 {
        match self {
            Self::Time => point.time,
            Self::Value => point.value,
        }
    }
}

/// Keep the first and last element of every maximal run of equal keys
///
/// The first and last element of the input are always kept, and relative
/// order is preserved. A single element that differs from both neighbours is
/// its own run and survives, so `a b a` is returned unchanged.
pub fn reduce_by<T, K, F>(items: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    let mut reduced = Vec::with_capacity(items.len());
    let mut iter = items.iter().peekable();
    let mut previous: Option<K> = None;

    while let Some(item) = iter.next() {
        let current = key(item);
        let opens_run = previous.as_ref() != Some(&current);
        let closes_run = match iter.peek() {
            Some(&next) => key(next) != current,
            None => true,
        };

        if opens_run || closes_run {
            reduced.push(item.clone());
        }
        previous = Some(current);
    }

    reduced
}

/// [`reduce_by`] keyed on one axis of a curve
pub fn reduce_on(points: &[CurvePoint], axis: CurveAxis) -> Vec<CurvePoint> {
    reduce_by(points, |p| axis.of(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(points: &[CurvePoint]) -> Vec<f64> {
        points.iter().map(|p| p.value).collect()
    }

    fn points(values: &[f64]) -> Vec<CurvePoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| CurvePoint::new(i as f64, v))
            .collect()
    }

    #[test]
    fn test_empty_and_short_inputs() {
        assert!(reduce_by::<u8, u8, _>(&[], |x| *x).is_empty());
        assert_eq!(reduce_by(&[5], |x| *x), vec![5]);
        assert_eq!(reduce_by(&[5, 5], |x| *x), vec![5, 5]);
    }

    #[test]
    fn test_interior_of_run_dropped() {
        let input = points(&[0.1, 0.5, 0.5, 0.5, 0.5, 0.9]);
        let reduced = reduce_on(&input, CurveAxis::Value);

        assert_eq!(values(&reduced), vec![0.1, 0.5, 0.5, 0.9]);
        // first and last of the 0.5 run
        assert_eq!(reduced[1].time, 1.0);
        assert_eq!(reduced[2].time, 4.0);
    }

    #[test]
    fn test_trailing_run_keeps_both_ends() {
        let input = points(&[0.1, 0.5, 0.5, 0.5]);
        let reduced = reduce_on(&input, CurveAxis::Value);
        assert_eq!(reduced, vec![input[0], input[1], input[3]]);
    }

    #[test]
    fn test_leading_run_keeps_both_ends() {
        let input = points(&[0.5, 0.5, 0.5, 0.2]);
        let reduced = reduce_on(&input, CurveAxis::Value);
        assert_eq!(reduced, vec![input[0], input[2], input[3]]);
    }

    #[test]
    fn test_spike_is_preserved() {
        let input = points(&[0.2, 0.9, 0.2]);
        assert_eq!(reduce_on(&input, CurveAxis::Value), input);
    }

    #[test]
    fn test_all_equal_collapses_to_endpoints() {
        let input = points(&[0.3; 10]);
        let reduced = reduce_on(&input, CurveAxis::Value);
        assert_eq!(reduced, vec![input[0], input[9]]);
    }

    #[test]
    fn test_reduce_on_time_axis() {
        let input = vec![
            CurvePoint::new(0.0, 0.1),
            CurvePoint::new(5.0, 0.2),
            CurvePoint::new(5.0, 0.3),
            CurvePoint::new(5.0, 0.4),
            CurvePoint::new(8.0, 0.5),
        ];
        let reduced = reduce_on(&input, CurveAxis::Time);
        assert_eq!(values(&reduced), vec![0.1, 0.2, 0.4, 0.5]);
    }

    #[test]
    fn test_idempotent() {
        let input = points(&[0.0, 0.0, 0.0, 1.0, 1.0, 0.5, 0.5, 0.5, 0.5, 0.0, 1.0, 1.0]);
        let once = reduce_on(&input, CurveAxis::Value);
        let twice = reduce_on(&once, CurveAxis::Value);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_triple_runs_remain() {
        let input = points(&[0.4, 0.4, 0.4, 0.4, 0.7, 0.7, 0.7, 0.1, 0.1, 0.1, 0.1]);
        let reduced = reduce_on(&input, CurveAxis::Value);
        for window in reduced.windows(3) {
            assert!(!(window[0].value == window[1].value && window[1].value == window[2].value));
        }
        assert_eq!(reduced.first(), input.first());
        assert_eq!(reduced.last(), input.last());
    }
}

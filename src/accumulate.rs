//! Delta-time folding
//!
//! MIDI encodes each event's time as the gap since the previous event on the
//! same track, regardless of which controller that event moved. One
//! [`TrackClock`] per track therefore drives every control's samples.

use crate::curve::CurvePoint;
use crate::error::Malformation;
use crate::event::CheckedEvent;
use crate::options::SimultaneousEvents;
use std::collections::BTreeMap;

/// Divisor that maps a 7-bit controller value onto `[0, 1]`
pub const VALUE_SCALE: f64 = 127.0;

/// Running absolute time of a track
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackClock {
    now: f64,
}

impl TrackClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an externally supplied reading
    pub fn starting_at(now: f64) -> Self {
        Self { now }
    }

    #[must_use]
    #[inline]
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Move the clock forward and return the new reading
    ///
    /// The clock is left untouched when the sum would no longer be finite.
    #[inline]
    pub fn advance(&mut self, delta: f64) -> Result<f64, Malformation> {
        if delta > 0.0 {
            let next = self.now + delta;
            if !next.is_finite() {
                return Err(Malformation::ClockOverflow(delta));
            }
            self.now = next;
        }
        Ok(self.now)
    }
}

/// Fold one value into a control's sample list at the clock's current time
///
/// The first sample of a control anchors at whatever the clock holds.
pub fn fold_sample(
    samples: &mut Vec<CurvePoint>,
    clock: &TrackClock,
    delta: f64,
    raw_value: u8,
    simultaneous: SimultaneousEvents,
) {
    let point = CurvePoint::new(clock.now(), f64::from(raw_value) / VALUE_SCALE);

    if delta == 0.0 && simultaneous == SimultaneousEvents::Overwrite {
        if let Some(last) = samples.last_mut() {
            if last.time == point.time {
                *last = point;
                return;
            }
        }
    }

    samples.push(point);
}

/// Absolute-time samples of every control on one track
#[derive(Debug, Clone, Default)]
pub(crate) struct TrackSamples {
    clock: TrackClock,
    controls: BTreeMap<u8, Vec<CurvePoint>>,
    simultaneous: SimultaneousEvents,
}

impl TrackSamples {
    pub fn new(simultaneous: SimultaneousEvents) -> Self {
        Self {
            simultaneous,
            ..Self::default()
        }
    }

    pub fn push(&mut self, event: CheckedEvent) -> Result<(), Malformation> {
        self.clock.advance(event.delta)?;
        let samples = self.controls.entry(event.control).or_default();
        fold_sample(samples, &self.clock, event.delta, event.value, self.simultaneous);
        Ok(())
    }

    /// Time of the last event across all controls
    pub fn final_time(&self) -> f64 {
        self.clock.now()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn into_controls(self) -> BTreeMap<u8, Vec<CurvePoint>> {
        self.controls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cc(control: u8, delta: f64, value: u8) -> CheckedEvent {
        CheckedEvent {
            control,
            delta,
            value,
        }
    }

    #[test]
    fn test_clock_ignores_zero_delta() {
        let mut clock = TrackClock::new();
        assert_eq!(clock.advance(0.0), Ok(0.0));
        assert_eq!(clock.advance(10.0), Ok(10.0));
        assert_eq!(clock.advance(0.0), Ok(10.0));
        assert_eq!(clock.advance(2.5), Ok(12.5));
    }

    #[test]
    fn test_clock_refuses_to_overflow() {
        let mut clock = TrackClock::new();
        assert_eq!(clock.advance(f64::MAX), Ok(f64::MAX));
        assert_eq!(
            clock.advance(f64::MAX),
            Err(Malformation::ClockOverflow(f64::MAX))
        );
        assert_eq!(clock.now(), f64::MAX);
    }

    #[test]
    fn test_overflowing_event_leaves_samples_untouched() {
        let mut track = TrackSamples::new(SimultaneousEvents::Overwrite);
        track.push(cc(1, 0.0, 0)).unwrap();
        track.push(cc(1, f64::MAX, 64)).unwrap();
        assert!(track.push(cc(1, f64::MAX, 127)).is_err());

        assert_eq!(track.final_time(), f64::MAX);
        assert_eq!(track.into_controls()[&1].len(), 2);
    }

    #[test]
    fn test_fold_from_external_clock() {
        let clock = TrackClock::starting_at(40.0);
        let mut samples = Vec::new();
        fold_sample(&mut samples, &clock, 0.0, 127, SimultaneousEvents::Overwrite);
        assert_eq!(samples, vec![CurvePoint::new(40.0, 1.0)]);
    }

    #[test]
    fn test_overwrite_replaces_same_time_sample() {
        let clock = TrackClock::starting_at(5.0);
        let mut samples = vec![CurvePoint::new(5.0, 0.0)];
        fold_sample(&mut samples, &clock, 0.0, 127, SimultaneousEvents::Overwrite);
        assert_eq!(samples, vec![CurvePoint::new(5.0, 1.0)]);
    }

    #[test]
    fn test_overwrite_keeps_earlier_time_sample() {
        let clock = TrackClock::starting_at(5.0);
        let mut samples = vec![CurvePoint::new(2.0, 0.0)];
        fold_sample(&mut samples, &clock, 0.0, 127, SimultaneousEvents::Overwrite);
        assert_eq!(samples.len(), 2);
    }

    #[test]
    fn test_append_keeps_both_samples() {
        let clock = TrackClock::starting_at(5.0);
        let mut samples = vec![CurvePoint::new(5.0, 0.0)];
        fold_sample(&mut samples, &clock, 0.0, 127, SimultaneousEvents::Append);
        assert_eq!(
            samples,
            vec![CurvePoint::new(5.0, 0.0), CurvePoint::new(5.0, 1.0)]
        );
    }

    #[test]
    fn test_controls_share_clock() {
        let mut track = TrackSamples::new(SimultaneousEvents::Overwrite);
        track.push(cc(1, 0.0, 0)).unwrap();
        track.push(cc(1, 30.0, 64)).unwrap();
        track.push(cc(2, 20.0, 127)).unwrap();
        track.push(cc(1, 50.0, 0)).unwrap();

        assert_eq!(track.final_time(), 100.0);
        let controls = track.into_controls();
        assert_eq!(controls[&2], vec![CurvePoint::new(50.0, 1.0)]);
        assert_eq!(controls[&1].last(), Some(&CurvePoint::new(100.0, 0.0)));
    }
}

//! Per-track collection of reduced control curves

use crate::accumulate::TrackSamples;
use crate::curve::{CurvePoint, ReducedCurve};
use crate::error::{Error, Result};
use crate::event::RawEvent;
use crate::options::BuildOptions;
use crate::reduce::{reduce_on, CurveAxis};
use log::{debug, trace};
use serde::Serialize;
use std::collections::BTreeMap;

/// The control curves of one MIDI track
///
/// All curves of a track share one time axis: times are divided by the
/// track's final clock reading, not by each control's own span, so curves
/// from the same track can be drawn against the same x-axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlTrack {
    name: String,
    /// Absolute time of the last control-change event
    final_time: f64,
    curves: BTreeMap<u8, ReducedCurve>,
}

impl ControlTrack {
    /// Build a track directly from its control-change events
    ///
    /// Fails with [`Error::MalformedInput`] on the first out-of-range event.
    pub fn from_events<I>(name: impl Into<String>, events: I, options: &BuildOptions) -> Result<Self>
    where
        I: IntoIterator<Item = RawEvent>,
    {
        let name = name.into();
        let mut samples = TrackSamples::new(options.simultaneous);

        for (index, event) in events.into_iter().enumerate() {
            event
                .checked()
                .and_then(|checked| samples.push(checked))
                .map_err(|reason| Error::MalformedInput {
                    track: name.clone(),
                    index,
                    reason,
                })?;
        }

        Ok(Self::from_samples(name, samples))
    }

    pub(crate) fn from_samples(name: String, samples: TrackSamples) -> Self {
        let final_time = samples.final_time();
        let mut curves = BTreeMap::new();

        if final_time > 0.0 {
            for (control, points) in samples.into_controls() {
                let reduced = reduce_on(&points, CurveAxis::Value);
                if reduced.len() < 2 {
                    trace!("track {name:?}: control {control} has a single point, dropped");
                    continue;
                }

                let normalized = reduced
                    .into_iter()
                    .map(|p| CurvePoint::new(p.time / final_time, p.value))
                    .collect();
                curves.insert(control, ReducedCurve::from_points(normalized));
            }
        } else {
            debug!("track {name:?} never advances in time, no curves kept");
        }

        Self {
            name,
            final_time,
            curves,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute clock reading of the last event, in the input's delta units
    ///
    /// Multiply a normalized time by this to get back to input units.
    #[must_use]
    pub fn final_time(&self) -> f64 {
        self.final_time
    }

    /// True when the clock never moved, which leaves the track without curves
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.final_time <= 0.0
    }

    /// Control indices that have a curve, ascending
    pub fn controls(&self) -> impl Iterator<Item = u8> + '_ {
        self.curves.keys().copied()
    }

    #[must_use]
    pub fn contains(&self, control: u8) -> bool {
        self.curves.contains_key(&control)
    }

    /// Curve of one control
    ///
    /// Fails with [`Error::ControlNotFound`] when the control has no curve, or
    /// with [`Error::DegenerateTrack`] when the whole track has none because
    /// its clock never moved. Both report `true` from
    /// [`Error::is_not_found`].
    pub fn curve(&self, control: u8) -> Result<&ReducedCurve> {
        if self.is_degenerate() {
            return Err(Error::DegenerateTrack {
                track: self.name.clone(),
            });
        }

        self.curves.get(&control).ok_or_else(|| Error::ControlNotFound {
            track: self.name.clone(),
            control,
        })
    }

    /// `(control, curve)` pairs, ascending by control
    pub fn iter(&self) -> impl Iterator<Item = (u8, &ReducedCurve)> + '_ {
        self.curves.iter().map(|(control, curve)| (*control, curve))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Held value of every control at normalized time `t`
    pub fn values_at(&self, t: f64) -> BTreeMap<u8, f64> {
        self.iter()
            .map(|(control, curve)| (control, curve.value_at(t)))
            .collect()
    }
}

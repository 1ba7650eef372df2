//! Input side: control-change events as delivered by a MIDI parser
//!
//! The parser itself lives outside this crate. It hands over one
//! [`InputTrack`] per MIDI track, each holding the track's control-change
//! messages in file order followed by an end-of-track marker.

use crate::error::Malformation;
use serde::{Deserialize, Serialize};

/// Highest control index and value allowed by the 7-bit MIDI data bytes
pub const MAX_DATA_BYTE: u32 = 127;

/// One control-change message
///
/// `delta` is relative to the previous event on the same track, whichever
/// control that event belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    pub control: u32,
    pub delta: f64,
    pub value: u32,
}

/// A [`RawEvent`] whose fields passed range checks
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CheckedEvent {
    pub control: u8,
    pub delta: f64,
    pub value: u8,
}

impl RawEvent {
    pub fn new(control: u32, delta: f64, value: u32) -> Self {
        Self {
            control,
            delta,
            value,
        }
    }

    /// Check the event against the MIDI data ranges
    pub fn validate(&self) -> Result<(), Malformation> {
        self.checked().map(|_| ())
    }

    pub(crate) fn checked(&self) -> Result<CheckedEvent, Malformation> {
        if self.control > MAX_DATA_BYTE {
            return Err(Malformation::ControlOutOfRange(self.control));
        }
        if self.value > MAX_DATA_BYTE {
            return Err(Malformation::ValueOutOfRange(self.value));
        }
        if !self.delta.is_finite() || self.delta < 0.0 {
            return Err(Malformation::InvalidDelta(self.delta));
        }

        Ok(CheckedEvent {
            control: self.control as u8,
            delta: self.delta,
            value: self.value as u8,
        })
    }
}

/// Event in a parsed track
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TrackEvent {
    ControlChange(RawEvent),
    /// Marks the track as complete; only completed tracks are kept
    EndOfTrack,
}

impl From<RawEvent> for TrackEvent {
    fn from(event: RawEvent) -> Self {
        Self::ControlChange(event)
    }
}

/// A parsed MIDI track, reduced to the events this crate cares about
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputTrack {
    /// Track name, possibly empty
    pub name: String,
    pub events: Vec<TrackEvent>,
}

impl InputTrack {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            events: Vec::new(),
        }
    }

    /// Append a control-change event
    pub fn with_cc(mut self, control: u32, delta: f64, value: u32) -> Self {
        self.events.push(RawEvent::new(control, delta, value).into());
        self
    }

    /// Append the end-of-track marker
    pub fn ended(mut self) -> Self {
        self.events.push(TrackEvent::EndOfTrack);
        self
    }

    /// Build a completed track from `(control, delta, value)` triples
    pub fn from_triples(
        name: impl Into<String>,
        triples: impl IntoIterator<Item = (u32, f64, u32)>,
    ) -> Self {
        let mut track = Self::new(name);
        for (control, delta, value) in triples {
            track.events.push(RawEvent::new(control, delta, value).into());
        }
        track.ended()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ranges() {
        assert!(RawEvent::new(0, 0.0, 0).validate().is_ok());
        assert!(RawEvent::new(127, 12.5, 127).validate().is_ok());

        assert_eq!(
            RawEvent::new(128, 0.0, 0).validate(),
            Err(Malformation::ControlOutOfRange(128))
        );
        assert_eq!(
            RawEvent::new(1, 0.0, 300).validate(),
            Err(Malformation::ValueOutOfRange(300))
        );
        assert_eq!(
            RawEvent::new(1, -1.0, 3).validate(),
            Err(Malformation::InvalidDelta(-1.0))
        );
    }

    #[test]
    fn test_non_finite_delta_rejected() {
        assert!(RawEvent::new(1, f64::NAN, 3).validate().is_err());
        assert!(RawEvent::new(1, f64::INFINITY, 3).validate().is_err());
    }

    #[test]
    fn test_from_triples_appends_end_marker() {
        let track = InputTrack::from_triples("Lead", [(7, 0.0, 100), (7, 10.0, 90)]);
        assert_eq!(track.name, "Lead");
        assert_eq!(track.events.len(), 3);
        assert_eq!(track.events.last(), Some(&TrackEvent::EndOfTrack));
    }
}

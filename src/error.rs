//! Error types for curve extraction and lookup

use serde::{Deserialize, Serialize};

/// What was wrong with a raw control-change event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Malformation {
    /// Control index above 127
    ControlOutOfRange(u32),
    /// Control value above 127
    ValueOutOfRange(u32),
    /// Negative, NaN or infinite delta time
    InvalidDelta(f64),
    /// Finite delta that would carry the track clock past `f64::MAX`
    ClockOverflow(f64),
}

impl std::fmt::Display for Malformation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ControlOutOfRange(control) => {
                write!(f, "control index {control} is outside 0..=127")
            }
            Self::ValueOutOfRange(value) => write!(f, "value {value} is outside 0..=127"),
            Self::InvalidDelta(delta) => {
                write!(f, "delta time {delta} is not a finite, non-negative number")
            }
            Self::ClockOverflow(delta) => {
                write!(f, "delta time {delta} overflows the track clock")
            }
        }
    }
}

/// Errors raised while building a [`ControlSet`](crate::ControlSet) or looking up curves in it
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("no track named {name:?}")]
    TrackNotFound { name: String },

    #[error("track {track:?} has no curve for control {control}")]
    ControlNotFound { track: String, control: u8 },

    /// The track's clock never advanced past zero, so no time axis exists
    ///
    /// Returned by per-control lookups on such a track. It is a not-found
    /// failure that names the reason: the track has no curves at all.
    #[error("track {track:?} never advances in time and carries no curves")]
    DegenerateTrack { track: String },

    #[error("malformed event #{index} in track {track:?}: {reason}")]
    MalformedInput {
        track: String,
        /// Position of the offending event within its track
        index: usize,
        reason: Malformation,
    },
}

impl Error {
    /// True for the lookup failures: `TrackNotFound`, `ControlNotFound`, and
    /// `DegenerateTrack` (a curve lookup on a track without a time axis)
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::TrackNotFound { .. } | Self::ControlNotFound { .. } | Self::DegenerateTrack { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

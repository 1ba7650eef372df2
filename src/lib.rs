//! # midi-cc-curves
//!
//! Extract automation curves from MIDI control-change streams.
//!
//! This crate provides:
//! - **Delta-time folding** - One running clock per track, shared by every controller
//! - **Flat-run reduction** - Only the first and last point of a held value survive
//! - **Normalization** - Time and value axes mapped onto `[0, 1]`, ready to plot
//! - **Per-track lookup** - Curves keyed by track name and controller number
//! - **Serialization support** - Export curves with serde
//!
//! Reading the MIDI file is left to the caller: hand over each track's
//! control-change messages as `(control, delta, value)` triples.
//!
//! ## Quick Start
//!
//! ```rust
//! use midi_cc_curves::{ControlSet, InputTrack};
//!
//! // Control 7 (volume) rises, holds, then drops
//! let track = InputTrack::from_triples(
//!     "Strings",
//!     [(7, 0.0, 0), (7, 96.0, 100), (7, 96.0, 100), (7, 96.0, 100), (7, 96.0, 20)],
//! );
//!
//! let set = ControlSet::new([track]).unwrap();
//! let curve = set.track("Strings").unwrap().curve(7).unwrap();
//!
//! // The middle of the held 100 is gone
//! assert_eq!(curve.len(), 4);
//! assert_eq!(curve.last().unwrap().time, 1.0);
//! assert!((curve.value_at(0.5) - 100.0 / 127.0).abs() < 1e-9);
//! ```
//!
//! ## Shared time axis
//!
//! Every curve of a track is normalized against the time of the track's last
//! control change, so a controller that stops moving halfway through ends at
//! `0.5`, not `1.0`. Curves of one track can be drawn on one x-axis.

pub mod accumulate;
pub mod curve;
pub mod error;
pub mod event;
pub mod options;
pub mod reduce;
pub mod set;
pub mod track;

pub use accumulate::{fold_sample, TrackClock, VALUE_SCALE};
pub use curve::{CurvePoint, ReducedCurve};
pub use error::{Error, Malformation, Result};
pub use event::{InputTrack, RawEvent, TrackEvent};
pub use options::{BuildOptions, MalformedPolicy, SimultaneousEvents};
pub use reduce::{reduce_by, reduce_on, CurveAxis};
pub use set::{ControlSet, ControlSetBuilder, TrackNames};
pub use track::ControlTrack;

/// Prelude for common imports
pub mod prelude {
    pub use crate::curve::{CurvePoint, ReducedCurve};
    pub use crate::error::{Error, Result};
    pub use crate::event::{InputTrack, RawEvent, TrackEvent};
    pub use crate::options::{BuildOptions, MalformedPolicy, SimultaneousEvents};
    pub use crate::set::{ControlSet, ControlSetBuilder};
    pub use crate::track::ControlTrack;
}

//! File-level collection of control tracks
//!
//! A [`ControlSet`] is built once from a parsed MIDI file and is read-only
//! afterwards. Construction either goes through [`ControlSet::from_tracks`]
//! with fully parsed tracks, or through [`ControlSetBuilder`] for a parser
//! that emits events as it reads them.

use crate::accumulate::TrackSamples;
use crate::error::{Error, Result};
use crate::event::{InputTrack, TrackEvent};
use crate::options::{BuildOptions, MalformedPolicy};
use crate::track::ControlTrack;
use log::{debug, warn};
use serde::Serialize;

/// Reduced control curves of every track in a file
#[derive(Debug, Clone, Default, Serialize)]
pub struct ControlSet {
    /// In completion order
    tracks: Vec<ControlTrack>,
    #[serde(skip)]
    rejected: Vec<Error>,
}

impl ControlSet {
    /// Build with [`BuildOptions::default`]
    pub fn new<I>(tracks: I) -> Result<Self>
    where
        I: IntoIterator<Item = InputTrack>,
    {
        Self::from_tracks(tracks, BuildOptions::default())
    }

    pub fn from_tracks<I>(tracks: I, options: BuildOptions) -> Result<Self>
    where
        I: IntoIterator<Item = InputTrack>,
    {
        let mut builder = ControlSetBuilder::new(options);
        for track in tracks {
            builder.begin_track(track.name);
            for event in track.events {
                builder.push(event)?;
            }
        }
        Ok(builder.finish())
    }

    /// Names of the retained tracks, in the order they were completed
    pub fn tracks(&self) -> TrackNames<'_> {
        TrackNames {
            inner: self.tracks.iter(),
        }
    }

    pub fn track(&self, name: &str) -> Result<&ControlTrack> {
        self.tracks
            .iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| Error::TrackNotFound {
                name: name.to_string(),
            })
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tracks.iter().any(|t| t.name() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ControlTrack> {
        self.tracks.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Tracks dropped under [`MalformedPolicy::SkipTrack`], with the reason
    #[must_use]
    pub fn rejected(&self) -> &[Error] {
        &self.rejected
    }
}

impl<'a> IntoIterator for &'a ControlSet {
    type Item = &'a ControlTrack;
    type IntoIter = std::slice::Iter<'a, ControlTrack>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}

/// Iterator over track names, see [`ControlSet::tracks`]
#[derive(Debug, Clone)]
pub struct TrackNames<'a> {
    inner: std::slice::Iter<'a, ControlTrack>,
}

impl<'a> Iterator for TrackNames<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(ControlTrack::name)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for TrackNames<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(ControlTrack::name)
    }
}

impl ExactSizeIterator for TrackNames<'_> {}

#[derive(Debug)]
struct PendingTrack {
    name: String,
    samples: TrackSamples,
    events: usize,
    failure: Option<Error>,
}

/// Incremental construction of a [`ControlSet`]
///
/// Feed each track as `begin_track`, its events, then
/// [`TrackEvent::EndOfTrack`] (or [`end_track`](Self::end_track)). A track
/// that is never ended is discarded.
#[derive(Debug, Default)]
pub struct ControlSetBuilder {
    options: BuildOptions,
    set: ControlSet,
    current: Option<PendingTrack>,
}

impl ControlSetBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self {
            options,
            set: ControlSet::default(),
            current: None,
        }
    }

    pub fn begin_track(&mut self, name: impl Into<String>) {
        if let Some(open) = self.current.take() {
            debug!("track {:?} has no end-of-track marker, discarded", open.name);
        }

        self.current = Some(PendingTrack {
            name: name.into(),
            samples: TrackSamples::new(self.options.simultaneous),
            events: 0,
            failure: None,
        });
    }

    /// Feed the next event of the current track
    ///
    /// Under [`MalformedPolicy::RejectInput`] an out-of-range event is returned
    /// as [`Error::MalformedInput`] and the build should be abandoned.
    pub fn push(&mut self, event: TrackEvent) -> Result<()> {
        let raw = match event {
            TrackEvent::ControlChange(raw) => raw,
            TrackEvent::EndOfTrack => {
                self.end_track();
                return Ok(());
            }
        };

        let Some(pending) = self.current.as_mut() else {
            warn!("control change outside of an open track ignored: {raw:?}");
            return Ok(());
        };

        let index = pending.events;
        pending.events += 1;
        if pending.failure.is_some() {
            return Ok(());
        }

        let samples = &mut pending.samples;
        match raw.checked().and_then(|checked| samples.push(checked)) {
            Ok(()) => {}
            Err(reason) => {
                let err = Error::MalformedInput {
                    track: pending.name.clone(),
                    index,
                    reason,
                };
                match self.options.malformed {
                    MalformedPolicy::RejectInput => return Err(err),
                    MalformedPolicy::SkipTrack => pending.failure = Some(err),
                }
            }
        }

        Ok(())
    }

    /// Complete the current track
    pub fn end_track(&mut self) {
        let Some(pending) = self.current.take() else {
            return;
        };

        if let Some(err) = pending.failure {
            warn!("{err}, track skipped");
            self.set.rejected.push(err);
            return;
        }

        if pending.samples.is_empty() {
            debug!("track {:?} has no control changes, skipped", pending.name);
            return;
        }

        let track = ControlTrack::from_samples(pending.name, pending.samples);
        debug!(
            "track {:?} complete: {} curves over {} time units",
            track.name(),
            track.len(),
            track.final_time()
        );

        let tracks = &mut self.set.tracks;
        match tracks.iter_mut().find(|t| t.name() == track.name()) {
            Some(existing) => *existing = track,
            None => tracks.push(track),
        }
    }

    pub fn finish(mut self) -> ControlSet {
        if let Some(open) = self.current.take() {
            debug!("track {:?} has no end-of-track marker, discarded", open.name);
        }
        self.set
    }
}

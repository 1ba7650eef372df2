//! Build-time configuration
//!
//! | Option         | Default       | Alternative |
//! |----------------|---------------|-------------|
//! | `simultaneous` | `Overwrite`   | `Append`    |
//! | `malformed`    | `RejectInput` | `SkipTrack` |

use serde::{Deserialize, Serialize};

/// What to do with a zero-delta event for a control that already has a
/// sample at the current clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SimultaneousEvents {
    /// The later event replaces the earlier sample
    #[default]
    Overwrite,
    /// Both samples are kept at the same time, earlier first
    Append,
}

/// What to do when a track contains an out-of-range event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MalformedPolicy {
    /// Fail the whole build with the first malformed event
    #[default]
    RejectInput,
    /// Drop the offending track and keep building the others
    SkipTrack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    pub simultaneous: SimultaneousEvents,
    pub malformed: MalformedPolicy,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_simultaneous(mut self, simultaneous: SimultaneousEvents) -> Self {
        self.simultaneous = simultaneous;
        self
    }

    pub fn with_malformed(mut self, malformed: MalformedPolicy) -> Self {
        self.malformed = malformed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = BuildOptions::default();
        assert_eq!(options.simultaneous, SimultaneousEvents::Overwrite);
        assert_eq!(options.malformed, MalformedPolicy::RejectInput);
    }

    #[test]
    fn test_builder() {
        let options = BuildOptions::new()
            .with_simultaneous(SimultaneousEvents::Append)
            .with_malformed(MalformedPolicy::SkipTrack);
        assert_eq!(options.simultaneous, SimultaneousEvents::Append);
        assert_eq!(options.malformed, MalformedPolicy::SkipTrack);
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let options: BuildOptions = serde_json::from_str(r#"{"malformed":"SkipTrack"}"#).unwrap();
        assert_eq!(options.simultaneous, SimultaneousEvents::Overwrite);
        assert_eq!(options.malformed, MalformedPolicy::SkipTrack);
    }
}

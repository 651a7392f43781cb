//! Playlist data model and validation.
//!
//! A playlist is an ordered list of clip entries. Each entry carries two
//! ordered event lists: momentary **actions** (captions, style-class
//! toggles) and **pauses** (suspend playback for a fixed wall-clock window,
//! with reversible effects). Event times are seconds from clip start, or
//! the `"end"` sentinel which fires on the engine's end-of-clip signal.
//!
//! Entries are immutable after load except for `duration`, which is set
//! exactly once when the media engine reports metadata.

mod load;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PlaylistError;

/// Trigger time of an action or pause.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventTime {
    /// Seconds from the start of the clip
    At(f64),
    /// Fires when the engine signals end-of-clip, never via the timer path
    End,
}

impl EventTime {
    /// Numeric seconds, or `None` for the end sentinel.
    pub fn seconds(&self) -> Option<f64> {
        match self {
            EventTime::At(secs) => Some(*secs),
            EventTime::End => None,
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, EventTime::End)
    }
}

impl Serialize for EventTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EventTime::At(secs) => serializer.serialize_f64(*secs),
            EventTime::End => serializer.serialize_str("end"),
        }
    }
}

impl<'de> Deserialize<'de> for EventTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TimeVisitor;

        impl Visitor<'_> for TimeVisitor {
            type Value = EventTime;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a number of seconds or the string \"end\"")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<EventTime, E> {
                Ok(EventTime::At(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<EventTime, E> {
                Ok(EventTime::At(v as f64))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<EventTime, E> {
                Ok(EventTime::At(v as f64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<EventTime, E> {
                if v == "end" {
                    Ok(EventTime::End)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(v), &self))
                }
            }
        }

        deserializer.deserialize_any(TimeVisitor)
    }
}

/// A momentary timed effect: show a caption and/or toggle style classes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub time: EventTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Seconds after which the title is auto-removed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub class_add: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub class_remove: Vec<String>,
}

/// A timed suspension of playback with reversible effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pause {
    pub time: EventTime,
    /// Wall-clock seconds the pause lasts
    pub duration: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub class_add: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub class_remove: Vec<String>,
}

/// One clip of the playlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistEntry {
    /// Media locator; `None` marks a silent slot with no media
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_ref: Option<String>,
    /// Raw media duration in seconds, once metadata is known. May be
    /// declared up front for silent slots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pauses: Vec<Pause>,
}

impl PlaylistEntry {
    /// Entry with no media and no events (silent slot).
    pub fn silent(duration: f64) -> Self {
        Self {
            media_ref: None,
            duration: Some(duration),
            actions: Vec::new(),
            pauses: Vec::new(),
        }
    }

    /// Sum of all pause durations, end-sentinel pauses included.
    pub fn total_pause_time(&self) -> f64 {
        self.pauses.iter().map(|p| p.duration).sum()
    }

    /// Total wall-clock length of the clip: raw duration plus all pause
    /// time. `None` until metadata is known.
    pub fn duration_index(&self) -> Option<f64> {
        self.duration.map(|d| d + self.total_pause_time())
    }
}

/// The whole clip list.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    pub entries: Vec<PlaylistEntry>,
}

impl Playlist {
    pub fn new(entries: Vec<PlaylistEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<&PlaylistEntry> {
        self.entries.get(index)
    }

    /// Record a clip's duration once metadata resolves. The first write
    /// wins; repeated reports of the same value are harmless no-ops.
    ///
    /// Returns true if the duration was newly set.
    pub fn set_clip_duration(&mut self, index: usize, duration: f64) -> bool {
        let Some(entry) = self.entries.get_mut(index) else {
            return false;
        };
        match entry.duration {
            None => {
                entry.duration = Some(duration);
                true
            }
            Some(existing) => {
                if (existing - duration).abs() > f64::EPSILON {
                    tracing::debug!(
                        index,
                        existing,
                        reported = duration,
                        "ignoring duration update for clip with known duration"
                    );
                }
                false
            }
        }
    }

    /// Wall-clock length of the clip at `index` including pause time.
    pub fn duration_index(&self, index: usize) -> Option<f64> {
        self.entries.get(index).and_then(PlaylistEntry::duration_index)
    }

    /// Wall-clock length of the whole playlist. `None` while any clip's
    /// duration is still unknown.
    pub fn virtual_duration(&self) -> Option<f64> {
        self.entries
            .iter()
            .map(PlaylistEntry::duration_index)
            .sum::<Option<f64>>()
    }

    /// Check the caller contract: numeric times non-decreasing, no
    /// negative times, positive pause durations, end sentinels last.
    pub fn validate(&self) -> Result<(), PlaylistError> {
        for (entry_idx, entry) in self.entries.iter().enumerate() {
            validate_times(
                entry_idx,
                "action",
                entry.actions.iter().map(|a| a.time),
            )?;
            validate_times(entry_idx, "pause", entry.pauses.iter().map(|p| p.time))?;

            for (index, pause) in entry.pauses.iter().enumerate() {
                if pause.duration <= 0.0 {
                    return Err(PlaylistError::NonPositivePauseDuration {
                        entry: entry_idx,
                        index,
                    });
                }
            }
        }
        Ok(())
    }
}

fn validate_times(
    entry: usize,
    kind: &'static str,
    times: impl Iterator<Item = EventTime>,
) -> Result<(), PlaylistError> {
    let mut prev: Option<f64> = None;
    let mut seen_end = false;

    for (index, time) in times.enumerate() {
        match time {
            EventTime::At(secs) => {
                if seen_end {
                    return Err(PlaylistError::EndBeforeTimed { entry, kind, index });
                }
                if secs < 0.0 {
                    return Err(PlaylistError::NegativeTime { entry, kind, index });
                }
                if let Some(prev) = prev {
                    if secs < prev {
                        return Err(PlaylistError::UnsortedTimes { entry, kind, index });
                    }
                }
                prev = Some(secs);
            }
            EventTime::End => seen_end = true,
        }
    }
    Ok(())
}

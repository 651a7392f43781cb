//! Playback Position Model: conversion between the two coordinate
//! systems.
//!
//! **Engine position** is the raw elapsed play time of the current clip,
//! pauses excluded. **Virtual position** is wall-clock seconds across the
//! whole playlist, pauses included: prior clips contribute their full
//! `duration_index`, the current clip contributes engine position plus
//! elapsed pause time. Any unknown clip duration propagates as `None`,
//! never as a fault.

use crate::playlist::{EventTime, Playlist, PlaylistEntry};

/// In-clip result of a virtual→engine conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipSeek {
    /// Raw engine position to seek the media element to
    pub engine_position: f64,
    /// Number of leading pauses the target consumed; becomes the pause
    /// cursor (consumed pauses count as fired, effects applied/reverted
    /// atomically)
    pub pauses_consumed: usize,
    /// Set when the target lands inside a pause window: that pause must
    /// be re-entered with this much of its window left
    pub partial: Option<PartialPause>,
}

/// A pause window the seek target landed inside of.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartialPause {
    pub pause_index: usize,
    pub remaining: f64,
}

/// Whole-playlist result of a virtual seek.
#[derive(Debug, Clone, PartialEq)]
pub enum SeekPlan {
    /// Target falls inside the clip at `index`
    Within { index: usize, clip: ClipSeek },
    /// Target reaches a clip whose duration is still unknown; jump there
    /// and re-apply `offset` once metadata resolves
    Pending { index: usize, offset: f64 },
    /// Target lies beyond the last clip
    PastEnd,
}

/// Convert a wall-clock offset within one clip to an engine position.
///
/// Walks the clip's pauses in order. A pause fully covered by the offset
/// subtracts its whole duration; a pause whose window contains the offset
/// clamps the engine position to the pause's start and reports the
/// remaining window.
pub fn locate_in_clip(entry: &PlaylistEntry, clip_offset: f64) -> ClipSeek {
    let mut remaining = clip_offset;
    let mut consumed = 0;

    for (index, pause) in entry.pauses.iter().enumerate() {
        let EventTime::At(start) = pause.time else {
            break; // end sentinels sort last and have no window here
        };
        if start > remaining {
            break;
        }
        let covered = remaining - start;
        if covered >= pause.duration {
            remaining -= pause.duration;
            consumed = index + 1;
        } else {
            return ClipSeek {
                engine_position: start,
                pauses_consumed: index + 1,
                partial: Some(PartialPause {
                    pause_index: index,
                    remaining: start + pause.duration - remaining,
                }),
            };
        }
    }

    ClipSeek {
        engine_position: remaining,
        pauses_consumed: consumed,
        partial: None,
    }
}

/// Map a whole-playlist virtual time to a clip and in-clip seek.
pub fn locate(playlist: &Playlist, virtual_target: f64) -> SeekPlan {
    let mut remainder = virtual_target.max(0.0);

    for (index, entry) in playlist.entries.iter().enumerate() {
        match entry.duration_index() {
            None => return SeekPlan::Pending { index, offset: remainder },
            Some(length) => {
                if remainder < length {
                    return SeekPlan::Within {
                        index,
                        clip: locate_in_clip(entry, remainder),
                    };
                }
                remainder -= length;
            }
        }
    }

    SeekPlan::PastEnd
}

/// Virtual time contributed by all clips before `index`. `None` while any
/// of them has an unknown duration.
pub fn prior_virtual(playlist: &Playlist, index: usize) -> Option<f64> {
    playlist
        .entries
        .iter()
        .take(index)
        .map(PlaylistEntry::duration_index)
        .sum::<Option<f64>>()
}

/// Pause time already spent in the current clip: full durations for every
/// fired pause, except the still-active one (if any) which contributes
/// only its elapsed share.
pub fn fired_pause_time(
    entry: &PlaylistEntry,
    pause_cursor: usize,
    active: Option<(usize, f64)>,
) -> f64 {
    let mut total: f64 = entry
        .pauses
        .iter()
        .take(pause_cursor)
        .map(|p| p.duration)
        .sum();

    if let Some((active_index, elapsed)) = active {
        if let Some(pause) = entry.pauses.get(active_index) {
            total -= pause.duration - elapsed.min(pause.duration);
        }
    }
    total
}

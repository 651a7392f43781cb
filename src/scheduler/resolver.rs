//! Event Resolver: what fires next, and when.
//!
//! Given the cursor state, computes the earliest upcoming numeric event
//! time across the action and pause lists. `None` means both lists are
//! exhausted (or only end sentinels remain) — there is deliberately no
//! infinity sentinel. End-sentinel events are resolved on the engine's
//! end-of-clip signal, never through this path.

use crate::playlist::{EventTime, PlaylistEntry};
use crate::scheduler::cursor::ClipCursor;

/// Earliest un-fired numeric event time for the clip, or `None` when
/// nothing timed remains ahead of the cursor.
pub fn next_wake(entry: &PlaylistEntry, cursor: &ClipCursor) -> Option<f64> {
    let action = first_timed(entry.actions.get(cursor.action_index).map(|a| a.time));
    let pause = first_timed(entry.pauses.get(cursor.pause_index).map(|p| p.time));

    match (action, pause) {
        (Some(a), Some(p)) => Some(a.min(p)),
        (Some(a), None) => Some(a),
        (None, Some(p)) => Some(p),
        (None, None) => None,
    }
}

/// Whether a wake time has already been reached at `position`, meaning
/// the due events execute synchronously instead of arming a timer.
pub fn is_due(wake: f64, position: f64) -> bool {
    wake <= position
}

fn first_timed(time: Option<EventTime>) -> Option<f64> {
    time.and_then(|t| t.seconds())
}

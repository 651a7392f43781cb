//! Timeline Index: monotonic per-clip cursors over the action and pause
//! lists.
//!
//! The cursors mark "already fired". They advance *before* an event's side
//! effects run, so a re-entrant or repeated resolution at the same
//! position can never fire the same event twice. They only move backward
//! through an explicit seek recomputation, which scans forward from index
//! 0 — skipped pause effects are treated as applied-and-reverted
//! atomically, never replayed.

use crate::playlist::{EventTime, PlaylistEntry};

/// Per-clip fired-event bookkeeping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClipCursor {
    /// Next action index that has not fired
    pub action_index: usize,
    /// Next pause index that has not fired
    pub pause_index: usize,
}

impl ClipCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset both cursors for a clip (re)start.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Indices of all actions due at `position`, in list order. The
    /// cursor is advanced past each returned index immediately.
    ///
    /// End-sentinel actions never match a numeric position; they stop the
    /// scan since sentinels sort after all timed events.
    pub fn take_due_actions(&mut self, entry: &PlaylistEntry, position: f64) -> Vec<usize> {
        let mut due = Vec::new();
        while let Some(action) = entry.actions.get(self.action_index) {
            match action.time {
                EventTime::At(secs) if secs <= position => {
                    due.push(self.action_index);
                    self.action_index += 1;
                }
                _ => break,
            }
        }
        due
    }

    /// The first pause due at `position`, if any, advancing the cursor
    /// past it. Pauses are taken one at a time: the state machine holds at
    /// most one active pause, and completion re-resolves at the same
    /// timestamp to pick up stacked pauses.
    pub fn next_due_pause(&mut self, entry: &PlaylistEntry, position: f64) -> Option<usize> {
        let pause = entry.pauses.get(self.pause_index)?;
        match pause.time {
            EventTime::At(secs) if secs <= position => {
                let index = self.pause_index;
                self.pause_index += 1;
                Some(index)
            }
            _ => None,
        }
    }

    /// Indices of all remaining end-sentinel actions, in list order.
    /// Only valid on the engine's end-of-clip signal; any numeric
    /// actions still ahead of the cursor are skipped, not fired.
    pub fn take_end_actions(&mut self, entry: &PlaylistEntry) -> Vec<usize> {
        let mut due = Vec::new();
        while let Some(action) = entry.actions.get(self.action_index) {
            if action.time.is_end() {
                due.push(self.action_index);
            }
            self.action_index += 1;
        }
        due
    }

    /// The next end-sentinel pause, advancing past it (and past any
    /// skipped numeric pauses before it). End-of-clip signal only.
    pub fn next_end_pause(&mut self, entry: &PlaylistEntry) -> Option<usize> {
        while let Some(pause) = entry.pauses.get(self.pause_index) {
            let index = self.pause_index;
            self.pause_index += 1;
            if pause.time.is_end() {
                return Some(index);
            }
        }
        None
    }

    /// Recompute the action cursor for a seek to `engine_position`,
    /// scanning from the start. Actions at or before the target count as
    /// already fired.
    pub fn recompute_actions(&mut self, entry: &PlaylistEntry, engine_position: f64) {
        self.action_index = entry
            .actions
            .iter()
            .take_while(|a| matches!(a.time, EventTime::At(secs) if secs <= engine_position))
            .count();
    }

    /// Set the pause cursor from a seek plan (the position model knows
    /// how many pause windows the target consumed).
    pub fn set_pause_index(&mut self, index: usize) {
        self.pause_index = index;
    }
}

//! Pause State Machine data: the single active pause and its wall-clock
//! anchor math.
//!
//! At most one pause is active per clip. The anchor records when the
//! pause *window* began; on a partial resume (a seek landing inside the
//! window) the anchor is back-dated so elapsed-time accounting stays
//! correct even though only the remainder is actually waited out. The
//! surrounding player performs the enter/exit side effects (engine
//! suspend/resume, classes, title, timer); this module owns the state
//! and the arithmetic.

use std::time::Instant;

use crate::host::TitleHandle;

/// Why an active pause is being exited. Controls whether the engine
/// resumes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The pause window elapsed; playback resumes.
    Completed,
    /// An explicit seek or clip jump interrupted the pause; effects are
    /// reverted but the engine is left for the reposition to drive.
    Repositioned,
    /// The clip ended while pausing; nothing to resume.
    ClipEnded,
}

/// State of the one in-flight pause, if any.
#[derive(Debug, Clone)]
pub struct ActivePause {
    /// Playlist index of the owning clip
    pub entry_index: usize,
    /// Index into the clip's pause list
    pub pause_index: usize,
    /// Full window length in seconds
    pub duration: f64,
    /// When the pause window began (back-dated for partial resumes)
    pub anchor: Instant,
    /// Title shown at enter, if the pause had one
    pub title_handle: Option<TitleHandle>,
    /// Classes applied at enter, removed verbatim at exit
    pub classes_added: Vec<String>,
}

impl ActivePause {
    /// Build the state for entering a pause with `remaining` seconds left
    /// in its window (equal to `duration` except for partial resumes).
    pub fn begin(
        entry_index: usize,
        pause_index: usize,
        duration: f64,
        remaining: f64,
        now: Instant,
    ) -> Self {
        let already_elapsed = (duration - remaining).max(0.0);
        Self {
            entry_index,
            pause_index,
            duration,
            anchor: now - std::time::Duration::from_secs_f64(already_elapsed),
            title_handle: None,
            classes_added: Vec::new(),
        }
    }

    /// Wall-clock seconds of the window already spent, clamped to the
    /// window length.
    pub fn elapsed(&self, now: Instant) -> f64 {
        now.duration_since(self.anchor)
            .as_secs_f64()
            .min(self.duration)
    }

    /// Seconds left in the window.
    pub fn remaining(&self, now: Instant) -> f64 {
        self.duration - self.elapsed(now)
    }
}

/// `Idle ⇄ Pausing` container.
#[derive(Debug, Clone, Default)]
pub enum PauseState {
    #[default]
    Idle,
    Pausing(ActivePause),
}

impl PauseState {
    pub fn is_pausing(&self) -> bool {
        matches!(self, PauseState::Pausing(_))
    }

    pub fn active(&self) -> Option<&ActivePause> {
        match self {
            PauseState::Pausing(active) => Some(active),
            PauseState::Idle => None,
        }
    }

    /// Move to `Pausing`.
    pub fn enter(&mut self, active: ActivePause) {
        *self = PauseState::Pausing(active);
    }

    /// Move to `Idle`, handing the caller the pause to revert. The state
    /// is cleared before any effects run, so exit can never re-run.
    pub fn take(&mut self) -> Option<ActivePause> {
        match std::mem::replace(self, PauseState::Idle) {
            PauseState::Pausing(active) => Some(active),
            PauseState::Idle => None,
        }
    }
}

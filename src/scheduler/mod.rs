//! The player orchestrator.
//!
//! Owns the playlist, the three collaborator handles, and all scheduling
//! state. Everything runs on the host's single control thread, driven by
//! four inputs: a position change, an end-of-clip signal, a metadata
//! report, or a timer firing. No call blocks; waiting is always an armed
//! timer.
//!
//! # Submodules
//!
//! - `cursor`: monotonic fired-event indices per clip
//! - `resolver`: next-wake computation over the un-fired events
//! - `pause`: the single active pause and its wall-clock anchor math
//! - `position`: virtual ⇄ engine coordinate conversion
//! - `ring`: the look-ahead ring of media handle slots

pub(crate) mod cursor;
pub(crate) mod pause;
pub(crate) mod position;
pub(crate) mod resolver;
pub(crate) mod ring;

use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::error::PlaylistError;
use crate::events::{EventKind, Handler, PlayerEvent, Subscribers};
use crate::host::{MediaEngine, RenderSurface, SlotId, TimerHost, TimerId, TimerKind, TitleHandle};
use crate::playlist::{Action, Pause, Playlist};
use cursor::ClipCursor;
use pause::{ActivePause, ExitReason, PauseState};
use position::{ClipSeek, SeekPlan};
use ring::LookaheadRing;

/// Bookkeeping for the one live timer per kind.
///
/// Arming bumps a shared epoch; a fired [`TimerId`] is only honored if it
/// is still the stored one for its kind. Anything else is stale and gets
/// dropped before it can touch state.
#[derive(Debug, Default)]
struct TimerTable {
    epoch: u64,
    next_event: Option<TimerId>,
    pause_end: Option<TimerId>,
    title_hide: Option<TimerId>,
}

impl TimerTable {
    fn slot(&mut self, kind: TimerKind) -> &mut Option<TimerId> {
        match kind {
            TimerKind::NextEvent => &mut self.next_event,
            TimerKind::PauseEnd => &mut self.pause_end,
            TimerKind::TitleHide => &mut self.title_hide,
        }
    }

    /// Forget the live timer of `kind`, returning it for host
    /// cancellation.
    fn clear(&mut self, kind: TimerKind) -> Option<TimerId> {
        self.slot(kind).take()
    }

    /// Register a fresh timer of `kind`, returning the superseded one
    /// (to cancel) and the new id (to arm).
    fn arm(&mut self, kind: TimerKind) -> (Option<TimerId>, TimerId) {
        let old = self.clear(kind);
        self.epoch += 1;
        let id = TimerId {
            kind,
            epoch: self.epoch,
        };
        *self.slot(kind) = Some(id);
        (old, id)
    }

    /// Whether a fired id is the current one for its kind; clears it if
    /// so (a fired timer is spent).
    fn confirm(&mut self, id: TimerId) -> bool {
        let slot = self.slot(id.kind);
        if *slot == Some(id) {
            *slot = None;
            true
        } else {
            false
        }
    }

    fn any_live(&self) -> bool {
        self.next_event.is_some() || self.pause_end.is_some() || self.title_hide.is_some()
    }
}

/// Sequenced playback of a clip list with timed actions and pauses.
///
/// The host owns a `Player` and routes media-engine notifications into
/// the `on_*` methods; the player drives the engine, render surface, and
/// timer facility it was constructed with. All state changes happen
/// inside these calls — the player never runs anything on its own.
pub struct Player<E: MediaEngine, S: RenderSurface, T: TimerHost> {
    playlist: Playlist,
    engine: E,
    surface: S,
    timers: T,
    subscribers: Subscribers,

    ring: LookaheadRing,
    cursor: ClipCursor,
    pause_state: PauseState,
    timer_table: TimerTable,

    /// Transient title from an action with a `title_duration`, removed
    /// when the `TitleHide` timer fires or a newer one supersedes it
    transient_title: Option<TitleHandle>,
    /// Virtual seek target waiting on a clip's metadata
    pending_seek: Option<f64>,
    /// Last engine position observed for the active clip
    last_position: f64,
    /// In the end-of-clip sequence (end-sentinel events draining)
    ending: bool,

    user_paused: bool,
    started: bool,
    finished: bool,
}

impl<E: MediaEngine, S: RenderSurface, T: TimerHost> Player<E, S, T> {
    /// Build a player over a validated playlist, seeding the look-ahead
    /// ring and loading the first clips into their slots.
    pub fn new(
        mut playlist: Playlist,
        engine: E,
        surface: S,
        timers: T,
    ) -> Result<Self, PlaylistError> {
        playlist.validate()?;

        // Silent slots have no metadata to wait for: their duration is
        // whatever the playlist declared, or zero.
        for entry in playlist.entries.iter_mut() {
            if entry.media_ref.is_none() && entry.duration.is_none() {
                entry.duration = Some(0.0);
            }
        }

        let mut player = Self {
            playlist,
            engine,
            surface,
            timers,
            subscribers: Subscribers::new(),
            ring: LookaheadRing::new(),
            cursor: ClipCursor::new(),
            pause_state: PauseState::Idle,
            timer_table: TimerTable::default(),
            transient_title: None,
            pending_seek: None,
            last_position: 0.0,
            ending: false,
            user_paused: false,
            started: false,
            finished: false,
        };

        let loads = player.ring.fill(player.playlist.len());
        player.load_slots(&loads);
        Ok(player)
    }

    /// Register a notification handler.
    pub fn subscribe(&mut self, kind: EventKind, handler: Handler) {
        self.subscribers.subscribe(kind, handler);
    }

    /// Access the wrapped media engine (host convenience).
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Engine slot of the active clip (the host knows the mapping from
    /// its `load` calls; this is a convenience for routing).
    pub fn active_slot(&self) -> SlotId {
        self.ring.front().slot
    }

    /// Engine slot currently holding a playlist index, if it is claimed
    /// anywhere in the look-ahead ring.
    pub fn slot_of(&self, index: usize) -> Option<SlotId> {
        self.ring.slot_for(index)
    }

    /// Playlist index of the active clip, if playback is in progress.
    pub fn active_index(&self) -> Option<usize> {
        if self.started && !self.finished {
            self.ring.front().claimed
        } else {
            None
        }
    }

    // === Public transport surface ===

    /// Start playback, or resume after a user pause.
    pub fn play(&mut self) {
        if self.finished {
            return;
        }
        if !self.started {
            match self.ring.front().claimed {
                Some(_) => self.start_front(None),
                None => self.finish_all(),
            }
            return;
        }
        if self.user_paused {
            self.user_paused = false;
            let front = self.ring.front();
            if let Some(index) = front.claimed {
                if !self.pause_state.is_pausing() {
                    self.engine.play(front.slot);
                    let position = self.engine.position(front.slot);
                    self.arm_wake(position);
                }
                self.subscribers.notify(&PlayerEvent::Play { index });
            }
        }
    }

    /// Suspend playback at the current position. Does not touch
    /// pause-event state; an active pause window keeps counting down in
    /// wall-clock time.
    pub fn pause(&mut self) {
        if self.user_paused {
            return;
        }
        self.user_paused = true;
        if self.started && !self.finished {
            self.engine.pause(self.ring.front().slot);
            // The next-event timer measures engine progress, which is
            // now frozen; re-armed on resume.
            self.cancel_timer(TimerKind::NextEvent);
        }
    }

    pub fn is_paused(&self) -> bool {
        self.user_paused
    }

    /// Jump to a playlist index, restarting it from the beginning. An
    /// out-of-range index normalizes to the all-ended path.
    pub fn jump_to(&mut self, index: usize) {
        debug!(index, "jump");
        self.interrupt_active();
        self.pending_seek = None;

        if index >= self.playlist.len() {
            self.emit_ended_for_active();
            self.finish_all();
            return;
        }

        self.emit_ended_for_active();
        self.move_ring_to(index);
        self.start_front(None);
    }

    /// Seek the whole playlist to a virtual (wall-clock) position.
    ///
    /// A target inside a pause window re-enters that pause with the
    /// unspent remainder of its window. A target in a clip whose duration
    /// is unknown jumps to that clip and re-applies once metadata lands.
    pub fn set_virtual_time(&mut self, target: f64) {
        debug!(target, "seek");
        self.interrupt_active();
        self.pending_seek = None;

        match position::locate(&self.playlist, target) {
            SeekPlan::PastEnd => {
                self.emit_ended_for_active();
                self.finish_all();
            }
            SeekPlan::Pending { index, .. } => {
                self.pending_seek = Some(target);
                if self.active_index() != Some(index) {
                    self.emit_ended_for_active();
                    self.move_ring_to(index);
                    self.start_front(None);
                } else if !self.user_paused {
                    // Stay where we are until metadata resolves.
                    self.engine.play(self.ring.front().slot);
                    self.arm_wake(self.last_position);
                }
            }
            SeekPlan::Within { index, clip } => {
                if self.active_index() == Some(index) {
                    self.apply_clip_seek(index, &clip);
                } else {
                    self.emit_ended_for_active();
                    self.move_ring_to(index);
                    self.start_front(Some(clip));
                }
            }
        }
    }

    /// Current virtual position across the playlist. `None` while a
    /// prior clip's duration is unknown.
    pub fn virtual_time(&self) -> Option<f64> {
        if let Some(target) = self.pending_seek {
            return Some(target);
        }
        if self.finished {
            return self.playlist.virtual_duration();
        }
        let index = self.ring.front().claimed?;
        let prior = position::prior_virtual(&self.playlist, index)?;
        let entry = self.playlist.entry(index)?;

        let engine_position = if self.started {
            self.engine.position(self.ring.front().slot)
        } else {
            0.0
        };
        let active = self
            .pause_state
            .active()
            .map(|a| (a.pause_index, a.elapsed(Instant::now())));
        let paused_time = position::fired_pause_time(entry, self.cursor.pause_index, active);

        Some(prior + engine_position + paused_time)
    }

    /// Total wall-clock length of the playlist, pauses included. `None`
    /// while any clip's duration is unknown.
    pub fn virtual_duration(&self) -> Option<f64> {
        self.playlist.virtual_duration()
    }

    /// Raw media duration of one clip, once known.
    pub fn clip_duration(&self, index: usize) -> Option<f64> {
        self.playlist.entry(index).and_then(|e| e.duration)
    }

    // === Host-driven inputs ===

    /// The engine reported a new position for a slot (natural progress
    /// or an engine-side seek).
    pub fn on_position_changed(&mut self, slot: SlotId, position: f64) {
        if !self.started || self.finished || self.ending || slot != self.ring.front().slot {
            return;
        }
        let Some(index) = self.ring.front().claimed else {
            return;
        };

        if self.pause_state.is_pausing() {
            // Engines commonly emit one last tick while suspending; a
            // position that has not moved is not a reposition.
            if (position - self.last_position).abs() < 1e-6 {
                return;
            }
            // The engine is suspended; any movement is an external
            // reposition. Revert the pause, then recompute from scratch.
            self.exit_pause(ExitReason::Repositioned);
            self.recompute_for_engine_position(index, position);
            if !self.user_paused {
                self.engine.play(self.ring.front().slot);
            }
            self.arm_wake(position);
            return;
        }

        if position + 1e-9 < self.last_position {
            // Backward seek: cursors are recomputed by a forward scan,
            // skipped pause effects count as applied-and-reverted.
            self.recompute_for_engine_position(index, position);
            self.arm_wake(position);
        } else {
            self.resolve_at(position);
        }
    }

    /// The engine reported end-of-clip for a slot. Drains end-sentinel
    /// events (actions first, then pauses, sequentially) before the
    /// sequencer advances.
    pub fn on_ended(&mut self, slot: SlotId) {
        if !self.started || self.finished || slot != self.ring.front().slot {
            return;
        }
        let Some(index) = self.ring.front().claimed else {
            return;
        };
        debug!(index, "clip ended");

        self.cancel_timer(TimerKind::NextEvent);
        // An active pause window dies with its clip.
        self.exit_pause(ExitReason::ClipEnded);
        self.ending = true;

        let entry = self.playlist.entry(index).cloned();
        if let Some(entry) = entry {
            for action_index in self.cursor.take_end_actions(&entry) {
                let action = entry.actions[action_index].clone();
                self.run_action(index, action_index, &action);
            }
        }
        self.continue_end_sequence();
    }

    /// The engine resolved a clip's duration. First report wins; the
    /// pending virtual seek, if any, is re-applied.
    pub fn on_metadata_ready(&mut self, slot: SlotId, duration: f64) {
        let Some(index) = self.claimed_index(slot) else {
            return;
        };
        if self.playlist.set_clip_duration(index, duration) {
            debug!(index, duration, "metadata ready");
            self.subscribers
                .notify(&PlayerEvent::MetadataReady { index, duration });
        }
        if let Some(target) = self.pending_seek.take() {
            self.set_virtual_time(target);
        }
    }

    /// A timer armed through the [`TimerHost`] fired. Stale ids (armed
    /// for state that has since been superseded) are dropped unseen.
    pub fn on_timer(&mut self, id: TimerId) {
        if !self.timer_table.confirm(id) {
            warn!(?id, "dropping stale timer");
            return;
        }
        trace!(?id, "timer fired");
        match id.kind {
            TimerKind::NextEvent => {
                let position = self.engine.position(self.ring.front().slot);
                self.resolve_at(position);
            }
            TimerKind::PauseEnd => self.complete_pause(),
            TimerKind::TitleHide => {
                if let Some(handle) = self.transient_title.take() {
                    self.surface.remove_title(handle);
                }
            }
        }
    }

    /// Whether any timer is still pending (exposed for the host to
    /// decide when it can tear the player down).
    pub fn has_pending_timers(&self) -> bool {
        self.timer_table.any_live()
    }

    // === Due-event execution ===

    /// Fire everything due at `position`: the full action batch first,
    /// then the first due pause (stacked pauses re-resolve on
    /// completion). Arms the next wake-up if no pause was entered.
    fn resolve_at(&mut self, position: f64) {
        self.last_position = position;
        let Some(index) = self.ring.front().claimed else {
            return;
        };
        let Some(entry) = self.playlist.entry(index).cloned() else {
            return;
        };

        loop {
            for action_index in self.cursor.take_due_actions(&entry, position) {
                let action = entry.actions[action_index].clone();
                self.run_action(index, action_index, &action);
            }
            if let Some(pause_index) = self.cursor.next_due_pause(&entry, position) {
                let pause = entry.pauses[pause_index].clone();
                self.enter_pause(index, pause_index, &pause, pause.duration);
                return;
            }
            match resolver::next_wake(&entry, &self.cursor) {
                None => {
                    self.cancel_timer(TimerKind::NextEvent);
                    return;
                }
                Some(wake) if resolver::is_due(wake, position) => continue,
                Some(wake) => {
                    // Engine progress is frozen during a user pause; the
                    // wake-up is re-armed on resume.
                    if self.user_paused {
                        self.cancel_timer(TimerKind::NextEvent);
                    } else {
                        self.arm_timer(TimerKind::NextEvent, wake - position);
                    }
                    return;
                }
            }
        }
    }

    /// Arm (only) the next-event timer for the given engine position,
    /// without firing anything.
    fn arm_wake(&mut self, position: f64) {
        self.last_position = position;
        let Some(index) = self.ring.front().claimed else {
            return;
        };
        let Some(entry) = self.playlist.entry(index) else {
            return;
        };
        match resolver::next_wake(entry, &self.cursor) {
            None => self.cancel_timer(TimerKind::NextEvent),
            Some(wake) if resolver::is_due(wake, position) => self.resolve_at(position),
            Some(_) if self.user_paused => self.cancel_timer(TimerKind::NextEvent),
            Some(wake) => self.arm_timer(TimerKind::NextEvent, wake - position),
        }
    }

    fn run_action(&mut self, index: usize, action_index: usize, action: &Action) {
        trace!(index, action_index, "action");
        if let Some(ref title) = action.title {
            // A newer transient title supersedes the previous one.
            if let Some(old) = self.transient_title.take() {
                self.cancel_timer(TimerKind::TitleHide);
                self.surface.remove_title(old);
            }
            let handle = self.surface.show_title(title);
            if let Some(title_duration) = action.title_duration {
                self.transient_title = Some(handle);
                self.arm_timer(TimerKind::TitleHide, title_duration);
            }
        }
        if !action.class_add.is_empty() {
            self.surface.add_classes(&action.class_add);
        }
        if !action.class_remove.is_empty() {
            self.surface.remove_classes(&action.class_remove);
        }
        self.subscribers
            .notify(&PlayerEvent::Action { index, action_index });
    }

    // === Pause state machine transitions ===

    /// `Idle → Pausing`: suspend the engine, apply effects, arm the
    /// window timer for `remaining` seconds.
    fn enter_pause(&mut self, index: usize, pause_index: usize, pause: &Pause, remaining: f64) {
        debug!(index, pause_index, remaining, "pause enter");
        // The next-event wake-up measures engine progress, which stops now.
        self.cancel_timer(TimerKind::NextEvent);
        let slot = self.ring.front().slot;
        self.engine.pause(slot);

        let mut active = ActivePause::begin(index, pause_index, pause.duration, remaining, Instant::now());
        if !pause.class_add.is_empty() {
            self.surface.add_classes(&pause.class_add);
            active.classes_added = pause.class_add.clone();
        }
        if let Some(ref title) = pause.title {
            active.title_handle = Some(self.surface.show_title(title));
        }
        self.pause_state.enter(active);
        self.arm_timer(TimerKind::PauseEnd, remaining);
        self.subscribers.notify(&PlayerEvent::PauseStart {
            index,
            pause_index,
            remaining,
        });
    }

    /// `Pausing → Idle`: revert effects symmetrically. Removal always
    /// undoes exactly what entry added, plus the pause's own
    /// `class_remove`, no matter how the exit was triggered. Resumption
    /// is the caller's decision.
    fn exit_pause(&mut self, reason: ExitReason) -> Option<ActivePause> {
        let active = self.pause_state.take()?;
        debug!(
            index = active.entry_index,
            pause_index = active.pause_index,
            remaining = active.remaining(Instant::now()),
            ?reason,
            "pause exit"
        );
        self.cancel_timer(TimerKind::PauseEnd);

        if let Some(handle) = active.title_handle {
            self.surface.remove_title(handle);
        }
        let mut to_remove = active.classes_added.clone();
        if let Some(pause) = self
            .playlist
            .entry(active.entry_index)
            .and_then(|e| e.pauses.get(active.pause_index))
        {
            to_remove.extend(pause.class_remove.iter().cloned());
        }
        if !to_remove.is_empty() {
            self.surface.remove_classes(&to_remove);
        }

        self.subscribers.notify(&PlayerEvent::PauseEnd {
            index: active.entry_index,
            pause_index: active.pause_index,
        });
        Some(active)
    }

    /// The pause window elapsed. Re-resolve at the pause's own timestamp
    /// to catch stacked pauses before playback resumes.
    fn complete_pause(&mut self) {
        let Some(active) = self.exit_pause(ExitReason::Completed) else {
            return;
        };

        if self.ending {
            self.continue_end_sequence();
            return;
        }

        let index = active.entry_index;
        let Some(entry) = self.playlist.entry(index).cloned() else {
            return;
        };
        let position = entry.pauses[active.pause_index]
            .time
            .seconds()
            .unwrap_or(self.last_position);

        if let Some(pause_index) = self.cursor.next_due_pause(&entry, position) {
            let pause = entry.pauses[pause_index].clone();
            self.enter_pause(index, pause_index, &pause, pause.duration);
            return;
        }

        if !self.user_paused {
            self.engine.play(self.ring.front().slot);
        }
        self.arm_wake(position);
    }

    // === Clip sequencing ===

    /// Fire the next end-sentinel pause, or advance to the next clip
    /// when the end sequence has drained.
    fn continue_end_sequence(&mut self) {
        let Some(index) = self.ring.front().claimed else {
            return;
        };
        let Some(entry) = self.playlist.entry(index).cloned() else {
            return;
        };
        if let Some(pause_index) = self.cursor.next_end_pause(&entry) {
            let pause = entry.pauses[pause_index].clone();
            self.enter_pause(index, pause_index, &pause, pause.duration);
            return;
        }
        self.ending = false;
        self.advance_clip();
    }

    /// Leave the active clip and start the next one off the ring, or
    /// finish the playlist.
    fn advance_clip(&mut self) {
        self.emit_ended_for_active();
        let loads = self.ring.advance(self.playlist.len());
        self.load_slots(&loads);

        match self.ring.front().claimed {
            Some(_) => self.start_front(None),
            None => self.finish_all(),
        }
    }

    /// Begin playback of the ring's front clip, from the top or from a
    /// seek plan.
    fn start_front(&mut self, seek: Option<ClipSeek>) {
        let front = self.ring.front();
        let Some(index) = front.claimed else {
            self.finish_all();
            return;
        };
        debug!(index, "clip start");

        self.cursor.reset();
        self.ending = false;
        self.finished = false;
        self.started = true;
        self.subscribers.notify(&PlayerEvent::Play { index });

        match seek {
            None => {
                self.engine.seek(front.slot, 0.0);
                self.last_position = 0.0;
                if !self.user_paused {
                    self.engine.play(front.slot);
                }
                self.resolve_at(0.0);
            }
            Some(clip) => self.apply_clip_seek(index, &clip),
        }
    }

    /// Position the active clip per a seek plan: recompute cursors by
    /// forward scan, move the engine, and re-enter a pause window if the
    /// target landed inside one.
    fn apply_clip_seek(&mut self, index: usize, clip: &ClipSeek) {
        let Some(entry) = self.playlist.entry(index).cloned() else {
            return;
        };
        let slot = self.ring.front().slot;

        self.cursor.recompute_actions(&entry, clip.engine_position);
        self.cursor.set_pause_index(clip.pauses_consumed);
        self.engine.seek(slot, clip.engine_position);
        self.last_position = clip.engine_position;

        if let Some(partial) = clip.partial {
            let pause = entry.pauses[partial.pause_index].clone();
            self.enter_pause(index, partial.pause_index, &pause, partial.remaining);
            return;
        }
        if !self.user_paused {
            self.engine.play(slot);
        }
        self.arm_wake(clip.engine_position);
    }

    /// Cancel the active clip's timers and revert active-pause state
    /// before any reposition or clip change computes new state.
    fn interrupt_active(&mut self) {
        self.cancel_timer(TimerKind::NextEvent);
        self.exit_pause(ExitReason::Repositioned);
        if let Some(handle) = self.transient_title.take() {
            self.cancel_timer(TimerKind::TitleHide);
            self.surface.remove_title(handle);
        }
        self.ending = false;
    }

    fn emit_ended_for_active(&mut self) {
        if let Some(index) = self.active_index() {
            self.subscribers.notify(&PlayerEvent::Ended { index });
        }
    }

    /// Rotate the ring to a preloaded index, or discard and reseed the
    /// look-ahead from it.
    fn move_ring_to(&mut self, index: usize) {
        if !self.ring.rotate_to(index) {
            let loads = self.ring.reseed(index, self.playlist.len());
            self.load_slots(&loads);
        }
        self.finished = false;
    }

    fn finish_all(&mut self) {
        if self.finished {
            return;
        }
        debug!("playlist finished");
        self.finished = true;
        self.cancel_timer(TimerKind::NextEvent);
        self.cancel_timer(TimerKind::PauseEnd);
        self.cancel_timer(TimerKind::TitleHide);
        if self.started {
            self.engine.pause(self.ring.front().slot);
        }
        self.subscribers.notify(&PlayerEvent::AllEnded);
    }

    // === Helpers ===

    fn load_slots(&mut self, loads: &[(SlotId, usize)]) {
        for &(slot, index) in loads {
            if let Some(source) = self
                .playlist
                .entry(index)
                .and_then(|e| e.media_ref.clone())
            {
                self.engine.load(slot, &source);
            }
        }
    }

    fn claimed_index(&self, slot: SlotId) -> Option<usize> {
        self.ring.claimed_by(slot)
    }

    /// Recompute both cursors for an engine-coordinate position, scanning
    /// from the start of the clip.
    fn recompute_for_engine_position(&mut self, index: usize, position: f64) {
        let Some(entry) = self.playlist.entry(index) else {
            return;
        };
        let pauses_fired = entry
            .pauses
            .iter()
            .take_while(|p| matches!(p.time.seconds(), Some(secs) if secs <= position))
            .count();
        let entry = entry.clone();
        self.cursor.recompute_actions(&entry, position);
        self.cursor.set_pause_index(pauses_fired);
        self.last_position = position;
    }

    fn arm_timer(&mut self, kind: TimerKind, after_seconds: f64) {
        let (old, id) = self.timer_table.arm(kind);
        if let Some(old) = old {
            self.timers.cancel(old);
        }
        trace!(?id, after_seconds, "arm timer");
        self.timers.arm(after_seconds.max(0.0), id);
    }

    fn cancel_timer(&mut self, kind: TimerKind) {
        if let Some(old) = self.timer_table.clear(kind) {
            trace!(?old, "cancel timer");
            self.timers.cancel(old);
        }
    }
}

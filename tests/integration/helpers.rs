//! Mock collaborators and playlist builders shared by the integration
//! tests.
//!
//! All three mocks append to one shared call log, so tests can assert
//! cross-collaborator ordering (e.g. an action's classes are applied
//! before the coincident pause suspends the engine). Timers are recorded,
//! not scheduled; tests fire them explicitly.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use cueplay::host::{
    MediaEngine, RenderSurface, SlotId, TimerHost, TimerId, TimerKind, TitleHandle,
};
use cueplay::{Action, EventKind, EventTime, Pause, Player, PlayerEvent, Playlist, PlaylistEntry};

pub type CallLog = Rc<RefCell<Vec<String>>>;

// === Playlist builders ===

pub fn action(time: f64) -> Action {
    Action {
        time: EventTime::At(time),
        title: None,
        title_duration: None,
        class_add: Vec::new(),
        class_remove: Vec::new(),
    }
}

pub fn action_end() -> Action {
    Action {
        time: EventTime::End,
        ..action(0.0)
    }
}

pub fn action_title(time: f64, title: &str, title_duration: Option<f64>) -> Action {
    Action {
        title: Some(title.to_string()),
        title_duration,
        ..action(time)
    }
}

pub fn action_classes(time: f64, add: &[&str], remove: &[&str]) -> Action {
    Action {
        class_add: add.iter().map(|s| s.to_string()).collect(),
        class_remove: remove.iter().map(|s| s.to_string()).collect(),
        ..action(time)
    }
}

pub fn pause(time: f64, duration: f64) -> Pause {
    Pause {
        time: EventTime::At(time),
        duration,
        title: None,
        class_add: Vec::new(),
        class_remove: Vec::new(),
    }
}

pub fn pause_end(duration: f64) -> Pause {
    Pause {
        time: EventTime::End,
        ..pause(0.0, duration)
    }
}

pub fn pause_styled(time: f64, duration: f64, title: Option<&str>, add: &[&str]) -> Pause {
    Pause {
        title: title.map(|s| s.to_string()),
        class_add: add.iter().map(|s| s.to_string()).collect(),
        ..pause(time, duration)
    }
}

pub fn clip(source: &str, actions: Vec<Action>, pauses: Vec<Pause>) -> PlaylistEntry {
    PlaylistEntry {
        media_ref: Some(source.to_string()),
        duration: None,
        actions,
        pauses,
    }
}

// === Mocks ===

pub struct MockEngine {
    calls: CallLog,
    positions: Rc<RefCell<HashMap<usize, f64>>>,
}

impl MediaEngine for MockEngine {
    fn load(&mut self, slot: SlotId, source: &str) {
        self.calls
            .borrow_mut()
            .push(format!("engine.load {} {}", slot.0, source));
        self.positions.borrow_mut().insert(slot.0, 0.0);
    }

    fn play(&mut self, slot: SlotId) {
        self.calls.borrow_mut().push(format!("engine.play {}", slot.0));
    }

    fn pause(&mut self, slot: SlotId) {
        self.calls.borrow_mut().push(format!("engine.pause {}", slot.0));
    }

    fn seek(&mut self, slot: SlotId, seconds: f64) {
        self.calls
            .borrow_mut()
            .push(format!("engine.seek {} {}", slot.0, seconds));
        self.positions.borrow_mut().insert(slot.0, seconds);
    }

    fn position(&self, slot: SlotId) -> f64 {
        self.positions.borrow().get(&slot.0).copied().unwrap_or(0.0)
    }

    fn duration(&self, _slot: SlotId) -> Option<f64> {
        None // metadata flows through on_metadata_ready in these tests
    }
}

pub struct MockSurface {
    calls: CallLog,
    next_handle: u64,
    titles: Rc<RefCell<HashMap<u64, String>>>,
    classes: Rc<RefCell<Vec<String>>>,
}

impl RenderSurface for MockSurface {
    fn show_title(&mut self, content: &str) -> TitleHandle {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.calls
            .borrow_mut()
            .push(format!("surface.show_title {}", content));
        self.titles.borrow_mut().insert(handle, content.to_string());
        TitleHandle(handle)
    }

    fn remove_title(&mut self, handle: TitleHandle) {
        self.calls
            .borrow_mut()
            .push(format!("surface.remove_title {}", handle.0));
        self.titles.borrow_mut().remove(&handle.0);
    }

    fn add_classes(&mut self, names: &[String]) {
        self.calls
            .borrow_mut()
            .push(format!("surface.add_classes {}", names.join(",")));
        let mut classes = self.classes.borrow_mut();
        for name in names {
            if !classes.contains(name) {
                classes.push(name.clone());
            }
        }
    }

    fn remove_classes(&mut self, names: &[String]) {
        self.calls
            .borrow_mut()
            .push(format!("surface.remove_classes {}", names.join(",")));
        self.classes.borrow_mut().retain(|c| !names.contains(c));
    }
}

pub struct MockTimers {
    calls: CallLog,
    armed: Rc<RefCell<Vec<(f64, TimerId)>>>,
}

impl TimerHost for MockTimers {
    fn arm(&mut self, after_seconds: f64, id: TimerId) {
        self.calls
            .borrow_mut()
            .push(format!("timers.arm {:?} {}", id.kind, after_seconds));
        self.armed.borrow_mut().push((after_seconds, id));
    }

    fn cancel(&mut self, id: TimerId) {
        self.armed.borrow_mut().retain(|(_, armed)| *armed != id);
    }
}

// === Harness ===

pub struct Harness {
    pub player: Player<MockEngine, MockSurface, MockTimers>,
    pub calls: CallLog,
    pub events: Rc<RefCell<Vec<String>>>,
    pub positions: Rc<RefCell<HashMap<usize, f64>>>,
    pub armed: Rc<RefCell<Vec<(f64, TimerId)>>>,
    pub titles: Rc<RefCell<HashMap<u64, String>>>,
    pub classes: Rc<RefCell<Vec<String>>>,
}

impl Harness {
    pub fn new(playlist: Playlist) -> Self {
        let calls: CallLog = Rc::default();
        let positions = Rc::new(RefCell::new(HashMap::new()));
        let armed = Rc::new(RefCell::new(Vec::new()));
        let titles = Rc::new(RefCell::new(HashMap::new()));
        let classes = Rc::new(RefCell::new(Vec::new()));

        let engine = MockEngine {
            calls: Rc::clone(&calls),
            positions: Rc::clone(&positions),
        };
        let surface = MockSurface {
            calls: Rc::clone(&calls),
            next_handle: 0,
            titles: Rc::clone(&titles),
            classes: Rc::clone(&classes),
        };
        let timers = MockTimers {
            calls: Rc::clone(&calls),
            armed: Rc::clone(&armed),
        };

        let mut player = Player::new(playlist, engine, surface, timers).unwrap();

        let events: Rc<RefCell<Vec<String>>> = Rc::default();
        for kind in [
            EventKind::Play,
            EventKind::Action,
            EventKind::PauseStart,
            EventKind::PauseEnd,
            EventKind::Ended,
            EventKind::AllEnded,
            EventKind::MetadataReady,
        ] {
            let events = Rc::clone(&events);
            player.subscribe(
                kind,
                Box::new(move |ev| events.borrow_mut().push(format_event(ev))),
            );
        }

        Self {
            player,
            calls,
            events,
            positions,
            armed,
            titles,
            classes,
        }
    }

    /// Simulate a position notification for the active clip.
    pub fn tick(&mut self, position: f64) {
        let slot = self.player.active_slot();
        self.positions.borrow_mut().insert(slot.0, position);
        self.player.on_position_changed(slot, position);
    }

    /// Simulate the engine's end-of-clip signal for the active clip.
    pub fn ended(&mut self) {
        let slot = self.player.active_slot();
        self.player.on_ended(slot);
    }

    /// Report a clip's duration through whichever slot holds it.
    pub fn metadata(&mut self, index: usize, duration: f64) {
        let slot = self
            .player
            .slot_of(index)
            .expect("clip not claimed by any slot");
        self.player.on_metadata_ready(slot, duration);
    }

    /// Delay of the armed timer of a kind, if one is live.
    pub fn armed_delay(&self, kind: TimerKind) -> Option<f64> {
        self.armed
            .borrow()
            .iter()
            .find(|(_, id)| id.kind == kind)
            .map(|(delay, _)| *delay)
    }

    /// Fire the armed timer of a kind. Panics if none is live.
    pub fn fire(&mut self, kind: TimerKind) {
        let id = self
            .armed
            .borrow()
            .iter()
            .find(|(_, id)| id.kind == kind)
            .map(|(_, id)| *id)
            .unwrap_or_else(|| panic!("no {:?} timer armed", kind));
        self.armed.borrow_mut().retain(|(_, armed)| *armed != id);
        self.player.on_timer(id);
    }

    /// Fire a timer after moving the engine to `position` (simulating
    /// the progress made while the timer waited).
    pub fn fire_at(&mut self, kind: TimerKind, position: f64) {
        let slot = self.player.active_slot();
        self.positions.borrow_mut().insert(slot.0, position);
        self.fire(kind);
    }

    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    pub fn trace(&self) -> String {
        self.events.borrow().join("\n")
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Position of a call in the shared log (first match).
    pub fn call_index(&self, prefix: &str) -> Option<usize> {
        self.calls.borrow().iter().position(|c| c.starts_with(prefix))
    }

    pub fn call_count(&self, prefix: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }
}

pub fn format_event(ev: &PlayerEvent) -> String {
    match ev {
        PlayerEvent::Play { index } => format!("play {}", index),
        PlayerEvent::Action {
            index,
            action_index,
        } => format!("action {}/{}", index, action_index),
        PlayerEvent::PauseStart {
            index,
            pause_index,
            remaining,
        } => format!("pauseStart {}/{} remaining={}", index, pause_index, remaining),
        PlayerEvent::PauseEnd { index, pause_index } => {
            format!("pauseEnd {}/{}", index, pause_index)
        }
        PlayerEvent::Ended { index } => format!("ended {}", index),
        PlayerEvent::AllEnded => "allEnded".to_string(),
        PlayerEvent::MetadataReady { index, duration } => {
            format!("metadata {}={}", index, duration)
        }
    }
}

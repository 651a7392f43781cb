//! Player notifications and the subscriber registry.
//!
//! Emission is an explicit subscribe/notify mapping from event kind to an
//! ordered list of handlers. Handlers for one kind run in subscription
//! order; kinds never observe each other's payloads.

use std::collections::HashMap;

/// Kind discriminant for [`PlayerEvent`], used as the subscription key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A clip started (or resumed after a user pause)
    Play,
    /// A timed action fired
    Action,
    /// A pause period began
    PauseStart,
    /// A pause period completed or was interrupted
    PauseEnd,
    /// The active clip finished
    Ended,
    /// The whole playlist finished
    AllEnded,
    /// A clip's duration became known
    MetadataReady,
}

/// Notification payloads emitted by the player.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// Playback started for the clip at `index`
    Play { index: usize },
    /// The action at `action_index` of clip `index` fired
    Action { index: usize, action_index: usize },
    /// The pause at `pause_index` of clip `index` began, with
    /// `remaining` wall-clock seconds left in its window
    PauseStart {
        index: usize,
        pause_index: usize,
        remaining: f64,
    },
    /// The pause at `pause_index` of clip `index` ended
    PauseEnd { index: usize, pause_index: usize },
    /// The clip at `index` finished
    Ended { index: usize },
    /// No further clips remain
    AllEnded,
    /// The clip at `index` reported its duration
    MetadataReady { index: usize, duration: f64 },
}

impl PlayerEvent {
    /// The subscription kind this payload belongs to.
    pub fn kind(&self) -> EventKind {
        match self {
            PlayerEvent::Play { .. } => EventKind::Play,
            PlayerEvent::Action { .. } => EventKind::Action,
            PlayerEvent::PauseStart { .. } => EventKind::PauseStart,
            PlayerEvent::PauseEnd { .. } => EventKind::PauseEnd,
            PlayerEvent::Ended { .. } => EventKind::Ended,
            PlayerEvent::AllEnded => EventKind::AllEnded,
            PlayerEvent::MetadataReady { .. } => EventKind::MetadataReady,
        }
    }
}

/// Handler invoked with a borrowed event payload.
pub type Handler = Box<dyn FnMut(&PlayerEvent)>;

/// Ordered per-kind handler registry.
#[derive(Default)]
pub struct Subscribers {
    handlers: HashMap<EventKind, Vec<Handler>>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for one event kind. Handlers for a kind run in
    /// the order they were subscribed.
    pub fn subscribe(&mut self, kind: EventKind, handler: Handler) {
        self.handlers.entry(kind).or_default().push(handler);
    }

    /// Deliver an event to every handler subscribed to its kind.
    pub fn notify(&mut self, event: &PlayerEvent) {
        tracing::trace!(?event, "notify");
        if let Some(list) = self.handlers.get_mut(&event.kind()) {
            for handler in list.iter_mut() {
                handler(event);
            }
        }
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<_, _> = self
            .handlers
            .iter()
            .map(|(kind, list)| (*kind, list.len()))
            .collect();
        f.debug_struct("Subscribers").field("handlers", &counts).finish()
    }
}

//! Collaborator contracts the scheduler core drives.
//!
//! The core never talks to a real media element, DOM node, or event loop.
//! The host implements these three traits and routes notifications back
//! through the player's `on_*` methods. All slots and timers are addressed
//! by plain ids rather than captured back-references, so neither side holds
//! the other alive.

/// Stable index of a media handle slot in the look-ahead ring.
///
/// Slot ids are assigned once at player construction and reused as clips
/// rotate through; they never identify a playlist entry by themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub usize);

/// Opaque handle to a title currently shown on the render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleHandle(pub u64);

/// The responsibility a timer was armed for. At most one timer of each
/// kind is live at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Wake-up for the next due action/pause of the active clip
    NextEvent,
    /// End of the active pause window
    PauseEnd,
    /// Auto-removal of a transient title
    TitleHide,
}

/// Identity of an armed timer.
///
/// The epoch is bumped every time a timer is armed; a fired timer whose
/// epoch no longer matches the live one for its kind is stale and must
/// be dropped without touching state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerId {
    pub kind: TimerKind,
    pub epoch: u64,
}

/// Media engine contract: per-slot load/transport/position access.
///
/// Duration is allowed to be unknown at load and for arbitrarily long
/// afterwards; the host signals readiness via
/// [`Player::on_metadata_ready`](crate::Player::on_metadata_ready).
pub trait MediaEngine {
    /// Assign a source to a slot, discarding whatever it held.
    fn load(&mut self, slot: SlotId, source: &str);
    /// Begin or resume playback of a slot.
    fn play(&mut self, slot: SlotId);
    /// Suspend playback of a slot, retaining position.
    fn pause(&mut self, slot: SlotId);
    /// Reposition a slot to `seconds` of raw media time.
    fn seek(&mut self, slot: SlotId, seconds: f64);
    /// Current raw position of a slot in seconds.
    fn position(&self, slot: SlotId) -> f64;
    /// Total duration of the slot's media, once known.
    fn duration(&self, slot: SlotId) -> Option<f64>;
}

/// Render surface contract: captions and style classes.
pub trait RenderSurface {
    /// Show a caption; the returned handle removes exactly that caption.
    fn show_title(&mut self, content: &str) -> TitleHandle;
    /// Remove a previously shown caption. Unknown handles are a no-op.
    fn remove_title(&mut self, handle: TitleHandle);
    /// Add style classes to the surface.
    fn add_classes(&mut self, names: &[String]);
    /// Remove style classes from the surface. Absent names are a no-op.
    fn remove_classes(&mut self, names: &[String]);
}

/// Timer facility contract.
///
/// The host owns the clock; the core only ever asks for a wake-up and
/// receives it back via [`Player::on_timer`](crate::Player::on_timer) with
/// the same [`TimerId`]. Arming a kind implicitly supersedes any earlier
/// timer of that kind (the core also cancels explicitly).
pub trait TimerHost {
    /// Request a wake-up `after_seconds` from now, tagged with `id`.
    fn arm(&mut self, after_seconds: f64, id: TimerId);
    /// Cancel a pending wake-up. Unknown ids are a no-op.
    fn cancel(&mut self, id: TimerId);
}

//! cueplay — timed-cue scheduler for sequential media playback.
//!
//! Plays a list of media clips in order and, while each clip plays, fires
//! timestamp-triggered side effects: momentary **actions** (captions,
//! style-class toggles) and **pauses** (suspend playback for a wall-clock
//! window, run a reversible effect, resume). The crate is the scheduling
//! core only — the host supplies a media engine, a render surface, and a
//! timer facility through the traits in [`host`], and routes their
//! notifications back into the [`Player`].
//!
//! # Architecture
//!
//! - `playlist`: the clip/action/pause data model, JSON load, validation
//! - `scheduler`: the player — cursors, event resolution, the pause state
//!   machine, virtual/engine position conversion, and the look-ahead ring
//! - `events`: notification kinds and the subscribe/notify registry
//! - `host`: collaborator traits the embedding application implements
//!
//! # Usage
//!
//! ```no_run
//! use cueplay::{EventKind, Player, Playlist};
//! # use cueplay::host::{MediaEngine, RenderSurface, TimerHost, SlotId, TimerId, TitleHandle};
//! # struct Engine; struct Surface; struct Timers;
//! # impl MediaEngine for Engine {
//! #     fn load(&mut self, _: SlotId, _: &str) {}
//! #     fn play(&mut self, _: SlotId) {}
//! #     fn pause(&mut self, _: SlotId) {}
//! #     fn seek(&mut self, _: SlotId, _: f64) {}
//! #     fn position(&self, _: SlotId) -> f64 { 0.0 }
//! #     fn duration(&self, _: SlotId) -> Option<f64> { None }
//! # }
//! # impl RenderSurface for Surface {
//! #     fn show_title(&mut self, _: &str) -> TitleHandle { TitleHandle(0) }
//! #     fn remove_title(&mut self, _: TitleHandle) {}
//! #     fn add_classes(&mut self, _: &[String]) {}
//! #     fn remove_classes(&mut self, _: &[String]) {}
//! # }
//! # impl TimerHost for Timers {
//! #     fn arm(&mut self, _: f64, _: TimerId) {}
//! #     fn cancel(&mut self, _: TimerId) {}
//! # }
//!
//! let playlist = Playlist::parse("lesson.json").unwrap();
//! let mut player = Player::new(playlist, Engine, Surface, Timers).unwrap();
//! player.subscribe(EventKind::AllEnded, Box::new(|_| println!("done")));
//! player.play();
//! // ...the host forwards engine/timer notifications into player.on_*()
//! ```

pub mod error;
pub mod events;
pub mod host;
pub mod playlist;
pub mod scheduler;

pub use error::PlaylistError;
pub use events::{EventKind, Handler, PlayerEvent, Subscribers};
pub use host::{MediaEngine, RenderSurface, SlotId, TimerHost, TimerId, TimerKind, TitleHandle};
pub use playlist::{Action, EventTime, Pause, Playlist, PlaylistEntry};
pub use scheduler::Player;

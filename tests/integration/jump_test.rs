//! Clip jumps: restarts, mid-pause interrupts, out-of-range
//! normalization, and look-ahead ring behavior.

use super::helpers::*;
use cueplay::host::TimerKind;
use cueplay::Playlist;

fn two_clips() -> Playlist {
    Playlist::new(vec![
        clip("first.mp4", vec![], vec![]),
        clip("second.mp4", vec![], vec![]),
    ])
}

#[test]
fn jump_ends_active_clip_and_restarts_target() {
    let mut h = Harness::new(two_clips());
    h.player.play();

    h.player.jump_to(1);

    assert_eq!(h.events(), vec!["play 0", "ended 0", "play 1"]);
    assert_eq!(h.player.active_index(), Some(1));
    assert!(h.call_index("engine.seek 1 0").is_some());
}

#[test]
fn jump_mid_pause_reverts_effects_exactly_once() {
    let playlist = Playlist::new(vec![
        clip(
            "first.mp4",
            vec![],
            vec![pause_styled(1.0, 5.0, Some("hold"), &["dim"])],
        ),
        clip("second.mp4", vec![], vec![]),
    ]);
    let mut h = Harness::new(playlist);
    h.player.play();
    h.tick(1.0);
    assert_eq!(h.classes.borrow().as_slice(), ["dim".to_string()]);

    h.player.jump_to(1);

    // Title and classes reverted once, window timer gone.
    assert_eq!(h.call_count("surface.remove_title"), 1);
    assert!(h.classes.borrow().is_empty());
    assert_eq!(h.armed_delay(TimerKind::PauseEnd), None);
    assert_eq!(
        h.events().iter().filter(|e| *e == "pauseEnd 0/0").count(),
        1
    );

    // Jumping again has nothing left to revert.
    h.player.jump_to(0);
    assert_eq!(h.call_count("surface.remove_title"), 1);
}

#[test]
fn jump_out_of_range_finishes_once() {
    let mut h = Harness::new(two_clips());
    h.player.play();

    h.player.jump_to(99);
    h.player.jump_to(99);

    assert_eq!(
        h.events().iter().filter(|e| *e == "allEnded").count(),
        1
    );
    assert!(!h.player.has_pending_timers());
    assert_eq!(h.player.active_index(), None);
}

#[test]
fn jump_after_finish_replays() {
    let mut h = Harness::new(two_clips());
    h.player.play();
    h.player.jump_to(99);

    h.player.jump_to(0);

    assert_eq!(h.player.active_index(), Some(0));
    assert_eq!(h.events().last().unwrap(), "play 0");
}

#[test]
fn natural_exhaustion_emits_all_ended() {
    let playlist = Playlist::new(vec![clip("only.mp4", vec![], vec![])]);
    let mut h = Harness::new(playlist);
    h.player.play();

    h.ended();

    assert_eq!(h.events(), vec!["play 0", "ended 0", "allEnded"]);
}

#[test]
fn jump_to_preloaded_clip_keeps_ring_loads() {
    let playlist = Playlist::new(vec![
        clip("a.mp4", vec![], vec![]),
        clip("b.mp4", vec![], vec![]),
        clip("c.mp4", vec![], vec![]),
        clip("d.mp4", vec![], vec![]),
    ]);
    let mut h = Harness::new(playlist);
    assert_eq!(h.call_count("engine.load"), 3); // look-ahead depth
    h.player.play();

    // Clip 2 is already claimed by a slot: the ring rotates, no reload.
    h.player.jump_to(2);
    assert_eq!(h.call_count("engine.load"), 3);

    // Clip 3 is not: the ring reseeds from it.
    h.player.jump_to(3);
    assert_eq!(h.call_count("engine.load"), 4);
    assert!(h.call_index("engine.load 2 d.mp4").is_some());
}

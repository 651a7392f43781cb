//! Clip Sequencer look-ahead ring.
//!
//! A fixed ring of media handle slots. Slot ids are stable arena indices
//! handed to the media engine once at construction; playlist indices
//! rotate through them. Each slot eagerly claims the next unclaimed
//! playlist index as it frees up, so the next clips are always loading
//! while the front one plays. When the front slot has nothing to claim
//! the playlist is exhausted.

use std::collections::VecDeque;

use crate::host::SlotId;

/// Number of pre-initialized media handles (active clip + look-ahead).
pub const LOOKAHEAD_SLOTS: usize = 3;

/// One ring position: a stable engine slot and the playlist index it
/// currently holds, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingSlot {
    pub slot: SlotId,
    pub claimed: Option<usize>,
}

/// The ring itself. The front slot is the active clip.
#[derive(Debug, Clone)]
pub struct LookaheadRing {
    slots: VecDeque<RingSlot>,
    next_unclaimed: usize,
}

impl LookaheadRing {
    pub fn new() -> Self {
        Self {
            slots: (0..LOOKAHEAD_SLOTS)
                .map(|i| RingSlot {
                    slot: SlotId(i),
                    claimed: None,
                })
                .collect(),
            next_unclaimed: 0,
        }
    }

    /// The active slot.
    pub fn front(&self) -> RingSlot {
        self.slots[0]
    }

    /// Whether some slot already holds `index`.
    pub fn contains(&self, index: usize) -> bool {
        self.slots.iter().any(|s| s.claimed == Some(index))
    }

    /// The playlist index a given engine slot currently holds, if any.
    /// Look-ahead slots count; metadata can arrive before a clip plays.
    pub fn claimed_by(&self, slot: SlotId) -> Option<usize> {
        self.slots
            .iter()
            .find(|s| s.slot == slot)
            .and_then(|s| s.claimed)
    }

    /// The engine slot holding a playlist index, if it is claimed.
    pub fn slot_for(&self, index: usize) -> Option<SlotId> {
        self.slots
            .iter()
            .find(|s| s.claimed == Some(index))
            .map(|s| s.slot)
    }

    /// Claim upcoming playlist indices into every empty slot, in ring
    /// order. Returns `(slot, index)` pairs the caller must load.
    pub fn fill(&mut self, playlist_len: usize) -> Vec<(SlotId, usize)> {
        let mut loads = Vec::new();
        for slot in self.slots.iter_mut() {
            if slot.claimed.is_none() && self.next_unclaimed < playlist_len {
                slot.claimed = Some(self.next_unclaimed);
                loads.push((slot.slot, self.next_unclaimed));
                self.next_unclaimed += 1;
            }
        }
        loads
    }

    /// Release the front slot, rotate it to the back, and top the ring
    /// up. Returns the new loads; the new front may be unclaimed, which
    /// means the playlist is exhausted.
    pub fn advance(&mut self, playlist_len: usize) -> Vec<(SlotId, usize)> {
        if let Some(mut front) = self.slots.pop_front() {
            front.claimed = None;
            self.slots.push_back(front);
        }
        self.fill(playlist_len)
    }

    /// Rotate an already-claimed playlist index to the front, preserving
    /// all preload work. Returns false if no slot holds it.
    pub fn rotate_to(&mut self, index: usize) -> bool {
        let Some(pos) = self.slots.iter().position(|s| s.claimed == Some(index)) else {
            return false;
        };
        self.slots.rotate_left(pos);
        true
    }

    /// Discard all claims and restart look-ahead from `start`.
    pub fn reseed(&mut self, start: usize, playlist_len: usize) -> Vec<(SlotId, usize)> {
        for slot in self.slots.iter_mut() {
            slot.claimed = None;
        }
        self.next_unclaimed = start;
        self.fill(playlist_len)
    }
}

impl Default for LookaheadRing {
    fn default() -> Self {
        Self::new()
    }
}

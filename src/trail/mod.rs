// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the tower search.
//!
//! Every change to trailed search state records the slot it touched and the
//! value it overwrote. Backtracking rewinds the trail to an earlier length,
//! writing the old values back in reverse order. A checkpoint is just the
//! trail length at the moment it was taken.

pub mod trailed;

pub use trailed::TrailedSlots;

/// A single entry in the trail, recording one state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrailEntry {
    /// Index of the slot that changed
    slot: usize,
    /// The value the slot held before the change
    old_value: u64,
}

/// The trail of state changes since the search started.
///
/// # Memory Model
///
/// - The trail is owned by one `SearchContext` and never shared
/// - Its length is bounded by a few entries per placed layer, because
///   rewinding truncates it whenever the search backs out of a layer
#[derive(Debug, Default)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Create a new empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `slot` held `old_value` before being overwritten.
    pub(crate) fn record_change(&mut self, slot: usize, old_value: u64) {
        self.entries.push(TrailEntry { slot, old_value });
    }

    /// Undo every change recorded after `checkpoint`, restoring `slots`.
    ///
    /// A checkpoint at or beyond the current length is a no-op.
    pub fn rewind_to(&mut self, checkpoint: usize, slots: &mut [u64]) {
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                slots[entry.slot] = entry.old_value;
            }
        }
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

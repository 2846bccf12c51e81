// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trailed slots that record changes for backtracking.

use super::Trail;
use std::collections::TryReserveError;

/// A fixed bank of `u64` slots whose trailed writes can be undone.
///
/// Writes through [`TrailedSlots::set`] record the old value on the trail;
/// [`TrailedSlots::rewind_to`] restores every slot changed after a checkpoint.
/// Writes through [`TrailedSlots::overwrite`] are not recorded and are only
/// for slots the search always rewrites before reading again.
///
/// # Example
///
/// ```
/// use tower_search::trail::{Trail, TrailedSlots};
///
/// let mut trail = Trail::new();
/// let mut slots = TrailedSlots::new(2);
///
/// let checkpoint = trail.len();
/// slots.set(&mut trail, 0, 100);
/// assert_eq!(slots.get(0), 100);
///
/// slots.rewind_to(&mut trail, checkpoint);
/// assert_eq!(slots.get(0), 0); // Value restored
/// ```
#[derive(Debug, Clone)]
pub struct TrailedSlots {
    values: Vec<u64>,
}

impl TrailedSlots {
    /// Create `count` slots, all zero.
    pub fn new(count: usize) -> Self {
        Self {
            values: vec![0; count],
        }
    }

    /// Create `count` zeroed slots, reporting allocation failure instead of aborting.
    pub fn try_new(count: usize) -> Result<Self, TryReserveError> {
        let mut values = Vec::new();
        values.try_reserve_exact(count)?;
        values.resize(count, 0);
        Ok(Self { values })
    }

    /// Get the current value of a slot.
    pub fn get(&self, slot: usize) -> u64 {
        self.values[slot]
    }

    /// Set a slot, recording the old value in the trail.
    pub fn set(&mut self, trail: &mut Trail, slot: usize, new_value: u64) {
        trail.record_change(slot, self.values[slot]);
        self.values[slot] = new_value;
    }

    /// Set a slot only if it differs from its current value.
    ///
    /// Returns true if the value was changed, false if it was already correct.
    pub fn maybe_set(&mut self, trail: &mut Trail, slot: usize, new_value: u64) -> bool {
        if self.values[slot] != new_value {
            self.set(trail, slot, new_value);
            true
        } else {
            false
        }
    }

    /// Set a slot without recording the change.
    pub fn overwrite(&mut self, slot: usize, new_value: u64) {
        self.values[slot] = new_value;
    }

    /// Values of a contiguous run of slots.
    pub fn range(&self, start: usize, len: usize) -> &[u64] {
        &self.values[start..start + len]
    }

    /// Undo every trailed write made after `checkpoint`.
    pub fn rewind_to(&mut self, trail: &mut Trail, checkpoint: usize) {
        trail.rewind_to(checkpoint, &mut self.values);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

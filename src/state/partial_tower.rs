// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The tower under construction.
//!
//! Layout of the slot bank:
//!
//! ```text
//! [ blocks_used | previous_layer | layer 0 | layer 1 | ... | layer max-1 ]
//! ```
//!
//! `blocks_used` and `previous_layer` are trailed. Layer slots are written
//! directly: the slot for depth `d` is rewritten by every sibling tried at
//! that depth, and only slots below the current depth are ever read.

use crate::error::{TowerError, TowerResult};
use crate::tower::{Layer, Tower};
use crate::trail::{Trail, TrailedSlots};

const BLOCKS_USED: usize = 0;
const PREVIOUS_LAYER: usize = 1;
const FIRST_LAYER: usize = 2;

#[derive(Debug, Clone)]
pub struct PartialTower {
    slots: TrailedSlots,
    max_layers: usize,
}

impl PartialTower {
    /// Room for `max_layers` layers. Every layer holds at least one block, so
    /// the block budget is always enough.
    pub fn new(max_layers: usize) -> Self {
        Self {
            slots: TrailedSlots::new(FIRST_LAYER + max_layers),
            max_layers,
        }
    }

    /// Sum of the layers placed so far.
    pub fn blocks_used(&self) -> u64 {
        self.slots.get(BLOCKS_USED)
    }

    /// Block count of the most recently placed layer, 0 before the first.
    pub fn previous_layer(&self) -> u64 {
        self.slots.get(PREVIOUS_LAYER)
    }

    /// Like [`PartialTower::new`], but reports allocation failure as
    /// [`TowerError::ResourceExhausted`].
    pub fn try_new(max_layers: usize) -> TowerResult<Self> {
        let count = FIRST_LAYER.saturating_add(max_layers);
        let slots = TrailedSlots::try_new(count).map_err(|_| TowerError::ResourceExhausted {
            stored: 0,
            requested: count,
        })?;
        Ok(Self { slots, max_layers })
    }

    pub fn max_layers(&self) -> usize {
        self.max_layers
    }

    /// Place `layer` as the layer at `depth` (0 = bottom).
    pub fn place(&mut self, trail: &mut Trail, depth: usize, layer: Layer) {
        debug_assert!(depth < self.max_layers, "layer {} out of bounds", depth);
        let layer = layer as u64;
        let blocks_used = self.blocks_used() + layer;
        self.slots.overwrite(FIRST_LAYER + depth, layer);
        self.slots.set(trail, BLOCKS_USED, blocks_used);
        self.slots.maybe_set(trail, PREVIOUS_LAYER, layer);
    }

    /// The first `depth` layers, bottom first.
    pub fn layers(&self, depth: usize) -> Vec<Layer> {
        self.slots
            .range(FIRST_LAYER, depth)
            .iter()
            .map(|&l| l as Layer)
            .collect()
    }

    /// Snapshot the first `depth` layers as a finished tower.
    pub fn to_tower(&self, depth: usize) -> Tower {
        Tower::from_layers(&self.layers(depth))
    }

    /// Undo every placement made after `checkpoint`.
    pub fn rewind_to(&mut self, trail: &mut Trail, checkpoint: usize) {
        self.slots.rewind_to(trail, checkpoint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let tower = PartialTower::new(4);
        assert_eq!(tower.blocks_used(), 0);
        assert_eq!(tower.previous_layer(), 0);
        assert_eq!(tower.max_layers(), 4);
        assert!(tower.layers(0).is_empty());
    }

    #[test]
    fn test_try_new() {
        assert_eq!(PartialTower::try_new(6).unwrap().max_layers(), 6);
        assert!(matches!(
            PartialTower::try_new(usize::MAX),
            Err(TowerError::ResourceExhausted { .. })
        ));
    }

    #[test]
    fn test_place_and_rewind() {
        let mut trail = Trail::new();
        let mut tower = PartialTower::new(3);

        tower.place(&mut trail, 0, 1);
        let checkpoint = trail.len();
        tower.place(&mut trail, 1, 2);
        assert_eq!(tower.blocks_used(), 3);
        assert_eq!(tower.previous_layer(), 2);
        assert_eq!(tower.layers(2), vec![1, 2]);

        tower.rewind_to(&mut trail, checkpoint);
        assert_eq!(tower.blocks_used(), 1);
        assert_eq!(tower.previous_layer(), 1);

        // Sibling overwrites the same depth slot
        tower.place(&mut trail, 1, 3);
        assert_eq!(tower.to_tower(2).layers(), &[1, 3]);
        assert_eq!(tower.blocks_used(), 4);
    }

    #[test]
    fn test_equal_layer_does_not_trail_previous() {
        let mut trail = Trail::new();
        let mut tower = PartialTower::new(2);
        tower.place(&mut trail, 0, 2);
        let before = trail.len();
        tower.place(&mut trail, 1, 2);
        // Only blocks_used changed
        assert_eq!(trail.len(), before + 1);
        tower.rewind_to(&mut trail, before);
        assert_eq!(tower.blocks_used(), 2);
        assert_eq!(tower.previous_layer(), 2);
    }
}

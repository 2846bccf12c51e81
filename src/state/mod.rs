// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state (tracked on the trail).
//!
//! - `PartialTower`: the tower under construction (blocks used, previous
//!   layer, and one slot per possible layer)
//! - `Statistics`: counters updated as the search runs
//!
//! All changes that must be undone on backtrack go through the trail.

pub mod partial_tower;
pub mod statistics;

pub use partial_tower::PartialTower;
pub use statistics::{Counters, Statistics};

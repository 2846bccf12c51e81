// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Result collection store.
//!
//! Towers are appended in discovery order. The store starts at a small
//! capacity and doubles whenever it is full, so appends are amortized O(1).
//! Growth never aborts: an allocator refusal, or a configured tower limit,
//! is reported as [`TowerError::ResourceExhausted`] and the caller decides
//! what to do. Dropping the store releases every tower it holds.

use crate::error::{TowerError, TowerResult};
use crate::tower::{Tower, TowerSet};
use log::trace;

#[derive(Debug)]
pub struct TowerStore {
    towers: Vec<Tower>,
    /// Logical capacity; doubles on growth.
    capacity: usize,
    limit: Option<usize>,
}

impl TowerStore {
    /// Create a store holding up to `initial_capacity` towers before it first grows.
    ///
    /// `limit`, when given, caps the number of towers the store will ever hold.
    pub fn with_capacity(initial_capacity: usize, limit: Option<usize>) -> TowerResult<Self> {
        let capacity = match limit {
            Some(limit) => initial_capacity.min(limit),
            None => initial_capacity,
        };
        let mut towers = Vec::new();
        towers
            .try_reserve_exact(capacity)
            .map_err(|_| TowerError::ResourceExhausted {
                stored: 0,
                requested: capacity,
            })?;
        Ok(Self {
            towers,
            capacity,
            limit,
        })
    }

    /// Append a tower, growing the store first if it is full.
    pub fn push(&mut self, tower: Tower) -> TowerResult<()> {
        if self.towers.len() == self.capacity {
            self.grow()?;
        }
        self.towers.push(tower);
        Ok(())
    }

    fn grow(&mut self) -> TowerResult<()> {
        let stored = self.towers.len();
        let mut requested = self.capacity.saturating_mul(2).max(1);
        if let Some(limit) = self.limit {
            if stored >= limit {
                return Err(TowerError::ResourceExhausted { stored, requested });
            }
            requested = requested.min(limit);
        }
        self.towers
            .try_reserve_exact(requested - stored)
            .map_err(|_| TowerError::ResourceExhausted { stored, requested })?;
        trace!("tower store grew from {} to {}", self.capacity, requested);
        self.capacity = requested;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.towers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.towers.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Hand every stored tower over to the caller.
    pub fn into_tower_set(self) -> TowerSet {
        TowerSet::from_towers(self.towers)
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context for one tower enumeration.
//!
//! The SearchContext combines:
//! - the validated parameters (immutable for the whole search)
//! - the trail and the tower under construction (mutable, restored on backtrack)
//! - the result store and statistics (append-only, never rewound)
//!
//! Each enumeration builds its own context, so independent searches share nothing.

use crate::error::{TowerError, TowerResult};
use crate::state::{Counters, PartialTower, Statistics};
use crate::store::TowerStore;
use crate::tower::{Layer, TowerSet};
use crate::trail::Trail;
use crate::validation::ValidatedConfig;
use log::trace;

/// Search context passed through the engine to every predicate.
///
/// # Memory Model
///
/// ```text
/// SearchContext {
///     params: ValidatedConfig,   // Immutable
///     trail: Trail,              // Mutable, rewound by the engine
///     tower: PartialTower,       // Mutable, restored through the trail
///     store: TowerStore,         // Append-only results
///     statistics: Statistics,    // Append-only counters
/// }
/// ```
#[derive(Debug)]
pub struct SearchContext {
    /// Validated parameters
    pub params: ValidatedConfig,
    /// Trail for backtracking
    pub trail: Trail,
    /// The tower under construction
    pub tower: PartialTower,
    /// Counters updated during the search
    pub statistics: Statistics,
    store: TowerStore,
    failure: Option<TowerError>,
}

impl SearchContext {
    /// Create a context with an empty partial tower and an empty result store.
    pub fn new(params: ValidatedConfig) -> TowerResult<Self> {
        let store = TowerStore::with_capacity(params.initial_capacity, params.max_towers)?;
        let max_layers = params.block_budget as usize;
        Ok(Self {
            params,
            trail: Trail::new(),
            tower: PartialTower::try_new(max_layers)?,
            statistics: Statistics::new(),
            store,
            failure: None,
        })
    }

    /// Restore the partial tower to its state when the trail had `checkpoint` entries.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        self.tower.rewind_to(&mut self.trail, checkpoint);
    }

    /// Place `layer` at `depth` in the tower under construction.
    pub fn place_layer(&mut self, depth: usize, layer: Layer) {
        self.tower.place(&mut self.trail, depth, layer);
    }

    /// Record the first `depth` layers as a finished tower.
    pub fn emit_tower(&mut self, depth: usize) -> TowerResult<()> {
        let tower = self.tower.to_tower(depth);
        trace!("tower found: {}", tower);
        self.store.push(tower)?;
        self.statistics.increment_counter(Counters::TowersEmitted);
        Ok(())
    }

    /// Number of towers stored so far.
    pub fn towers_found(&self) -> usize {
        self.store.len()
    }

    /// Remember why the search was aborted.
    pub fn record_failure(&mut self, failure: TowerError) {
        self.failure = Some(failure);
    }

    pub fn failure(&self) -> Option<&TowerError> {
        self.failure.as_ref()
    }

    /// Hand the stored towers to the caller, or the failure that aborted the search.
    ///
    /// On failure every stored tower is dropped with the context.
    pub fn into_tower_set(self) -> TowerResult<TowerSet> {
        match self.failure {
            Some(failure) => Err(failure),
            None => Ok(self.store.into_tower_set()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TowerConfig;
    use crate::validation::validate;

    fn context(budget: i64) -> SearchContext {
        SearchContext::new(validate(&TowerConfig::new(budget)).unwrap()).unwrap()
    }

    #[test]
    fn test_search_context_new() {
        let ctx = context(5);
        assert_eq!(ctx.trail.len(), 0);
        assert_eq!(ctx.tower.max_layers(), 5);
        assert_eq!(ctx.towers_found(), 0);
        assert!(ctx.failure().is_none());
    }

    #[test]
    fn test_independent_contexts() {
        let mut ctx1 = context(3);
        let ctx2 = context(3);

        ctx1.place_layer(0, 3);
        ctx1.emit_tower(1).unwrap();

        assert_eq!(ctx1.towers_found(), 1);
        assert_eq!(ctx2.towers_found(), 0);
        assert_eq!(ctx2.tower.blocks_used(), 0);
    }

    #[test]
    fn test_rewind_restores_tower() {
        let mut ctx = context(4);
        ctx.place_layer(0, 1);
        let checkpoint = ctx.trail.len();
        ctx.place_layer(1, 3);
        assert_eq!(ctx.tower.blocks_used(), 4);

        ctx.rewind_to(checkpoint);
        assert_eq!(ctx.tower.blocks_used(), 1);
        assert_eq!(ctx.tower.previous_layer(), 1);
    }

    #[test]
    fn test_failure_discards_towers() {
        let mut ctx = context(2);
        ctx.place_layer(0, 2);
        ctx.emit_tower(1).unwrap();
        ctx.record_failure(TowerError::ResourceExhausted {
            stored: 1,
            requested: 2,
        });
        assert!(matches!(
            ctx.into_tower_set(),
            Err(TowerError::ResourceExhausted { .. })
        ));
    }

    #[test]
    fn test_into_tower_set() {
        let mut ctx = context(2);
        ctx.place_layer(0, 2);
        ctx.emit_tower(1).unwrap();
        assert_eq!(ctx.statistics.get(Counters::TowersEmitted), 1);
        let set = ctx.into_tower_set().unwrap();
        assert_eq!(set.to_vecs(), vec![vec![2]]);
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Entry points for tower enumeration.
//!
//! [`enumerate_towers`] returns the towers directly. [`towers_construction`]
//! keeps the handle-based contract: the caller passes slots for the towers
//! and their count, which are filled only on success.

use crate::config::TowerConfig;
use crate::context::SearchContext;
use crate::engine::EngineBuilder;
use crate::error::TowerResult;
use crate::predicates::{FailPredicate, LayerPredicate};
use crate::tower::TowerSet;
use crate::validation::{validate, validate_request, ValidatedConfig};
use log::debug;

/// Enumerate every tower allowed by `config`, in discovery order.
///
/// # Example
///
/// ```
/// use tower_search::{enumerate_towers, TowerConfig};
///
/// let towers = enumerate_towers(&TowerConfig::new(3).with_adjacent_equal_layers(true)).unwrap();
/// assert_eq!(towers.to_vecs(), vec![vec![1, 1, 1], vec![1, 2], vec![3]]);
/// ```
pub fn enumerate_towers(config: &TowerConfig) -> TowerResult<TowerSet> {
    let params = validate(config)?;
    search(params)
}

/// Enumerate towers into caller-provided handles.
///
/// Both handles must be present. On success `result_towers` receives the
/// towers and `result_towers_count` their number; on failure neither is
/// touched.
///
/// # Example
///
/// ```
/// use tower_search::{towers_construction, TowerError, TowerSet};
///
/// let mut towers = TowerSet::default();
/// let mut count = 0;
/// towers_construction(6, Some(&mut towers), Some(&mut count), false, false).unwrap();
/// assert_eq!(count, 4);
///
/// let err = towers_construction(-1, Some(&mut towers), Some(&mut count), false, false);
/// assert_eq!(err, Err(TowerError::InvalidBlockBudget(-1)));
/// assert_eq!(count, 4);
/// ```
pub fn towers_construction(
    block_budget: i64,
    result_towers: Option<&mut TowerSet>,
    result_towers_count: Option<&mut usize>,
    allow_partial_usage: bool,
    allow_adjacent_equal_layers: bool,
) -> TowerResult<()> {
    let config = TowerConfig::new(block_budget)
        .with_partial_usage(allow_partial_usage)
        .with_adjacent_equal_layers(allow_adjacent_equal_layers);
    let params = validate_request(&config, result_towers.is_some(), result_towers_count.is_some())?;
    let towers = search(params)?;

    if let (Some(result_towers), Some(result_towers_count)) = (result_towers, result_towers_count) {
        *result_towers_count = towers.len();
        *result_towers = towers;
    }
    Ok(())
}

fn search(params: ValidatedConfig) -> TowerResult<TowerSet> {
    debug!(
        "enumerating towers: budget={} partial={} equal={}",
        params.block_budget, params.allow_partial_usage, params.allow_adjacent_equal_layers
    );
    let mut ctx = SearchContext::new(params)?;
    let engine = EngineBuilder::new()
        .add(Box::new(LayerPredicate))
        .terminal(Box::new(FailPredicate))
        .build();

    // A program ending in FailPredicate never suspends.
    let _ = engine.search(&mut ctx);

    debug!(
        "search finished: {} towers, {}",
        ctx.towers_found(),
        ctx.statistics.summary()
    );
    ctx.into_tower_set()
}

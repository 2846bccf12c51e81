// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Configuration validator.
//!
//! Runs before any search work and allocates nothing. Output handles are
//! checked first (towers, then count), then the block budget.

use crate::config::TowerConfig;
use crate::error::{OutputHandle, TowerError, TowerResult};
use crate::tower::Layer;

/// Parameters that passed validation. The block budget fits a [`Layer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedConfig {
    pub block_budget: Layer,
    pub allow_partial_usage: bool,
    pub allow_adjacent_equal_layers: bool,
    pub initial_capacity: usize,
    pub max_towers: Option<usize>,
}

/// Check the block budget of `config`.
pub fn validate(config: &TowerConfig) -> TowerResult<ValidatedConfig> {
    let block_budget = Layer::try_from(config.block_budget)
        .map_err(|_| TowerError::InvalidBlockBudget(config.block_budget))?;
    Ok(ValidatedConfig {
        block_budget,
        allow_partial_usage: config.allow_partial_usage,
        allow_adjacent_equal_layers: config.allow_adjacent_equal_layers,
        initial_capacity: config.initial_capacity,
        max_towers: config.max_towers,
    })
}

/// Check that both output handles are present, then validate `config`.
pub fn validate_request(
    config: &TowerConfig,
    towers_present: bool,
    count_present: bool,
) -> TowerResult<ValidatedConfig> {
    if !towers_present {
        return Err(TowerError::InvalidOutputHandle(OutputHandle::Towers));
    }
    if !count_present {
        return Err(TowerError::InvalidOutputHandle(OutputHandle::Count));
    }
    validate(config)
}

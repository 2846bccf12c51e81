// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration.
//!
//! A [`TowerConfig`] carries the block budget, the two policy switches, and
//! the sizing of the result store. It is a plain value: nothing here is
//! validated until the search starts (see [`crate::validation`]).

/// Number of towers the result store holds before its first growth.
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

/// Configuration for one tower enumeration.
///
/// # Example
///
/// ```
/// use tower_search::TowerConfig;
///
/// let config = TowerConfig::new(6)
///     .with_partial_usage(true)
///     .with_adjacent_equal_layers(true);
/// assert_eq!(config.block_budget, 6);
/// assert_eq!(config.initial_capacity, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TowerConfig {
    /// Total number of blocks available. Negative values are rejected at search time.
    pub block_budget: i64,

    /// Accept towers whose layers sum to less than the budget.
    pub allow_partial_usage: bool,

    /// Allow two consecutive layers with the same block count.
    pub allow_adjacent_equal_layers: bool,

    /// Capacity of the result store before it first doubles.
    pub initial_capacity: usize,

    /// Upper bound on the number of towers the store may hold.
    ///
    /// Growing past this bound fails with
    /// [`TowerError::ResourceExhausted`](crate::TowerError::ResourceExhausted).
    /// `None` leaves the bound to the allocator.
    pub max_towers: Option<usize>,
}

impl TowerConfig {
    /// Exact-sum, strictly increasing configuration for `block_budget`.
    pub fn new(block_budget: i64) -> Self {
        Self {
            block_budget,
            ..Self::default()
        }
    }

    pub fn with_partial_usage(mut self, allow: bool) -> Self {
        self.allow_partial_usage = allow;
        self
    }

    pub fn with_adjacent_equal_layers(mut self, allow: bool) -> Self {
        self.allow_adjacent_equal_layers = allow;
        self
    }

    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn with_max_towers(mut self, max_towers: usize) -> Self {
        self.max_towers = Some(max_towers);
        self
    }
}

impl Default for TowerConfig {
    fn default() -> Self {
        Self {
            block_budget: 0,
            allow_partial_usage: false,
            allow_adjacent_equal_layers: false,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_towers: None,
        }
    }
}

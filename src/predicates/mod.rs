// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! # Organization
//!
//! - `layer`: LayerPredicate, which builds towers one layer per round
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod layer;

// Re-export main predicates for convenience
pub use layer::LayerPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. Ending a program with it
/// makes the engine explore every alternative before returning.
///
/// # Example
///
/// ```
/// use tower_search::engine::EngineBuilder;
/// use tower_search::predicates::{FailPredicate, LayerPredicate};
/// use tower_search::context::SearchContext;
/// use tower_search::validation::validate;
/// use tower_search::TowerConfig;
///
/// let params = validate(&TowerConfig::new(3)).unwrap();
/// let mut ctx = SearchContext::new(params).unwrap();
/// let engine = EngineBuilder::new()
///     .add(Box::new(LayerPredicate))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Engine will exhaust all layer choices then fail
/// let result = engine.search(&mut ctx);
/// assert!(result.is_none()); // Failed - engine consumed
/// assert_eq!(ctx.towers_found(), 2); // [1, 2] and [3]
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn retry_pred(
        &mut self,
        _ctx: &mut SearchContext,
        _round: usize,
        _choice: usize,
    ) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl TerminalPredicate for FailPredicate {}

/// Predicate that suspends execution.
///
/// Useful for inspecting intermediate states without running a full search.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn retry_pred(&mut self, _ctx: &mut SearchContext, _round: usize, _choice: usize) -> PredicateResult {
        // Suspend predicate never retries
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}

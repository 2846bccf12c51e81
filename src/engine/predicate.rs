// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicate trait for non-deterministic search.
//!
//! The search engine works by trying predicates in sequence. Each predicate
//! represents a choice point in the search space. Predicates can succeed,
//! fail, offer choices, or stop the search.
//!
//! # Example
//!
//! ```
//! use tower_search::engine::{Predicate, PredicateResult};
//! use tower_search::context::SearchContext;
//!
//! #[derive(Debug)]
//! struct SimplePredicate;
//!
//! impl Predicate for SimplePredicate {
//!     fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
//!         // Return Choices(2) to try two alternatives
//!         PredicateResult::Choices(2)
//!     }
//!
//!     fn retry_pred(&mut self, _ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
//!         if choice < 2 {
//!             PredicateResult::Success  // This choice works
//!         } else {
//!             PredicateResult::Failure  // No more options
//!         }
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Simple"
//!     }
//! }
//! ```

use crate::context::SearchContext;
use std::fmt::Debug;

/// Result of attempting a predicate.
///
/// Predicates can return:
/// - `Success`: Move to next predicate in the sequence
/// - `SuccessSamePredicate`: Stay at same predicate, increment round (one round per layer)
/// - `Failure`: Backtrack to previous predicate
/// - `Choices(n)`: Predicate has n choices to explore via retry_pred
/// - `Suspend`: Pause execution for testing/inspection
/// - `Abort`: Stop the whole search, the reason is recorded in the context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Predicate succeeded. Move to next predicate in sequence.
    Success,

    /// Predicate succeeded but stay at same predicate with next round.
    SuccessSamePredicate,

    /// Predicate has no (more) valid choices. Backtrack to previous predicate.
    Failure,

    /// Predicate has multiple choices to explore.
    /// Engine will call retry_pred(round, choice) for each choice in 0..n.
    Choices(usize),

    /// Suspend execution. Engine returns control with state preserved.
    Suspend,

    /// Stop the search for good. The engine is consumed.
    Abort,
}

/// A terminal predicate that ends a predicate program.
///
/// Terminal predicates are FAIL or SUSPEND - they never return Success.
/// [`EngineBuilder`](super::EngineBuilder) only builds engines that end with one.
pub trait TerminalPredicate: Predicate {}

/// Trait for search predicates in the non-deterministic engine.
///
/// Each predicate represents a choice point in the search. The engine
/// calls `try_pred` to attempt the predicate for the first time, and
/// `retry_pred` on backtracking to try alternative choices.
///
/// # Lifecycle
///
/// 1. Engine calls `try_pred` when first encountering the predicate
/// 2. If Success: engine advances to next predicate
/// 3. If Failure: engine backtracks to previous predicate
/// 4. If Choices(n): engine calls `retry_pred` for each choice in turn
/// 5. Repeat until Success (advance) or Failure (backtrack)
///
/// # Trail Integration
///
/// Predicates can modify `SearchContext` state. The engine automatically
/// rewinds the trail to the checkpoint of the current stack entry before
/// calling `try_pred` or `retry_pred`, so trailed state is restored on
/// backtrack.
pub trait Predicate: Debug {
    /// Try this predicate for a given round.
    ///
    /// The round starts at 0 and increments each time the predicate returns
    /// `SuccessSamePredicate`.
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult;

    /// Retry this predicate with a specific choice.
    ///
    /// Called after try_pred returns Choices(n), for each choice in 0..n.
    /// The engine will try choice 0, then on backtrack try choice 1, etc.
    ///
    /// Can return `Success`, `SuccessSamePredicate`, `Failure` or `Abort`.
    /// retry_pred cannot return Choices or Suspend (we're already in choice mode).
    ///
    /// The trail has already been rewound to the state before this choice was tried.
    #[allow(unused)]
    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        // By default, we do not allow retry. Predicates that return Choices
        // must implement this.
        panic!("{}::retry_pred should never be called", self.name());
    }

    /// Optional: Get a name for this predicate (for debugging).
    ///
    /// Default implementation returns the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

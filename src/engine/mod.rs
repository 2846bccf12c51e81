// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the trail system to provide
//! automatic state restoration on backtracking.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! Execution model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//! 7. If Abort: drop the stack and return control to caller
//!
//! The tower search is a single predicate that places one layer per round,
//! so a stack entry is pushed per layer and the stack depth is bounded by
//! the block budget.
//!
//! # Example
//!
//! ```
//! use tower_search::engine::EngineBuilder;
//! use tower_search::context::SearchContext;
//! use tower_search::predicates::{FailPredicate, SuspendPredicate};
//! use tower_search::validation::validate;
//! use tower_search::TowerConfig;
//!
//! let params = validate(&TowerConfig::new(0)).unwrap();
//! let mut ctx = SearchContext::new(params).unwrap();
//!
//! // A program that suspends immediately
//! let engine = EngineBuilder::new()
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//! assert!(engine.search(&mut ctx).is_some());
//!
//! // A program that fails immediately
//! let engine = EngineBuilder::new()
//!     .terminal(Box::new(FailPredicate))
//!     .build();
//! assert!(engine.search(&mut ctx).is_none());
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;
use log::trace;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

/// Builder for a predicate program that always ends with a terminal predicate.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

/// A builder whose program has been terminated; only `build` remains.
#[derive(Debug)]
pub struct TerminatedEngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append the terminal predicate that ends the program.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: Box<T>) -> TerminatedEngineBuilder {
        self.predicates.push(predicate);
        TerminatedEngineBuilder {
            predicates: self.predicates,
        }
    }
}

impl TerminatedEngineBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}

/// Search engine that coordinates predicate execution and backtracking.
///
/// The engine runs predicates in sequence, managing rounds, choices, and
/// backtracking automatically via the trail system.
#[derive(Debug)]
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Predicates will be tried in the order given. Prefer [`EngineBuilder`],
    /// which guarantees the sequence ends with a terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::new(),
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended - can resume by calling search() again
    /// - `None` if exhausted (backtracked past first predicate) or aborted
    ///
    /// Results are delivered via side effects on `ctx`, not by the return value.
    /// An aborted search leaves its reason in `ctx` (see [`SearchContext::failure`]).
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence is invalid (reaches the end without FAIL or SUSPEND),
    /// or if retry_pred returns Choices or Suspend.
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        if self.stack.is_empty() {
            if self.predicates.is_empty() {
                return None; // Empty is exhausted
            }
            self.try_count = 0;
            self.retry_count = 0;
            self.stack.push(StackEntry {
                predicate_index: 0,
                round: 0,
                in_choice_mode: false,
                current_choice: 0,
                num_choices: 0,
                trail_checkpoint: ctx.trail.len(),
            });
        } else {
            // Resuming after Suspend: the suspending entry is done.
            self.stack.pop();
        }

        // Main execution loop
        while let Some(entry) = self.stack.last_mut() {
            // Rewind trail to this entry's checkpoint
            ctx.rewind_to(entry.trail_checkpoint);

            if !entry.in_choice_mode {
                // Call mode: try_pred
                let pred_idx = entry.predicate_index;
                let round = entry.round;
                self.try_count += 1;
                let result = self.predicates[pred_idx].try_pred(ctx, round);

                match result {
                    PredicateResult::Success => self.push_next_predicate(ctx),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                    PredicateResult::Failure => {
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        let checkpoint = ctx.trail.len();
                        if let Some(entry) = self.stack.last_mut() {
                            entry.in_choice_mode = true;
                            entry.current_choice = 0;
                            entry.num_choices = n;
                            entry.trail_checkpoint = checkpoint;
                        }
                    }
                    PredicateResult::Suspend => {
                        return Some(self); // Suspended - can resume
                    }
                    PredicateResult::Abort => {
                        trace!("search aborted by {}", self.predicates[pred_idx].name());
                        self.stack.clear();
                        return None;
                    }
                }
            } else {
                // Check if we've exhausted all choices
                if entry.current_choice >= entry.num_choices {
                    self.stack.pop();
                    continue;
                }

                let pred_idx = entry.predicate_index;
                let round = entry.round;
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);

                match result {
                    PredicateResult::Success => self.push_next_predicate(ctx),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Abort => {
                        trace!("search aborted by {}", self.predicates[pred_idx].name());
                        self.stack.clear();
                        return None;
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!("retry_pred returned invalid result: {:?}", result);
                    }
                }
            }
        }
        None // Search exhausted (all choices failed)
    }

    /// Push a new stack entry for the next predicate in sequence.
    ///
    /// Panics if we've reached the end of the predicate sequence, as this indicates
    /// an invalid program (all valid programs must end with FAIL or SUSPEND).
    fn push_next_predicate(&mut self, ctx: &SearchContext) {
        let next_index = self.stack.last().map_or(0, |e| e.predicate_index + 1);

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack.push(StackEntry {
            predicate_index: next_index,
            round: 0,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint: ctx.trail.len(),
        });
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self, ctx: &SearchContext) {
        let (predicate_index, round) = self
            .stack
            .last()
            .map_or((0, 0), |e| (e.predicate_index, e.round + 1));

        self.stack.push(StackEntry {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint: ctx.trail.len(),
        });
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! LayerPredicate: build towers one layer per round.
//!
//! Round `r` is entered with `r` layers already placed. The predicate:
//!
//! 1. prunes the branch if the blocks used exceed the budget;
//! 2. emits the placed layers as a tower when they are acceptable
//!    (exact mode: the budget is used up; partial mode: always), never at
//!    round 0, and in exact mode stops there;
//! 3. otherwise offers one choice per candidate next layer, from the lowest
//!    value the ordering allows up to the budget.
//!
//! Each choice places its candidate and returns `SuccessSamePredicate`, so the
//! engine moves to round `r + 1`. Smaller candidates are tried first, which
//! fixes the discovery order of the result set.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::Counters;
use crate::tower::Layer;
use log::trace;

#[derive(Debug, Default)]
pub struct LayerPredicate;

impl LayerPredicate {
    /// Smallest block count allowed for the layer at `round`.
    fn lowest_candidate(ctx: &SearchContext, round: usize) -> u64 {
        let previous = ctx.tower.previous_layer();
        if round > 0 && !ctx.params.allow_adjacent_equal_layers {
            previous + 1
        } else {
            previous.max(1)
        }
    }
}

impl Predicate for LayerPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        ctx.statistics.increment_counter(Counters::NodesVisited);
        let budget = ctx.params.block_budget as u64;
        let used = ctx.tower.blocks_used();

        if used > budget {
            ctx.statistics.increment_counter(Counters::BranchesPruned);
            return PredicateResult::Failure;
        }

        if round > 0 && (ctx.params.allow_partial_usage || used == budget) {
            if let Err(failure) = ctx.emit_tower(round) {
                ctx.record_failure(failure);
                return PredicateResult::Abort;
            }
            if !ctx.params.allow_partial_usage {
                return PredicateResult::Failure;
            }
        }

        let lowest = Self::lowest_candidate(ctx, round);
        if lowest > budget {
            return PredicateResult::Failure;
        }
        PredicateResult::Choices((budget - lowest + 1) as usize)
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, round: usize, choice: usize) -> PredicateResult {
        let candidate = Self::lowest_candidate(ctx, round) + choice as u64;
        if ctx.tower.blocks_used() + candidate > ctx.params.block_budget as u64 {
            ctx.statistics.increment_counter(Counters::BranchesPruned);
            return PredicateResult::Failure;
        }
        trace!("layer {} = {}", round, candidate);
        ctx.place_layer(round, candidate as Layer);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "Layer"
    }
}

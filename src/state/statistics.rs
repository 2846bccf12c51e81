// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and are incremented by the layer
//! predicate as the search runs.

use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    /// Search nodes entered (one per partial tower, including the empty one).
    NodesVisited,
    /// Towers handed to the result store.
    TowersEmitted,
    /// Branches cut because they would overshoot the block budget.
    BranchesPruned,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// One `name=value` pair per counter, for logging.
    pub fn summary(&self) -> String {
        use strum::IntoEnumIterator;
        Counters::iter()
            .map(|c| format!("{}={}", <&'static str>::from(c), self.get(c)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        assert_eq!(stats.get(Counters::NodesVisited), 0);
        assert_eq!(stats.get(Counters::TowersEmitted), 0);
        assert_eq!(stats.get(Counters::BranchesPruned), 0);
    }

    #[test]
    fn test_increment_and_summary() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::TowersEmitted);
        stats.increment_counter(Counters::TowersEmitted);
        stats.increment_counter(Counters::NodesVisited);
        assert_eq!(stats.get(Counters::TowersEmitted), 2);
        assert_eq!(
            stats.summary(),
            "nodes_visited=1 towers_emitted=2 branches_pruned=0"
        );
    }
}

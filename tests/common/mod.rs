// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::collections::HashSet;
use tower_search::{Layer, TowerConfig, TowerSet};

/// Every combination of the two policy switches: (partial, equal).
pub const ALL_POLICIES: [(bool, bool); 4] = [(false, false), (false, true), (true, false), (true, true)];

pub fn config(budget: i64, partial: bool, equal: bool) -> TowerConfig {
    TowerConfig::new(budget)
        .with_partial_usage(partial)
        .with_adjacent_equal_layers(equal)
}

/// Plain recursive enumeration, smaller layers first, used as an oracle.
pub fn reference_towers(budget: u32, partial: bool, equal: bool) -> Vec<Vec<Layer>> {
    fn walk(
        budget: u32,
        partial: bool,
        equal: bool,
        current: &mut Vec<Layer>,
        used: u32,
        out: &mut Vec<Vec<Layer>>,
    ) {
        if !current.is_empty() {
            if used == budget || partial {
                out.push(current.clone());
            }
            if used == budget {
                return;
            }
        }
        let lowest = match current.last() {
            None => 1,
            Some(&prev) if equal => prev,
            Some(&prev) => prev + 1,
        };
        for layer in lowest..=budget - used {
            current.push(layer);
            walk(budget, partial, equal, current, used + layer, out);
            current.pop();
        }
    }

    let mut out = Vec::new();
    walk(budget, partial, equal, &mut Vec::new(), 0, &mut out);
    out
}

/// Check ordering, sum, non-emptiness and uniqueness of every tower.
pub fn assert_valid_towers(towers: &TowerSet, budget: u64, partial: bool, equal: bool) {
    let mut seen = HashSet::new();
    for tower in towers {
        assert!(!tower.is_empty(), "empty tower in result");
        assert_eq!(tower.len(), tower.layers().len());
        assert!(
            tower.is_monotone(equal),
            "tower {} violates ordering (equal allowed: {})",
            tower,
            equal
        );
        if partial {
            assert!(tower.blocks() <= budget, "tower {} exceeds budget {}", tower, budget);
        } else {
            assert_eq!(tower.blocks(), budget, "tower {} does not use budget", tower);
        }
        assert!(seen.insert(tower.layers().to_vec()), "duplicate tower {}", tower);
    }
}

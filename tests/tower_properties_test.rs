// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Properties of the enumerated tower sets.

mod common;

use common::{assert_valid_towers, config, reference_towers, ALL_POLICIES};
use tower_search::{enumerate_towers, TowerConfig};

#[test]
fn test_zero_budget_is_empty_for_all_policies() {
    for (partial, equal) in ALL_POLICIES {
        let towers = enumerate_towers(&config(0, partial, equal)).unwrap();
        assert!(towers.is_empty(), "partial={} equal={}", partial, equal);
    }
}

#[test]
fn test_budget_one_is_single_layer_for_all_policies() {
    for (partial, equal) in ALL_POLICIES {
        let towers = enumerate_towers(&config(1, partial, equal)).unwrap();
        assert_eq!(towers.to_vecs(), vec![vec![1]], "partial={} equal={}", partial, equal);
    }
}

#[test]
fn test_budget_three_exact() {
    let strict = enumerate_towers(&config(3, false, false)).unwrap();
    assert_eq!(strict.to_vecs(), vec![vec![1, 2], vec![3]]);

    let equal = enumerate_towers(&config(3, false, true)).unwrap();
    assert_eq!(equal.to_vecs(), vec![vec![1, 1, 1], vec![1, 2], vec![3]]);
}

#[test]
fn test_budget_three_partial() {
    let strict = enumerate_towers(&config(3, true, false)).unwrap();
    assert_eq!(strict.to_vecs(), vec![vec![1], vec![1, 2], vec![2], vec![3]]);

    let equal = enumerate_towers(&config(3, true, true)).unwrap();
    assert_eq!(
        equal.to_vecs(),
        vec![
            vec![1],
            vec![1, 1],
            vec![1, 1, 1],
            vec![1, 2],
            vec![2],
            vec![3]
        ]
    );
}

#[test]
fn test_budget_six_demonstrations() {
    let exact = enumerate_towers(&config(6, false, false)).unwrap();
    let lines: Vec<String> = exact.iter().map(|t| t.to_string()).collect();
    assert_eq!(lines, vec!["1 2 3", "1 5", "2 4", "6"]);

    // Non-decreasing sequences with sum at most 6: p(1) + ... + p(6)
    let partial = enumerate_towers(&config(6, true, true)).unwrap();
    assert_eq!(partial.len(), 1 + 2 + 3 + 5 + 7 + 11);
    assert_eq!(partial[0].layers(), &[1]);
    assert_eq!(partial[partial.len() - 1].layers(), &[6]);
}

#[test]
fn test_exact_counts_match_partition_numbers() {
    // p(n) and q(n) (partitions into distinct parts) for n = 1..=12
    let partitions = [1, 2, 3, 5, 7, 11, 15, 22, 30, 42, 56, 77];
    let distinct = [1, 1, 2, 2, 3, 4, 5, 6, 8, 10, 12, 15];
    for n in 1..=12usize {
        let equal = enumerate_towers(&config(n as i64, false, true)).unwrap();
        assert_eq!(equal.len(), partitions[n - 1], "p({})", n);
        let strict = enumerate_towers(&config(n as i64, false, false)).unwrap();
        assert_eq!(strict.len(), distinct[n - 1], "q({})", n);
    }
}

#[test]
fn test_matches_reference_enumeration() {
    for budget in 0..=9u32 {
        for (partial, equal) in ALL_POLICIES {
            let towers = enumerate_towers(&config(budget as i64, partial, equal)).unwrap();
            assert_eq!(
                towers.to_vecs(),
                reference_towers(budget, partial, equal),
                "budget={} partial={} equal={}",
                budget,
                partial,
                equal
            );
        }
    }
}

#[test]
fn test_invariants_hold() {
    for budget in 0..=10u32 {
        for (partial, equal) in ALL_POLICIES {
            let towers = enumerate_towers(&config(budget as i64, partial, equal)).unwrap();
            assert_valid_towers(&towers, budget as u64, partial, equal);
        }
    }
}

#[test]
fn test_idempotent() {
    for (partial, equal) in ALL_POLICIES {
        let first = enumerate_towers(&config(7, partial, equal)).unwrap();
        let second = enumerate_towers(&config(7, partial, equal)).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_initial_capacity_does_not_change_result() {
    let base = enumerate_towers(&config(8, true, true)).unwrap();
    for capacity in [0, 1, 3, 1000] {
        let towers = enumerate_towers(&config(8, true, true).with_initial_capacity(capacity)).unwrap();
        assert_eq!(towers, base, "initial capacity {}", capacity);
    }
}

#[test]
fn test_default_config_is_empty_search() {
    assert!(enumerate_towers(&TowerConfig::default()).unwrap().is_empty());
}

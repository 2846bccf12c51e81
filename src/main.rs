// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Demonstration driver: prints the towers for two fixed configurations.
//!
//! Set `RUST_LOG=debug` to see search statistics.

use std::process::ExitCode;
use tower_search::{towers_construction, TowerSet};

fn print_towers(block_budget: i64, allow_partial_usage: bool, allow_adjacent_equal_layers: bool) -> bool {
    let mut towers = TowerSet::default();
    let mut count = 0;
    match towers_construction(
        block_budget,
        Some(&mut towers),
        Some(&mut count),
        allow_partial_usage,
        allow_adjacent_equal_layers,
    ) {
        Ok(()) => {
            println!(
                "Towers configurations (partial = {}, equal = {}):",
                allow_partial_usage as u8, allow_adjacent_equal_layers as u8
            );
            for (i, tower) in towers.iter().enumerate() {
                println!("Tower {}: {}", i + 1, tower);
            }
            log::info!("{} towers listed", count);
            true
        }
        Err(err) => {
            log::error!("tower construction failed: {}", err);
            eprintln!("Error: {}", err.status_code());
            false
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let exact = print_towers(6, false, false);
    let partial = print_towers(6, true, true);

    if exact && partial {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

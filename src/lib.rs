// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of tower configurations.
//!
//! A tower is an ordered sequence of layers, each a positive number of blocks.
//! Given a block budget, the search finds every tower whose layers never
//! decrease from bottom to top (strictly increase, unless adjacent equal
//! layers are allowed) and whose blocks add up to the budget (or to at most
//! the budget, when partial usage is allowed).
//!
//! # Architecture
//!
//! - **Validation**: the budget and the output handles are checked before any search work
//! - **Search**: a backtracking [`SearchEngine`] runs the [`LayerPredicate`], which places
//!   one layer per round; the tower under construction lives in the [`SearchContext`] and
//!   is restored through the [`Trail`] on backtrack
//! - **Results**: finished towers go to a doubling [`TowerStore`], which becomes the
//!   caller-owned [`TowerSet`] when the search completes
//!
//! Growth failures in the store abort the search with
//! [`TowerError::ResourceExhausted`]; nothing is leaked and the caller's handles are
//! left untouched.
//!
//! # Example
//!
//! ```
//! use tower_search::{enumerate_towers, TowerConfig};
//!
//! let towers = enumerate_towers(&TowerConfig::new(6)).unwrap();
//! let lines: Vec<String> = towers.iter().map(|t| t.to_string()).collect();
//! assert_eq!(lines, vec!["1 2 3", "1 5", "2 4", "6"]);
//! ```
//!
//! [`LayerPredicate`]: predicates::LayerPredicate
//! [`TowerStore`]: store::TowerStore

pub mod config;
pub mod construction;
pub mod context;
pub mod engine;
pub mod error;
pub mod predicates;
pub mod state;
pub mod store;
pub mod tower;
pub mod trail;
pub mod validation;

// Re-export commonly used types
pub use config::TowerConfig;
pub use construction::{enumerate_towers, towers_construction};
pub use context::SearchContext;
pub use engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine};
pub use error::{OutputHandle, TowerError, TowerResult};
pub use tower::{Layer, Tower, TowerSet};
pub use trail::Trail;

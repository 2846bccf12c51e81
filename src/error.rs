// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for tower construction.

use strum_macros::{AsRefStr, Display};
use thiserror::Error;

/// The output handles a caller supplies to [`crate::towers_construction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum OutputHandle {
    /// Receives the towers.
    Towers,
    /// Receives the number of towers.
    Count,
}

/// Errors that can occur while constructing towers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TowerError {
    /// A required output handle was absent.
    #[error("output handle `{0}` is missing")]
    InvalidOutputHandle(OutputHandle),

    /// The block budget is negative, or too large for a layer.
    #[error("invalid block budget {0}")]
    InvalidBlockBudget(i64),

    /// The result store could not grow to hold another tower.
    #[error("result store exhausted: {stored} towers stored, could not grow to {requested}")]
    ResourceExhausted { stored: usize, requested: usize },
}

impl TowerError {
    /// Numeric status code reported by the command line driver.
    ///
    /// 0 is reserved for success and is never returned here.
    pub fn status_code(&self) -> i32 {
        match self {
            TowerError::InvalidOutputHandle(OutputHandle::Towers) => 1,
            TowerError::InvalidOutputHandle(OutputHandle::Count) => 2,
            TowerError::InvalidBlockBudget(_) => 3,
            TowerError::ResourceExhausted { .. } => 4,
        }
    }
}

pub type TowerResult<T> = std::result::Result<T, TowerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(TowerError::InvalidOutputHandle(OutputHandle::Towers).status_code(), 1);
        assert_eq!(TowerError::InvalidOutputHandle(OutputHandle::Count).status_code(), 2);
        assert_eq!(TowerError::InvalidBlockBudget(-1).status_code(), 3);
        assert_eq!(
            TowerError::ResourceExhausted { stored: 3, requested: 6 }.status_code(),
            4
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            TowerError::InvalidOutputHandle(OutputHandle::Count).to_string(),
            "output handle `count` is missing"
        );
        assert_eq!(
            TowerError::InvalidBlockBudget(-7).to_string(),
            "invalid block budget -7"
        );
        assert_eq!(OutputHandle::Towers.as_ref(), "towers");
    }
}

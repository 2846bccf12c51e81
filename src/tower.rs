// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Towers and tower sets.
//!
//! A [`Tower`] is an ordered, non-empty sequence of layers, stored together with
//! its length. A [`TowerSet`] is the caller-owned result of one enumeration, in
//! discovery order.

use std::fmt;
use std::ops::Index;

/// Number of blocks in one tier of a tower.
pub type Layer = u32;

/// One tower configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tower {
    layers: Vec<Layer>,
}

impl Tower {
    /// Build a tower from the layers placed so far, bottom first.
    pub(crate) fn from_layers(layers: &[Layer]) -> Self {
        debug_assert!(!layers.is_empty(), "a tower has at least one layer");
        Self {
            layers: layers.to_vec(),
        }
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Always false for towers produced by the search.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Total number of blocks used.
    pub fn blocks(&self) -> u64 {
        self.layers.iter().map(|&l| l as u64).sum()
    }

    /// Check the ordering constraint: non-decreasing, or strictly increasing
    /// when adjacent equal layers are not allowed.
    pub fn is_monotone(&self, allow_adjacent_equal_layers: bool) -> bool {
        self.layers.windows(2).all(|pair| {
            if allow_adjacent_equal_layers {
                pair[0] <= pair[1]
            } else {
                pair[0] < pair[1]
            }
        })
    }
}

impl fmt::Display for Tower {
    /// Layers separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", layer)?;
        }
        Ok(())
    }
}

impl From<Tower> for Vec<Layer> {
    fn from(tower: Tower) -> Self {
        tower.layers
    }
}

/// All towers found by one enumeration, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TowerSet {
    towers: Vec<Tower>,
}

impl TowerSet {
    pub(crate) fn from_towers(towers: Vec<Tower>) -> Self {
        Self { towers }
    }

    pub fn len(&self) -> usize {
        self.towers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.towers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tower> {
        self.towers.iter()
    }

    pub fn as_slice(&self) -> &[Tower] {
        &self.towers
    }

    /// Layers of every tower, for easy comparison in callers and tests.
    pub fn to_vecs(&self) -> Vec<Vec<Layer>> {
        self.towers.iter().map(|t| t.layers.clone()).collect()
    }
}

impl Index<usize> for TowerSet {
    type Output = Tower;

    fn index(&self, index: usize) -> &Tower {
        &self.towers[index]
    }
}

impl IntoIterator for TowerSet {
    type Item = Tower;
    type IntoIter = std::vec::IntoIter<Tower>;

    fn into_iter(self) -> Self::IntoIter {
        self.towers.into_iter()
    }
}

impl<'a> IntoIterator for &'a TowerSet {
    type Item = &'a Tower;
    type IntoIter = std::slice::Iter<'a, Tower>;

    fn into_iter(self) -> Self::IntoIter {
        self.towers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tower_display() {
        let tower = Tower::from_layers(&[1, 2, 3]);
        assert_eq!(tower.to_string(), "1 2 3");
        assert_eq!(Tower::from_layers(&[6]).to_string(), "6");
    }

    #[test]
    fn test_tower_len_and_blocks() {
        let tower = Tower::from_layers(&[1, 1, 4]);
        assert_eq!(tower.len(), 3);
        assert!(!tower.is_empty());
        assert_eq!(tower.blocks(), 6);
        assert_eq!(tower.layers(), &[1, 1, 4]);
    }

    #[test]
    fn test_is_monotone() {
        let equal = Tower::from_layers(&[1, 1, 2]);
        assert!(equal.is_monotone(true));
        assert!(!equal.is_monotone(false));

        let strict = Tower::from_layers(&[1, 2, 3]);
        assert!(strict.is_monotone(false));

        let descending = Tower::from_layers(&[2, 1]);
        assert!(!descending.is_monotone(true));
    }

    #[test]
    fn test_tower_set_access() {
        let set = TowerSet::from_towers(vec![
            Tower::from_layers(&[1, 2]),
            Tower::from_layers(&[3]),
        ]);
        assert_eq!(set.len(), 2);
        assert_eq!(set[1].layers(), &[3]);
        assert_eq!(set.to_vecs(), vec![vec![1, 2], vec![3]]);
        let owned: Vec<Vec<Layer>> = set.into_iter().map(Vec::from).collect();
        assert_eq!(owned, vec![vec![1, 2], vec![3]]);
    }
}

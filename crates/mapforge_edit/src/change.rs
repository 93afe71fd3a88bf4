//! A single reversible cell mutation

use mapforge_core::{LayerKind, TileGrid};

/// One cell edit: which layer, which cell, and the value before and after.
///
/// Immutable once constructed. Applying in either direction writes
/// unconditionally; there is no conflict detection against the current
/// cell state (last writer wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileChange {
    pub layer: LayerKind,
    pub index: usize,
    pub old_value: i32,
    pub new_value: i32,
}

impl TileChange {
    pub fn new(layer: LayerKind, index: usize, old_value: i32, new_value: i32) -> Self {
        Self {
            layer,
            index,
            old_value,
            new_value,
        }
    }

    /// Write the new value into the grid
    pub fn apply(&self, grid: &mut TileGrid) {
        grid.set(self.index, self.new_value);
    }

    /// Restore the previous value
    pub fn revert(&self, grid: &mut TileGrid) {
        grid.set(self.index, self.old_value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_and_revert() {
        let mut grid = TileGrid::new(4, 4);
        let idx = grid.index(1, 2);
        let change = TileChange::new(LayerKind::Background, idx, 0, 7);

        change.apply(&mut grid);
        assert_eq!(grid.get(idx), 7);

        change.revert(&mut grid);
        assert_eq!(grid.get(idx), 0);
    }

    #[test]
    fn test_last_writer_wins() {
        let mut grid = TileGrid::new(2, 2);
        grid.set(0, 99);

        // Revert ignores the current value and restores the recorded one.
        let change = TileChange::new(LayerKind::Collision, 0, 3, 5);
        change.revert(&mut grid);
        assert_eq!(grid.get(0), 3);
    }
}

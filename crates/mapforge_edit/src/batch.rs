//! A group of cell changes treated as one undoable unit

use crate::TileChange;
use mapforge_core::{LayerKind, MapError, TileMap};

/// An ordered collection of `TileChange` records for one gesture.
#[derive(Debug, Clone, Default)]
pub struct TileBatch {
    changes: Vec<TileChange>,
}

impl TileBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one cell change. A change where the old and new values are
    /// equal is discarded, so a no-op edit never pollutes history.
    pub fn record(&mut self, layer: LayerKind, index: usize, old_value: i32, new_value: i32) {
        if old_value == new_value {
            return;
        }
        self.changes
            .push(TileChange::new(layer, index, old_value, new_value));
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn changes(&self) -> &[TileChange] {
        &self.changes
    }

    /// Apply every change in insertion order
    pub fn redo(&self, map: &mut TileMap) -> Result<(), MapError> {
        for change in &self.changes {
            change.apply(map.grid_mut(change.layer)?);
        }
        Ok(())
    }

    /// Revert every change in reverse insertion order. Later changes in
    /// the batch may have overwritten the same cell; reverting forward
    /// would leave the wrong intermediate value behind.
    pub fn undo(&self, map: &mut TileMap) -> Result<(), MapError> {
        for change in self.changes.iter().rev() {
            change.revert(map.grid_mut(change.layer)?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapforge_core::EMPTY_TILE;

    fn cell(map: &TileMap, layer: LayerKind, x: u32, y: u32) -> i32 {
        let grid = map.grid(layer).unwrap();
        grid.get(grid.index(x, y))
    }

    #[test]
    fn test_noop_record_is_discarded() {
        let mut batch = TileBatch::new();
        batch.record(LayerKind::Background, 5, 3, 3);
        assert!(batch.is_empty());

        batch.record(LayerKind::Background, 5, 3, 4);
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut map = TileMap::new(4, 4, 50);
        let mut batch = TileBatch::new();
        {
            let grid = map.grid_mut(LayerKind::Background).unwrap();
            for (x, value) in [(0u32, 2), (1, 3), (2, 4)] {
                let idx = grid.index(x, 1);
                batch.record(LayerKind::Background, idx, grid.get(idx), value);
                grid.set(idx, value);
            }
        }

        batch.undo(&mut map).unwrap();
        assert_eq!(cell(&map, LayerKind::Background, 0, 1), EMPTY_TILE);
        assert_eq!(cell(&map, LayerKind::Background, 1, 1), EMPTY_TILE);
        assert_eq!(cell(&map, LayerKind::Background, 2, 1), EMPTY_TILE);

        batch.redo(&mut map).unwrap();
        assert_eq!(cell(&map, LayerKind::Background, 0, 1), 2);
        assert_eq!(cell(&map, LayerKind::Background, 1, 1), 3);
        assert_eq!(cell(&map, LayerKind::Background, 2, 1), 4);
    }

    #[test]
    fn test_undo_unwinds_same_cell_in_reverse() {
        let mut map = TileMap::new(4, 4, 50);
        let mut batch = TileBatch::new();

        // The same cell touched twice in one gesture: 0 -> 3 -> 7.
        batch.record(LayerKind::Collision, 5, 0, 3);
        batch.record(LayerKind::Collision, 5, 3, 7);
        batch.redo(&mut map).unwrap();
        assert_eq!(map.grid(LayerKind::Collision).unwrap().get(5), 7);

        // Undo must restore the original value, not the intermediate.
        batch.undo(&mut map).unwrap();
        assert_eq!(map.grid(LayerKind::Collision).unwrap().get(5), 0);
    }

    #[test]
    fn test_unknown_layer_is_surfaced() {
        let mut map = TileMap::from_layers(
            4,
            4,
            50,
            [(LayerKind::Background, vec![0; 16])].into_iter().collect(),
        )
        .unwrap();

        let mut batch = TileBatch::new();
        batch.record(LayerKind::Decoration, 0, 0, 1);
        assert_eq!(
            batch.redo(&mut map).unwrap_err(),
            MapError::UnknownLayer(LayerKind::Decoration)
        );
    }
}

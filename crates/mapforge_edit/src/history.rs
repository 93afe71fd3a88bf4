//! Undo/redo history of committed batches

use crate::TileBatch;
use mapforge_core::{MapError, TileMap};

/// Two LIFO stacks of committed batches.
///
/// History is linear: committing a fresh batch invalidates anything that
/// was undone, so the redo stack is cleared on every commit. The stacks
/// are unbounded.
#[derive(Debug, Default)]
pub struct EditHistory {
    undo_stack: Vec<TileBatch>,
    redo_stack: Vec<TileBatch>,
}

impl EditHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a finished gesture onto the undo stack. Empty batches are
    /// discarded (a click without a drag is a normal no-op gesture).
    pub fn commit(&mut self, batch: TileBatch) {
        if batch.is_empty() {
            return;
        }
        self.undo_stack.push(batch);
        self.redo_stack.clear();
    }

    /// Revert the most recent batch. No-op when there is nothing to undo.
    pub fn undo(&mut self, map: &mut TileMap) -> Result<(), MapError> {
        if let Some(batch) = self.undo_stack.pop() {
            batch.undo(map)?;
            self.redo_stack.push(batch);
        }
        Ok(())
    }

    /// Re-apply the most recently undone batch. No-op when there is
    /// nothing to redo.
    pub fn redo(&mut self, map: &mut TileMap) -> Result<(), MapError> {
        if let Some(batch) = self.redo_stack.pop() {
            batch.redo(map)?;
            self.undo_stack.push(batch);
        }
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Drop all history, e.g. when a different map is loaded
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapforge_core::LayerKind;

    fn batch_setting(map: &mut TileMap, x: u32, y: u32, value: i32) -> TileBatch {
        let grid = map.grid_mut(LayerKind::Background).unwrap();
        let idx = grid.index(x, y);
        let mut batch = TileBatch::new();
        batch.record(LayerKind::Background, idx, grid.get(idx), value);
        grid.set(idx, value);
        batch
    }

    fn cell(map: &TileMap, x: u32, y: u32) -> i32 {
        let grid = map.grid(LayerKind::Background).unwrap();
        grid.get(grid.index(x, y))
    }

    #[test]
    fn test_empty_batch_is_discarded() {
        let mut history = EditHistory::new();
        history.commit(TileBatch::new());
        assert!(!history.can_undo());
    }

    #[test]
    fn test_commit_clears_redo() {
        let mut map = TileMap::new(4, 4, 50);
        let mut history = EditHistory::new();

        let a = batch_setting(&mut map, 0, 0, 1);
        history.commit(a);
        history.undo(&mut map).unwrap();
        assert!(history.can_redo());

        // A fresh edit makes the undone batch unreachable.
        let b = batch_setting(&mut map, 1, 1, 2);
        history.commit(b);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_redo_on_empty_stacks_is_a_noop() {
        let mut map = TileMap::new(4, 4, 50);
        let mut history = EditHistory::new();
        history.undo(&mut map).unwrap();
        history.redo(&mut map).unwrap();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_then_redo_restores_edit() {
        let mut map = TileMap::new(4, 4, 50);
        let mut history = EditHistory::new();
        history.commit(batch_setting(&mut map, 2, 2, 9));

        history.undo(&mut map).unwrap();
        assert_eq!(cell(&map, 2, 2), 0);

        history.redo(&mut map).unwrap();
        assert_eq!(cell(&map, 2, 2), 9);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }
}

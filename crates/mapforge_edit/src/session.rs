//! Gesture-level editing facade driven by the UI boundary

use crate::{flood_fill, EditHistory, TileBatch};
use mapforge_core::{LayerKind, MapError, TileMap, EMPTY_TILE};

/// Translates pointer-level edits into recorded, undoable batches.
///
/// One continuous user interaction (mouse-down, drag, mouse-up) is one
/// stroke: `begin_stroke`, any number of paint/erase calls, `end_stroke`.
/// A flood fill is a complete gesture on its own and is committed
/// immediately. The session owns the history; undo and redo replay
/// committed batches against the map passed in.
#[derive(Debug)]
pub struct EditSession {
    active_layer: LayerKind,
    current: Option<TileBatch>,
    history: EditHistory,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(LayerKind::Collision)
    }
}

impl EditSession {
    pub fn new(active_layer: LayerKind) -> Self {
        Self {
            active_layer,
            current: None,
            history: EditHistory::new(),
        }
    }

    pub fn active_layer(&self) -> LayerKind {
        self.active_layer
    }

    pub fn set_active_layer(&mut self, layer: LayerKind) {
        self.active_layer = layer;
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// Open a fresh gesture batch, discarding any unfinished one
    pub fn begin_stroke(&mut self) {
        self.current = Some(TileBatch::new());
    }

    /// Commit the in-flight gesture. An all-no-op gesture (e.g. a click
    /// without a drag) leaves history untouched.
    pub fn end_stroke(&mut self) {
        if let Some(batch) = self.current.take() {
            self.history.commit(batch);
        }
    }

    /// Paint one cell on the active layer. Out-of-bounds coordinates are
    /// skipped silently; painting at the edge of the canvas is expected.
    ///
    /// Opens a stroke implicitly if none is active.
    pub fn paint_cell(&mut self, map: &mut TileMap, x: i32, y: i32, value: i32) -> Result<(), MapError> {
        let layer = self.active_layer;
        let grid = map.grid_mut(layer)?;
        if !grid.in_bounds(x, y) {
            return Ok(());
        }

        let index = grid.index(x as u32, y as u32);
        let old_value = grid.get(index);
        grid.set(index, value);

        self.current
            .get_or_insert_with(TileBatch::new)
            .record(layer, index, old_value, value);
        Ok(())
    }

    /// Erase one cell (paint it back to `EMPTY_TILE`)
    pub fn erase_cell(&mut self, map: &mut TileMap, x: i32, y: i32) -> Result<(), MapError> {
        self.paint_cell(map, x, y, EMPTY_TILE)
    }

    /// Paint a size x size square anchored at (x, y). Cells hanging off
    /// the grid are skipped per-cell.
    pub fn paint_brush(
        &mut self,
        map: &mut TileMap,
        x: i32,
        y: i32,
        size: u32,
        value: i32,
    ) -> Result<(), MapError> {
        for dy in 0..size as i32 {
            for dx in 0..size as i32 {
                self.paint_cell(map, x + dx, y + dy, value)?;
            }
        }
        Ok(())
    }

    /// Flood-fill the active layer from (x, y) with `value`, committing
    /// the result as one undoable gesture.
    ///
    /// An out-of-bounds start, or a start cell that already holds
    /// `value`, is a silent no-op.
    pub fn flood_fill(&mut self, map: &mut TileMap, x: i32, y: i32, value: i32) -> Result<(), MapError> {
        let layer = self.active_layer;
        let grid = map.grid_mut(layer)?;
        if !grid.in_bounds(x, y) {
            return Ok(());
        }
        if grid.get(grid.index(x as u32, y as u32)) == value {
            return Ok(());
        }

        let mut batch = TileBatch::new();
        flood_fill(grid, layer, (x, y), value, &mut batch);
        self.history.commit(batch);
        Ok(())
    }

    /// Revert the most recently committed gesture
    pub fn undo(&mut self, map: &mut TileMap) -> Result<(), MapError> {
        self.history.undo(map)
    }

    /// Re-apply the most recently undone gesture
    pub fn redo(&mut self, map: &mut TileMap) -> Result<(), MapError> {
        self.history.redo(map)
    }
}

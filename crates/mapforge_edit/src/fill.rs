//! Iterative 4-connected flood fill

use crate::TileBatch;
use mapforge_core::{LayerKind, TileGrid};

/// Flood-fill the 4-connected region around `start` whose cells share the
/// start cell's value, overwriting them with `replacement` and recording
/// one change per mutated cell into `batch`.
///
/// Uses an explicit stack rather than recursion so large regions cannot
/// overflow the call stack. Neighbors are pushed unconditionally and
/// filtered on pop: a popped cell is skipped unless it is in bounds and
/// still equal to the target value. Once a cell has been overwritten it
/// no longer matches the target, so revisits fall through without a
/// separate visited set.
///
/// An out-of-bounds `start` is a silent no-op. Callers must not invoke
/// the fill when the start cell already holds `replacement`; with the
/// target equal to the replacement no cell ever stops matching and the
/// loop would not terminate.
pub fn flood_fill(
    grid: &mut TileGrid,
    layer: LayerKind,
    start: (i32, i32),
    replacement: i32,
    batch: &mut TileBatch,
) {
    let (start_x, start_y) = start;
    if !grid.in_bounds(start_x, start_y) {
        return;
    }

    let target = grid.get(grid.index(start_x as u32, start_y as u32));
    debug_assert_ne!(target, replacement);

    let mut stack = vec![(start_x, start_y)];
    while let Some((x, y)) = stack.pop() {
        if !grid.in_bounds(x, y) {
            continue;
        }

        let index = grid.index(x as u32, y as u32);
        if grid.get(index) != target {
            continue;
        }

        batch.record(layer, index, target, replacement);
        grid.set(index, replacement);

        stack.push((x + 1, y));
        stack.push((x - 1, y));
        stack.push((x, y + 1));
        stack.push((x, y - 1));
    }
}

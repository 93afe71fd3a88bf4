//! Fixed-size tile grid for a single layer

use crate::{LayerKind, MapError};
use serde::{Deserialize, Serialize};

/// Tile code for an empty cell
pub const EMPTY_TILE: i32 = 0;

/// A fixed-size 2D grid of tile codes, stored row-major.
///
/// The grid is allocated once at map-init time and never resized. Cell
/// access through `get`/`set` is unchecked; callers validate coordinates
/// with `in_bounds` before converting them to an index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileGrid {
    width: u32,
    height: u32,
    tiles: Vec<i32>,
}

impl TileGrid {
    /// Create a new grid with every cell set to `EMPTY_TILE`
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            tiles: vec![EMPTY_TILE; (width * height) as usize],
        }
    }

    /// Rebuild a grid from a flat tile array (the deserialization path).
    ///
    /// `layer` only labels the error when the array length does not match
    /// `width * height`.
    pub fn from_tiles(
        width: u32,
        height: u32,
        layer: LayerKind,
        tiles: Vec<i32>,
    ) -> Result<Self, MapError> {
        let expected = (width * height) as usize;
        if tiles.len() != expected {
            return Err(MapError::LayerSizeMismatch {
                layer,
                expected,
                actual: tiles.len(),
            });
        }
        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major index of a cell. Not bounds-checked.
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    /// Whether a signed coordinate pair lands inside the grid
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    /// Read a cell by index. Panics on an out-of-range index; callers are
    /// expected to have validated coordinates already.
    pub fn get(&self, index: usize) -> i32 {
        self.tiles[index]
    }

    /// Write a cell by index. Same contract as `get`.
    pub fn set(&mut self, index: usize, value: i32) {
        self.tiles[index] = value;
    }

    /// Read-only view of the cell array, for rendering and serialization
    pub fn tiles(&self) -> &[i32] {
        &self.tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = TileGrid::new(10, 6);
        assert_eq!(grid.width(), 10);
        assert_eq!(grid.height(), 6);
        assert_eq!(grid.tiles().len(), 60);
        assert!(grid.tiles().iter().all(|&t| t == EMPTY_TILE));
    }

    #[test]
    fn test_index_is_row_major() {
        let grid = TileGrid::new(7, 4);
        for y in 0..4u32 {
            for x in 0..7u32 {
                assert_eq!(grid.index(x, y), (y * 7 + x) as usize);
            }
        }
    }

    #[test]
    fn test_in_bounds_edges() {
        let grid = TileGrid::new(5, 3);
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(4, 2));
        assert!(!grid.in_bounds(5, 2));
        assert!(!grid.in_bounds(4, 3));
        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(0, -1));
    }

    #[test]
    fn test_get_set() {
        let mut grid = TileGrid::new(4, 4);
        let idx = grid.index(2, 1);
        assert_eq!(grid.get(idx), EMPTY_TILE);
        grid.set(idx, 9);
        assert_eq!(grid.get(idx), 9);
    }

    #[test]
    fn test_from_tiles_validates_length() {
        let ok = TileGrid::from_tiles(3, 2, LayerKind::Background, vec![0; 6]);
        assert!(ok.is_ok());

        let err = TileGrid::from_tiles(3, 2, LayerKind::Background, vec![0; 5]);
        assert!(matches!(
            err,
            Err(MapError::LayerSizeMismatch {
                expected: 6,
                actual: 5,
                ..
            })
        ));
    }
}

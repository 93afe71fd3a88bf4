//! Core data structures for mapforge
//!
//! This crate provides the fundamental types for representing multi-layer
//! tile maps:
//! - `TileGrid` - A fixed-size grid of tile codes for one layer
//! - `LayerKind` - The named layers every map carries
//! - `TileMap` - A complete map: one grid per layer plus spawns/placements
//! - `PlayerSpawn` / `EnemySpawn` / placements - Entities pinned to cells
//! - `validate_map` - Consistency checks before a map is handed to the game

mod grid;
mod layer;
mod map;
mod spawn;
mod validate;

pub use grid::{TileGrid, EMPTY_TILE};
pub use layer::LayerKind;
pub use map::{MapError, TileMap};
pub use spawn::{EnemySpawn, GridPos, InteractablePlacement, PlayerSpawn, TrapPlacement};
pub use validate::{validate_map, ValidationReport};

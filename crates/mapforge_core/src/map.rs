//! A complete map: one grid per layer plus spawns and placements

use crate::{
    EnemySpawn, GridPos, InteractablePlacement, LayerKind, PlayerSpawn, TileGrid, TrapPlacement,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

/// Errors from map construction and layer lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// The requested layer was never initialized for this map. This is a
    /// programming error in the caller, not a recoverable condition.
    #[error("layer {0:?} has not been initialized")]
    UnknownLayer(LayerKind),
    #[error("layer {layer:?} has {actual} tiles, expected {expected}")]
    LayerSizeMismatch {
        layer: LayerKind,
        expected: usize,
        actual: usize,
    },
}

/// A level instance: per-layer tile grids plus the entities placed on them.
///
/// Every layer grid shares the map's width and height. `tile_size` is the
/// display size in pixels and has no effect on grid arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileMap {
    width: u32,
    height: u32,
    tile_size: u32,
    layers: HashMap<LayerKind, TileGrid>,
    pub player_spawn: Option<PlayerSpawn>,
    pub enemy_spawns: Vec<EnemySpawn>,
    pub interactables: Vec<InteractablePlacement>,
    pub traps: Vec<TrapPlacement>,
}

impl TileMap {
    /// Create a new map with one empty grid per layer kind
    pub fn new(width: u32, height: u32, tile_size: u32) -> Self {
        let layers = LayerKind::ALL
            .iter()
            .map(|&kind| (kind, TileGrid::new(width, height)))
            .collect();
        Self {
            width,
            height,
            tile_size,
            layers,
            player_spawn: None,
            enemy_spawns: Vec::new(),
            interactables: Vec::new(),
            traps: Vec::new(),
        }
    }

    /// Rebuild a map from persisted layer data.
    ///
    /// Layers absent from `layers` stay uninitialized and fail later
    /// `grid` lookups; every supplied array must match `width * height`.
    pub fn from_layers(
        width: u32,
        height: u32,
        tile_size: u32,
        layers: HashMap<LayerKind, Vec<i32>>,
    ) -> Result<Self, MapError> {
        let mut grids = HashMap::new();
        for (kind, tiles) in layers {
            grids.insert(kind, TileGrid::from_tiles(width, height, kind, tiles)?);
        }
        Ok(Self {
            width,
            height,
            tile_size,
            layers: grids,
            player_spawn: None,
            enemy_spawns: Vec::new(),
            interactables: Vec::new(),
            traps: Vec::new(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Grid for one layer
    pub fn grid(&self, kind: LayerKind) -> Result<&TileGrid, MapError> {
        self.layers.get(&kind).ok_or(MapError::UnknownLayer(kind))
    }

    /// Mutable grid for one layer
    pub fn grid_mut(&mut self, kind: LayerKind) -> Result<&mut TileGrid, MapError> {
        self.layers
            .get_mut(&kind)
            .ok_or(MapError::UnknownLayer(kind))
    }

    /// Find an enemy spawn by cell position
    pub fn enemy_spawn_at(&self, position: GridPos) -> Option<&EnemySpawn> {
        self.enemy_spawns.iter().find(|s| s.position == position)
    }

    /// Remove an enemy spawn by id
    pub fn remove_enemy_spawn(&mut self, id: Uuid) -> Option<EnemySpawn> {
        self.enemy_spawns
            .iter()
            .position(|s| s.id == id)
            .map(|pos| self.enemy_spawns.remove(pos))
    }

    /// Find an interactable by cell position
    pub fn interactable_at(&self, position: GridPos) -> Option<&InteractablePlacement> {
        self.interactables.iter().find(|i| i.position == position)
    }

    /// Remove an interactable by id
    pub fn remove_interactable(&mut self, id: Uuid) -> Option<InteractablePlacement> {
        self.interactables
            .iter()
            .position(|i| i.id == id)
            .map(|pos| self.interactables.remove(pos))
    }

    /// Find a trap by cell position
    pub fn trap_at(&self, position: GridPos) -> Option<&TrapPlacement> {
        self.traps.iter().find(|t| t.position == position)
    }

    /// Remove a trap by id
    pub fn remove_trap(&mut self, id: Uuid) -> Option<TrapPlacement> {
        self.traps
            .iter()
            .position(|t| t.id == id)
            .map(|pos| self.traps.remove(pos))
    }
}

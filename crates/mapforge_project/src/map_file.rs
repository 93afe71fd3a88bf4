//! Map documents under `Assets/Maps`

use crate::{read_json, write_json, ProjectError, ProjectPaths};
use mapforge_core::{
    EnemySpawn, GridPos, InteractablePlacement, LayerKind, PlayerSpawn, TileMap, TrapPlacement,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::info;

/// Map id created on first run so the editor always has something to open
pub const DEFAULT_MAP_ID: &str = "Map_Default";

const DEFAULT_WIDTH: u32 = 50;
const DEFAULT_HEIGHT: u32 = 30;
const DEFAULT_TILE_SIZE: u32 = 50;

/// A spawn or placement as persisted: a cell position plus the id of the
/// definition it references
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpawnData {
    pub x: i32,
    pub y: i32,
    pub definition_id: String,
}

/// The on-disk shape of one map document.
///
/// All collections default to empty and a missing `PlayerSpawn` means
/// "no spawn", so sparse documents from older builds deserialize cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MapData {
    pub width: u32,
    pub height: u32,
    pub tile_size: u32,
    #[serde(default)]
    pub layers: HashMap<LayerKind, Vec<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_spawn: Option<SpawnData>,
    #[serde(default)]
    pub enemy_spawns: Vec<SpawnData>,
    #[serde(default)]
    pub interactables: Vec<SpawnData>,
    #[serde(default)]
    pub traps: Vec<SpawnData>,
}

impl MapData {
    /// Snapshot a map for writing
    pub fn from_map(map: &TileMap) -> Self {
        let layers = LayerKind::ALL
            .into_iter()
            .filter_map(|kind| map.grid(kind).ok().map(|g| (kind, g.tiles().to_vec())))
            .collect();
        Self {
            width: map.width(),
            height: map.height(),
            tile_size: map.tile_size(),
            layers,
            player_spawn: map.player_spawn.as_ref().map(|s| SpawnData {
                x: s.position.x,
                y: s.position.y,
                definition_id: s.definition_id.clone(),
            }),
            enemy_spawns: map
                .enemy_spawns
                .iter()
                .map(|s| SpawnData {
                    x: s.position.x,
                    y: s.position.y,
                    definition_id: s.definition_id.clone(),
                })
                .collect(),
            interactables: map
                .interactables
                .iter()
                .map(|i| SpawnData {
                    x: i.position.x,
                    y: i.position.y,
                    definition_id: i.definition_id.clone(),
                })
                .collect(),
            traps: map
                .traps
                .iter()
                .map(|t| SpawnData {
                    x: t.position.x,
                    y: t.position.y,
                    definition_id: t.definition_id.clone(),
                })
                .collect(),
        }
    }

    /// Rebuild the live map, validating every layer's tile count
    pub fn into_map(self) -> Result<TileMap, ProjectError> {
        let mut map = TileMap::from_layers(self.width, self.height, self.tile_size, self.layers)?;

        map.player_spawn = self.player_spawn.map(|s| PlayerSpawn {
            position: GridPos::new(s.x, s.y),
            definition_id: s.definition_id,
        });
        map.enemy_spawns = self
            .enemy_spawns
            .into_iter()
            .map(|s| EnemySpawn::new(GridPos::new(s.x, s.y), s.definition_id))
            .collect();
        map.interactables = self
            .interactables
            .into_iter()
            .map(|i| InteractablePlacement::new(GridPos::new(i.x, i.y), i.definition_id))
            .collect();
        map.traps = self
            .traps
            .into_iter()
            .map(|t| TrapPlacement::new(GridPos::new(t.x, t.y), t.definition_id))
            .collect();

        Ok(map)
    }
}

/// Saves and loads map documents by map id
#[derive(Debug, Clone)]
pub struct MapStore {
    paths: ProjectPaths,
}

impl MapStore {
    pub fn new(paths: ProjectPaths) -> Self {
        Self { paths }
    }

    pub fn map_path(&self, map_id: &str) -> PathBuf {
        self.paths.maps_dir().join(format!("{map_id}.json"))
    }

    pub fn exists(&self, map_id: &str) -> bool {
        self.map_path(map_id).exists()
    }

    pub fn save(&self, map_id: &str, map: &TileMap) -> Result<(), ProjectError> {
        write_json(&self.map_path(map_id), &MapData::from_map(map))?;
        info!(map_id, "map saved");
        Ok(())
    }

    /// Load a map, or `None` when no document exists for the id
    pub fn load(&self, map_id: &str) -> Result<Option<TileMap>, ProjectError> {
        let path = self.map_path(map_id);
        if !path.exists() {
            return Ok(None);
        }
        let data: MapData = read_json(&path)?;
        let map = data.into_map()?;
        info!(map_id, "map loaded");
        Ok(Some(map))
    }

    pub fn delete(&self, map_id: &str) -> Result<(), ProjectError> {
        let path = self.map_path(map_id);
        if path.exists() {
            std::fs::remove_file(path).map_err(|e| ProjectError::Io(e.to_string()))?;
        }
        Ok(())
    }

    /// Load the default map, creating an empty one on first run
    pub fn ensure_default(&self) -> Result<TileMap, ProjectError> {
        if !self.exists(DEFAULT_MAP_ID) {
            let map = TileMap::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_TILE_SIZE);
            self.save(DEFAULT_MAP_ID, &map)?;
        }
        // The document was just written if it was missing.
        self.load(DEFAULT_MAP_ID)?
            .ok_or_else(|| ProjectError::Io("default map vanished after save".to_string()))
    }
}

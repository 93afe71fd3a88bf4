//! JSON persistence for mapforge
//!
//! Everything the editor keeps on disk lives under a project root:
//! - `Assets/Maps/<map_id>.json` - one document per map (`MapStore`)
//! - `Assets/Data/Levels.json` - the ordered level list (`LevelStore`)
//! - `Assets/Data/*.json` - definition lists for tiles, entities, traps
//!   and interactables (`DefinitionStore`)
//! - `Assets/Animation/<id>.json` - one document per animation
//!
//! Documents use PascalCase field names so files written by earlier
//! editor builds load unchanged.

mod definitions;
mod level_file;
mod map_file;
mod paths;
mod store;

pub use definitions::{
    AnimationDefinition, CollisionKind, EntityDefinition, InteractableDefinition, TileDefinition,
    TrapDefinition,
};
pub use level_file::{LevelEntry, LevelStore};
pub use map_file::{MapData, MapStore, SpawnData, DEFAULT_MAP_ID};
pub use paths::ProjectPaths;
pub use store::{AnimationStore, DefinitionStore};

use mapforge_core::MapError;
use thiserror::Error;

/// Errors from loading or saving project files
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Map error: {0}")]
    Map(#[from] MapError),
}

pub(crate) fn read_json<T: serde::de::DeserializeOwned>(
    path: &std::path::Path,
) -> Result<T, ProjectError> {
    let content = std::fs::read_to_string(path).map_err(|e| ProjectError::Io(e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| ProjectError::Parse(e.to_string()))
}

pub(crate) fn write_json<T: serde::Serialize>(
    path: &std::path::Path,
    value: &T,
) -> Result<(), ProjectError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ProjectError::Io(e.to_string()))?;
    }
    let content =
        serde_json::to_string_pretty(value).map_err(|e| ProjectError::Parse(e.to_string()))?;
    std::fs::write(path, content).map_err(|e| ProjectError::Io(e.to_string()))
}

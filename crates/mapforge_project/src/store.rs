//! Typed JSON list stores for definition files

use crate::{
    read_json, write_json, AnimationDefinition, EntityDefinition, InteractableDefinition,
    ProjectError, ProjectPaths, TileDefinition, TrapDefinition,
};
use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing::warn;

const TILE_FILE: &str = "tile_def.json";
const ENTITY_FILE: &str = "EntityDef.json";
const TRAP_FILE: &str = "TrapDef.json";
const INTERACTABLE_FILE: &str = "Interactables.json";

/// One definition list persisted as a single JSON array file.
///
/// A missing file loads as an empty list; the file is created on the
/// first save.
#[derive(Debug, Clone)]
pub struct DefinitionStore<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: Serialize + DeserializeOwned> DefinitionStore<T> {
    fn at(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn load(&self) -> Result<Vec<T>, ProjectError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        read_json(&self.path)
    }

    pub fn save(&self, items: &[T]) -> Result<(), ProjectError> {
        write_json(&self.path, &items)
    }
}

impl DefinitionStore<TileDefinition> {
    pub fn tiles(paths: &ProjectPaths) -> Self {
        Self::at(paths.data_dir().join(TILE_FILE))
    }

    /// Append a fresh tile definition with the next free id and a
    /// placeholder name, persisting the list. Id 0 stays reserved for
    /// the empty cell.
    pub fn add_tile(
        &self,
        defs: &mut Vec<TileDefinition>,
    ) -> Result<TileDefinition, ProjectError> {
        let next_id = defs.iter().map(|d| d.id).max().unwrap_or(0) + 1;
        let tile = TileDefinition {
            id: next_id,
            name: format!("NewTile_{next_id}"),
            sprite_path: String::new(),
            collision_type: Default::default(),
        };
        defs.push(tile.clone());
        self.save(defs)?;
        Ok(tile)
    }

    /// Remove a tile definition by id, persisting the list
    pub fn remove_tile(
        &self,
        defs: &mut Vec<TileDefinition>,
        id: i32,
    ) -> Result<bool, ProjectError> {
        let before = defs.len();
        defs.retain(|d| d.id != id);
        if defs.len() == before {
            return Ok(false);
        }
        self.save(defs)?;
        Ok(true)
    }
}

impl DefinitionStore<EntityDefinition> {
    pub fn entities(paths: &ProjectPaths) -> Self {
        Self::at(paths.data_dir().join(ENTITY_FILE))
    }
}

impl DefinitionStore<TrapDefinition> {
    pub fn traps(paths: &ProjectPaths) -> Self {
        Self::at(paths.data_dir().join(TRAP_FILE))
    }
}

impl DefinitionStore<InteractableDefinition> {
    pub fn interactables(paths: &ProjectPaths) -> Self {
        Self::at(paths.data_dir().join(INTERACTABLE_FILE))
    }
}

/// Animations are stored one document per id under `Assets/Animation`
#[derive(Debug, Clone)]
pub struct AnimationStore {
    paths: ProjectPaths,
}

impl AnimationStore {
    pub fn new(paths: ProjectPaths) -> Self {
        Self { paths }
    }

    fn animation_path(&self, id: &str) -> PathBuf {
        self.paths.animation_dir().join(format!("{id}.json"))
    }

    pub fn save(&self, def: &AnimationDefinition) -> Result<(), ProjectError> {
        write_json(&self.animation_path(&def.id), def)
    }

    /// Load every animation document in the folder. Files that fail to
    /// parse are skipped with a warning rather than aborting the load.
    pub fn load_all(&self) -> Result<Vec<AnimationDefinition>, ProjectError> {
        let dir = self.paths.animation_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut defs = Vec::new();
        let entries = std::fs::read_dir(&dir).map_err(|e| ProjectError::Io(e.to_string()))?;
        for entry in entries {
            let entry = entry.map_err(|e| ProjectError::Io(e.to_string()))?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match read_json::<AnimationDefinition>(&path) {
                Ok(def) => defs.push(def),
                Err(err) => warn!(path = %path.display(), %err, "skipping unreadable animation"),
            }
        }
        defs.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(defs)
    }
}

//! The level list at `Assets/Data/Levels.json`

use crate::{read_json, write_json, ProjectError, ProjectPaths};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const LEVEL_FILE_NAME: &str = "Levels.json";

/// One entry in the level list: a level id bound to a map document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LevelEntry {
    pub id: String,
    pub map_id: String,
    pub is_active: bool,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct LevelFile {
    #[serde(default)]
    levels: Vec<LevelEntry>,
}

/// Saves and loads the ordered level list
#[derive(Debug, Clone)]
pub struct LevelStore {
    paths: ProjectPaths,
}

impl LevelStore {
    pub fn new(paths: ProjectPaths) -> Self {
        Self { paths }
    }

    fn file_path(&self) -> PathBuf {
        self.paths.data_dir().join(LEVEL_FILE_NAME)
    }

    pub fn save(&self, levels: &[LevelEntry]) -> Result<(), ProjectError> {
        write_json(
            &self.file_path(),
            &LevelFile {
                levels: levels.to_vec(),
            },
        )
    }

    /// Load the level list; a missing file is an empty list
    pub fn load(&self) -> Result<Vec<LevelEntry>, ProjectError> {
        let path = self.file_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let file: LevelFile = read_json(&path)?;
        Ok(file.levels)
    }
}

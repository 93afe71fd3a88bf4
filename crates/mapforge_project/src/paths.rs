//! On-disk layout of a project

use std::path::{Path, PathBuf};

/// Resolves the directories of a project rooted at one folder.
///
/// Layout:
/// ```text
/// <root>/Assets/Maps       map documents
/// <root>/Assets/Data       level list and definition files
/// <root>/Assets/Textures   sprite images (not read by these crates)
/// <root>/Assets/Animation  one document per animation
/// ```
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.root.join("Assets")
    }

    pub fn maps_dir(&self) -> PathBuf {
        self.assets_dir().join("Maps")
    }

    pub fn data_dir(&self) -> PathBuf {
        self.assets_dir().join("Data")
    }

    pub fn textures_dir(&self) -> PathBuf {
        self.assets_dir().join("Textures")
    }

    pub fn animation_dir(&self) -> PathBuf {
        self.assets_dir().join("Animation")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_layout() {
        let paths = ProjectPaths::new("/proj");
        assert_eq!(paths.maps_dir(), PathBuf::from("/proj/Assets/Maps"));
        assert_eq!(paths.data_dir(), PathBuf::from("/proj/Assets/Data"));
        assert_eq!(paths.animation_dir(), PathBuf::from("/proj/Assets/Animation"));
    }
}

//! Spawn points and placements pinned to grid cells

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An integer grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The player start position. At most one per map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSpawn {
    pub position: GridPos,
    pub definition_id: String,
}

impl PlayerSpawn {
    pub fn new(position: GridPos) -> Self {
        Self {
            position,
            definition_id: "Player".to_string(),
        }
    }
}

/// An enemy spawn point referencing an entity definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemySpawn {
    /// Unique identifier for this instance
    pub id: Uuid,
    pub position: GridPos,
    pub definition_id: String,
}

impl EnemySpawn {
    pub fn new(position: GridPos, definition_id: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            definition_id,
        }
    }
}

/// An interactable (chest, door, key) placed on the interactable layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractablePlacement {
    pub id: Uuid,
    pub position: GridPos,
    pub definition_id: String,
}

impl InteractablePlacement {
    pub fn new(position: GridPos, definition_id: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            definition_id,
        }
    }
}

/// A trap placed in the map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrapPlacement {
    pub id: Uuid,
    pub position: GridPos,
    pub definition_id: String,
}

impl TrapPlacement {
    pub fn new(position: GridPos, definition_id: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            definition_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_spawn_default_definition() {
        let spawn = PlayerSpawn::new(GridPos::new(3, 4));
        assert_eq!(spawn.definition_id, "Player");
        assert_eq!(spawn.position, GridPos::new(3, 4));
    }

    #[test]
    fn test_enemy_spawns_get_unique_ids() {
        let a = EnemySpawn::new(GridPos::new(0, 0), "Slime".to_string());
        let b = EnemySpawn::new(GridPos::new(0, 0), "Slime".to_string());
        assert_ne!(a.id, b.id);
    }
}

//! Definition records persisted under `Assets/Data` and `Assets/Animation`

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How a tile interacts with moving entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollisionKind {
    #[default]
    None,
    Solid,
}

/// A paintable tile: the code painted into grids plus its display data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TileDefinition {
    /// The code stored in tile grids. 0 is reserved for the empty cell.
    pub id: i32,
    pub name: String,
    pub sprite_path: String,
    pub collision_type: CollisionKind,
}

/// Stats and animation slots for one enemy type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntityDefinition {
    pub id: String,
    pub speed: f32,
    pub attack_damage: f32,
    pub attack_interval: f32,
    pub max_hp: f32,
    #[serde(default)]
    pub idle_animation: String,
    #[serde(default)]
    pub walk_animation: String,
    #[serde(default)]
    pub hurt_animation: String,
    #[serde(default)]
    pub death_animation: String,
    #[serde(default)]
    pub attack_animations: Vec<String>,
}

/// Parameters for one trap type. Fire traps use the duration/DPS block,
/// saw traps the speed/damage block; unused fields stay zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrapDefinition {
    pub id: String,
    #[serde(default)]
    pub image_path: String,
    #[serde(default)]
    pub active_duration: f32,
    #[serde(default)]
    pub inactive_duration: f32,
    #[serde(default)]
    pub damage_per_second: f32,
    #[serde(default)]
    pub speed: f32,
    #[serde(default)]
    pub damage: f32,
    #[serde(default)]
    pub damage_cooldown: f32,
}

/// An interactable type (chest, door, key)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InteractableDefinition {
    pub id: String,
    #[serde(default)]
    pub sprite_path: String,
}

/// A sprite-sheet animation: frame geometry, timing, and the frames that
/// raise gameplay events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnimationDefinition {
    pub id: String,
    pub sprite_sheet_path: String,
    pub frame_width: u32,
    pub frame_height: u32,
    pub frame_count: u32,
    pub frame_time: f32,
    #[serde(rename = "Loop")]
    pub looping: bool,
    #[serde(default)]
    pub event_frames: HashSet<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_definition_document_shape() {
        let json = r#"{
            "Id": 2,
            "Name": "Wall",
            "SpritePath": "Textures/wall.png",
            "CollisionType": "Solid"
        }"#;
        let def: TileDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.id, 2);
        assert_eq!(def.collision_type, CollisionKind::Solid);
    }

    #[test]
    fn test_trap_definition_defaults_unused_block() {
        let json = r#"{
            "Id": "Fire",
            "ActiveDuration": 1.5,
            "InactiveDuration": 2.0,
            "DamagePerSecond": 10.0
        }"#;
        let def: TrapDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.active_duration, 1.5);
        assert_eq!(def.speed, 0.0);
        assert_eq!(def.damage, 0.0);
    }
}

//! Consistency checks run before a map is handed to the game

use crate::{GridPos, TileMap};

/// Result of validating a map. An empty error list means the map is
/// playable.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check that the map has a player spawn and that every spawn and
/// placement sits inside the grid.
pub fn validate_map(map: &TileMap) -> ValidationReport {
    let mut report = ValidationReport::default();

    match &map.player_spawn {
        None => report
            .errors
            .push("map has no player spawn".to_string()),
        Some(spawn) => check_position(map, spawn.position, "player spawn", &mut report),
    }

    for spawn in &map.enemy_spawns {
        check_position(
            map,
            spawn.position,
            &format!("enemy spawn '{}'", spawn.definition_id),
            &mut report,
        );
    }
    for placement in &map.interactables {
        check_position(
            map,
            placement.position,
            &format!("interactable '{}'", placement.definition_id),
            &mut report,
        );
    }
    for placement in &map.traps {
        check_position(
            map,
            placement.position,
            &format!("trap '{}'", placement.definition_id),
            &mut report,
        );
    }

    report
}

fn check_position(map: &TileMap, pos: GridPos, what: &str, report: &mut ValidationReport) {
    let in_bounds =
        pos.x >= 0 && pos.y >= 0 && pos.x < map.width() as i32 && pos.y < map.height() as i32;
    if !in_bounds {
        report.errors.push(format!(
            "{} at ({}, {}) is outside the {}x{} grid",
            what,
            pos.x,
            pos.y,
            map.width(),
            map.height()
        ));
    }
}

//! Layer kinds shared by every map

use serde::{Deserialize, Serialize};

/// The named layers of a map, in draw order.
///
/// Serialized by variant name so layer dictionaries written by older
/// editor builds load unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerKind {
    Background,
    Collision,
    Decoration,
    Interactable,
}

impl LayerKind {
    /// All layer kinds, in draw order
    pub const ALL: [LayerKind; 4] = [
        LayerKind::Background,
        LayerKind::Collision,
        LayerKind::Decoration,
        LayerKind::Interactable,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_by_name() {
        let json = serde_json::to_string(&LayerKind::Collision).unwrap();
        assert_eq!(json, "\"Collision\"");

        let kind: LayerKind = serde_json::from_str("\"Decoration\"").unwrap();
        assert_eq!(kind, LayerKind::Decoration);
    }
}

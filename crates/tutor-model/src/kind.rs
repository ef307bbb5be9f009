//! Block kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Closed enumeration of block categories.
///
/// The first five kinds are the house blueprint pieces. The remaining kinds
/// are the cost-bearing building materials used on workshop pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockKind {
    Wall,
    Window,
    Lamp,
    Door,
    Roof,
    Wood,
    Brick,
    Stone,
    Glass,
    Leaf,
    Gold,
    Flower,
    Water,
}

impl BlockKind {
    /// All kinds, house pieces first.
    pub const ALL: [Self; 13] = [
        Self::Wall,
        Self::Window,
        Self::Lamp,
        Self::Door,
        Self::Roof,
        Self::Wood,
        Self::Brick,
        Self::Stone,
        Self::Glass,
        Self::Leaf,
        Self::Gold,
        Self::Flower,
        Self::Water,
    ];

    /// Kinds offered on the house blueprint palette.
    pub const HOUSE: [Self; 5] = [Self::Wall, Self::Window, Self::Lamp, Self::Door, Self::Roof];

    /// Cost-bearing materials offered on workshop pages.
    pub const MATERIALS: [Self; 8] = [
        Self::Wood,
        Self::Brick,
        Self::Stone,
        Self::Glass,
        Self::Leaf,
        Self::Gold,
        Self::Flower,
        Self::Water,
    ];

    /// Raw upper-case name, as used by the action vocabulary.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Wall => "WALL",
            Self::Window => "WINDOW",
            Self::Lamp => "LAMP",
            Self::Door => "DOOR",
            Self::Roof => "ROOF",
            Self::Wood => "WOOD",
            Self::Brick => "BRICK",
            Self::Stone => "STONE",
            Self::Glass => "GLASS",
            Self::Leaf => "LEAF",
            Self::Gold => "GOLD",
            Self::Flower => "FLOWER",
            Self::Water => "WATER",
        }
    }

    /// Whether this kind carries a cost and may be placed on workshop pages.
    #[must_use]
    pub const fn is_material(&self) -> bool {
        !matches!(
            self,
            Self::Wall | Self::Window | Self::Lamp | Self::Door | Self::Roof
        )
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlockKind {
    type Err = ModelError;

    /// Parse a raw kind name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownKind(s.to_string()))
    }
}

//! Block registry.
//!
//! Static data for every block kind: its default label and color and, for
//! building materials, its cost. The registry is never mutated at runtime.

use crate::kind::BlockKind;

/// Color used for names the registry does not know.
pub const FALLBACK_COLOR: &str = "bg-gray-500";

/// Registry record for one block kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpec {
    /// Kind this record describes.
    pub kind: BlockKind,
    /// Default display label.
    pub label: &'static str,
    /// Default background color class.
    pub color: &'static str,
    /// Text color class used on top of `color`.
    pub text_color: &'static str,
    /// Cost of one block; only materials carry one.
    pub cost: Option<u32>,
}

/// Default attributes seeded into a new block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDefaults {
    /// Display label.
    pub label: String,
    /// Background color class.
    pub color: String,
}

/// All known block kinds, in palette order.
pub static REGISTRY: &[BlockSpec] = &[
    BlockSpec {
        kind: BlockKind::Wall,
        label: "Wall",
        color: "bg-gray-300",
        text_color: "text-gray-800",
        cost: None,
    },
    BlockSpec {
        kind: BlockKind::Window,
        label: "Window",
        color: "bg-blue-300",
        text_color: "text-blue-800",
        cost: None,
    },
    BlockSpec {
        kind: BlockKind::Lamp,
        label: "Lamp",
        color: "bg-gray-700",
        text_color: "text-gray-100",
        cost: None,
    },
    BlockSpec {
        kind: BlockKind::Door,
        label: "Door",
        color: "bg-yellow-800",
        text_color: "text-yellow-200",
        cost: None,
    },
    BlockSpec {
        kind: BlockKind::Roof,
        label: "Roof",
        color: "bg-red-700",
        text_color: "text-red-200",
        cost: None,
    },
    BlockSpec {
        kind: BlockKind::Wood,
        label: "Wood",
        color: "bg-yellow-800",
        text_color: "text-yellow-200",
        cost: Some(10),
    },
    BlockSpec {
        kind: BlockKind::Brick,
        label: "Brick",
        color: "bg-red-700",
        text_color: "text-red-200",
        cost: Some(20),
    },
    BlockSpec {
        kind: BlockKind::Stone,
        label: "Stone",
        color: "bg-gray-500",
        text_color: "text-gray-200",
        cost: Some(30),
    },
    BlockSpec {
        kind: BlockKind::Glass,
        label: "Glass",
        color: "bg-blue-300",
        text_color: "text-blue-800",
        cost: Some(50),
    },
    BlockSpec {
        kind: BlockKind::Leaf,
        label: "Leaves",
        color: "bg-green-600",
        text_color: "text-green-200",
        cost: Some(5),
    },
    BlockSpec {
        kind: BlockKind::Gold,
        label: "Gold",
        color: "bg-yellow-400",
        text_color: "text-yellow-900",
        cost: Some(100),
    },
    BlockSpec {
        kind: BlockKind::Flower,
        label: "Flower",
        color: "bg-pink-400",
        text_color: "text-pink-900",
        cost: Some(2),
    },
    BlockSpec {
        kind: BlockKind::Water,
        label: "Water",
        color: "bg-blue-600",
        text_color: "text-blue-100",
        cost: Some(0),
    },
];

/// Registry record for a kind.
///
/// Total over [`BlockKind`]: every variant has exactly one record.
#[must_use]
pub fn spec(kind: BlockKind) -> &'static BlockSpec {
    // REGISTRY is indexed in BlockKind::ALL order
    &REGISTRY[kind as usize]
}

/// Default label and color for a kind.
#[must_use]
pub fn lookup_defaults(kind: BlockKind) -> BlockDefaults {
    let spec = spec(kind);
    BlockDefaults {
        label: spec.label.to_string(),
        color: spec.color.to_string(),
    }
}

/// Cost of one block of this kind (zero for non-materials).
#[must_use]
pub fn lookup_cost(kind: BlockKind) -> u32 {
    spec(kind).cost.unwrap_or(0)
}

/// Defaults for a raw kind name.
///
/// Unknown names do not fail: the label is the raw name and the color is
/// [`FALLBACK_COLOR`].
#[must_use]
pub fn defaults_for_name(raw: &str) -> BlockDefaults {
    match raw.parse::<BlockKind>() {
        Ok(kind) => lookup_defaults(kind),
        Err(_) => BlockDefaults {
            label: raw.to_string(),
            color: FALLBACK_COLOR.to_string(),
        },
    }
}

/// Cost for a raw kind name; unknown names cost nothing.
#[must_use]
pub fn cost_for_name(raw: &str) -> u32 {
    raw.parse::<BlockKind>().map(lookup_cost).unwrap_or(0)
}

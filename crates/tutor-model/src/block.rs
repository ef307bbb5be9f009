//! Placed blocks.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ModelError;
use crate::kind::BlockKind;
use crate::registry::lookup_defaults;

/// Display attributes of a block: string keys to string values.
pub type Attributes = BTreeMap<String, String>;

/// Opaque unique block identifier, assigned at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(Uuid);

impl BlockId {
    /// Generate a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for BlockId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| ModelError::InvalidBlockId(s.to_string()))
    }
}

/// A placed, typed UI element.
///
/// `id` and `kind` are fixed at creation; only `attributes` change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    id: BlockId,
    kind: BlockKind,
    /// Display attributes (label, color, ...).
    pub attributes: Attributes,
}

impl Block {
    /// Create a block with a fresh id and the registry defaults for `kind`.
    #[must_use]
    pub fn new(kind: BlockKind) -> Self {
        Self::with_id(BlockId::new(), kind)
    }

    /// Create a block with a caller-chosen id.
    #[must_use]
    pub fn with_id(id: BlockId, kind: BlockKind) -> Self {
        let defaults = lookup_defaults(kind);
        let mut attributes = Attributes::new();
        attributes.insert("label".to_string(), defaults.label);
        attributes.insert("color".to_string(), defaults.color);
        Self {
            id,
            kind,
            attributes,
        }
    }

    /// Block identifier.
    #[must_use]
    pub fn id(&self) -> BlockId {
        self.id
    }

    /// Block kind.
    #[must_use]
    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    /// Attribute value by key.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Display label, if set.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.attribute("label")
    }

    /// Display color, if set.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.attribute("color")
    }

    /// Copy of this block with `patch` shallow-merged over its attributes.
    ///
    /// Keys in `patch` overwrite; keys absent from `patch` keep their value.
    #[must_use]
    pub fn merged(&self, patch: &Attributes) -> Self {
        let mut attributes = self.attributes.clone();
        for (key, value) in patch {
            attributes.insert(key.clone(), value.clone());
        }
        Self {
            id: self.id,
            kind: self.kind,
            attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_block_has_defaults() {
        let block = Block::new(BlockKind::Window);
        assert_eq!(block.kind(), BlockKind::Window);
        assert_eq!(block.label(), Some("Window"));
        assert_eq!(block.color(), Some("bg-blue-300"));
    }

    #[test]
    fn test_ids_are_distinct() {
        let a = Block::new(BlockKind::Wall);
        let b = Block::new(BlockKind::Wall);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_merge_keeps_absent_keys() {
        let block = Block::new(BlockKind::Wall);
        let patch = Attributes::from([("color".to_string(), "bg-red-400".to_string())]);
        let merged = block.merged(&patch);

        assert_eq!(merged.id(), block.id());
        assert_eq!(merged.color(), Some("bg-red-400"));
        assert_eq!(merged.label(), Some("Wall"));
    }

    #[test]
    fn test_merge_adds_new_keys() {
        let block = Block::new(BlockKind::Lamp);
        let patch = Attributes::from([("state".to_string(), "on".to_string())]);
        let merged = block.merged(&patch);
        assert_eq!(merged.attribute("state"), Some("on"));
        assert_eq!(merged.attributes.len(), 3);
    }

    #[test]
    fn test_block_id_parse() {
        let id = BlockId::new();
        assert_eq!(id.to_string().parse::<BlockId>(), Ok(id));
        assert!("not-a-uuid".parse::<BlockId>().is_err());
    }
}

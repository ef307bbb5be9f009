//! Core data types for the blueprint tutor.
//!
//! This crate holds the plain data the stores operate on:
//!
//! - **Block**: a placed, typed UI element with mutable display attributes
//! - **BlockKind**: the closed set of block categories
//! - **Registry**: static defaults (label, color, cost) per kind
//! - **Concept**: the learning-panel catalog and its prompts

pub mod block;
pub mod concept;
pub mod error;
pub mod kind;
pub mod registry;

pub use block::{Attributes, Block, BlockId};
pub use concept::{CONCEPTS, Concept, DEFAULT_SYSTEM_PROMPT, find_concept};
pub use error::{ModelError, Result};
pub use kind::BlockKind;
pub use registry::{
    BlockDefaults, BlockSpec, FALLBACK_COLOR, REGISTRY, cost_for_name, defaults_for_name,
    lookup_cost, lookup_defaults, spec,
};

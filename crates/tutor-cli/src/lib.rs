//! CLI library components for the blueprint tutor.

pub mod logging;
pub mod render;
pub mod replay;
pub mod settings;

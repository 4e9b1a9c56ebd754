//! Models module for the SVG scene editor
//!
//! This module contains the scene data model: drawable elements, the
//! ordered scene that holds them, and element id generation.

pub mod element;
pub mod ids;
pub mod scene;

// Re-export commonly used types
pub use element::*;
pub use ids::{IdGenerator, RandomIds, SequentialIds};
pub use scene::{Scene, SceneError};

//! SVG Scene Editor WASM API
//!
//! This module provides the JavaScript-facing API for the SVG scene editor.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, validation, error handling, and logging
//! - `scene`: Document import/export and whole-element edits

pub mod helpers;
pub mod scene;

pub use scene::{delete_element, generate_svg, move_element, parse_svg, update_element};

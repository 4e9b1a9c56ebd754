//! Utility modules for the SVG scene editor

pub mod numbers;

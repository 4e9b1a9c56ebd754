//! Format converters
//!
//! This module contains converters between documents and the scene model.

pub mod svg;

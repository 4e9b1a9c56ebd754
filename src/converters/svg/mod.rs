//! SVG document <-> scene conversion
//!
//! # Architecture
//!
//! ```text
//! SVG String
//!   ↓ [Parse with roxmltree, flatten groups]
//! Scene (Vec<Element>)
//!   ↓ [Edit: replace / move / delete elements]
//! Scene
//!   ↓ [Write with quick-xml]
//! SVG String
//! ```
//!
//! Supported subset: `<g>`, `<text>` (with `<tspan>` runs), `<rect>` and
//! `<path>`, with `fill`, `opacity`, `transform` and geometry attributes.
//! Other tags are skipped without error.

pub mod errors;
pub mod generator;
pub mod parser;

pub use errors::ParseError;
pub use generator::{generate, generate_with_settings, GeneratorSettings};
pub use parser::{parse, parse_with_ids};

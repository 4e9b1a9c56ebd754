//! SVG Scene Editor WASM Module
//!
//! Converts between SVG documents and a flat, ordered scene of drawable
//! elements (text, rectangles, paths), resolving nested group transforms on
//! the way in and regenerating a canonical SVG document on the way out.
//!
//! ```
//! use svg_editor_wasm::converters::svg::{generate, parse_with_ids};
//! use svg_editor_wasm::models::SequentialIds;
//!
//! let scene = parse_with_ids(
//!     r#"<svg><g transform="translate(10 20)"><rect width="5" height="5"/></g></svg>"#,
//!     &mut SequentialIds::new(),
//! ).unwrap();
//! let svg = generate(&scene);
//! assert!(svg.contains(r#"transform="translate(10 20)""#));
//! ```

pub mod api;
pub mod converters;
pub mod models;
pub mod transform;
pub mod utils;

// Re-export commonly used types
pub use converters::svg::{generate, parse, parse_with_ids, GeneratorSettings, ParseError};
pub use models::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        api::helpers::log_warn(&format!("Logger already initialized: {}", e));
    }

    log::info!("SVG Scene Editor WASM module initialized");
}

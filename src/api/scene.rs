//! Scene operations for the WASM API
//!
//! The canvas, property panel and file handling live in JavaScript. They
//! hold the element array and call in here to import a document, export
//! one, and apply whole-element edits.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{
    deserialize, scene_from_js, serialize, validate_coordinates, validation_error,
};
use crate::converters::svg::{generate, parse};
use crate::models::Element;
use crate::{wasm_error, wasm_info, wasm_log};

// ============================================================================
// Import / Export
// ============================================================================

/// Parse an uploaded SVG document
///
/// # Returns
/// `{ elements: Element[] }`, flattened in paint order
#[wasm_bindgen(js_name = parseSvg)]
pub fn parse_svg(svg_content: &str) -> Result<JsValue, JsValue> {
    wasm_info!("parseSvg called ({} bytes)", svg_content.len());

    let scene = parse(svg_content).map_err(|e| {
        wasm_error!("SVG parse error: {}", e);
        JsValue::from_str(&format!("SVG parse error: {}", e))
    })?;

    wasm_log!("  Parsed {} elements", scene.len());
    serialize(&scene, "Failed to serialize scene")
}

/// Generate an SVG document from the element array
///
/// # Returns
/// SVG document string for download
#[wasm_bindgen(js_name = generateSvg)]
pub fn generate_svg(elements: JsValue) -> Result<String, JsValue> {
    let scene = scene_from_js(elements)?;
    wasm_info!("generateSvg called with {} elements", scene.len());

    let svg = generate(&scene);
    wasm_log!("  SVG generated: {} bytes", svg.len());
    Ok(svg)
}

// ============================================================================
// Element Edits
// ============================================================================

/// Move an element so its transform starts with `translate(x y)`
///
/// # Returns
/// The moved element (a new value; the input is not modified)
#[wasm_bindgen(js_name = moveElement)]
pub fn move_element(element: JsValue, x: f64, y: f64) -> Result<JsValue, JsValue> {
    validate_coordinates(x, y).map_err(validation_error)?;
    let element: Element = deserialize(element, "Invalid element")?;

    let moved = element.moved_to(x, y);
    wasm_log!("moveElement {} -> {:?}", moved.id(), moved.transform());
    serialize(&moved, "Failed to serialize element")
}

/// Replace the element with the same id
///
/// # Returns
/// The updated element array
#[wasm_bindgen(js_name = updateElement)]
pub fn update_element(elements: JsValue, element: JsValue) -> Result<JsValue, JsValue> {
    let mut scene = scene_from_js(elements)?;
    let element: Element = deserialize(element, "Invalid element")?;

    scene
        .replace(element)
        .map_err(|e| validation_error(format!("updateElement failed: {}", e)))?;
    serialize(&scene.elements(), "Failed to serialize elements")
}

/// Delete the element with `id`
///
/// # Returns
/// The remaining element array (unchanged when `id` is unknown)
#[wasm_bindgen(js_name = deleteElement)]
pub fn delete_element(elements: JsValue, id: &str) -> Result<JsValue, JsValue> {
    let mut scene = scene_from_js(elements)?;

    if scene.remove(id).is_none() {
        wasm_log!("deleteElement: no element with id '{}'", id);
    }
    serialize(&scene.elements(), "Failed to serialize elements")
}

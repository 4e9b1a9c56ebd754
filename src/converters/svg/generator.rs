//! SVG document generator
//!
//! Writes a [`Scene`] back out as a standalone SVG document on the editor's
//! fixed 960x540 canvas, one child of a single `<g>` per element in paint
//! order. Attribute values and text content are escaped by quick-xml.

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::models::element::{Element, PathElement, RectElement, TextElement};
use crate::models::scene::Scene;
use crate::transform::format_translate;
use crate::utils::numbers::format_number;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const CANVAS_WIDTH: u32 = 960;
pub const CANVAS_HEIGHT: u32 = 540;

/// Output formatting settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorSettings {
    /// Spaces per nesting level; 0 writes everything on one line
    pub indent: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

/// Generate an SVG document for `scene` with default settings.
///
/// Never fails: every element the model can hold has an SVG form.
pub fn generate(scene: &Scene) -> String {
    generate_with_settings(scene, &GeneratorSettings::default())
}

/// Generate an SVG document for `scene`.
pub fn generate_with_settings(scene: &Scene, settings: &GeneratorSettings) -> String {
    let mut writer = if settings.indent > 0 {
        Writer::new_with_indent(Vec::new(), b' ', settings.indent)
    } else {
        Writer::new(Vec::new())
    };

    // Writes go to an in-memory buffer, which does not fail
    if let Err(err) = write_document(&mut writer, scene) {
        log::error!("SVG generation stopped early: {}", err);
    }

    String::from_utf8_lossy(&writer.into_inner()).into_owned()
}

fn write_document<W: Write>(writer: &mut Writer<W>, scene: &Scene) -> quick_xml::Result<()> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("no"))))?;

    let width = CANVAS_WIDTH.to_string();
    let height = CANVAS_HEIGHT.to_string();
    let view_box = format!("0 0 {} {}", CANVAS_WIDTH, CANVAS_HEIGHT);

    let mut svg = BytesStart::new("svg");
    svg.push_attribute(("xmlns", SVG_NAMESPACE));
    svg.push_attribute(("width", width.as_str()));
    svg.push_attribute(("height", height.as_str()));
    svg.push_attribute(("viewBox", view_box.as_str()));
    writer.write_event(Event::Start(svg))?;
    writer.write_event(Event::Start(BytesStart::new("g")))?;

    for element in scene {
        write_element(writer, element)?;
    }

    writer.write_event(Event::End(BytesEnd::new("g")))?;
    writer.write_event(Event::End(BytesEnd::new("svg")))?;
    Ok(())
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> quick_xml::Result<()> {
    match element {
        Element::Text(text) => write_text(writer, text),
        Element::Rect(rect) => writer.write_event(Event::Empty(rect_start(rect))),
        Element::Path(path) => writer.write_event(Event::Empty(path_start(path))),
    }
}

fn write_text<W: Write>(writer: &mut Writer<W>, text: &TextElement) -> quick_xml::Result<()> {
    let mut start = BytesStart::new("text");
    push_number(&mut start, "x", text.x);
    push_number(&mut start, "y", text.y);
    push_style(&mut start, text.fill.as_deref(), text.opacity.as_deref());
    if let Some(transform) = explicit_transform(text.transform.as_deref()) {
        start.push_attribute(("transform", transform));
    }
    push_number(&mut start, "font-size", text.font_size_or_default());

    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(&text.text)))?;
    writer.write_event(Event::End(BytesEnd::new("text")))
}

fn rect_start(rect: &RectElement) -> BytesStart<'static> {
    let mut start = BytesStart::new("rect");
    push_number(&mut start, "x", rect.x);
    push_number(&mut start, "y", rect.y);
    push_number(&mut start, "width", rect.width);
    push_number(&mut start, "height", rect.height);
    push_style(&mut start, rect.fill.as_deref(), rect.opacity.as_deref());
    if let Some(transform) = explicit_transform(rect.transform.as_deref()) {
        start.push_attribute(("transform", transform));
    }
    start
}

fn path_start(path: &PathElement) -> BytesStart<'static> {
    let mut start = BytesStart::new("path");
    start.push_attribute(("d", path.d.as_str()));
    push_style(&mut start, path.fill.as_deref(), path.opacity.as_deref());
    if let Some(transform) = path_transform(path) {
        start.push_attribute(("transform", transform.as_str()));
    }
    start
}

/// `fill` and `opacity`, each only when set to a non-empty value
fn push_style(start: &mut BytesStart, fill: Option<&str>, opacity: Option<&str>) {
    let set = |value: &&str| !value.trim().is_empty();
    if let Some(fill) = fill.filter(set) {
        start.push_attribute(("fill", fill));
    }
    if let Some(opacity) = opacity.filter(set) {
        start.push_attribute(("opacity", opacity));
    }
}

fn push_number(start: &mut BytesStart, name: &str, value: f64) {
    let value = format_number(value);
    start.push_attribute((name, value.as_str()));
}

fn explicit_transform(transform: Option<&str>) -> Option<&str> {
    transform.filter(|t| !t.trim().is_empty())
}

/// A path's explicit transform, or one synthesized from its position cache
fn path_transform(path: &PathElement) -> Option<String> {
    if let Some(transform) = explicit_transform(path.transform.as_deref()) {
        return Some(transform.to_string());
    }
    if path.x.is_some() || path.y.is_some() {
        return Some(format_translate(path.x.unwrap_or(0.0), path.y.unwrap_or(0.0), ""));
    }
    None
}

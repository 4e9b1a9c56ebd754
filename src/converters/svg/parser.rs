//! SVG document parser
//!
//! Walks an SVG document with roxmltree and flattens it into a [`Scene`]:
//! groups disappear, and each group's transform is folded into the
//! transform of every `text`, `rect` and `path` below it. The accumulated
//! transform is threaded through the walk as a value; the parsed tree is
//! never modified.

use roxmltree::{Document, Node, ParsingOptions};

use crate::models::element::{
    Element, ElementKind, PathElement, RectElement, TextElement, DEFAULT_FILL, DEFAULT_FONT_SIZE,
    DEFAULT_OPACITY,
};
use crate::models::ids::{IdGenerator, RandomIds};
use crate::models::scene::Scene;
use crate::transform::compose_transform;
use crate::utils::numbers::number_or;

use super::errors::ParseError;

/// Parse an SVG document into a scene, with random element ids.
///
/// Fails only when `document` is not well-formed XML. A document without an
/// `<svg>` element, or without any supported children, yields an empty scene.
pub fn parse(document: &str) -> Result<Scene, ParseError> {
    parse_with_ids(document, &mut RandomIds)
}

/// Parse an SVG document into a scene, drawing element ids from `ids`.
///
/// # Example
///
/// ```
/// use svg_editor_wasm::converters::svg::parse_with_ids;
/// use svg_editor_wasm::models::SequentialIds;
///
/// let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
///   <g transform="translate(10 20)"><rect width="5" height="5"/></g>
/// </svg>"#;
///
/// let scene = parse_with_ids(svg, &mut SequentialIds::new()).unwrap();
/// assert_eq!(scene.len(), 1);
/// assert_eq!(scene.elements()[0].id(), "el-1");
/// assert_eq!(scene.elements()[0].transform(), Some("translate(10 20)"));
/// ```
pub fn parse_with_ids(document: &str, ids: &mut dyn IdGenerator) -> Result<Scene, ParseError> {
    // Exported SVG files often carry a DOCTYPE; roxmltree refuses it by default
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(document, options)?;

    let Some(svg) = find_svg_root(&doc) else {
        log::debug!("No <svg> element found, returning empty scene");
        return Ok(Scene::new());
    };

    let mut builder = SceneBuilder {
        ids,
        scene: Scene::new(),
    };
    builder.walk_children(svg, "");

    log::debug!("Parsed SVG document into {} elements", builder.scene.len());
    Ok(builder.scene)
}

/// First `<svg>` element of the document in document order
fn find_svg_root<'a, 'input>(doc: &'a Document<'input>) -> Option<Node<'a, 'input>> {
    doc.descendants()
        .find(|n| n.is_element() && local_name(*n) == "svg")
}

/// Lowercased local tag name (namespace prefix dropped)
fn local_name(node: Node) -> String {
    node.tag_name().name().to_ascii_lowercase()
}

/// Concatenated text of all descendant text nodes
fn text_content(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Text shown by a `<text>` element: its `<tspan>` runs joined by spaces
/// when it has any, otherwise its whole text content.
fn text_element_content(node: Node) -> String {
    let tspans: Vec<String> = node
        .descendants()
        .filter(|n| n.is_element() && local_name(*n) == "tspan")
        .map(text_content)
        .collect();

    if tspans.is_empty() {
        text_content(node)
    } else {
        tspans.join(" ")
    }
}

/// Accumulates the flat scene during the walk
struct SceneBuilder<'g> {
    ids: &'g mut dyn IdGenerator,
    scene: Scene,
}

impl<'g> SceneBuilder<'g> {
    /// Visit the element children of `parent` in document order
    fn walk_children(&mut self, parent: Node, inherited: &str) {
        for child in parent.children().filter(|n| n.is_element()) {
            self.visit(child, inherited);
        }
    }

    fn visit(&mut self, node: Node, inherited: &str) {
        let own = node.attribute("transform").unwrap_or("");
        let full_transform = compose_transform(inherited, own);
        let name = local_name(node);

        if name == "g" {
            self.walk_children(node, &full_transform);
            return;
        }

        let Some(kind) = ElementKind::from_tag_name(&name) else {
            log::debug!("Skipping unsupported <{}> element", name);
            return;
        };

        let id = self.fresh_id();
        let transform = Some(full_transform).filter(|t| !t.is_empty());
        let element = build_element(kind, node, id, transform);

        if let Err(err) = self.scene.insert(element) {
            log::warn!("Dropping element: {}", err);
        }
    }

    /// Next id from the generator, made unique within the scene if the
    /// generator misbehaves
    fn fresh_id(&mut self) -> String {
        let id = self.ids.next_id();
        if !id.is_empty() && !self.scene.contains_id(&id) {
            return id;
        }

        log::warn!("Id generator returned unusable id '{}', deriving a unique one", id);
        let base = if id.is_empty() { "el".to_string() } else { id };
        let mut n = self.scene.len() + 1;
        loop {
            let candidate = format!("{}-{}", base, n);
            if !self.scene.contains_id(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// A style attribute's value; an empty value counts as absent
fn style_attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name).filter(|value| !value.trim().is_empty())
}

/// Build the scene element for a supported tag.
///
/// Missing or non-numeric attributes fall back to their defaults.
fn build_element(kind: ElementKind, node: Node, id: String, transform: Option<String>) -> Element {
    let fill = Some(style_attribute(node, "fill").unwrap_or(DEFAULT_FILL).to_string());
    let opacity = Some(style_attribute(node, "opacity").unwrap_or(DEFAULT_OPACITY).to_string());
    let number = |name: &str, default: f64| number_or(node.attribute(name), default);

    match kind {
        ElementKind::Text => Element::Text(TextElement {
            id,
            x: number("x", 0.0),
            y: number("y", 0.0),
            text: text_element_content(node),
            fill,
            opacity,
            font_size: Some(number("font-size", DEFAULT_FONT_SIZE)),
            transform,
        }),
        ElementKind::Rect => Element::Rect(RectElement {
            id,
            x: number("x", 0.0),
            y: number("y", 0.0),
            width: number("width", 0.0),
            height: number("height", 0.0),
            fill,
            opacity,
            transform,
        }),
        ElementKind::Path => Element::Path(
            PathElement {
                id,
                d: node.attribute("d").unwrap_or("").to_string(),
                x: None,
                y: None,
                fill,
                opacity,
                transform: None,
            }
            .with_transform(transform),
        ),
    }
}

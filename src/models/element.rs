//! Drawable elements of a scene
//!
//! An [`Element`] is one of three primitives: text, rectangle, or path.
//! Elements are values: an edit builds a new element and replaces the old
//! one in its [`Scene`](super::Scene), fields are never patched in place.
//!
//! The serde shape matches what the canvas and property panel consume:
//!
//! ```json
//! { "type": "rect", "id": "el-1", "x": 0, "y": 0, "width": 5, "height": 5,
//!   "fill": "#000000", "opacity": "1", "transform": "translate(10 20)" }
//! ```

use serde::{Deserialize, Serialize};

use crate::transform::{decode_translation, format_translate, strip_translation};

/// Fill applied when a document does not specify one
pub const DEFAULT_FILL: &str = "#000000";

/// Opacity applied when a document does not specify one
pub const DEFAULT_OPACITY: &str = "1";

/// Font size applied when a text element does not specify one
pub const DEFAULT_FONT_SIZE: f64 = 16.0;

/// The three element kinds, keyed by their SVG tag name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Text,
    Rect,
    Path,
}

impl ElementKind {
    /// SVG tag name for this kind
    pub fn tag_name(&self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Rect => "rect",
            ElementKind::Path => "path",
        }
    }

    /// Kind for an SVG tag name, `None` for tags the scene does not model
    pub fn from_tag_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(ElementKind::Text),
            "rect" => Some(ElementKind::Rect),
            "path" => Some(ElementKind::Path),
            _ => None,
        }
    }
}

/// A `<text>` element
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    pub id: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
}

impl TextElement {
    /// Text at `(x, y)` with default fill, opacity and font size
    pub fn new(id: impl Into<String>, x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            text: text.into(),
            fill: Some(DEFAULT_FILL.to_string()),
            opacity: Some(DEFAULT_OPACITY.to_string()),
            font_size: Some(DEFAULT_FONT_SIZE),
            transform: None,
        }
    }

    /// Font size, falling back to the default
    pub fn font_size_or_default(&self) -> f64 {
        self.font_size.unwrap_or(DEFAULT_FONT_SIZE)
    }
}

/// A `<rect>` element
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RectElement {
    pub id: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
}

impl RectElement {
    pub fn new(id: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width,
            height,
            fill: Some(DEFAULT_FILL.to_string()),
            opacity: Some(DEFAULT_OPACITY.to_string()),
            transform: None,
        }
    }
}

/// A `<path>` element
///
/// `d` is opaque path data. `x`/`y` cache the translation decoded from
/// `transform` so a drag can start from the current position; they are
/// `None` exactly when the path has no transform.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PathElement {
    pub id: String,
    #[serde(default)]
    pub d: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
}

impl PathElement {
    pub fn new(id: impl Into<String>, d: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            d: d.into(),
            x: None,
            y: None,
            fill: Some(DEFAULT_FILL.to_string()),
            opacity: Some(DEFAULT_OPACITY.to_string()),
            transform: None,
        }
    }

    /// Replace the transform and refresh the translation cache from it.
    /// An empty transform clears both.
    pub fn with_transform(self, transform: Option<String>) -> Self {
        let transform = transform.filter(|t| !t.trim().is_empty());
        let (x, y) = match transform.as_deref() {
            Some(t) => {
                let (x, y) = decode_translation(Some(t));
                (Some(x), Some(y))
            }
            None => (None, None),
        };
        Self { x, y, transform, ..self }
    }

    /// Whether the `x`/`y` cache agrees with `transform`
    pub fn is_cache_consistent(&self) -> bool {
        match (self.transform.as_deref(), self.x, self.y) {
            (None, None, None) => true,
            (Some(t), Some(x), Some(y)) => decode_translation(Some(t)) == (x, y),
            _ => false,
        }
    }
}

/// One drawable primitive of a scene
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Text(TextElement),
    Rect(RectElement),
    Path(PathElement),
}

impl Element {
    pub fn id(&self) -> &str {
        match self {
            Element::Text(e) => &e.id,
            Element::Rect(e) => &e.id,
            Element::Path(e) => &e.id,
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Text(_) => ElementKind::Text,
            Element::Rect(_) => ElementKind::Rect,
            Element::Path(_) => ElementKind::Path,
        }
    }

    pub fn fill(&self) -> Option<&str> {
        match self {
            Element::Text(e) => e.fill.as_deref(),
            Element::Rect(e) => e.fill.as_deref(),
            Element::Path(e) => e.fill.as_deref(),
        }
    }

    pub fn opacity(&self) -> Option<&str> {
        match self {
            Element::Text(e) => e.opacity.as_deref(),
            Element::Rect(e) => e.opacity.as_deref(),
            Element::Path(e) => e.opacity.as_deref(),
        }
    }

    pub fn transform(&self) -> Option<&str> {
        match self {
            Element::Text(e) => e.transform.as_deref(),
            Element::Rect(e) => e.transform.as_deref(),
            Element::Path(e) => e.transform.as_deref(),
        }
    }

    /// Copy of this element with a new fill
    pub fn with_fill(&self, fill: impl Into<String>) -> Element {
        let fill = Some(fill.into());
        match self.clone() {
            Element::Text(e) => Element::Text(TextElement { fill, ..e }),
            Element::Rect(e) => Element::Rect(RectElement { fill, ..e }),
            Element::Path(e) => Element::Path(PathElement { fill, ..e }),
        }
    }

    /// Copy of this element with a new opacity
    pub fn with_opacity(&self, opacity: impl Into<String>) -> Element {
        let opacity = Some(opacity.into());
        match self.clone() {
            Element::Text(e) => Element::Text(TextElement { opacity, ..e }),
            Element::Rect(e) => Element::Rect(RectElement { opacity, ..e }),
            Element::Path(e) => Element::Path(PathElement { opacity, ..e }),
        }
    }

    /// Copy of this element with its origin at `(x, y)`.
    ///
    /// Every `translate(...)` in the current transform is replaced by a single
    /// leading `translate(x y)`; other functions are kept in order. Text and
    /// rect geometry `x`/`y` reset to 0 so the translate alone places them.
    pub fn moved_to(&self, x: f64, y: f64) -> Element {
        let rest = strip_translation(self.transform().unwrap_or_default());
        let transform = Some(format_translate(x, y, &rest));
        match self.clone() {
            Element::Text(e) => Element::Text(TextElement { x: 0.0, y: 0.0, transform, ..e }),
            Element::Rect(e) => Element::Rect(RectElement { x: 0.0, y: 0.0, transform, ..e }),
            Element::Path(e) => Element::Path(e.with_transform(transform)),
        }
    }
}

impl From<TextElement> for Element {
    fn from(element: TextElement) -> Self {
        Element::Text(element)
    }
}

impl From<RectElement> for Element {
    fn from(element: RectElement) -> Self {
        Element::Rect(element)
    }
}

impl From<PathElement> for Element {
    fn from(element: PathElement) -> Self {
        Element::Path(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tag_names() {
        for kind in [ElementKind::Text, ElementKind::Rect, ElementKind::Path] {
            assert_eq!(ElementKind::from_tag_name(kind.tag_name()), Some(kind));
        }
        assert_eq!(ElementKind::from_tag_name("circle"), None);
        assert_eq!(ElementKind::from_tag_name("g"), None);
    }

    #[test]
    fn test_path_with_transform_fills_cache() {
        let path = PathElement::new("p", "M0 0L1 1")
            .with_transform(Some("matrix(1,0,0,1,30,40) rotate(5)".to_string()));
        assert_eq!(path.x, Some(30.0));
        assert_eq!(path.y, Some(40.0));
        assert!(path.is_cache_consistent());

        let cleared = path.with_transform(Some("  ".to_string()));
        assert_eq!(cleared.transform, None);
        assert_eq!(cleared.x, None);
        assert!(cleared.is_cache_consistent());
    }

    #[test]
    fn test_moved_path_keeps_rest_and_cache() {
        let path: Element = PathElement::new("p", "M0 0")
            .with_transform(Some("translate(1 2) rotate(45)".to_string()))
            .into();

        let moved = path.moved_to(100.0, 50.0);
        assert_eq!(moved.transform(), Some("translate(100 50) rotate(45)"));
        match &moved {
            Element::Path(p) => {
                assert_eq!((p.x, p.y), (Some(100.0), Some(50.0)));
                assert!(p.is_cache_consistent());
            }
            other => panic!("Expected path, got {:?}", other),
        }

        // The source element is untouched
        assert_eq!(path.transform(), Some("translate(1 2) rotate(45)"));
    }

    #[test]
    fn test_moved_path_over_matrix_reads_new_position() {
        let path: Element = PathElement::new("p", "M0 0")
            .with_transform(Some("matrix(1,0,0,1,30,40)".to_string()))
            .into();
        let moved = path.moved_to(5.0, 6.0);
        assert_eq!(moved.transform(), Some("translate(5 6) matrix(1,0,0,1,30,40)"));
        assert_eq!(decode_translation(moved.transform()), (5.0, 6.0));
    }

    #[test]
    fn test_moved_rect_origin_lands_on_target() {
        let rect: Element = RectElement::new("r", 100.0, 100.0, 3.0, 4.0).into();
        let moved = rect.moved_to(10.0, 10.0);
        assert_eq!(moved.transform(), Some("translate(10 10)"));
        match moved {
            Element::Rect(r) => assert_eq!((r.x, r.y), (0.0, 0.0)),
            other => panic!("Expected rect, got {:?}", other),
        }
    }

    #[test]
    fn test_moved_text_keeps_rest_and_resets_geometry() {
        let text: Element = TextElement {
            transform: Some("translate(5 5) rotate(30)".to_string()),
            ..TextElement::new("t", 40.0, 60.0, "label")
        }
        .into();
        let moved = text.moved_to(1.0, 2.0);
        assert_eq!(moved.transform(), Some("translate(1 2) rotate(30)"));
        match moved {
            Element::Text(t) => {
                assert_eq!((t.x, t.y), (0.0, 0.0));
                assert_eq!(t.text, "label");
            }
            other => panic!("Expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_with_fill_and_opacity_replace() {
        let text: Element = TextElement::new("t", 0.0, 0.0, "hi").into();
        let edited = text.with_fill("#ff0000").with_opacity("0.5");
        assert_eq!(edited.fill(), Some("#ff0000"));
        assert_eq!(edited.opacity(), Some("0.5"));
        assert_eq!(edited.id(), "t");
        assert_eq!(text.fill(), Some(DEFAULT_FILL));
    }

    #[test]
    fn test_serde_shape() {
        let rect: Element = RectElement {
            transform: Some("translate(10 20)".to_string()),
            ..RectElement::new("el-1", 0.0, 0.0, 5.0, 5.0)
        }
        .into();

        let json = serde_json::to_value(&rect).unwrap();
        assert_eq!(json["type"], "rect");
        assert_eq!(json["id"], "el-1");
        assert_eq!(json["fill"], "#000000");
        assert_eq!(json["transform"], "translate(10 20)");

        let text: Element = TextElement::new("t", 1.0, 2.0, "A").into();
        let json = serde_json::to_value(&text).unwrap();
        assert_eq!(json["fontSize"], 16.0);
        assert!(json.get("transform").is_none());
    }

    #[test]
    fn test_deserialize_minimal_ui_shape() {
        let element: Element =
            serde_json::from_str(r#"{"type":"path","id":"p1","d":"M0 0"}"#).unwrap();
        match element {
            Element::Path(p) => {
                assert_eq!(p.d, "M0 0");
                assert_eq!(p.fill, None);
                assert_eq!(p.transform, None);
            }
            other => panic!("Expected path, got {:?}", other),
        }
    }
}

// Round-trip tests: parse -> edit -> generate -> parse
//
// Ids are regenerated on every parse, so comparisons strip them.

use svg_editor_wasm::converters::svg::{generate, parse_with_ids};
use svg_editor_wasm::models::{Element, PathElement, RectElement, Scene, SequentialIds, TextElement};

fn parse_seq(svg: &str) -> Scene {
    parse_with_ids(svg, &mut SequentialIds::new()).expect("document should parse")
}

fn strip_ids(scene: &Scene) -> Vec<serde_json::Value> {
    scene
        .iter()
        .map(|element| {
            let mut value = serde_json::to_value(element).unwrap();
            value.as_object_mut().unwrap().remove("id");
            value
        })
        .collect()
}

#[test]
fn test_round_trip_preserves_order_and_content() {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg">
  <text x="10" y="20" fill="#111111">Title</text>
  <g transform="translate(5 5)">
    <rect x="0" y="0" width="100" height="50" fill="#ff0000" opacity="0.25"/>
    <path d="M0 0 L 10 0 L 10 10 Z" transform="rotate(30)"/>
  </g>
</svg>"##;

    let scene = parse_seq(svg);
    let again = parse_seq(&generate(&scene));
    assert_eq!(strip_ids(&scene), strip_ids(&again));
}

#[test]
fn test_ui_built_scene_normalizes_defaults() {
    // Elements as the UI might create them: no style, no font size
    let scene = Scene::try_from(vec![
        Element::Text(TextElement {
            fill: None,
            opacity: None,
            font_size: None,
            ..TextElement::new("a", 1.0, 2.0, "new text")
        }),
        Element::Rect(RectElement::new("b", 3.0, 4.0, 5.0, 6.0)),
    ])
    .unwrap();

    let output = generate(&scene);
    assert!(output.contains(r#"font-size="16""#));

    let reparsed = parse_seq(&output);
    match &reparsed.elements()[0] {
        Element::Text(text) => {
            assert_eq!(text.text, "new text");
            assert_eq!(text.fill.as_deref(), Some("#000000"));
            assert_eq!(text.opacity.as_deref(), Some("1"));
            assert_eq!(text.font_size, Some(16.0));
        }
        other => panic!("Expected Text element, got {:?}", other),
    }
}

#[test]
fn test_edit_session() {
    let mut scene = parse_seq(
        r##"<svg>
  <rect width="10" height="10"/>
  <path d="M1 1" transform="translate(3 4) scale(2)"/>
  <text>bye</text>
</svg>"##,
    );

    // Recolor the rect, drag the path, delete the text
    let rect_id = scene.elements()[0].id().to_string();
    let path_id = scene.elements()[1].id().to_string();
    let text_id = scene.elements()[2].id().to_string();

    let recolored = scene.get(&rect_id).unwrap().with_fill("#00ff00");
    scene.replace(recolored).unwrap();
    let dragged = scene.get(&path_id).unwrap().moved_to(50.0, 60.0);
    scene.replace(dragged).unwrap();
    scene.remove(&text_id).unwrap();

    let reparsed = parse_seq(&generate(&scene));
    assert_eq!(reparsed.len(), 2);
    assert_eq!(reparsed.elements()[0].fill(), Some("#00ff00"));
    assert_eq!(
        reparsed.elements()[1].transform(),
        Some("translate(50 60) scale(2)")
    );
    assert_eq!(strip_ids(&scene), strip_ids(&reparsed));
}

#[test]
fn test_path_position_only_in_cache() {
    let path = PathElement {
        x: Some(7.0),
        y: Some(8.0),
        ..PathElement::new("p", "M0 0")
    };
    let reparsed = parse_seq(&generate(&Scene::try_from(vec![path.into()]).unwrap()));

    match &reparsed.elements()[0] {
        Element::Path(path) => {
            assert_eq!(path.transform.as_deref(), Some("translate(7 8)"));
            assert_eq!((path.x, path.y), (Some(7.0), Some(8.0)));
        }
        other => panic!("Expected Path element, got {:?}", other),
    }
}

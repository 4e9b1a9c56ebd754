//! The scene: an ordered, flat list of elements
//!
//! Order is paint order (later elements are drawn on top). Ids are unique
//! and non-empty within a scene; every mutating operation keeps it that way.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::element::Element;

/// Errors from editing a scene
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// Element has an empty id
    #[error("Element id must not be empty")]
    EmptyId,

    /// Another element already uses this id
    #[error("Duplicate element id: {0}")]
    DuplicateId(String),

    /// No element with this id
    #[error("Unknown element id: {0}")]
    UnknownId(String),
}

#[derive(Deserialize)]
struct SceneRepr {
    #[serde(default)]
    elements: Vec<Element>,
}

/// Ordered collection of elements making up one document
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(try_from = "SceneRepr")]
pub struct Scene {
    elements: Vec<Element>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Index of the element with `id` in paint order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.id() == id)
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    /// Append an element on top of the scene
    pub fn insert(&mut self, element: Element) -> Result<(), SceneError> {
        if element.id().is_empty() {
            return Err(SceneError::EmptyId);
        }
        if self.contains_id(element.id()) {
            return Err(SceneError::DuplicateId(element.id().to_string()));
        }
        self.elements.push(element);
        Ok(())
    }

    /// Replace the element with the same id, keeping its position.
    /// Returns the replaced element.
    pub fn replace(&mut self, element: Element) -> Result<Element, SceneError> {
        let index = self
            .position(element.id())
            .ok_or_else(|| SceneError::UnknownId(element.id().to_string()))?;
        Ok(std::mem::replace(&mut self.elements[index], element))
    }

    /// Remove and return the element with `id`
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        let index = self.position(id)?;
        Some(self.elements.remove(index))
    }
}

impl TryFrom<Vec<Element>> for Scene {
    type Error = SceneError;

    fn try_from(elements: Vec<Element>) -> Result<Self, Self::Error> {
        let mut scene = Scene::new();
        for element in elements {
            scene.insert(element)?;
        }
        Ok(scene)
    }
}

impl TryFrom<SceneRepr> for Scene {
    type Error = SceneError;

    fn try_from(repr: SceneRepr) -> Result<Self, Self::Error> {
        Scene::try_from(repr.elements)
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::element::{PathElement, RectElement, TextElement};

    fn sample_scene() -> Scene {
        Scene::try_from(vec![
            RectElement::new("a", 0.0, 0.0, 10.0, 10.0).into(),
            TextElement::new("b", 5.0, 5.0, "hello").into(),
            PathElement::new("c", "M0 0L10 10").into(),
        ])
        .unwrap()
    }

    #[test]
    fn test_insert_keeps_order() {
        let scene = sample_scene();
        let ids: Vec<_> = scene.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(scene.position("c"), Some(2));
    }

    #[test]
    fn test_insert_rejects_bad_ids() {
        let mut scene = sample_scene();
        assert_eq!(
            scene.insert(PathElement::new("a", "").into()),
            Err(SceneError::DuplicateId("a".to_string()))
        );
        assert_eq!(scene.insert(PathElement::new("", "").into()), Err(SceneError::EmptyId));
        assert_eq!(scene.len(), 3);
    }

    #[test]
    fn test_replace_in_place() {
        let mut scene = sample_scene();
        let edited = scene.get("b").unwrap().with_fill("#00ff00");
        let old = scene.replace(edited).unwrap();

        assert_eq!(old.fill(), Some("#000000"));
        assert_eq!(scene.position("b"), Some(1));
        assert_eq!(scene.get("b").unwrap().fill(), Some("#00ff00"));

        let missing = RectElement::new("zzz", 0.0, 0.0, 1.0, 1.0).into();
        assert_eq!(scene.replace(missing), Err(SceneError::UnknownId("zzz".to_string())));
    }

    #[test]
    fn test_remove() {
        let mut scene = sample_scene();
        let removed = scene.remove("a").unwrap();
        assert_eq!(removed.id(), "a");
        assert_eq!(scene.len(), 2);
        assert!(!scene.contains_id("a"));
        assert!(scene.remove("a").is_none());
    }

    #[test]
    fn test_deserialize_enforces_unique_ids() {
        let ok: Scene = serde_json::from_str(
            r#"{"elements":[{"type":"rect","id":"a"},{"type":"path","id":"b","d":""}]}"#,
        )
        .unwrap();
        assert_eq!(ok.len(), 2);

        let dup = serde_json::from_str::<Scene>(
            r#"{"elements":[{"type":"rect","id":"a"},{"type":"rect","id":"a"}]}"#,
        );
        assert!(dup.is_err());
    }

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_value(sample_scene()).unwrap();
        assert_eq!(json["elements"].as_array().unwrap().len(), 3);
        assert_eq!(json["elements"][2]["type"], "path");
    }
}

//! In-memory document model implementing [`UiSurface`].
//!
//! The document is an arena of [`Element`]s addressed by [`NodeId`]. It is what the
//! egui shell renders and what the tests drive, standing in for a browser DOM.

mod landing;
mod selector;

pub use landing::landing_page;
pub use selector::{AttributeMatch, Selector};

use std::collections::BTreeMap;

use crate::error::SelectorError;
use crate::surface::{NodeId, ScrollOptions, UiSurface};

/// Tags whose value participates in form reset.
const FIELD_TAGS: [&str; 3] = ["input", "textarea", "select"];

/// A single element of the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    pub styles: BTreeMap<String, String>,
    pub text: String,
    /// Current value of a form field.
    pub value: String,
    /// Value restored by a form reset.
    pub default_value: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl Element {
    /// Creates an element with the given tag name.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self.attributes.insert("id".to_string(), id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        if !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// Sets both the current and the default value of a field.
    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self.default_value = value.to_string();
        self
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    fn is_field(&self) -> bool {
        FIELD_TAGS.contains(&self.tag.as_str())
    }
}

/// Arena-backed document tree.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
    body: NodeId,
    viewport_width: f32,
    scroll_requests: Vec<(NodeId, ScrollOptions)>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(1280.0)
    }
}

impl Document {
    /// Creates an empty document (`html` > `body`) for a viewport of the given width.
    pub fn new(viewport_width: f32) -> Self {
        let mut doc = Self {
            nodes: vec![Element::new("html")],
            body: NodeId(0),
            viewport_width,
            scroll_requests: Vec::new(),
        };
        doc.body = doc.append(doc.root(), Element::new("body"));
        doc
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Appends `element` as the last child of `parent` and returns its handle.
    pub fn append(&mut self, parent: NodeId, mut element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        element.parent = Some(parent);
        element.children.clear();
        self.nodes.push(element);
        if let Some(parent) = self.nodes.get_mut(parent.0) {
            parent.children.push(id);
        }
        id
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0)
    }

    pub fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(node.0)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.element(node).map(Element::children).unwrap_or(&[])
    }

    /// All descendants of `node` in document (pre-)order, excluding `node` itself.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    /// Drains the scroll requests issued since the last call.
    pub fn take_scroll_requests(&mut self) -> Vec<(NodeId, ScrollOptions)> {
        std::mem::take(&mut self.scroll_requests)
    }

    fn select(&self, root: NodeId, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
        let selector: Selector = selector.parse()?;
        Ok(self
            .descendants(root)
            .into_iter()
            .filter(|node| self.element(*node).is_some_and(|el| selector.matches(el)))
            .collect())
    }
}

impl UiSurface for Document {
    fn body(&self) -> NodeId {
        self.body
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|node| self.element(*node).and_then(|el| el.id.as_deref()) == Some(id))
    }

    fn query_selector(&self, selector: &str) -> Result<Option<NodeId>, SelectorError> {
        Ok(self.select(self.root(), selector)?.into_iter().next())
    }

    fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
        self.select(self.root(), selector)
    }

    fn query_within(&self, root: NodeId, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
        self.select(root, selector)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.element(node)?.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(el) = self.element_mut(node) {
            if name == "id" {
                el.id = Some(value.to_string());
            }
            el.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node)
            .is_some_and(|el| el.classes.iter().any(|c| c == class))
    }

    fn toggle_class(&mut self, node: NodeId, class: &str, force: Option<bool>) -> bool {
        let Some(el) = self.element_mut(node) else {
            return false;
        };
        let present = el.classes.iter().any(|c| c == class);
        let wanted = force.unwrap_or(!present);
        if wanted && !present {
            el.classes.push(class.to_string());
        } else if !wanted && present {
            el.classes.retain(|c| c != class);
        }
        wanted
    }

    fn text(&self, node: NodeId) -> String {
        self.element(node).map(|el| el.text.clone()).unwrap_or_default()
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(el) = self.element_mut(node) {
            el.text = text.to_string();
        }
    }

    fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.element(node)?.styles.get(property).cloned()
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(el) = self.element_mut(node) {
            if value.is_empty() {
                el.styles.remove(property);
            } else {
                el.styles.insert(property.to_string(), value.to_string());
            }
        }
    }

    fn form_field(&self, form: NodeId, name: &str) -> Option<NodeId> {
        self.descendants(form).into_iter().find(|node| {
            self.element(*node).is_some_and(|el| {
                el.is_field() && el.attributes.get("name").map(String::as_str) == Some(name)
            })
        })
    }

    fn value(&self, node: NodeId) -> String {
        self.element(node).map(|el| el.value.clone()).unwrap_or_default()
    }

    fn set_value(&mut self, node: NodeId, value: &str) {
        if let Some(el) = self.element_mut(node) {
            el.value = value.to_string();
        }
    }

    fn reset_form(&mut self, form: NodeId) {
        for node in self.descendants(form) {
            if let Some(el) = self.element_mut(node) {
                if el.is_field() {
                    el.value = el.default_value.clone();
                }
            }
        }
    }

    fn scroll_into_view(&mut self, node: NodeId, options: ScrollOptions) {
        self.scroll_requests.push((node, options));
    }

    fn viewport_width(&self) -> f32 {
        self.viewport_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, NodeId, NodeId) {
        let mut doc = Document::new(1024.0);
        let body = doc.body();
        let form = doc.append(body, Element::new("form").with_id("contactForm"));
        let name = doc.append(
            form,
            Element::new("input").with_attribute("name", "name").with_value("preset"),
        );
        doc.append(form, Element::new("textarea").with_attribute("name", "message"));
        doc.append(body, Element::new("a").with_attribute("href", "#contactForm"));
        doc.append(body, Element::new("a").with_attribute("href", "/about"));
        (doc, form, name)
    }

    #[test]
    fn test_lookup_by_id_and_selector() {
        let (doc, form, _) = sample();
        assert_eq!(doc.element_by_id("contactForm"), Some(form));
        assert_eq!(doc.element_by_id("missing"), None);
        assert_eq!(doc.query_selector("#contactForm").unwrap(), Some(form));

        let anchors = doc.query_selector_all(r##"a[href^="#"]"##).unwrap();
        assert_eq!(anchors.len(), 1);
        assert!(doc.query_selector("#1abc").is_err());
    }

    #[test]
    fn test_descendants_are_in_document_order() {
        let (doc, form, name) = sample();
        let all = doc.descendants(doc.root());
        assert_eq!(all[0], doc.body());
        assert_eq!(all[1], form);
        assert_eq!(all[2], name);
    }

    #[test]
    fn test_toggle_class_with_force() {
        let (mut doc, form, _) = sample();
        assert!(doc.toggle_class(form, "open", None));
        assert!(doc.has_class(form, "open"));
        assert!(doc.toggle_class(form, "open", Some(true)));
        assert!(!doc.toggle_class(form, "open", None));
        assert!(!doc.has_class(form, "open"));
        assert!(!doc.toggle_class(form, "open", Some(false)));
    }

    #[test]
    fn test_empty_style_removes_property() {
        let (mut doc, form, _) = sample();
        doc.set_style(form, "display", "flex");
        assert_eq!(doc.style(form, "display").as_deref(), Some("flex"));
        doc.set_style(form, "display", "");
        assert_eq!(doc.style(form, "display"), None);
    }

    #[test]
    fn test_reset_form_restores_defaults() {
        let (mut doc, form, name) = sample();
        let message = doc.form_field(form, "message").unwrap();

        doc.set_value(name, "Ada");
        doc.set_value(message, "Hello there");
        doc.reset_form(form);

        assert_eq!(doc.value(name), "preset");
        assert_eq!(doc.value(message), "");
    }

    #[test]
    fn test_scroll_requests_are_drained() {
        let (mut doc, form, _) = sample();
        doc.scroll_into_view(form, ScrollOptions::SMOOTH_TOP);
        assert_eq!(doc.take_scroll_requests(), vec![(form, ScrollOptions::SMOOTH_TOP)]);
        assert!(doc.take_scroll_requests().is_empty());
    }
}

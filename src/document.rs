//! Host document abstraction.
//!
//! The localizer never touches a concrete DOM. It talks to a [`Document`],
//! which a browser binding can implement over the real page and which
//! [`MemoryDocument`] implements in memory for tests and tooling.

use std::collections::BTreeMap;

/// Loading state of the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadyState {
    #[default]
    Loading,
    Interactive,
    Complete,
}

/// Handle to an element, valid for the document that returned it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// The operations the localizer and the stock managers need from a page.
pub trait Document {
    fn ready_state(&self) -> ReadyState;

    /// All elements carrying `attribute`, in document order.
    fn query_attribute(&self, attribute: &str) -> Vec<NodeId>;

    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    fn text_content(&self, node: NodeId) -> Option<String>;

    /// Replaces all prior text content of the element.
    fn set_text_content(&mut self, node: NodeId, text: &str);

    fn property(&self, node: NodeId, name: &str) -> Option<String>;

    fn set_property(&mut self, node: NodeId, name: &str, value: &str);

    /// Location fragment without the leading `#`.
    fn fragment(&self) -> String;

    fn set_fragment(&mut self, fragment: &str);

    /// Raw cookie string, empty when no cookie is set.
    fn cookie(&self) -> String;

    fn set_cookie(&mut self, cookie: &str);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    properties: BTreeMap<String, String>,
    text: String,
}

/// Flat in-memory document. Elements are kept in insertion order, which is
/// also their document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    ready_state: ReadyState,
    elements: Vec<Element>,
    fragment: String,
    cookie: String,
}

impl MemoryDocument {
    /// Create an empty document in the `Loading` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty, fully loaded document.
    pub fn complete() -> Self {
        Self {
            ready_state: ReadyState::Complete,
            ..Self::default()
        }
    }

    pub fn set_ready_state(&mut self, state: ReadyState) {
        self.ready_state = state;
    }

    /// Append an element with the given tag name.
    pub fn push_element(&mut self, tag: &str) -> NodeId {
        self.elements.push(Element {
            tag: tag.to_string(),
            ..Element::default()
        });
        NodeId(self.elements.len() - 1)
    }

    /// Append an element tagged with a translation key under `marker`.
    pub fn push_tagged(&mut self, tag: &str, marker: &str, key: &str) -> NodeId {
        let node = self.push_element(tag);
        self.set_attribute(node, marker, key);
        node
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(node.0) {
            element.attributes.insert(name.to_string(), value.to_string());
        }
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.elements.get(node.0).map(|e| e.tag.as_str())
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Document for MemoryDocument {
    fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    fn query_attribute(&self, attribute: &str) -> Vec<NodeId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.attributes.contains_key(attribute))
            .map(|(index, _)| NodeId(index))
            .collect()
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.elements.get(node.0)?.attributes.get(name).cloned()
    }

    fn text_content(&self, node: NodeId) -> Option<String> {
        self.elements.get(node.0).map(|e| e.text.clone())
    }

    fn set_text_content(&mut self, node: NodeId, text: &str) {
        if let Some(element) = self.elements.get_mut(node.0) {
            element.text = text.to_string();
        }
    }

    fn property(&self, node: NodeId, name: &str) -> Option<String> {
        self.elements.get(node.0)?.properties.get(name).cloned()
    }

    fn set_property(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(node.0) {
            element.properties.insert(name.to_string(), value.to_string());
        }
    }

    fn fragment(&self) -> String {
        self.fragment.clone()
    }

    fn set_fragment(&mut self, fragment: &str) {
        self.fragment = fragment.strip_prefix('#').unwrap_or(fragment).to_string();
    }

    fn cookie(&self) -> String {
        self.cookie.clone()
    }

    fn set_cookie(&mut self, cookie: &str) {
        self.cookie = cookie.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_loading() {
        let doc = MemoryDocument::new();
        assert_eq!(doc.ready_state(), ReadyState::Loading);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_query_attribute_returns_document_order() {
        let mut doc = MemoryDocument::complete();
        let first = doc.push_tagged("h1", "data-i18nd", "title");
        doc.push_element("div");
        let third = doc.push_tagged("p", "data-i18nd", "body");

        assert_eq!(doc.query_attribute("data-i18nd"), vec![first, third]);
        assert!(doc.query_attribute("data-other").is_empty());
    }

    #[test]
    fn test_set_text_content_replaces_previous_text() {
        let mut doc = MemoryDocument::complete();
        let node = doc.push_element("p");
        doc.set_text_content(node, "old");
        doc.set_text_content(node, "new");
        assert_eq!(doc.text_content(node).as_deref(), Some("new"));
    }

    #[test]
    fn test_properties_are_separate_from_text() {
        let mut doc = MemoryDocument::complete();
        let node = doc.push_element("img");
        doc.set_property(node, "alt", "Logo");
        assert_eq!(doc.property(node, "alt").as_deref(), Some("Logo"));
        assert_eq!(doc.text_content(node).as_deref(), Some(""));
    }

    #[test]
    fn test_set_fragment_strips_leading_hash() {
        let mut doc = MemoryDocument::new();
        doc.set_fragment("#fr");
        assert_eq!(doc.fragment(), "fr");
        doc.set_fragment("de");
        assert_eq!(doc.fragment(), "de");
    }

    #[test]
    fn test_unknown_node_is_ignored() {
        let mut doc = MemoryDocument::complete();
        let other = MemoryDocument::complete().push_element("p");
        doc.set_text_content(other, "lost");
        assert_eq!(doc.text_content(other), None);
        assert_eq!(doc.tag(other), None);
    }
}

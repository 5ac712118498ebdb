//! Locating marker elements inside a parsed document.
//!
//! Lesson pages embed their content in `div` elements identified by
//! class or id substrings. The locator walks the tree iteratively in
//! depth-first pre-order and returns the first element matching a
//! [`Marker`] predicate, so "first match in document order" is an explicit,
//! testable contract rather than a property of recursion order.

use crate::dom::{self, Document, NodeRef};

/// Predicate describing the element to find: a tag name plus a substring
/// match against the `class` attribute, the `id` attribute, or either.
#[derive(Debug, Clone)]
pub struct Marker<'a> {
    /// Tag name the element must have (compared lowercased).
    pub tag: &'a str,
    /// Substring the `class` attribute must contain, if set.
    pub class_part: Option<&'a str>,
    /// Substring the `id` attribute must contain, if set.
    pub id_part: Option<&'a str>,
}

impl<'a> Marker<'a> {
    /// Marker matching `tag` elements whose class contains `class_part`.
    #[must_use]
    pub fn by_class(tag: &'a str, class_part: &'a str) -> Self {
        Self {
            tag,
            class_part: Some(class_part),
            id_part: None,
        }
    }

    /// Marker matching `tag` elements whose class contains `class_part`
    /// OR whose id contains `id_part`.
    #[must_use]
    pub fn by_class_or_id(tag: &'a str, class_part: &'a str, id_part: &'a str) -> Self {
        Self {
            tag,
            class_part: Some(class_part),
            id_part: Some(id_part),
        }
    }

    /// Test a single node against this marker.
    ///
    /// Non-element nodes and elements without attributes never match; when
    /// both substrings are set, either one is sufficient.
    #[must_use]
    pub fn matches(&self, node: &NodeRef) -> bool {
        if !node.is_element() {
            return false;
        }

        let Some(tag) = dom::node_name(node) else {
            return false;
        };
        if tag != self.tag {
            return false;
        }

        let class_hit = self
            .class_part
            .is_some_and(|part| dom::node_attr(node, "class").is_some_and(|v| v.contains(part)));
        let id_hit = self
            .id_part
            .is_some_and(|part| dom::node_attr(node, "id").is_some_and(|v| v.contains(part)));

        match (self.class_part, self.id_part) {
            (None, None) => true,
            _ => class_hit || id_hit,
        }
    }
}

/// Find the first element under `root` (inclusive) matching `marker`,
/// in depth-first pre-order.
///
/// The traversal is iterative: children are pushed onto an explicit stack in
/// reverse so that pop order equals document order. Deeply nested documents
/// therefore cannot overflow the call stack.
#[must_use]
pub fn find_first<'a>(root: NodeRef<'a>, marker: &Marker) -> Option<NodeRef<'a>> {
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if marker.matches(&node) {
            return Some(node);
        }

        let mut children = Vec::new();
        for child in node.children() {
            children.push(child);
        }
        while let Some(child) = children.pop() {
            stack.push(child);
        }
    }

    None
}

/// Find the first element in a whole document matching `marker`.
#[must_use]
pub fn find_in<'a>(doc: &'a Document, marker: &Marker) -> Option<NodeRef<'a>> {
    let root = doc.select("html").nodes().first().copied()?;
    find_first(root, marker)
}

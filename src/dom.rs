//! DOM operations adapter.
//!
//! Thin wrappers over the `dom_query` crate covering the handful of
//! operations the extraction pipeline needs: parsing, attribute access by
//! name, serialization, and tree-level node removal. Keeping them in one
//! place keeps the rest of the crate free of `dom_query` details.

// Re-export core types for the rest of the crate
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril; dom_query hands back text as tendrils
pub use tendril::StrTendril;

/// Parse an HTML string into a document.
///
/// Parsing is tolerant: malformed markup produces a best-effort tree rather
/// than an error.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Node-level accessors ===

/// Get a node's tag name, lowercased. `None` for non-element nodes.
#[must_use]
pub fn node_name(node: &NodeRef) -> Option<String> {
    node.node_name().map(|t| t.to_lowercase())
}

/// Look up an attribute value by name, searching the whole attribute list.
///
/// Attribute order in the source document is irrelevant here; the first
/// attribute with a matching name wins. Returns `None` for elements with no
/// attributes.
#[must_use]
pub fn node_attr(node: &NodeRef, name: &str) -> Option<String> {
    node.attrs()
        .iter()
        .find(|attr| attr.name.local.as_ref().eq_ignore_ascii_case(name))
        .map(|attr| attr.value.to_string())
}

/// Detach a node (and its whole subtree) from the tree.
#[inline]
pub fn detach(node: &NodeRef) {
    Selection::from(*node).remove();
}

// === Selection-level accessors ===

/// Get any attribute value from the first node of a selection.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Set an attribute value on every node of a selection.
#[inline]
pub fn set_attribute(sel: &Selection, name: &str, value: &str) {
    sel.set_attr(name, value);
}

/// Get all text content of a selection and its descendants.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get inner HTML of a selection.
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Get outer HTML of a selection.
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

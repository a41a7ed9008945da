//! Tree helpers over `kuchiki` documents.
//!
//! Mirrors the handful of browser DOM operations the decorator needs:
//! selector queries, inner markup read/write, class lists and element
//! creation.

use html5ever::{LocalName, Namespace, QualName};
use kuchiki::traits::TendrilSink;
use kuchiki::{Attribute, ElementData, ExpandedName, NodeDataRef, NodeRef};

use super::DecorateError;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// A selected element.
pub type Element = NodeDataRef<ElementData>;

/// Qualified name of an HTML element.
pub fn html_name(local: &str) -> QualName {
    QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from(local))
}

/// Create a detached HTML element carrying `attrs`.
pub fn new_element(local: &str, attrs: &[(&str, &str)]) -> NodeRef {
    let node = NodeRef::new_element(
        html_name(local),
        std::iter::empty::<(ExpandedName, Attribute)>(),
    );
    if let Some(element) = node.as_element() {
        let mut attributes = element.attributes.borrow_mut();
        for (name, value) in attrs {
            attributes.insert(*name, (*value).to_string());
        }
    }
    node
}

/// All elements under `root` matching `selector`, in document order.
///
/// Matches are collected up front so callers can mutate the tree while
/// walking them.
pub fn select_all(root: &NodeRef, selector: &str) -> Result<Vec<Element>, DecorateError> {
    let matches = root
        .select(selector)
        .map_err(|()| DecorateError::InvalidSelector(selector.to_string()))?;
    Ok(matches.collect())
}

/// First element under `root` matching `selector`.
pub fn select_first(root: &NodeRef, selector: &str) -> Result<Option<Element>, DecorateError> {
    let mut matches = root
        .select(selector)
        .map_err(|()| DecorateError::InvalidSelector(selector.to_string()))?;
    Ok(matches.next())
}

/// Check that `selector` parses.
pub fn is_valid_selector(selector: &str) -> bool {
    kuchiki::Selectors::compile(selector).is_ok()
}

/// Read an attribute value.
pub fn attr(element: &ElementData, name: &str) -> Option<String> {
    element.attributes.borrow().get(name).map(str::to_string)
}

/// Set an attribute value, replacing any previous one.
pub fn set_attr(element: &ElementData, name: &str, value: impl Into<String>) {
    element.attributes.borrow_mut().insert(name, value.into());
}

/// Add classes to an element's class list, skipping those already present.
pub fn add_classes<'a>(element: &ElementData, classes: impl IntoIterator<Item = &'a str>) {
    let mut attributes = element.attributes.borrow_mut();
    let mut list: Vec<String> = attributes
        .get("class")
        .map(|value| value.split_ascii_whitespace().map(str::to_string).collect())
        .unwrap_or_default();

    for class in classes {
        if !list.iter().any(|c| c == class) {
            list.push(class.to_string());
        }
    }

    attributes.insert("class", list.join(" "));
}

/// Serialized markup of a node's children.
pub fn inner_html(node: &NodeRef) -> String {
    node.children().map(|child| child.to_string()).collect()
}

/// Replace a node's children with the parse of `markup`.
pub fn set_inner_html(node: &NodeRef, markup: &str) {
    remove_children(node);
    for child in parse_fragment(markup) {
        node.append(child);
    }
}

/// Detach every child of `node`.
pub fn remove_children(node: &NodeRef) {
    let children: Vec<NodeRef> = node.children().collect();
    for child in children {
        child.detach();
    }
}

/// Parse an HTML fragment in a `<div>` context into detached nodes.
pub fn parse_fragment(markup: &str) -> Vec<NodeRef> {
    let document = kuchiki::parse_fragment(html_name("div"), Vec::new()).one(markup);

    // Fragment content sits under a synthetic <html> root
    let Some(root) = document.first_child() else {
        return Vec::new();
    };

    let nodes: Vec<NodeRef> = root.children().collect();
    for node in &nodes {
        node.detach();
    }
    nodes
}

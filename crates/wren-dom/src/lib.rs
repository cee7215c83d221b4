//! Node tree for the Wren fragment parser.
//!
//! A parsed fragment is an ordered list of top-level [`Node`]s. Each node
//! owns its children outright: there are no parent pointers, no shared
//! nodes and no arena, so a fragment can be moved, cloned or sent to
//! another thread like any other value.
//!
//! # Design
//!
//! [`Node`] is a closed sum type with exactly three variants. Code that
//! walks a tree matches on it exhaustively instead of probing which
//! optional fields happen to be present.
//!
//! # Depth
//!
//! Dropping a tree, [`Node::descendants`], [`Node::text_content`] and
//! [`find_element`] use a heap work-list, so they handle any nesting depth.
//! The derived `Clone`, `PartialEq` and `Debug` impls and JSON
//! serialization recurse once per level and need stack space in proportion
//! to the depth of the tree.

use std::collections::{HashMap, HashSet};
use std::mem;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Map of attribute names to values for an element.
///
/// Insertion order is not preserved. A name written twice keeps the
/// value written last.
pub type AttributesMap = HashMap<String, String>;

/// A single node in a parsed fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with its attributes and children.
    Element(ElementData),
    /// A maximal run of characters containing no `<`, kept verbatim.
    Text(String),
    /// The raw text between `<!--` and the first following `-->`.
    Comment(String),
}

/// Element-specific data.
///
/// `tag_name` keeps the case it was written in. Comparisons against close
/// tags and the void element table are ASCII case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementData {
    /// The tag name as written in the source.
    pub tag_name: String,
    /// The element's attributes.
    pub attrs: AttributesMap,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl ElementData {
    /// Create an element with no attributes and no children.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attrs: AttributesMap::new(),
            children: Vec::new(),
        }
    }

    /// Returns the value of the named attribute, if present.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Returns the element's id attribute value if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// Returns the set of class names from the class attribute.
    #[must_use]
    pub fn classes(&self) -> HashSet<&str> {
        self.attr("class").map_or_else(HashSet::new, |list| {
            list.split_ascii_whitespace().collect()
        })
    }

    /// ASCII case-insensitive tag name comparison.
    #[must_use]
    pub fn has_tag_name(&self, name: &str) -> bool {
        self.tag_name.eq_ignore_ascii_case(name)
    }
}

/// Children are released through a work-list instead of recursively, so
/// dropping a deeply nested tree cannot overflow the stack.
impl Drop for ElementData {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Element(mut data) = node {
                pending.append(&mut data.children);
            }
        }
    }
}

impl Node {
    /// Shorthand for a text node.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Shorthand for a comment node.
    #[must_use]
    pub fn comment(content: impl Into<String>) -> Self {
        Self::Comment(content.into())
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub const fn as_element(&self) -> Option<&ElementData> {
        match self {
            Self::Element(data) => Some(data),
            _ => None,
        }
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Get comment content if this node is a comment.
    #[must_use]
    pub fn as_comment(&self) -> Option<&str> {
        match self {
            Self::Comment(text) => Some(text),
            _ => None,
        }
    }

    /// Child nodes; always empty for text and comments.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Element(data) => &data.children,
            Self::Text(_) | Self::Comment(_) => &[],
        }
    }

    /// Iterate over this node and everything below it, depth-first, in
    /// document order.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Concatenated text of every text node at or below this one.
    /// Comments contribute nothing.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.descendants().filter_map(Self::as_text).collect()
    }
}

/// Find the first element named `tag` (ASCII case-insensitive), searching
/// each node of `nodes` depth-first in document order.
#[must_use]
pub fn find_element<'a>(nodes: &'a [Node], tag: &str) -> Option<&'a ElementData> {
    nodes
        .iter()
        .flat_map(Node::descendants)
        .filter_map(Node::as_element)
        .find(|data| data.has_tag_name(tag))
}

/// Pre-order iterator over a node and its descendants.
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

/// Serializes as `{"type": "element", "tagName", "attributes", "children"}`,
/// `{"type": "text", "content"}` or `{"type": "comment", "content"}`.
/// Empty `children` lists are omitted.
impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Element(data) => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("type", "element")?;
                map.serialize_entry("tagName", &data.tag_name)?;
                let mut attrs: Vec<_> = data.attrs.iter().collect();
                attrs.sort();
                map.serialize_entry("attributes", &SortedAttrs(&attrs))?;
                if !data.children.is_empty() {
                    map.serialize_entry("children", &data.children)?;
                }
                map.end()
            }
            Self::Text(content) | Self::Comment(content) => {
                let kind = if matches!(self, Self::Text(_)) {
                    "text"
                } else {
                    "comment"
                };
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", kind)?;
                map.serialize_entry("content", content)?;
                map.end()
            }
        }
    }
}

/// Attributes sorted by name so JSON output is stable across runs.
struct SortedAttrs<'a>(&'a [(&'a String, &'a String)]);

impl Serialize for SortedAttrs<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

//! Structural comparison of a parsed fragment against an expected shape.
//!
//! An [`ExpectedNode`] is a partial description: fields left out are not
//! checked, except `children`, whose absence means "no children". Expected
//! trees can be written in Rust with the builder methods or loaded from
//! JSON:
//!
//! ```
//! use wren_html::expect::{ExpectedNode, matches_fragment};
//!
//! let expected: Vec<ExpectedNode> = serde_json::from_str(
//!     r#"[{ "tag": "a", "attributes": { "href": "/" }, "children": [{ "text": "Home" }] }]"#,
//! ).unwrap();
//! let nodes = wren_html::parse(r#"<a href="/" class="nav">Home</a>"#).unwrap();
//! assert!(matches_fragment(&nodes, &expected));
//! ```

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;
use wren_dom::Node;

/// Expected shape of one node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExpectedNode {
    /// Tag name; must equal the actual tag name exactly, and be absent for
    /// non-elements.
    pub tag: Option<String>,
    /// Text content; must be absent unless the node is a text node.
    pub text: Option<String>,
    /// Comment content; must be absent unless the node is a comment.
    pub comment: Option<String>,
    /// Attributes that must be present with these values. Extra actual
    /// attributes are ignored.
    pub attributes: Option<HashMap<String, String>>,
    /// Expected children. `None` requires the actual node to have none.
    pub children: Option<Vec<ExpectedNode>>,
}

impl ExpectedNode {
    /// Expect an element named `tag` with no children.
    #[must_use]
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Self::default()
        }
    }

    /// Expect a text node with exactly `content`.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            text: Some(content.into()),
            ..Self::default()
        }
    }

    /// Expect a comment with exactly `content`.
    #[must_use]
    pub fn comment(content: impl Into<String>) -> Self {
        Self {
            comment: Some(content.into()),
            ..Self::default()
        }
    }

    /// Also require attribute `name` with `value`.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let _ = self
            .attributes
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Expect exactly these children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = Some(children);
        self
    }
}

/// Where and why a fragment differs from its expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("at {path}: {reason}")]
pub struct Mismatch {
    /// Index path to the differing node, e.g. `[0].children[2]`; empty for
    /// the top-level list.
    pub path: String,
    /// What differed.
    pub reason: String,
}

/// Compare `actual` with `expected`, reporting the first difference.
///
/// # Errors
///
/// Returns the first [`Mismatch`] in document order.
pub fn check_fragment(actual: &[Node], expected: &[ExpectedNode]) -> Result<(), Mismatch> {
    check_siblings(actual, expected, "")
}

/// Whether `actual` has the shape described by `expected`.
#[must_use]
pub fn matches_fragment(actual: &[Node], expected: &[ExpectedNode]) -> bool {
    check_fragment(actual, expected).is_ok()
}

fn check_siblings(actual: &[Node], expected: &[ExpectedNode], path: &str) -> Result<(), Mismatch> {
    if actual.len() != expected.len() {
        return Err(Mismatch {
            path: path.to_string(),
            reason: format!("expected {} nodes, found {}", expected.len(), actual.len()),
        });
    }
    for (index, (node, shape)) in actual.iter().zip(expected).enumerate() {
        check_node(node, shape, &format!("{path}[{index}]"))?;
    }
    Ok(())
}

fn check_node(node: &Node, expected: &ExpectedNode, path: &str) -> Result<(), Mismatch> {
    let fail = |reason: String| Mismatch {
        path: path.to_string(),
        reason,
    };

    let (tag, text, comment) = match node {
        Node::Element(data) => (Some(data.tag_name.as_str()), None, None),
        Node::Text(text) => (None, Some(text.as_str()), None),
        Node::Comment(text) => (None, None, Some(text.as_str())),
    };
    for (field, actual, wanted) in [
        ("tag", tag, expected.tag.as_deref()),
        ("text", text, expected.text.as_deref()),
        ("comment", comment, expected.comment.as_deref()),
    ] {
        if actual != wanted {
            return Err(fail(format!("{field}: expected {wanted:?}, found {actual:?}")));
        }
    }

    for (name, value) in expected.attributes.iter().flatten() {
        let found = node.as_element().and_then(|data| data.attr(name));
        if found != Some(value.as_str()) {
            return Err(fail(format!(
                "attribute '{name}': expected {value:?}, found {found:?}"
            )));
        }
    }

    match &expected.children {
        Some(children) => check_siblings(node.children(), children, &format!("{path}.children")),
        None if node.children().is_empty() => Ok(()),
        None => Err(fail(format!(
            "expected no children, found {}",
            node.children().len()
        ))),
    }
}

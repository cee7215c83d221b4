//! Indented, human-readable dump of a parsed fragment.

use std::fmt::{self, Write};

use wren_dom::Node;

/// Write `nodes` one per line, children indented two spaces below their
/// parent.
///
/// Text is written as a Rust string literal (`"a b\n"`), so whitespace and
/// control characters stay visible and distinct. Attributes are sorted by
/// name. Nodes are visited with a work-list, so any depth can be written.
///
/// # Errors
///
/// Propagates errors from `out`.
pub fn write_tree<W: Write>(out: &mut W, nodes: &[Node], indent: usize) -> fmt::Result {
    let mut pending: Vec<(&Node, usize)> = nodes.iter().rev().map(|node| (node, indent)).collect();
    while let Some((node, depth)) = pending.pop() {
        let prefix = "  ".repeat(depth);
        match node {
            Node::Element(data) => {
                if data.attrs.is_empty() {
                    writeln!(out, "{prefix}<{}>", data.tag_name)?;
                } else {
                    let mut attrs: Vec<String> = data
                        .attrs
                        .iter()
                        .map(|(k, v)| format!("{k}=\"{v}\""))
                        .collect();
                    attrs.sort();
                    writeln!(out, "{prefix}<{} {}>", data.tag_name, attrs.join(" "))?;
                }
                pending.extend(data.children.iter().rev().map(|child| (child, depth + 1)));
            }
            Node::Text(data) => writeln!(out, "{prefix}{data:?}")?,
            Node::Comment(data) => writeln!(out, "{prefix}<!--{data}-->")?,
        }
    }
    Ok(())
}

/// Render `nodes` with [`write_tree`] into a string.
#[must_use]
pub fn format_tree(nodes: &[Node]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_tree(&mut out, nodes, 0);
    out
}

/// Print `nodes` to stdout with [`write_tree`].
pub fn print_tree(nodes: &[Node], indent: usize) {
    let mut out = String::new();
    let _ = write_tree(&mut out, nodes, indent);
    print!("{out}");
}

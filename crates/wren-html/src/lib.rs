//! Strict markup fragment parser.
//!
//! # Scope
//!
//! This crate parses a fragment of markup (no `<html>`/`<body>` wrapper
//! required) directly from text into a [`Node`] tree. It recognizes four
//! productions, tried in this order at every step:
//!
//! - **Open tag**: `<name`, then `name="value"` attributes, then `>`.
//!   Void elements (`br`, `img`, `input`, ...) take no content.
//! - **Comment**: `<!--` up to the first `-->`.
//! - **Close tag**: `</name>`, which must match the innermost open element
//!   ignoring ASCII case.
//! - **Text**: a run of characters other than `<`.
//!
//! Anything else is a [`ParseError`]. There is no error recovery.
//!
//! # Not Implemented
//!
//! - Character references: `&amp;` stays `&amp;`
//! - Unquoted or single-quoted attribute values
//! - DOCTYPE, CDATA, and raw text elements (`script`, `style`)
//! - Implied end tags and other HTML5 tree-construction rules

/// Anchored pattern matching over the input.
pub mod cursor;
/// Parse errors and issues.
pub mod error;
/// Comparing a parsed fragment against an expected shape.
pub mod expect;
/// The fragment parser.
pub mod parser;
/// Indented tree dump.
pub mod print;

pub use error::{IssueKind, ParseError, ParseIssue, Position};
pub use parser::{FragmentParser, VOID_ELEMENTS, is_void_element};
pub use print::{format_tree, print_tree};
pub use wren_dom::{AttributesMap, ElementData, Node};

/// Parse `input` into its top-level nodes.
///
/// Input that ends while elements are still open succeeds, closing them
/// implicitly; use [`FragmentParser::with_strict_mode`] to reject it.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered.
///
/// # Example
///
/// ```
/// let nodes = wren_html::parse(r#"<a href="https://google.com">Google</a>"#).unwrap();
/// let link = nodes[0].as_element().unwrap();
/// assert_eq!(link.attr("href"), Some("https://google.com"));
/// assert_eq!(nodes[0].text_content(), "Google");
/// ```
pub fn parse(input: &str) -> Result<Vec<Node>, ParseError> {
    FragmentParser::new(input).run()
}

//! Parse failures and non-fatal parse issues.

use std::fmt;

use strum::IntoEnumIterator;
use strum_macros::Display;
use thiserror::Error;

use crate::cursor::Production;

/// A location in the parsed source.
///
/// `line` and `column` are 1-based; `column` counts characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Byte offset into the source.
    pub offset: usize,
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number within the line, starting at 1.
    pub column: usize,
}

impl Position {
    /// Resolve a byte offset in `source` to a line and column.
    ///
    /// Offsets past the end are clamped to the end of the source.
    #[must_use]
    pub fn locate(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let before = source.get(..offset).unwrap_or(source);
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);

        Self {
            offset,
            line: before.matches('\n').count() + 1,
            column: before[line_start..].chars().count() + 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Why a parse failed. Parsing stops at the first failure and no partial
/// tree is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A close tag that does not name the innermost open element, or a
    /// close tag with no element open at all.
    #[error("[{position}] closing tag </{found}> doesn't match {}", describe_open(.expected.as_deref()))]
    MismatchedCloseTag {
        /// Tag name of the innermost open element, if any.
        expected: Option<String>,
        /// Tag name written in the close tag.
        found: String,
        /// Start of the close tag.
        position: Position,
    },

    /// An open tag whose attributes are not followed by `>`.
    #[error("[{position}] malformed open tag <{tag}>: expected `name=\"value\"` or `>`")]
    MalformedOpenTag {
        /// Tag name of the element being opened.
        tag: String,
        /// Where the `>` was expected.
        position: Position,
    },

    /// Nothing recognizable at the cursor: a stray `<`, or a comment with
    /// no `-->`.
    #[error("[{position}] no rules matched (tried {})", production_list())]
    NoProductionMatched {
        /// Where matching was attempted.
        position: Position,
    },

    /// Input ended with an element still open. Only reported in strict
    /// mode.
    #[error("[{position}] <{tag}> is never closed")]
    UnclosedElement {
        /// Tag name of the innermost open element.
        tag: String,
        /// Start of that element's open tag.
        position: Position,
    },
}

impl ParseError {
    /// Where in the source the failure was detected.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::MismatchedCloseTag { position, .. }
            | Self::MalformedOpenTag { position, .. }
            | Self::NoProductionMatched { position }
            | Self::UnclosedElement { position, .. } => *position,
        }
    }
}

fn describe_open(expected: Option<&str>) -> String {
    expected.map_or_else(
        || String::from("any open element"),
        |tag| format!("open element <{tag}>"),
    )
}

fn production_list() -> String {
    Production::iter()
        .map(|production| production.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The kind of a non-fatal [`ParseIssue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum IssueKind {
    /// The same attribute name appeared twice in one open tag; the last
    /// value was kept.
    DuplicateAttribute,
    /// Input ended while the element was still open; it was closed
    /// implicitly.
    UnclosedElement,
}

/// A finding that did not stop the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// What kind of finding this is.
    pub kind: IssueKind,
    /// Human-readable description.
    pub message: String,
    /// Where it was found.
    pub position: Position,
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.position, self.kind, self.message)
    }
}

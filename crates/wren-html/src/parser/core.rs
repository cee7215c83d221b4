use std::mem;

use strum::IntoEnumIterator;

use wren_dom::{ElementData, Node};

use super::void::is_void_element;
use crate::cursor::{Consumed, Cursor, Production};
use crate::error::{IssueKind, ParseError, ParseIssue, Position};

/// An element whose close tag has not been seen yet.
#[derive(Debug)]
struct OpenElement {
    /// The element under construction; children are appended here.
    data: ElementData,
    /// Byte offset of the element's `<`.
    start: usize,
}

/// Builds a node tree from a markup fragment.
///
/// Parsing works directly on the text: at each step the parser tries the
/// four [`Production`]s in priority order (open tag, comment, close tag,
/// text) against the cursor and applies the first that matches.
///
/// Nesting is tracked with an explicit stack of open elements rather than
/// the call stack, so deeply nested input cannot overflow the stack. The
/// implicit root container is the bottom of that stack and is never
/// returned; callers get its children.
///
/// # Example
///
/// ```
/// use wren_html::FragmentParser;
///
/// let nodes = FragmentParser::new("<p>Hi<br></p>").run().unwrap();
/// assert_eq!(nodes.len(), 1);
/// assert_eq!(nodes[0].children().len(), 2);
/// ```
pub struct FragmentParser<'a> {
    /// Input not yet matched by any production.
    pub(super) cursor: Cursor<'a>,

    /// Children of the implicit root container: the top-level siblings.
    root_children: Vec<Node>,

    /// Innermost open element last.
    stack_of_open_elements: Vec<OpenElement>,

    /// Parse issues (warnings) encountered during parsing.
    issues: Vec<ParseIssue>,

    /// If true, input that ends with elements still open is an error.
    strict_mode: bool,
}

impl<'a> FragmentParser<'a> {
    /// Create a parser over `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            root_children: Vec::new(),
            stack_of_open_elements: Vec::new(),
            issues: Vec::new(),
            strict_mode: false,
        }
    }

    /// Enable strict mode: running out of input while an element is still
    /// open fails with [`ParseError::UnclosedElement`] instead of closing
    /// the element implicitly.
    #[must_use]
    pub const fn with_strict_mode(mut self) -> Self {
        self.strict_mode = true;
        self
    }

    /// Run the parser and return the top-level nodes.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered; no partial tree is
    /// produced.
    pub fn run(self) -> Result<Vec<Node>, ParseError> {
        self.run_with_issues().map(|(nodes, _)| nodes)
    }

    /// Run the parser and return both the top-level nodes and any
    /// non-fatal parse issues.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered; no partial tree is
    /// produced.
    pub fn run_with_issues(mut self) -> Result<(Vec<Node>, Vec<ParseIssue>), ParseError> {
        while !self.cursor.is_at_end() {
            self.step()?;
        }
        self.finish()
    }

    /// Try each production at the cursor; the first match wins.
    fn step(&mut self) -> Result<(), ParseError> {
        for production in Production::iter() {
            if let Some(consumed) = self.cursor.try_consume(production.pattern()) {
                return self.apply(production, &consumed);
            }
        }
        Err(ParseError::NoProductionMatched {
            position: self.position_at(self.cursor.offset()),
        })
    }

    fn apply(&mut self, production: Production, consumed: &Consumed<'a>) -> Result<(), ParseError> {
        match production {
            Production::OpenTag => {
                let mut element = ElementData::new(consumed.group(1));
                self.parse_attributes(&mut element)?;

                if is_void_element(&element.tag_name) {
                    self.insert_node(Node::Element(element));
                } else {
                    self.stack_of_open_elements.push(OpenElement {
                        data: element,
                        start: consumed.start,
                    });
                }
            }
            Production::Comment => self.insert_node(Node::comment(consumed.group(1))),
            Production::CloseTag => self.close_element(consumed.group(1), consumed.start)?,
            Production::Text => self.insert_node(Node::text(consumed.group(1))),
        }
        Ok(())
    }

    /// Append to the innermost open element, or to the root if none is
    /// open.
    fn insert_node(&mut self, node: Node) {
        match self.stack_of_open_elements.last_mut() {
            Some(open) => open.data.children.push(node),
            None => self.root_children.push(node),
        }
    }

    /// Only the innermost open element may be closed; there is no search
    /// for a matching ancestor.
    fn close_element(&mut self, name: &str, start: usize) -> Result<(), ParseError> {
        match self.stack_of_open_elements.pop() {
            Some(open) if open.data.has_tag_name(name) => {
                self.insert_node(Node::Element(open.data));
                Ok(())
            }
            current => Err(ParseError::MismatchedCloseTag {
                expected: current.map(|mut open| mem::take(&mut open.data.tag_name)),
                found: name.to_string(),
                position: self.position_at(start),
            }),
        }
    }

    /// Close whatever is still open at end of input, innermost first.
    fn finish(mut self) -> Result<(Vec<Node>, Vec<ParseIssue>), ParseError> {
        if self.strict_mode
            && let Some(innermost) = self.stack_of_open_elements.last()
        {
            return Err(ParseError::UnclosedElement {
                tag: innermost.data.tag_name.clone(),
                position: self.position_at(innermost.start),
            });
        }

        while let Some(open) = self.stack_of_open_elements.pop() {
            self.parse_warning(
                IssueKind::UnclosedElement,
                &format!("<{}> still open at end of input", open.data.tag_name),
                open.start,
            );
            self.insert_node(Node::Element(open.data));
        }

        Ok((self.root_children, self.issues))
    }

    /// Record a parse warning for [`FragmentParser::run_with_issues`].
    /// Nothing is printed; reporting is up to the caller.
    pub(super) fn parse_warning(&mut self, kind: IssueKind, message: &str, offset: usize) {
        self.issues.push(ParseIssue {
            kind,
            message: message.to_string(),
            position: self.position_at(offset),
        });
    }

    pub(super) fn position_at(&self, offset: usize) -> Position {
        Position::locate(self.cursor.source(), offset)
    }
}

use wren_dom::ElementData;

use super::core::FragmentParser;
use crate::cursor::Pattern;
use crate::error::{IssueKind, ParseError};

impl FragmentParser<'_> {
    /// Consume `name="value"` pairs following an open tag's name, then the
    /// `>` that ends the open tag.
    ///
    /// A repeated name overwrites the earlier value and is recorded as a
    /// parse issue. Anything other than another attribute or `>` (an
    /// unquoted value, a single-quoted value, a one-letter name, end of
    /// input) is a malformed open tag.
    pub(super) fn parse_attributes(&mut self, element: &mut ElementData) -> Result<(), ParseError> {
        while let Some(attribute) = self.cursor.try_consume(Pattern::Attribute) {
            let name = attribute.group(1);
            let value = attribute.group(2);

            if let Some(previous) = element.attrs.insert(name.to_string(), value.to_string()) {
                self.parse_warning(
                    IssueKind::DuplicateAttribute,
                    &format!(
                        "attribute '{name}' repeated on <{}>; \"{value}\" replaces \"{previous}\"",
                        element.tag_name
                    ),
                    attribute.start,
                );
            }
        }

        if self.cursor.try_consume(Pattern::OpenTagEnd).is_none() {
            return Err(ParseError::MalformedOpenTag {
                tag: element.tag_name.clone(),
                position: self.position_at(self.cursor.offset()),
            });
        }
        Ok(())
    }
}

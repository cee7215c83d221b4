use super::production::Pattern;

/// The input text and how much of it has been consumed.
///
/// The only way to move forward is [`Cursor::try_consume`], which either
/// matches a pattern at the current offset and advances past it, or leaves
/// the cursor where it was.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    offset: usize,
}

/// A successful match: where it started and its capture groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consumed<'a> {
    /// Byte offset of the start of the match in the full source.
    pub start: usize,
    /// The full matched text.
    pub text: &'a str,
    groups: Vec<&'a str>,
}

impl<'a> Consumed<'a> {
    /// Capture group `index` (1-based, as in the pattern). Groups that did
    /// not participate in the match read as the empty string.
    #[must_use]
    pub fn group(&self, index: usize) -> &'a str {
        index
            .checked_sub(1)
            .and_then(|i| self.groups.get(i))
            .copied()
            .unwrap_or("")
    }
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `source`.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self { source, offset: 0 }
    }

    /// The full input, consumed or not.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    /// Byte offset of the first unconsumed character.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// The unconsumed suffix of the input.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// Whether the whole input has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Match `pattern` at the current position only, never searching
    /// further ahead. On success the cursor moves past the whole match.
    pub fn try_consume(&mut self, pattern: Pattern) -> Option<Consumed<'a>> {
        let remaining = self.remaining();
        let captures = pattern.regex().captures(remaining)?;
        let whole = captures.get(0)?;
        let groups = captures
            .iter()
            .skip(1)
            .map(|group| group.map_or("", |m| m.as_str()))
            .collect();

        let start = self.offset;
        self.offset += whole.end();
        Some(Consumed {
            start,
            text: whole.as_str(),
            groups,
        })
    }
}

use once_cell::sync::Lazy;
use regex::Regex;
use strum_macros::{Display, EnumIter};

/// Tag names: an ASCII letter, then letters, digits or hyphens.
static OPEN_TAG_START: Lazy<Regex> = Lazy::new(|| compile(r"^<([A-Za-z][A-Za-z0-9\-]*)"));

/// Everything up to the first `-->`. Nested `<!--` has no meaning.
static COMMENT: Lazy<Regex> = Lazy::new(|| compile(r"(?s)^<!--(.*?)-->"));

static CLOSE_TAG: Lazy<Regex> = Lazy::new(|| compile(r"^</([A-Za-z][A-Za-z0-9\-]*)>"));

static TEXT: Lazy<Regex> = Lazy::new(|| compile(r"^([^<]+)"));

/// Attribute names need at least two characters; values are double quoted
/// and taken verbatim.
static ATTRIBUTE: Lazy<Regex> =
    Lazy::new(|| compile(r#"^\s+([A-Za-z][A-Za-z0-9\-]+)="([^"]*)""#));

static OPEN_TAG_END: Lazy<Regex> = Lazy::new(|| compile(r"^\s*>"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern is valid")
}

/// An anchored pattern the cursor can try at its current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Pattern {
    /// `<` and a tag name. Group 1 is the name.
    OpenTagStart,
    /// `<!-- ... -->`. Group 1 is the interior.
    Comment,
    /// `</name>`. Group 1 is the name.
    CloseTag,
    /// One or more characters other than `<`. Group 1 is the run.
    Text,
    /// Whitespace then `name="value"`. Groups 1 and 2 are name and value.
    Attribute,
    /// Optional whitespace then the `>` closing an open tag.
    OpenTagEnd,
}

impl Pattern {
    /// The compiled expression for this pattern.
    #[must_use]
    pub fn regex(self) -> &'static Regex {
        match self {
            Self::OpenTagStart => &*OPEN_TAG_START,
            Self::Comment => &*COMMENT,
            Self::CloseTag => &*CLOSE_TAG,
            Self::Text => &*TEXT,
            Self::Attribute => &*ATTRIBUTE,
            Self::OpenTagEnd => &*OPEN_TAG_END,
        }
    }
}

/// One of the four alternatives the content parser tries at each step.
///
/// Variants are declared in priority order; `Production::iter()` yields
/// them in that order and the first one that matches wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Production {
    /// Start of an element.
    OpenTag,
    /// A comment.
    Comment,
    /// End of the innermost open element.
    CloseTag,
    /// A run of text.
    Text,
}

impl Production {
    /// The pattern that recognizes this production.
    #[must_use]
    pub const fn pattern(self) -> Pattern {
        match self {
            Self::OpenTag => Pattern::OpenTagStart,
            Self::Comment => Pattern::Comment,
            Self::CloseTag => Pattern::CloseTag,
            Self::Text => Pattern::Text,
        }
    }
}

//! Fragment parser module: content parsing, attribute parsing and the void
//! element table.

/// Attribute parsing for open tags.
mod attributes;
/// The content parser and its stack of open elements.
pub mod core;
/// Void element classification.
pub mod void;

pub use self::core::FragmentParser;
pub use void::{VOID_ELEMENTS, is_void_element};

//! Input cursor module.
//!
//! The parser has no tokenizer stage. Instead it asks the cursor to match
//! one anchored [`Pattern`] at a time against the unconsumed input.

/// The cursor over the remaining input.
pub mod core;
/// Patterns and the ordered content productions.
pub mod production;

pub use self::core::{Consumed, Cursor};
pub use production::{Pattern, Production};

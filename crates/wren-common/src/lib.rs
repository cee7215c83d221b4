//! Common utilities for the Wren fragment parser.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - colored, deduplicated terminal output for
//!   non-fatal parse findings

pub mod warning;

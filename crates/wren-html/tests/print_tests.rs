//! Tests for the indented tree dump.

use std::fmt::{self, Write};

use wren_html::print::write_tree;
use wren_html::{format_tree, parse};

#[test]
fn test_format_tree() {
    let nodes = parse("<ul id=\"menu\" class=\"top\">\n<li>a b</li><!--x--></ul><br>").unwrap();
    assert_eq!(
        format_tree(&nodes),
        "<ul class=\"top\" id=\"menu\">\n  \"\\n\"\n  <li>\n    \"a b\"\n  <!--x-->\n<br>\n"
    );
}

#[test]
fn test_format_empty_fragment() {
    assert_eq!(format_tree(&[]), "");
}

#[test]
fn test_format_text_is_unambiguous() {
    let nodes = parse("<p>a b</p><p>a\u{00B7}b</p><p>\t\"q\"</p>").unwrap();
    assert_eq!(
        format_tree(&nodes),
        "<p>\n  \"a b\"\n<p>\n  \"a\u{00B7}b\"\n<p>\n  \"\\t\\\"q\\\"\"\n"
    );
}

/// Counts lines and discards everything else.
#[derive(Default)]
struct LineCounter(usize);

impl Write for LineCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.matches('\n').count();
        Ok(())
    }
}

#[test]
fn test_write_deep_tree() {
    const DEPTH: usize = 20_000;
    let input = format!("{}leaf{}", "<i>".repeat(DEPTH), "</i>".repeat(DEPTH));
    let nodes = parse(&input).unwrap();

    let mut counter = LineCounter::default();
    write_tree(&mut counter, &nodes, 0).unwrap();
    assert_eq!(counter.0, DEPTH + 1);
}

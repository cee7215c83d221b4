//! Tests for anchored matching on the input cursor.

use strum::IntoEnumIterator;
use wren_html::cursor::{Cursor, Pattern, Production};

#[test]
fn test_match_advances_cursor() {
    let mut cursor = Cursor::new("<div class=\"a\">");
    let open = cursor.try_consume(Pattern::OpenTagStart).unwrap();

    assert_eq!(open.start, 0);
    assert_eq!(open.text, "<div");
    assert_eq!(open.group(1), "div");
    assert_eq!(cursor.offset(), 4);
    assert_eq!(cursor.remaining(), " class=\"a\">");
}

#[test]
fn test_failed_match_leaves_cursor_in_place() {
    let mut cursor = Cursor::new("text<b>");
    assert!(cursor.try_consume(Pattern::OpenTagStart).is_none());
    assert!(cursor.try_consume(Pattern::Comment).is_none());
    assert_eq!(cursor.offset(), 0);
}

#[test]
fn test_matching_is_anchored() {
    // The open tag exists further ahead but must not be found
    let mut cursor = Cursor::new("abc<b>");
    assert!(cursor.try_consume(Pattern::OpenTagStart).is_none());

    let text = cursor.try_consume(Pattern::Text).unwrap();
    assert_eq!(text.group(1), "abc");
    let open = cursor.try_consume(Pattern::OpenTagStart).unwrap();
    assert_eq!(open.start, 3);
}

#[test]
fn test_attribute_groups() {
    let mut cursor = Cursor::new("\n  data-id=\"\">");
    let attribute = cursor.try_consume(Pattern::Attribute).unwrap();
    assert_eq!(attribute.group(1), "data-id");
    assert_eq!(attribute.group(2), "");
    assert!(cursor.try_consume(Pattern::OpenTagEnd).is_some());
    assert!(cursor.is_at_end());
}

#[test]
fn test_missing_group_reads_as_empty() {
    let mut cursor = Cursor::new(">");
    let end = cursor.try_consume(Pattern::OpenTagEnd).unwrap();
    assert_eq!(end.group(0), "");
    assert_eq!(end.group(1), "");
}

#[test]
fn test_comment_is_lazy() {
    let mut cursor = Cursor::new("<!--a-->b-->");
    let comment = cursor.try_consume(Pattern::Comment).unwrap();
    assert_eq!(comment.group(1), "a");
    assert_eq!(cursor.remaining(), "b-->");
}

#[test]
fn test_close_tag_requires_immediate_gt() {
    let mut cursor = Cursor::new("</p >");
    assert!(cursor.try_consume(Pattern::CloseTag).is_none());
    let mut cursor = Cursor::new("</p>");
    assert_eq!(cursor.try_consume(Pattern::CloseTag).unwrap().group(1), "p");
}

#[test]
fn test_text_stops_before_less_than() {
    let mut cursor = Cursor::new("a > b <c");
    assert_eq!(cursor.try_consume(Pattern::Text).unwrap().group(1), "a > b ");
    assert!(cursor.try_consume(Pattern::Text).is_none());
}

#[test]
fn test_productions_are_tried_in_priority_order() {
    let order: Vec<String> = Production::iter().map(|p| p.to_string()).collect();
    assert_eq!(order, ["open-tag", "comment", "close-tag", "text"]);
    assert_eq!(Production::OpenTag.pattern(), Pattern::OpenTagStart);
}

#[test]
fn test_empty_cursor_is_at_end() {
    let mut cursor = Cursor::new("");
    assert!(cursor.is_at_end());
    assert!(cursor.try_consume(Pattern::Text).is_none());
}

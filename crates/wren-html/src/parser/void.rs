/// Elements that never have content or a close tag.
///
/// After `<br>` the parser goes straight on to the next sibling; a `</br>`
/// later in the input is an ordinary (mismatched) close tag.
pub const VOID_ELEMENTS: [&str; 12] = [
    "area", "base", "br", "hr", "img", "input", "link", "meta", "param", "command", "keygen",
    "source",
];

/// Whether `tag_name` is a void element, ignoring ASCII case.
#[must_use]
pub fn is_void_element(tag_name: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|void| void.eq_ignore_ascii_case(tag_name))
}

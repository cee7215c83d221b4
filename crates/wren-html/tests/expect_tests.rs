//! Tests for comparing parsed fragments against expected shapes.

use wren_html::expect::{ExpectedNode, check_fragment, matches_fragment};
use wren_html::{Node, parse};

fn nodes(input: &str) -> Vec<Node> {
    parse(input).unwrap()
}

#[test]
fn test_matching_shape() {
    let expected = vec![
        ExpectedNode::element("p").with_children(vec![
            ExpectedNode::text("Hi "),
            ExpectedNode::element("b").with_children(vec![ExpectedNode::text("there")]),
            ExpectedNode::comment("c"),
        ]),
    ];
    assert!(matches_fragment(&nodes("<p>Hi <b>there</b><!--c--></p>"), &expected));
}

#[test]
fn test_length_mismatch_fails() {
    let expected = vec![ExpectedNode::element("p")];
    let mismatch = check_fragment(&nodes("<p></p><p></p>"), &expected).unwrap_err();
    assert_eq!(mismatch.path, "");
    assert_eq!(mismatch.reason, "expected 1 nodes, found 2");
}

#[test]
fn test_kind_mismatch_fails() {
    let expected = vec![ExpectedNode::text("p")];
    assert!(!matches_fragment(&nodes("<p></p>"), &expected));
    let expected = vec![ExpectedNode::comment("x")];
    assert!(!matches_fragment(&nodes("x"), &expected));
}

#[test]
fn test_tag_comparison_is_exact() {
    let expected = vec![ExpectedNode::element("p")];
    assert!(!matches_fragment(&nodes("<P></p>"), &expected));
}

#[test]
fn test_nested_mismatch_fails_whole_comparison() {
    let expected = vec![
        ExpectedNode::element("div").with_children(vec![
            ExpectedNode::element("span").with_children(vec![ExpectedNode::text("wrong")]),
        ]),
    ];
    let mismatch = check_fragment(&nodes("<div><span>right</span></div>"), &expected).unwrap_err();
    assert_eq!(mismatch.path, "[0].children[0].children[0]");
    assert!(mismatch.to_string().starts_with("at [0].children[0].children[0]: text:"));
}

#[test]
fn test_extra_actual_attributes_are_ignored() {
    let expected = vec![ExpectedNode::element("a").with_attr("href", "/")];
    assert!(matches_fragment(
        &nodes(r#"<a href="/" class="nav"></a>"#),
        &expected
    ));
}

#[test]
fn test_missing_or_different_attribute_fails() {
    let expected = vec![ExpectedNode::element("a").with_attr("href", "/")];
    assert!(!matches_fragment(&nodes("<a></a>"), &expected));
    assert!(!matches_fragment(&nodes(r#"<a href="/x"></a>"#), &expected));
}

#[test]
fn test_attributes_on_non_element_fail() {
    let expected = vec![ExpectedNode::text("t").with_attr("id", "x")];
    assert!(!matches_fragment(&nodes("t"), &expected));
}

#[test]
fn test_omitted_children_require_none() {
    let expected = vec![ExpectedNode::element("p")];
    assert!(matches_fragment(&nodes("<p></p>"), &expected));
    let mismatch = check_fragment(&nodes("<p>x</p>"), &expected).unwrap_err();
    assert_eq!(mismatch.reason, "expected no children, found 1");
}

#[test]
fn test_expected_nodes_from_json() {
    let expected: Vec<ExpectedNode> = serde_json::from_str(
        r#"[{ "tag": "input", "attributes": { "type": "text" } }, { "text": "after" }]"#,
    )
    .unwrap();
    assert!(matches_fragment(&nodes(r#"<input type="text">after"#), &expected));
}

#[test]
fn test_unknown_json_fields_are_rejected() {
    let result: Result<Vec<ExpectedNode>, _> = serde_json::from_str(r#"[{ "tagName": "p" }]"#);
    assert!(result.is_err());
}

//! End-to-end export tests (raw editor JSON -> BBCode)
//!
//! The fixtures mirror what the editor's `convertToRaw` emits for simple
//! documents, so every expected string is byte-exact output.

use draft_bbcode::{convert, convert_json, ConvertOptions, RawContent};

fn convert_str(json: &str) -> String {
    convert_json(json, &ConvertOptions::default()).unwrap()
}

fn blocks(items: &[(&str, &str, u32)]) -> String {
    let blocks: Vec<String> = items
        .iter()
        .map(|(text, block_type, depth)| {
            format!(
                r#"{{"text": "{text}", "type": "{block_type}", "depth": {depth},
                    "inlineStyleRanges": [], "entityRanges": [], "data": {{}}}}"#
            )
        })
        .collect();
    format!(r#"{{"blocks": [{}], "entityMap": {{}}}}"#, blocks.join(","))
}

#[test]
fn simple_paragraph() {
    assert_eq!(convert_str(&blocks(&[("testing", "unstyled", 0)])), "testing\n");
}

#[test]
fn empty_document() {
    let content = RawContent::default();
    assert_eq!(convert(&content, &ConvertOptions::default()), "");
    assert_eq!(convert_str(r#"{"blocks": [], "entityMap": {}}"#), "");
}

#[test]
fn unordered_list() {
    let json = blocks(&[
        ("1", "unordered-list-item", 0),
        ("2", "unordered-list-item", 0),
        ("3", "unordered-list-item", 0),
    ]);
    assert_eq!(convert_str(&json), "[list]\n[*]1\n[*]2\n[*]3\n[/list]\n");
}

#[test]
fn ordered_list() {
    let json = blocks(&[
        ("1", "ordered-list-item", 0),
        ("2", "ordered-list-item", 0),
        ("3", "ordered-list-item", 0),
    ]);
    assert_eq!(convert_str(&json), "[list=1]\n[*]1\n[*]2\n[*]3\n[/list]\n");
}

#[test]
fn nested_ordered_list() {
    let json = blocks(&[
        ("1", "ordered-list-item", 0),
        ("2", "ordered-list-item", 1),
        ("3", "ordered-list-item", 0),
    ]);
    assert_eq!(
        convert_str(&json),
        "[list=1]\n[*]1\n[list=1]\n[*]2\n[/list]\n[*]3\n[/list]\n"
    );
}

#[test]
fn nested_list_with_sibling_pair() {
    let json = blocks(&[
        ("1", "ordered-list-item", 0),
        ("2", "ordered-list-item", 1),
        ("3", "ordered-list-item", 1),
        ("4", "ordered-list-item", 0),
    ]);
    assert_eq!(
        convert_str(&json),
        "[list=1]\n[*]1\n[list=1]\n[*]2\n[*]3\n[/list]\n[*]4\n[/list]\n"
    );
}

#[test]
fn doubly_nested_list() {
    let json = blocks(&[
        ("1", "ordered-list-item", 0),
        ("2", "ordered-list-item", 1),
        ("3", "ordered-list-item", 2),
        ("3", "ordered-list-item", 0),
    ]);
    assert_eq!(
        convert_str(&json),
        "[list=1]\n[*]1\n[list=1]\n[*]2\n[list=1]\n[*]3\n[/list]\n[/list]\n[*]3\n[/list]\n"
    );
}

#[test]
fn headings_and_blockquote() {
    assert_eq!(
        convert_str(&blocks(&[("testing", "header-one", 0)])),
        "[h1]testing[/h1]\n"
    );
    assert_eq!(
        convert_str(&blocks(&[("testing", "header-two", 0)])),
        "[h2]testing[/h2]\n"
    );
    assert_eq!(
        convert_str(&blocks(&[("testing", "header-six", 0)])),
        "[h6]testing[/h6]\n"
    );
    assert_eq!(
        convert_str(&blocks(&[("testing", "blockquote", 0)])),
        "[quote]testing[/quote]\n"
    );
}

#[test]
fn inline_toggle_styles() {
    let json = r#"{"blocks": [{
        "text": "test",
        "type": "unstyled",
        "inlineStyleRanges": [{"offset": 0, "length": 4, "style": "BOLD"}]
    }], "entityMap": {}}"#;
    assert_eq!(convert_str(json), "[b]test[/b]\n");

    let json = r#"{"blocks": [{
        "text": "test",
        "type": "unstyled",
        "inlineStyleRanges": [{"offset": 0, "length": 4, "style": "CODE"}]
    }], "entityMap": {}}"#;
    assert_eq!(convert_str(json), "[code]test[/code]\n");
}

#[test]
fn overlapping_toggle_styles_nest() {
    // bold over the whole word, italic over the middle
    let json = r#"{"blocks": [{
        "text": "abcd",
        "type": "unstyled",
        "inlineStyleRanges": [
            {"offset": 0, "length": 4, "style": "BOLD"},
            {"offset": 1, "length": 2, "style": "ITALIC"}
        ]
    }], "entityMap": {}}"#;
    assert_eq!(convert_str(json), "[b]a[i]bc[/i]d[/b]\n");
}

#[test]
fn crossing_toggle_styles_produce_well_nested_markup() {
    let json = r#"{"blocks": [{
        "text": "abc",
        "type": "unstyled",
        "inlineStyleRanges": [
            {"offset": 0, "length": 2, "style": "BOLD"},
            {"offset": 1, "length": 2, "style": "ITALIC"}
        ]
    }], "entityMap": {}}"#;
    assert_eq!(convert_str(json), "[b]a[i]b[/i][/b][i]c[/i]\n");
}

#[test]
fn value_styles_wrap_in_fixed_order() {
    let json = r#"{"blocks": [{
        "text": "test",
        "type": "unstyled",
        "inlineStyleRanges": [
            {"offset": 0, "length": 4, "style": "bgcolor-pink"},
            {"offset": 0, "length": 4, "style": "color-red"}
        ]
    }], "entityMap": {}}"#;
    assert_eq!(convert_str(json), "[color=red][bgcolor=pink]test[/bgcolor][/color]\n");
}

#[test]
fn bracket_characters_are_escaped() {
    let json = r#"{"blocks": [{"text": "a[b]c", "type": "unstyled"}], "entityMap": {}}"#;
    assert_eq!(convert_str(json), "a&#91;b&#93;c\n");
}

#[test]
fn aligned_paragraph() {
    let json = r#"{"blocks": [{
        "text": "x",
        "type": "unstyled",
        "data": {"text-align": "center"}
    }], "entityMap": {}}"#;
    assert_eq!(convert_str(json), "[align=center]x[/align]\n");
}

#[test]
fn mixed_document_keeps_order() {
    let json = blocks(&[
        ("title", "header-one", 0),
        ("a", "unordered-list-item", 0),
        ("b", "unordered-list-item", 0),
        ("tail", "unstyled", 0),
    ]);
    assert_eq!(
        convert_str(&json),
        "[h1]title[/h1]\n[list]\n[*]a\n[*]b\n[/list]\ntail\n"
    );
}

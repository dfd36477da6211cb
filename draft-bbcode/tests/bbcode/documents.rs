//! Whole-document conversion snapshots
//!
//! Larger composite documents where reviewing the overall markup shape
//! matters more than any single byte. Trailing whitespace is trimmed so the
//! snapshots stay readable; the exact newline contract is covered in
//! `export.rs`.

use draft_bbcode::{convert_json, ConvertOptions, HashtagConfig};
use insta::assert_snapshot;

fn converted(json: &str, options: &ConvertOptions) -> String {
    convert_json(json, options).unwrap().trim_end().to_string()
}

#[test]
fn article_with_headings_lists_and_styles() {
    let json = r#"{
        "blocks": [
            {"text": "Release notes", "type": "header-one"},
            {"text": "Highlights", "type": "header-two"},
            {"text": "faster exports", "type": "unordered-list-item", "depth": 0},
            {"text": "new color styles", "type": "unordered-list-item", "depth": 0,
             "inlineStyleRanges": [{"offset": 4, "length": 5, "style": "color-red"}]},
            {"text": "See the changelog for details.", "type": "unstyled",
             "inlineStyleRanges": [{"offset": 8, "length": 9, "style": "BOLD"}]}
        ],
        "entityMap": {}
    }"#;
    assert_snapshot!(converted(json, &ConvertOptions::default()), @r"
    [h1]Release notes[/h1]
    [h2]Highlights[/h2]
    [list]
    [*]faster exports
    [*]new [color=red]color[/color] styles
    [/list]
    See the [b]changelog[/b] for details.
    ");
}

#[test]
fn quoted_link_paragraph() {
    let json = r#"{
        "blocks": [
            {"text": "as they put it", "type": "blockquote",
             "entityRanges": [{"offset": 3, "length": 4, "key": 0}]}
        ],
        "entityMap": {
            "0": {"type": "LINK", "data": {"url": "http://who.example"}}
        }
    }"#;
    assert_snapshot!(
        converted(json, &ConvertOptions::default()),
        @"[quote]as [url=http://who.example]they[/url] put it[/quote]"
    );
}

#[test]
fn hashtags_inside_a_styled_document() {
    let options = ConvertOptions {
        hashtag: Some(HashtagConfig::default()),
        ..ConvertOptions::default()
    };
    let json = r#"{
        "blocks": [
            {"text": "shipping #v2 today", "type": "unstyled",
             "inlineStyleRanges": [{"offset": 0, "length": 18, "style": "ITALIC"}]}
        ],
        "entityMap": {}
    }"#;
    assert_snapshot!(
        converted(json, &options),
        @"[i]shipping [/i][tag][i]#v2[/i][/tag][i] today[/i]"
    );
}

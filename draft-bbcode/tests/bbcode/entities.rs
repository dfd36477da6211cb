//! Entity rendering through the full conversion pipeline.

use draft_bbcode::{convert_json, ConvertOptions, Entity, EntityType};

#[test]
fn link_inside_a_paragraph() {
    let json = r#"{
        "blocks": [{
            "text": "see docs here",
            "type": "unstyled",
            "entityRanges": [{"offset": 4, "length": 4, "key": 0}]
        }],
        "entityMap": {"0": {"type": "LINK", "data": {"url": "http://docs"}}}
    }"#;
    assert_eq!(
        convert_json(json, &ConvertOptions::default()).unwrap(),
        "see [url=http://docs]docs[/url] here\n"
    );
}

#[test]
fn bare_url_link_collapses() {
    let json = r#"{
        "blocks": [{
            "text": "http://x",
            "type": "unstyled",
            "entityRanges": [{"offset": 0, "length": 8, "key": 0}]
        }],
        "entityMap": {"0": {"type": "LINK", "data": {"url": "http://x"}}}
    }"#;
    assert_eq!(
        convert_json(json, &ConvertOptions::default()).unwrap(),
        "[url]http://x[/url]\n"
    );
}

#[test]
fn styled_link_text_keeps_inline_markup() {
    let json = r#"{
        "blocks": [{
            "text": "click",
            "type": "unstyled",
            "inlineStyleRanges": [{"offset": 0, "length": 5, "style": "BOLD"}],
            "entityRanges": [{"offset": 0, "length": 5, "key": 0}]
        }],
        "entityMap": {"0": {"type": "LINK", "data": {"url": "http://x"}}}
    }"#;
    assert_eq!(
        convert_json(json, &ConvertOptions::default()).unwrap(),
        "[url=http://x][b]click[/b][/url]\n"
    );
}

#[test]
fn atomic_image_block() {
    let json = r#"{
        "blocks": [{
            "text": " ",
            "type": "atomic",
            "entityRanges": [{"offset": 0, "length": 1, "key": 0}]
        }],
        "entityMap": {"0": {"type": "IMAGE", "data": {
            "src": "pic.png", "width": 200, "height": 100, "alignment": "right"
        }}}
    }"#;
    assert_eq!(
        convert_json(json, &ConvertOptions::default()).unwrap(),
        "[float=right][img=200,100]pic.png[/img][/float]\n"
    );
}

#[test]
fn unknown_entity_renders_bare_text() {
    let json = r#"{
        "blocks": [{
            "text": "@ada",
            "type": "unstyled",
            "entityRanges": [{"offset": 0, "length": 4, "key": 0}]
        }],
        "entityMap": {"0": {"type": "MENTION", "data": {"value": "ada"}}}
    }"#;
    assert_eq!(
        convert_json(json, &ConvertOptions::default()).unwrap(),
        "@ada\n"
    );
}

#[test]
fn entity_entry_without_a_type_degrades_to_bare_text() {
    let json = r#"{
        "blocks": [{
            "text": "still here",
            "type": "unstyled",
            "entityRanges": [{"offset": 0, "length": 5, "key": 0}]
        }],
        "entityMap": {"0": {"data": {"url": "http://x"}}}
    }"#;
    assert_eq!(
        convert_json(json, &ConvertOptions::default()).unwrap(),
        "still here\n"
    );
}

#[test]
fn custom_transform_takes_precedence() {
    let json = r#"{
        "blocks": [{
            "text": "@ada",
            "type": "unstyled",
            "entityRanges": [{"offset": 0, "length": 4, "key": 0}]
        }],
        "entityMap": {"0": {"type": "MENTION", "data": {"value": "ada"}}}
    }"#;
    let options = ConvertOptions {
        entity_transform: Some(Box::new(|entity: &Entity, text: &str| {
            match &entity.entity_type {
                EntityType::Other(name) if name == "MENTION" => {
                    Some(format!("[user]{text}[/user]"))
                }
                _ => None,
            }
        })),
        ..ConvertOptions::default()
    };
    assert_eq!(convert_json(json, &options).unwrap(), "[user]@ada[/user]\n");
}

//! Block rendering
//!
//! Assembles the markup for one non-list block: block-level wrapper tag,
//! alignment wrapper, and the rendered section sequence. The inner-content
//! pipeline (sections -> value runs -> toggle runs -> packed spans) is also
//! what list items reuse for their own bodies.

use crate::entity::entity_markup;
use crate::model::{scalar_if_truthy, Block, BlockType};
use crate::runs::segment;
use crate::sections::{split_sections, SectionKind};
use crate::spans::{pack, render};
use crate::styles::{StyleTable, ValueStyles, TOGGLE_QUERY, VALUE_QUERY};
use crate::RenderContext;

/// The wrapper tag for a block type; empty for types rendered bare.
pub fn block_tag(block_type: BlockType) -> &'static str {
    match block_type {
        BlockType::HeaderOne => "h1",
        BlockType::HeaderTwo => "h2",
        BlockType::HeaderThree => "h3",
        BlockType::HeaderFour => "h4",
        BlockType::HeaderFive => "h5",
        BlockType::HeaderSix => "h6",
        BlockType::UnorderedListItem | BlockType::OrderedListItem => "list",
        BlockType::Blockquote => "quote",
        BlockType::Unstyled | BlockType::Atomic | BlockType::Unknown => "",
    }
}

/// Opening/closing alignment wrapper derived from block data; only
/// `text-align` is interpreted.
pub(crate) fn block_style(block: &Block) -> (String, String) {
    match block.data.get("text-align").and_then(scalar_if_truthy) {
        Some(align) => (format!("[align={align}]"), "[/align]".to_string()),
        None => (String::new(), String::new()),
    }
}

/// Wrap already-rendered text with the value-style tags in fixed nesting
/// order: color outside bgcolor outside size outside font. Absent styles
/// contribute no tag.
pub(crate) fn wrap_value_styles(values: &ValueStyles, text: &str) -> String {
    if values.is_empty() {
        return text.to_string();
    }
    let mut start = String::new();
    let mut end = String::new();
    for (tag, value) in [
        ("color", &values.color),
        ("bgcolor", &values.bgcolor),
        ("size", &values.fontsize),
        ("font", &values.fontfamily),
    ] {
        if let Some(value) = value {
            start.push_str(&format!("[{tag}={value}]"));
            end = format!("[/{tag}]{end}");
        }
    }
    format!("{start}{text}{end}")
}

/// Render the inner content of a block: every section, styled and resolved.
pub(crate) fn block_inner_markup(block: &Block, ctx: &RenderContext) -> String {
    let chars: Vec<char> = block.text.chars().collect();
    let table = StyleTable::build(block);
    let mut markup = String::new();

    for section in split_sections(block, &chars, ctx.hashtag) {
        let mut section_text = String::new();
        // Split by value styles first; each value run is packed separately
        // so value tags always sit outside the toggle tags.
        for value_run in segment(&chars, &table, &VALUE_QUERY, section.start, section.end) {
            let toggle_runs = segment(&chars, &table, &TOGGLE_QUERY, value_run.start, value_run.end);
            let spans = pack(&toggle_runs);
            let inner = render(&spans, &toggle_runs);
            section_text.push_str(&wrap_value_styles(&value_run.styles.values, &inner));
        }
        match section.kind {
            SectionKind::Entity(key) => {
                markup.push_str(&entity_markup(ctx, key, &section_text));
            }
            SectionKind::Hashtag => {
                markup.push_str(&format!("[tag]{section_text}[/tag]"));
            }
            SectionKind::Plain => markup.push_str(&section_text),
        }
    }
    markup
}

/// Render one non-list block, trailing newline included. Atomic blocks
/// render solely through their first entity, with no wrapper and no text.
pub(crate) fn block_markup(block: &Block, ctx: &RenderContext) -> String {
    let mut out = String::new();
    if block.is_atomic_entity_block() {
        if let Some(range) = block.entity_ranges.first() {
            out.push_str(&entity_markup(ctx, range.key, ""));
        }
    } else {
        let tag = block_tag(block.block_type);
        if !tag.is_empty() {
            out.push_str(&format!("[{tag}]"));
        }
        let (style_start, style_end) = block_style(block);
        out.push_str(&style_start);
        out.push_str(&block_inner_markup(block, ctx));
        out.push_str(&style_end);
        if !tag.is_empty() {
            out.push_str(&format!("[/{tag}]"));
        }
    }
    out.push('\n');
    out
}

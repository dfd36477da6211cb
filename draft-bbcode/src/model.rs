//! Raw editor content model
//!
//! Mirrors the raw Draft.js serialization (`convertToRaw` output) with serde,
//! keeping the wire field names (`inlineStyleRanges`, `header-one`, ...).
//! The model is deliberately permissive: every field defaults, unknown block
//! types and entity types map to fallback variants instead of failing, since
//! conversion must degrade silently rather than error on odd input.

use serde::Deserialize;
use std::collections::BTreeMap;

/// A full editor snapshot: ordered blocks plus the entity table they reference.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawContent {
    #[serde(default)]
    pub blocks: Vec<Block>,
    /// Keyed by the stringified entity key used in [`EntityRange::key`].
    #[serde(rename = "entityMap", default)]
    pub entity_map: BTreeMap<String, Entity>,
}

/// One paragraph/heading/list-item-level unit of the document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type", default)]
    pub block_type: BlockType,
    #[serde(default)]
    pub depth: u32,
    /// Block-level metadata; only `text-align` is interpreted.
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub inline_style_ranges: Vec<InlineStyleRange>,
    #[serde(default)]
    pub entity_ranges: Vec<EntityRange>,
}

impl Block {
    /// Atomic blocks carry a non-text embed: either typed `atomic`, or
    /// entity-bearing with no visible text (whitespace counts as empty).
    pub fn is_atomic_entity_block(&self) -> bool {
        self.block_type == BlockType::Atomic
            || (!self.entity_ranges.is_empty() && self.text.trim().is_empty())
    }
}

/// The closed catalog of block types the converter knows about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum BlockType {
    #[default]
    #[serde(rename = "unstyled")]
    Unstyled,
    #[serde(rename = "header-one")]
    HeaderOne,
    #[serde(rename = "header-two")]
    HeaderTwo,
    #[serde(rename = "header-three")]
    HeaderThree,
    #[serde(rename = "header-four")]
    HeaderFour,
    #[serde(rename = "header-five")]
    HeaderFive,
    #[serde(rename = "header-six")]
    HeaderSix,
    #[serde(rename = "unordered-list-item")]
    UnorderedListItem,
    #[serde(rename = "ordered-list-item")]
    OrderedListItem,
    #[serde(rename = "blockquote")]
    Blockquote,
    #[serde(rename = "atomic")]
    Atomic,
    /// Any block type outside the catalog renders with no wrapper tag.
    #[serde(other)]
    Unknown,
}

impl BlockType {
    pub fn is_list(self) -> bool {
        matches!(
            self,
            BlockType::UnorderedListItem | BlockType::OrderedListItem
        )
    }
}

/// A span of inline styling. `style` is the raw style name from the editor;
/// value-carrying styles encode their value in the name (`color-red`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InlineStyleRange {
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub length: usize,
    #[serde(default)]
    pub style: String,
}

/// A span covered by an entity from the entity map.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EntityRange {
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub length: usize,
    #[serde(default)]
    pub key: u64,
}

/// An entry in the entity map. A missing `type` field degrades to
/// [`EntityType::Other`] so the covered text still renders.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Entity {
    #[serde(rename = "type", default)]
    pub entity_type: EntityType,
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

/// Entity types with dedicated markup. Anything else is preserved verbatim
/// so custom transforms can still dispatch on it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum EntityType {
    Link,
    Image,
    Other(String),
}

impl Default for EntityType {
    fn default() -> Self {
        EntityType::Other(String::new())
    }
}

impl From<String> for EntityType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "LINK" => EntityType::Link,
            "IMAGE" => EntityType::Image,
            _ => EntityType::Other(raw),
        }
    }
}

/// Render a metadata value as markup text, honoring JS-style truthiness:
/// empty strings, `0`, `false`, and null all count as absent.
pub(crate) fn scalar_if_truthy(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => {
            if n.as_f64() == Some(0.0) {
                None
            } else {
                Some(n.to_string())
            }
        }
        serde_json::Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

//! BBCode synthesis from raw Draft.js editor content
//!
//!     This crate converts a structured rich-text document (the raw Draft.js
//!     serialization: ordered blocks with inline style ranges, entity
//!     references and block metadata) into a single BBCode string. It powers
//!     the draft2bb CLI but is shell agnostic: a pure lib with no I/O, no
//!     process state, and deterministic output for identical input.
//!
//! Architecture
//!
//!     The pipeline works strictly leaves-first, folding strings back upward:
//!
//!     convert (document walker)
//!     ├── list.rs        # nested list markup from flat depth-tagged runs
//!     └── block.rs       # per-block wrapper + alignment + section assembly
//!         ├── sections.rs    # entity/hashtag/plain partition of the text
//!         ├── styles.rs      # per-character style attribute table
//!         ├── runs.rs        # coalescing characters into constant-style runs
//!         ├── spans.rs       # greedy laminarization of toggle tags
//!         └── entity.rs      # entity reference -> markup (or custom override)
//!
//! Core Algorithms
//!
//!     Two places need a genuinely non-local decision; everything else is
//!     lookup-table driven:
//!
//!     - spans.rs packs arbitrary, possibly crossing per-run style membership
//!       into a well-nested tag tree (bracket markup cannot express partial
//!       overlap). The policy is greedy longest-first with deterministic
//!       tie-breaks; see the module docs.
//!     - list.rs rebuilds a nested list structure from the editor's flat
//!       sequence of depth-tagged list blocks.
//!
//! Error Handling
//!
//!     Conversion never fails. Unknown style names are ignored, unknown
//!     entity types render as their bare text, out-of-bounds ranges are
//!     clamped, and an empty document yields an empty string. Only the JSON
//!     boundary (`convert_json`) returns a Result.

pub mod block;
pub mod entity;
pub mod error;
pub mod list;
pub mod model;
pub mod runs;
pub mod sections;
pub mod spans;
pub mod styles;

pub use error::ConvertError;
pub use model::{Block, BlockType, Entity, EntityType, RawContent};
pub use sections::HashtagConfig;

use std::collections::BTreeMap;

/// Custom entity rendering hook. Returning `None` (or an empty string)
/// falls through to the built-in entity markup.
pub type EntityTransform = dyn Fn(&Entity, &str) -> Option<String>;

/// Conversion settings. The defaults disable hashtag detection and use no
/// custom entity transform.
#[derive(Default)]
pub struct ConvertOptions {
    /// Hashtag detection; `None` disables it entirely.
    pub hashtag: Option<HashtagConfig>,
    /// Reserved for directional (RTL) rendering; currently has no effect.
    pub directional: bool,
    /// First-refusal hook for entity markup.
    pub entity_transform: Option<Box<EntityTransform>>,
}

/// Per-conversion state threaded through the renderers.
pub(crate) struct RenderContext<'a> {
    pub(crate) entity_map: &'a BTreeMap<String, Entity>,
    pub(crate) hashtag: Option<&'a HashtagConfig>,
    pub(crate) entity_transform: Option<&'a EntityTransform>,
}

/// Convert raw editor content to BBCode markup.
///
/// Blocks render in document order; contiguous runs of list-item blocks are
/// grouped and rendered as one (possibly nested) list. Every top-level block
/// or list is terminated by a newline. An empty document yields `""`.
pub fn convert(content: &RawContent, options: &ConvertOptions) -> String {
    let ctx = RenderContext {
        entity_map: &content.entity_map,
        hashtag: options.hashtag.as_ref(),
        entity_transform: options.entity_transform.as_deref(),
    };

    let mut out = String::new();
    let mut list_run: Vec<&Block> = Vec::new();
    for block in &content.blocks {
        if block.block_type.is_list() {
            list_run.push(block);
        } else {
            if !list_run.is_empty() {
                out.push_str(&list::list_markup(&list_run, &ctx));
                list_run.clear();
            }
            out.push_str(&block::block_markup(block, &ctx));
        }
    }
    if !list_run.is_empty() {
        out.push_str(&list::list_markup(&list_run, &ctx));
    }
    out
}

/// Convert a raw editor content JSON string to BBCode markup.
pub fn convert_json(json: &str, options: &ConvertOptions) -> Result<String, ConvertError> {
    let content: RawContent =
        serde_json::from_str(json).map_err(|e| ConvertError::InvalidContent(e.to_string()))?;
    Ok(convert(&content, options))
}

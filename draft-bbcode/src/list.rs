//! List tree reconstruction
//!
//! The editor flattens nested lists into a run of list-item blocks carrying a
//! depth integer; BBCode needs the nesting back. The builder walks the run
//! comparing each block against the previously emitted sibling: same depth
//! emits a sibling item (flushing any buffered deeper blocks first as one
//! nested list), a type change closes and reopens the list tag, and a depth
//! change buffers the block for a nested list. Any leftover buffer flushes at
//! the end, before the outer list tag closes.
//!
//! The shape is only well-defined for depth deltas of at most one between
//! consecutive blocks; larger jumps still buffer as a single nesting level.

use crate::block::{block_inner_markup, block_style, block_tag};
use crate::model::{Block, BlockType};
use crate::RenderContext;

/// The opening tag body for a list of this item type; ordered lists carry a
/// fixed `=1` modifier.
fn list_open_tag(block_type: BlockType) -> String {
    if block_type == BlockType::OrderedListItem {
        format!("{}=1", block_tag(block_type))
    } else {
        block_tag(block_type).to_string()
    }
}

/// Render a maximal contiguous run of list-item blocks as nested list markup.
/// An empty run renders as nothing; callers are expected not to produce one.
pub(crate) fn list_markup(blocks: &[&Block], ctx: &RenderContext) -> String {
    let mut out = String::new();
    let mut buffered: Vec<&Block> = Vec::new();
    let mut previous: Option<&Block> = None;

    for &block in blocks {
        let mut nested = false;
        match previous {
            None => {
                out.push_str(&format!("[{}]\n", list_open_tag(block.block_type)));
            }
            Some(prev) if prev.block_type != block.block_type => {
                out.push_str(&format!("[/{}]\n", block_tag(prev.block_type)));
                out.push_str(&format!("[{}]\n", list_open_tag(block.block_type)));
            }
            Some(prev) if prev.depth == block.depth => {
                if !buffered.is_empty() {
                    out.push_str(&list_markup(&buffered, ctx));
                    buffered.clear();
                }
            }
            Some(_) => {
                nested = true;
                buffered.push(block);
            }
        }
        if !nested {
            out.push_str("[*]");
            let (style_start, style_end) = block_style(block);
            out.push_str(&style_start);
            out.push_str(&block_inner_markup(block, ctx));
            out.push_str(&style_end);
            out.push('\n');
            previous = Some(block);
        }
    }

    if !buffered.is_empty() {
        out.push_str(&list_markup(&buffered, ctx));
    }
    if let Some(prev) = previous {
        out.push_str(&format!("[/{}]\n", block_tag(prev.block_type)));
    }
    out
}

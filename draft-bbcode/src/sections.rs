//! Section splitting
//!
//! Partitions a block's text into ordered, non-overlapping sections before
//! any inline styling is considered: entity-covered spans, detected hashtag
//! spans, and plain filler for everything in between. Sections are contiguous
//! and exhaustive over `[0, text.len())` in character offsets.

use crate::model::Block;

/// What a section of block text represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Plain,
    /// Covered by the entity with this key.
    Entity(u64),
    Hashtag,
}

/// A contiguous half-open span of block text, in character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub start: usize,
    pub end: usize,
    pub kind: SectionKind,
}

/// Hashtag detection settings. Empty strings fall back to the defaults,
/// matching the editor-side configuration semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashtagConfig {
    pub trigger: String,
    pub separator: String,
}

impl Default for HashtagConfig {
    fn default() -> Self {
        HashtagConfig {
            trigger: "#".to_string(),
            separator: " ".to_string(),
        }
    }
}

impl HashtagConfig {
    pub fn new(trigger: impl Into<String>, separator: impl Into<String>) -> Self {
        HashtagConfig {
            trigger: trigger.into(),
            separator: separator.into(),
        }
    }
}

/// Find `needle` in `haystack[from..]`, returning its absolute offset.
fn find_sub(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    (from..=haystack.len() - needle.len()).find(|&i| haystack[i..i + needle.len()] == *needle)
}

/// Scan for hashtag spans: a match starts at text start when the text begins
/// with the trigger, or right after any `separator + trigger` occurrence, and
/// runs up to the next separator (or end of text). Zero-length matches are
/// dropped.
fn hashtag_ranges(chars: &[char], config: &HashtagConfig) -> Vec<Section> {
    let trigger: Vec<char> = if config.trigger.is_empty() {
        "#".chars().collect()
    } else {
        config.trigger.chars().collect()
    };
    let separator: Vec<char> = if config.separator.is_empty() {
        " ".chars().collect()
    } else {
        config.separator.chars().collect()
    };

    let mut starts = Vec::new();
    if chars.len() >= trigger.len() && chars[..trigger.len()] == *trigger {
        starts.push(0);
    }
    let sep_trigger: Vec<char> = separator.iter().chain(trigger.iter()).copied().collect();
    let mut pos = 0;
    while let Some(i) = find_sub(chars, &sep_trigger, pos) {
        starts.push(i + separator.len());
        pos = i + sep_trigger.len();
    }

    let mut sections = Vec::new();
    for start in starts {
        let body_start = start + trigger.len();
        let body_end = find_sub(chars, &separator, body_start).unwrap_or(chars.len());
        if body_end > body_start {
            sections.push(Section {
                start,
                end: body_end,
                kind: SectionKind::Hashtag,
            });
        }
    }
    sections
}

/// Split a block into sections by its entity ranges and detected hashtags.
/// Entity and hashtag ranges are merged sorted by start (entities first on
/// ties), with plain filler inserted for gaps and at the start/end.
pub fn split_sections(
    block: &Block,
    chars: &[char],
    hashtag: Option<&HashtagConfig>,
) -> Vec<Section> {
    let mut ranges: Vec<Section> = block
        .entity_ranges
        .iter()
        .map(|range| Section {
            start: range.offset,
            end: range.offset + range.length,
            kind: SectionKind::Entity(range.key),
        })
        .collect();
    if let Some(config) = hashtag {
        ranges.extend(hashtag_ranges(chars, config));
    }
    ranges.sort_by_key(|section| section.start);

    let mut sections = Vec::new();
    let mut last_offset = 0;
    for range in ranges {
        if range.start > last_offset {
            sections.push(Section {
                start: last_offset,
                end: range.start,
                kind: SectionKind::Plain,
            });
        }
        last_offset = range.end;
        sections.push(range);
    }
    if last_offset < chars.len() {
        sections.push(Section {
            start: last_offset,
            end: chars.len(),
            kind: SectionKind::Plain,
        });
    }
    sections
}

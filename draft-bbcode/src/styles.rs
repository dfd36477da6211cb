//! Per-character style attribute table
//!
//! Inline style ranges arrive as arbitrary, possibly overlapping spans. The
//! table expands them into per-offset attributes once per block; everything
//! downstream (section splitting, run segmentation, span packing) only ever
//! queries the table.
//!
//! Two families of styles exist:
//! - toggle styles (bold, italic, ...) which are on/off and OR together, and
//! - value styles (color, font size, ...) which carry a value encoded in the
//!   style name (`color-red`) where later ranges overwrite earlier ones.
//!
//! Unknown style names are ignored. Ranges are clamped to the text length;
//! anything beyond that is a caller contract violation, not defended further.

use crate::model::Block;

/// A boolean on/off inline style. The declaration order is also the
/// deterministic tie-break order used by the span packer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ToggleStyle {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
    Superscript,
    Subscript,
}

pub const TOGGLE_STYLES: [ToggleStyle; 7] = [
    ToggleStyle::Bold,
    ToggleStyle::Italic,
    ToggleStyle::Underline,
    ToggleStyle::Strikethrough,
    ToggleStyle::Code,
    ToggleStyle::Superscript,
    ToggleStyle::Subscript,
];

impl ToggleStyle {
    /// The BBCode tag name for this style.
    pub fn tag(self) -> &'static str {
        match self {
            ToggleStyle::Bold => "b",
            ToggleStyle::Italic => "i",
            ToggleStyle::Underline => "u",
            ToggleStyle::Strikethrough => "s",
            ToggleStyle::Code => "code",
            ToggleStyle::Superscript => "sup",
            ToggleStyle::Subscript => "sub",
        }
    }

    /// Editor wire name (`BOLD`, `ITALIC`, ...).
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "BOLD" => Some(ToggleStyle::Bold),
            "ITALIC" => Some(ToggleStyle::Italic),
            "UNDERLINE" => Some(ToggleStyle::Underline),
            "STRIKETHROUGH" => Some(ToggleStyle::Strikethrough),
            "CODE" => Some(ToggleStyle::Code),
            "SUPERSCRIPT" => Some(ToggleStyle::Superscript),
            "SUBSCRIPT" => Some(ToggleStyle::Subscript),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// A value-carrying inline style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueStyle {
    Color,
    Bgcolor,
    FontSize,
    FontFamily,
}

pub const VALUE_STYLES: [ValueStyle; 4] = [
    ValueStyle::Color,
    ValueStyle::Bgcolor,
    ValueStyle::FontSize,
    ValueStyle::FontFamily,
];

impl ValueStyle {
    /// Style-name prefix carrying the value (`color-red` -> `red`).
    fn prefix(self) -> &'static str {
        match self {
            ValueStyle::Color => "color-",
            ValueStyle::Bgcolor => "bgcolor-",
            ValueStyle::FontSize => "fontsize-",
            ValueStyle::FontFamily => "fontfamily-",
        }
    }

    /// The BBCode tag name for this style.
    pub fn tag(self) -> &'static str {
        match self {
            ValueStyle::Color => "color",
            ValueStyle::Bgcolor => "bgcolor",
            ValueStyle::FontSize => "size",
            ValueStyle::FontFamily => "font",
        }
    }
}

/// Either kind of inline style, for queries spanning both families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineStyle {
    Toggle(ToggleStyle),
    Value(ValueStyle),
}

pub const TOGGLE_QUERY: [InlineStyle; 7] = [
    InlineStyle::Toggle(ToggleStyle::Bold),
    InlineStyle::Toggle(ToggleStyle::Italic),
    InlineStyle::Toggle(ToggleStyle::Underline),
    InlineStyle::Toggle(ToggleStyle::Strikethrough),
    InlineStyle::Toggle(ToggleStyle::Code),
    InlineStyle::Toggle(ToggleStyle::Superscript),
    InlineStyle::Toggle(ToggleStyle::Subscript),
];

pub const VALUE_QUERY: [InlineStyle; 4] = [
    InlineStyle::Value(ValueStyle::Color),
    InlineStyle::Value(ValueStyle::Bgcolor),
    InlineStyle::Value(ValueStyle::FontSize),
    InlineStyle::Value(ValueStyle::FontFamily),
];

/// A set of toggle styles packed into one byte. Iterates in declaration
/// order, which keeps everything built on top of it deterministic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleSet(u8);

impl ToggleSet {
    pub fn insert(&mut self, style: ToggleStyle) {
        self.0 |= style.bit();
    }

    pub fn contains(self, style: ToggleStyle) -> bool {
        self.0 & style.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = ToggleStyle> {
        TOGGLE_STYLES.into_iter().filter(move |s| self.contains(*s))
    }
}

impl FromIterator<ToggleStyle> for ToggleSet {
    fn from_iter<I: IntoIterator<Item = ToggleStyle>>(iter: I) -> Self {
        let mut set = ToggleSet::default();
        for style in iter {
            set.insert(style);
        }
        set
    }
}

/// The values of the four value styles active at one offset, in wrapping
/// order (outermost first).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueStyles {
    pub color: Option<String>,
    pub bgcolor: Option<String>,
    pub fontsize: Option<String>,
    pub fontfamily: Option<String>,
}

impl ValueStyles {
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.bgcolor.is_none()
            && self.fontsize.is_none()
            && self.fontfamily.is_none()
    }
}

/// Everything active at one offset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSnapshot {
    pub toggles: ToggleSet,
    pub values: ValueStyles,
}

/// Per-offset expansion of a block's inline style ranges. Built once per
/// block, immutable afterward. Offsets are character offsets.
#[derive(Debug, Clone)]
pub struct StyleTable {
    len: usize,
    toggles: Vec<ToggleSet>,
    // One slot vector per entry of VALUE_STYLES.
    values: [Vec<Option<String>>; 4],
}

impl StyleTable {
    pub fn build(block: &Block) -> Self {
        let len = block.text.chars().count();
        let mut table = StyleTable {
            len,
            toggles: vec![ToggleSet::default(); len],
            values: std::array::from_fn(|_| vec![None; len]),
        };
        for range in &block.inline_style_ranges {
            let start = range.offset.min(len);
            let end = range.offset.saturating_add(range.length).min(len);
            if let Some(toggle) = ToggleStyle::from_name(&range.style) {
                for slot in &mut table.toggles[start..end] {
                    slot.insert(toggle);
                }
            } else if let Some((value_style, value)) = parse_value_style(&range.style) {
                let slots = &mut table.values[value_style as usize];
                for slot in &mut slots[start..end] {
                    *slot = Some(value.to_string());
                }
            }
            // Unknown style names are ignored.
        }
        table
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn toggles_at(&self, offset: usize) -> ToggleSet {
        self.toggles.get(offset).copied().unwrap_or_default()
    }

    /// The value of a value style at an offset. Empty stored values count
    /// as absent, matching the falsiness rules of the source editor.
    pub fn value_at(&self, style: ValueStyle, offset: usize) -> Option<&str> {
        self.values[style as usize]
            .get(offset)?
            .as_deref()
            .filter(|v| !v.is_empty())
    }

    /// All active styles at an offset.
    pub fn snapshot_at(&self, offset: usize) -> StyleSnapshot {
        StyleSnapshot {
            toggles: self.toggles_at(offset),
            values: ValueStyles {
                color: self.value_at(ValueStyle::Color, offset).map(str::to_string),
                bgcolor: self
                    .value_at(ValueStyle::Bgcolor, offset)
                    .map(str::to_string),
                fontsize: self
                    .value_at(ValueStyle::FontSize, offset)
                    .map(str::to_string),
                fontfamily: self
                    .value_at(ValueStyle::FontFamily, offset)
                    .map(str::to_string),
            },
        }
    }

    /// True only when every named style has the same raw table entry at
    /// `offset` and `offset - 1`. Offset 0 is never "same as previous",
    /// and neither is anything past the end of the table.
    pub fn same_style_as_previous(&self, styles: &[InlineStyle], offset: usize) -> bool {
        if offset == 0 || offset >= self.len {
            return false;
        }
        styles.iter().all(|style| match style {
            InlineStyle::Toggle(t) => {
                self.toggles[offset].contains(*t) == self.toggles[offset - 1].contains(*t)
            }
            InlineStyle::Value(v) => {
                self.values[*v as usize][offset] == self.values[*v as usize][offset - 1]
            }
        })
    }
}

fn parse_value_style(name: &str) -> Option<(ValueStyle, &str)> {
    VALUE_STYLES
        .into_iter()
        .find_map(|style| name.strip_prefix(style.prefix()).map(|v| (style, v)))
}

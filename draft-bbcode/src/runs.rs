//! Run segmentation
//!
//! Coalesces consecutive characters whose queried styles are identical into
//! runs. The same segmenter splits a section twice: first by the four value
//! styles, then each value run again by the seven toggle styles, so the span
//! packer only ever sees runs with constant toggle membership.
//!
//! Text extraction happens here too, including the one-time escaping of the
//! literal bracket characters to numeric character references so they can't
//! be read back as markup.

use crate::styles::{InlineStyle, StyleSnapshot, StyleTable};

/// A maximal span of characters with a constant style set, with its text
/// already extracted and escaped.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub start: usize,
    pub end: usize,
    pub styles: StyleSnapshot,
    pub text: String,
}

fn push_escaped(out: &mut String, ch: char) {
    match ch {
        '[' => out.push_str("&#91;"),
        ']' => out.push_str("&#93;"),
        _ => out.push(ch),
    }
}

/// Split `[start, end)` into runs that are constant over `styles`. Each run
/// carries the full style snapshot at its first character.
pub fn segment(
    chars: &[char],
    table: &StyleTable,
    styles: &[InlineStyle],
    start: usize,
    end: usize,
) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for i in start..end.min(chars.len()) {
        match runs.last_mut() {
            Some(run) if i != start && table.same_style_as_previous(styles, i) => {
                push_escaped(&mut run.text, chars[i]);
                run.end = i + 1;
            }
            _ => {
                let mut text = String::new();
                push_escaped(&mut text, chars[i]);
                runs.push(Run {
                    start: i,
                    end: i + 1,
                    styles: table.snapshot_at(i),
                    text,
                });
            }
        }
    }
    runs
}

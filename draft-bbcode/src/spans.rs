//! Tag span packing (greedy laminarization)
//!
//! Per-run toggle membership can be arbitrary, including "crossing" patterns
//! where one style's interval partially overlaps another's without nesting.
//! Bracket markup can only express a laminar family of spans, so the packer
//! converts the membership into one: not a minimal one, and not necessarily
//! the tagging a human would write for crossing input, but a deterministic
//! one that is consistent with the per-run data.
//!
//! # The algorithm
//!
//! For a node covering a contiguous run range:
//!
//! 1. For every toggle style not already used by an ancestor (a tag never
//!    nests inside itself), collect the maximal sub-ranges where the style is
//!    active in every covered run. Each is a candidate span.
//! 2. Pick the remaining candidate with the largest length; ties go to the
//!    smaller start, then to style declaration order. It becomes a child.
//! 3. Clip every other pending candidate against the chosen span: a boundary
//!    inside the span moves to the span's edge, and candidates clipped to
//!    zero length are dropped.
//! 4. Recurse into the child over its own range with fresh candidates.
//! 5. Repeat from 2 until the node's range is covered or no candidates
//!    remain. Children are ordered by start.
//!
//! # Rendering
//!
//! Depth-first with a shared run cursor: gap text before each child, the
//! child wrapped in its tag, trailing text up to the node's end. Flattening
//! the rendered nesting back to per-run ancestor sets reproduces the input
//! membership exactly whenever that membership was laminar to begin with.

use crate::runs::Run;
use crate::styles::{ToggleSet, ToggleStyle, TOGGLE_STYLES};

/// A node of the packed span tree. Children are pairwise disjoint, fully
/// contained in `start..end`, and sorted by start.
#[derive(Debug, Clone, PartialEq)]
pub struct TagSpan {
    pub style: ToggleStyle,
    pub start: usize,
    pub end: usize,
    pub children: Vec<TagSpan>,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    style: ToggleStyle,
    start: usize,
    end: usize,
}

impl Candidate {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Pack a run sequence into a laminar span forest over `0..runs.len()`.
pub fn pack(runs: &[Run]) -> Vec<TagSpan> {
    build_children(runs, 0, runs.len(), ToggleSet::default())
}

fn build_children(runs: &[Run], start: usize, end: usize, ancestors: ToggleSet) -> Vec<TagSpan> {
    let mut pending = collect_candidates(runs, start, end, ancestors);
    let mut children = Vec::new();
    let mut covered = 0;

    while covered < end - start {
        let Some(chosen) = take_best(&mut pending) else {
            break;
        };
        covered += chosen.len();
        clip_pending(&mut pending, &chosen);

        let mut inner_ancestors = ancestors;
        inner_ancestors.insert(chosen.style);
        children.push(TagSpan {
            style: chosen.style,
            start: chosen.start,
            end: chosen.end,
            children: build_children(runs, chosen.start, chosen.end, inner_ancestors),
        });
    }

    children.sort_by_key(|child| child.start);
    children
}

/// Maximal sub-ranges of `start..end` where a single style is active in
/// every run, excluding styles already used by an ancestor.
fn collect_candidates(
    runs: &[Run],
    start: usize,
    end: usize,
    ancestors: ToggleSet,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for style in TOGGLE_STYLES {
        if ancestors.contains(style) {
            continue;
        }
        let mut open: Option<usize> = None;
        for i in start..end {
            if runs[i].styles.toggles.contains(style) {
                open.get_or_insert(i);
            } else if let Some(span_start) = open.take() {
                candidates.push(Candidate {
                    style,
                    start: span_start,
                    end: i,
                });
            }
        }
        if let Some(span_start) = open {
            candidates.push(Candidate {
                style,
                start: span_start,
                end,
            });
        }
    }
    candidates
}

/// Remove and return the best candidate: longest, then leftmost, then first
/// in style declaration order. Fully deterministic.
fn take_best(pending: &mut Vec<Candidate>) -> Option<Candidate> {
    let mut best: Option<usize> = None;
    for (i, candidate) in pending.iter().enumerate() {
        let better = match best {
            None => true,
            Some(b) => {
                let current = &pending[b];
                candidate.len() > current.len()
                    || (candidate.len() == current.len() && candidate.start < current.start)
            }
        };
        if better {
            best = Some(i);
        }
    }
    best.map(|i| pending.remove(i))
}

/// Clip pending candidates against a chosen span: overlapping boundaries
/// move to the span's edges, empty leftovers disappear.
fn clip_pending(pending: &mut Vec<Candidate>, chosen: &Candidate) {
    pending.retain_mut(|candidate| {
        if candidate.start >= chosen.start && candidate.start < chosen.end {
            candidate.start = chosen.end;
        }
        if candidate.end > chosen.start && candidate.end <= chosen.end {
            candidate.end = chosen.start;
        }
        candidate.end > candidate.start
    });
}

/// Render a packed forest over `runs` to bracket markup.
pub fn render(spans: &[TagSpan], runs: &[Run]) -> String {
    let mut out = String::new();
    let mut cursor = 0;
    render_level(spans, runs, runs.len(), &mut cursor, &mut out);
    out
}

fn render_level(
    spans: &[TagSpan],
    runs: &[Run],
    end: usize,
    cursor: &mut usize,
    out: &mut String,
) {
    for span in spans {
        while *cursor < span.start {
            out.push_str(&runs[*cursor].text);
            *cursor += 1;
        }
        out.push('[');
        out.push_str(span.style.tag());
        out.push(']');
        render_level(&span.children, runs, span.end, cursor, out);
        out.push_str("[/");
        out.push_str(span.style.tag());
        out.push(']');
    }
    while *cursor < end {
        out.push_str(&runs[*cursor].text);
        *cursor += 1;
    }
}

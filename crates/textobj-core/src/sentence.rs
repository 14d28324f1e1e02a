//! Sentence boundaries for the `is`/`as` objects.
//!
//! A sentence ends at a `.`, `!` or `?`, optionally followed by closing
//! characters (`)`, `]`, `"`, `'`), and then whitespace. An empty or
//! whitespace-only line also ends a sentence, as does the end of the buffer.
//! A sentence starts at the first non-whitespace character after an ending.
//!
//! Boundaries are found with one regex pass over the buffer contents; the
//! byte offsets it reports are mapped back to char indices through the rope.

use std::sync::OnceLock;

use regex::Regex;

use crate::buffer::Buffer;

/// Matches the separator between two sentences. A match ends right before
/// the first char of the following sentence.
fn boundary_regex() -> Option<&'static Regex> {
    static BOUNDARY: OnceLock<Option<Regex>> = OnceLock::new();
    BOUNDARY
        .get_or_init(|| Regex::new(r#"[.!?][)\]"']*\s+|\n[ \t]*\n\s*"#).ok())
        .as_ref()
}

// ---------------------------------------------------------------------------
// Start indices
// ---------------------------------------------------------------------------

/// Char indices of every sentence start, ascending.
///
/// Empty when the buffer holds nothing but whitespace.
pub(crate) fn start_indices(buf: &Buffer) -> Vec<usize> {
    let rope = buf.rope();
    let total = rope.len_chars();

    let Some(first) = (0..total).find(|&i| !rope.char(i).is_whitespace()) else {
        return Vec::new();
    };

    let mut starts = vec![first];
    if let Some(re) = boundary_regex() {
        let text = buf.contents();
        for m in re.find_iter(&text) {
            let idx = rope.byte_to_char(m.end());
            if idx < total && idx > first {
                starts.push(idx);
            }
        }
    }

    starts.sort_unstable();
    starts.dedup();
    starts
}

/// The last non-whitespace char before `next`, searching back from `next - 1`
/// but never before `start`.
pub(crate) fn content_end(buf: &Buffer, start: usize, next: usize) -> usize {
    let rope = buf.rope();
    let mut idx = next.saturating_sub(1).max(start);
    while idx > start && rope.char(idx).is_whitespace() {
        idx -= 1;
    }
    idx
}

/// Index into `starts` of the sentence containing `idx`: the last start at or
/// before it. `None` when `idx` precedes the first sentence.
pub(crate) fn sentence_index(starts: &[usize], idx: usize) -> Option<usize> {
    starts.partition_point(|&s| s <= idx).checked_sub(1)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

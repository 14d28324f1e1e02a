//! Paragraph boundaries for the `ip`/`ap` objects.
//!
//! A paragraph is a maximal run of non-blank lines. Lines that are empty or
//! hold only spaces and tabs separate paragraphs.

use crate::buffer::Buffer;

/// The maximal run of lines around `line` that are all blank or all
/// non-blank, as an inclusive `(first, last)` pair.
#[must_use]
pub fn paragraph_bounds(buf: &Buffer, line: usize) -> (usize, usize) {
    let last = buf.last_line();
    let line = line.min(last);
    let blank = buf.is_blank_line(line);

    let mut first = line;
    while first > 0 && buf.is_blank_line(first - 1) == blank {
        first -= 1;
    }
    let mut end = line;
    while end < last && buf.is_blank_line(end + 1) == blank {
        end += 1;
    }
    (first, end)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

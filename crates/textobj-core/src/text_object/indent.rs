//! Indentation-block objects: `ii`, `ai`, `aI`.
//!
//! The block is found from the nearest non-blank line at or above the
//! cursor: every line around it that is blank or indented at least as deep
//! belongs to the block.
//!
//! | Object | Adds                          |
//! |--------|-------------------------------|
//! | `ii`   | nothing                       |
//! | `ai`   | the line above                |
//! | `aI`   | the line above and line below |
//!
//! The range is exact, so these objects opt out of the operator adjustment.
//! A change starts at the first line's indentation; other operators start at
//! column 0. Outside visual mode the range runs to column 0 of the line after
//! the block (so a delete takes the trailing line break), unless the block
//! ends on the last line.

use crate::buffer::Buffer;
use crate::mode::Operator;
use crate::options::Options;
use crate::position::{Position, Span};
use crate::selection::SelectionState;
use crate::text_object::{Resolution, Resolved, TextObject};

/// `ii` / `ai` / `aI`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentObject {
    /// Include the line above the block.
    pub above: bool,
    /// Include the line below the block.
    pub below: bool,
}

impl IndentObject {
    pub const INNER: Self = Self {
        above: false,
        below: false,
    };
    pub const AROUND_ABOVE: Self = Self {
        above: true,
        below: false,
    };
    pub const AROUND_BOTH: Self = Self {
        above: true,
        below: true,
    };
}

impl TextObject for IndentObject {
    fn name(&self) -> &'static str {
        match (self.above, self.below) {
            (false, _) => "ii",
            (true, false) => "ai",
            (true, true) => "aI",
        }
    }

    fn resolve(&self, buf: &Buffer, state: &SelectionState, _options: &Options) -> Resolution {
        let last_line = buf.last_line();
        let cursor_line = buf.clamp_position(state.active).line;
        let (mut first, mut last) = block_lines(buf, cursor_line);

        if self.above {
            first = first.saturating_sub(1);
        }
        if self.below {
            last = (last + 1).min(last_line);
        }

        let start_col = if state.mode.operator().is_some_and(Operator::is_change) {
            indent_of(buf, first)
        } else {
            0
        };
        let stop = if state.mode.is_visual() || last == last_line {
            Position::new(last, buf.line_content_len(last).unwrap_or(0))
        } else {
            Position::new(last + 1, 0)
        };

        Resolution::Found(Resolved::charwise(Span::new(
            Position::new(first, start_col),
            stop,
        )))
    }

    fn adjusts_for_operator(&self) -> bool {
        false
    }
}

fn indent_of(buf: &Buffer, line: usize) -> usize {
    buf.line_info(line).map_or(0, |info| info.first_non_blank)
}

/// Inclusive line bounds of the indentation block around `line`.
fn block_lines(buf: &Buffer, line: usize) -> (usize, usize) {
    let last_line = buf.last_line();

    // The nearest non-blank line at or above the cursor, else below it.
    let anchor = (0..=line)
        .rev()
        .find(|&l| !buf.is_blank_line(l))
        .or_else(|| (line..=last_line).find(|&l| !buf.is_blank_line(l)))
        .unwrap_or(line);
    let indent = indent_of(buf, anchor);
    let in_block = |l: usize| buf.is_blank_line(l) || indent_of(buf, l) >= indent;

    let mut first = anchor;
    while first > 0 && in_block(first - 1) {
        first -= 1;
    }
    let mut last = anchor;
    while last < last_line && in_block(last + 1) {
        last += 1;
    }
    (first, last)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Argument objects: `ia`, `aa`.
//!
//! An argument is bounded on the left by an opening delimiter or a
//! separator, and on the right by a closing delimiter or a separator. The
//! delimiter sets come from [`Options`] (`(` `[` / `)` `]` / `,` by default).
//! Both scans count nesting depth, so the delimiters of an inner call are
//! skipped:
//!
//! ```text
//! (a, b, (x) c(y, z), a)
//!              ^ia^     ia at y selects y, aa at z selects ", z"
//! ```
//!
//! | Right boundary | `aa` selects                                   |
//! |----------------|------------------------------------------------|
//! | separator      | argument + right separator                     |
//! | closing        | left separator (or opening delimiter) + argument |
//!
//! `aa` fails on an empty list. A scan that reaches a document edge without
//! accepting a boundary fails the whole resolution.

use crate::buffer::Buffer;
use crate::options::Options;
use crate::position::Span;
use crate::selection::SelectionState;
use crate::text_object::{Resolution, Resolved, TextObject};

/// `ia` / `aa`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentObject {
    pub around: bool,
}

impl TextObject for ArgumentObject {
    fn name(&self) -> &'static str {
        if self.around { "aa" } else { "ia" }
    }

    fn resolve(&self, buf: &Buffer, state: &SelectionState, options: &Options) -> Resolution {
        let total = buf.len_chars();
        if total == 0 {
            return Resolution::failed(state);
        }
        let cursor = buf.clamped_idx(state.active).min(total - 1);
        let rope = buf.rope();
        let ch = rope.char(cursor);

        // Don't let the scans re-match the delimiter under the cursor.
        let left_from = if options.is_arg_close(ch) {
            cursor.checked_sub(1)
        } else {
            Some(cursor)
        };
        let right_from = if options.is_arg_separator(ch) || options.is_arg_open(ch) {
            cursor + 1
        } else {
            cursor
        };

        let Some(left) = left_from.and_then(|from| scan_left(buf, options, from)) else {
            return Resolution::failed(state);
        };
        let Some(right) = scan_right(buf, options, right_from) else {
            return Resolution::failed(state);
        };

        let (start, stop) = if self.around {
            let left_open = options.is_arg_open(rope.char(left));
            let right_close = options.is_arg_close(rope.char(right));
            if left_open && right_close && right == left + 1 {
                return Resolution::failed(state);
            }
            if right_close {
                (left, right - 1)
            } else {
                (left + 1, right)
            }
        } else {
            let mut start = left + 1;
            match (buf.char_at_idx(start), buf.char_at_idx(start + 1)) {
                (Some('\r'), Some('\n')) => start += 2,
                (Some('\n'), _) => start += 1,
                _ => {}
            }
            (start.min(right), right - 1)
        };

        let start = buf.idx_to_pos(start);
        let mut resolved =
            Resolved::charwise(Span::new(start, buf.idx_to_pos(stop))).with_anchor(start);
        if start > state.active {
            resolved = resolved.with_cursor_correction(start);
        }
        Resolution::Found(resolved)
    }
}

/// Walk left from `from` (inclusive) to the opening delimiter or separator
/// at depth zero.
fn scan_left(buf: &Buffer, options: &Options, from: usize) -> Option<usize> {
    let rope = buf.rope();
    let mut depth = 0usize;
    let mut idx = from;
    loop {
        let ch = rope.char(idx);
        if options.is_arg_close(ch) {
            depth += 1;
        } else if options.is_arg_open(ch) {
            if depth == 0 {
                return Some(idx);
            }
            depth -= 1;
        } else if depth == 0 && options.is_arg_separator(ch) {
            return Some(idx);
        }
        if idx == 0 {
            return None;
        }
        idx -= 1;
    }
}

/// Walk right from `from` (inclusive) to the closing delimiter or separator
/// at depth zero.
fn scan_right(buf: &Buffer, options: &Options, from: usize) -> Option<usize> {
    let rope = buf.rope();
    let mut depth = 0usize;
    for idx in from..rope.len_chars() {
        let ch = rope.char(idx);
        if options.is_arg_open(ch) {
            depth += 1;
        } else if options.is_arg_close(ch) {
            if depth == 0 {
                return Some(idx);
            }
            depth -= 1;
        } else if depth == 0 && options.is_arg_separator(ch) {
            return Some(idx);
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

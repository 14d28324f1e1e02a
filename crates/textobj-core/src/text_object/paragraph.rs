//! Paragraph objects: `ip`, `ap`. Always line-wise.
//!
//! | Cursor line | `ip`                | `ap`                                  |
//! |-------------|---------------------|---------------------------------------|
//! | non-blank   | the paragraph       | paragraph + following blank lines     |
//! | blank       | the blank-line run  | blank-line run + following paragraph  |
//!
//! `stop` sits on the end-of-line position of the last line, so a pending
//! operator's adjusted range ends at the start of the next line.

use crate::buffer::Buffer;
use crate::options::Options;
use crate::paragraph::paragraph_bounds;
use crate::position::{Position, Span};
use crate::selection::SelectionState;
use crate::text_object::{Resolution, Resolved, TextObject};

/// `ip` / `ap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParagraphObject {
    pub around: bool,
}

impl TextObject for ParagraphObject {
    fn name(&self) -> &'static str {
        if self.around { "ap" } else { "ip" }
    }

    fn resolve(&self, buf: &Buffer, state: &SelectionState, _options: &Options) -> Resolution {
        let last_line = buf.last_line();
        let count = state.count_or_one();
        let active = buf.clamp_position(state.active).line;

        let span = if state.is_extending() {
            let mut stop = active;
            for _ in 0..count {
                if state.is_reversed() {
                    if stop == 0 {
                        break;
                    }
                    stop = self.lines_at(buf, stop - 1).0;
                } else {
                    if stop >= last_line {
                        break;
                    }
                    stop = self.lines_at(buf, stop + 1).1;
                }
            }
            let stop = if state.is_reversed() {
                Position::new(stop, 0)
            } else {
                line_end(buf, stop)
            };
            Span::new(state.anchor, stop)
        } else {
            let (first, mut last) = self.lines_at(buf, active);
            for _ in 1..count {
                if last >= last_line {
                    break;
                }
                last = self.lines_at(buf, last + 1).1;
            }
            Span::new(Position::new(first, 0), line_end(buf, last))
        };

        Resolution::Found(Resolved::linewise(span))
    }
}

impl ParagraphObject {
    /// Inclusive line bounds of the unit at `line`.
    fn lines_at(self, buf: &Buffer, line: usize) -> (usize, usize) {
        let (first, last) = paragraph_bounds(buf, line);
        if self.around && last < buf.last_line() {
            (first, paragraph_bounds(buf, last + 1).1)
        } else {
            (first, last)
        }
    }
}

fn line_end(buf: &Buffer, line: usize) -> Position {
    Position::new(line, buf.line_content_len(line).unwrap_or(0))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Sentence objects: `is`, `as`.
//!
//! A sentence is its content (start through the last non-blank char) plus
//! the whitespace gap before the next sentence. The unit at a char index:
//!
//! | Under the index                 | `is`          | `as`                              |
//! |---------------------------------|---------------|-----------------------------------|
//! | whitespace before any sentence  | that gap      | gap + first sentence              |
//! | gap after a sentence            | that gap      | gap + next sentence's content     |
//! | content, blanks after it        | content       | content + trailing blanks         |
//! | content, no blanks after it     | content       | leading blanks + content          |
//!
//! Only spaces and tabs on the content's own line count as trailing or
//! leading blanks, so every `as` takes exactly one separator run.

use crate::buffer::{is_blank_char, Buffer};
use crate::options::Options;
use crate::selection::SelectionState;
use crate::sentence::{content_end, sentence_index, start_indices};
use crate::text_object::{grow_charwise, Resolution, Resolved, TextObject};

/// `is` / `as`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceObject {
    pub around: bool,
}

impl TextObject for SentenceObject {
    fn name(&self) -> &'static str {
        if self.around { "as" } else { "is" }
    }

    fn resolve(&self, buf: &Buffer, state: &SelectionState, _options: &Options) -> Resolution {
        let sentences = Sentences::new(buf);
        let unit = |idx| {
            if self.around {
                sentences.around(idx)
            } else {
                sentences.inner(idx)
            }
        };
        let span = grow_charwise(buf, state, &unit, |idx| unit(idx).0);
        Resolution::Found(Resolved::charwise(span))
    }
}

/// Sentence starts of one buffer snapshot.
struct Sentences<'a> {
    buf: &'a Buffer,
    starts: Vec<usize>,
}

impl<'a> Sentences<'a> {
    fn new(buf: &'a Buffer) -> Self {
        Self {
            buf,
            starts: start_indices(buf),
        }
    }

    /// Start of the sentence after sentence `k`, or the buffer length.
    fn next_start(&self, k: usize) -> usize {
        self.starts
            .get(k + 1)
            .copied()
            .unwrap_or_else(|| self.buf.len_chars())
    }

    fn content_end(&self, k: usize) -> usize {
        content_end(self.buf, self.starts[k], self.next_start(k))
    }

    fn is_blank(&self, idx: usize) -> bool {
        self.buf.char_at_idx(idx).is_some_and(is_blank_char)
    }

    fn inner(&self, idx: usize) -> (usize, usize) {
        let last = self.buf.len_chars().saturating_sub(1);
        let Some(k) = sentence_index(&self.starts, idx) else {
            let first = self.starts.first().map_or(last, |&s| s.saturating_sub(1));
            return (0, first);
        };
        let end = self.content_end(k);
        if idx > end {
            (end + 1, self.next_start(k) - 1)
        } else {
            (self.starts[k], end)
        }
    }

    fn around(&self, idx: usize) -> (usize, usize) {
        let last = self.buf.len_chars().saturating_sub(1);
        let Some(k) = sentence_index(&self.starts, idx) else {
            if self.starts.is_empty() {
                return (0, last);
            }
            return (0, self.content_end(0));
        };

        let start = self.starts[k];
        let end = self.content_end(k);
        let next = self.next_start(k);

        if idx > end {
            let stop = if k + 1 < self.starts.len() {
                self.content_end(k + 1)
            } else {
                next - 1
            };
            return (end + 1, stop);
        }

        if self.is_blank(end + 1) && end + 1 < next {
            let mut stop = end + 1;
            while stop + 1 < next && self.is_blank(stop + 1) {
                stop += 1;
            }
            return (start, stop);
        }

        let mut lead = start;
        while lead > 0 && self.is_blank(lead - 1) {
            lead -= 1;
        }
        (lead, end)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

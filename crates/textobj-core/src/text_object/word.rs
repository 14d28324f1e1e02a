//! Word objects: `iw`, `aw`, `iW`, `aW`.
//!
//! `iw` selects the run under the cursor: a word, a punctuation group, or
//! a blank run. Decision table for the `aw` unit at a char index:
//!
//! | Under the index      | Unit                                                   |
//! |----------------------|--------------------------------------------------------|
//! | line break           | the line break alone                                   |
//! | blank                | blank run + the following word on the same line       |
//! | word, blanks after   | word + trailing blanks                                 |
//! | word, no blanks after, no count | leading blanks + word                       |
//! | word, otherwise      | word                                                   |
//!
//! Blank runs stop at line breaks, so a word at the end of a line never
//! pulls in the next line's first word. Growing backward from an extending
//! visual selection lands on the start of the previous word, taking its
//! leading blanks with it for `aw`.

use crate::buffer::Buffer;
use crate::options::Options;
use crate::selection::SelectionState;
use crate::text_object::{grow_charwise, Resolution, Resolved, TextObject};
use crate::word::{classify, classify_big, run_at, CharClass, Classifier};

/// A word or WORD object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordObject {
    pub big: bool,
    pub around: bool,
}

impl WordObject {
    pub const INNER: Self = Self {
        big: false,
        around: false,
    };
    pub const AROUND: Self = Self {
        big: false,
        around: true,
    };
    pub const INNER_BIG: Self = Self {
        big: true,
        around: false,
    };
    pub const AROUND_BIG: Self = Self {
        big: true,
        around: true,
    };

    const fn classifier(self) -> Classifier {
        if self.big { classify_big } else { classify }
    }
}

impl TextObject for WordObject {
    fn name(&self) -> &'static str {
        match (self.around, self.big) {
            (false, false) => "iw",
            (true, false) => "aw",
            (false, true) => "iW",
            (true, true) => "aW",
        }
    }

    fn resolve(&self, buf: &Buffer, state: &SelectionState, _options: &Options) -> Resolution {
        let classify_fn = self.classifier();
        let span = if self.around {
            let leading = state.count.is_none();
            grow_charwise(
                buf,
                state,
                |idx| around_unit(buf, idx, classify_fn, leading),
                |idx| around_back(buf, idx, classify_fn),
            )
        } else {
            grow_charwise(
                buf,
                state,
                |idx| run_at(buf, idx, classify_fn),
                |idx| run_at(buf, idx, classify_fn).0,
            )
        };
        Resolution::Found(Resolved::charwise(span))
    }
}

fn class_at(buf: &Buffer, idx: usize, classify_fn: Classifier) -> Option<CharClass> {
    buf.char_at_idx(idx).map(classify_fn)
}

/// The `aw` unit at `idx`. `leading` allows falling back to leading blanks
/// when the word has no trailing ones.
fn around_unit(buf: &Buffer, idx: usize, classify_fn: Classifier, leading: bool) -> (usize, usize) {
    let (start, end) = run_at(buf, idx, classify_fn);
    match class_at(buf, idx, classify_fn) {
        Some(CharClass::Blank) => {
            if class_at(buf, end + 1, classify_fn).is_some_and(CharClass::is_token) {
                (start, run_at(buf, end + 1, classify_fn).1)
            } else {
                (start, end)
            }
        }
        Some(CharClass::Word | CharClass::Punctuation) => {
            if class_at(buf, end + 1, classify_fn) == Some(CharClass::Blank) {
                (start, run_at(buf, end + 1, classify_fn).1)
            } else if leading
                && start > 0
                && class_at(buf, start - 1, classify_fn) == Some(CharClass::Blank)
            {
                (run_at(buf, start - 1, classify_fn).0, end)
            } else {
                (start, end)
            }
        }
        Some(CharClass::Newline) | None => (start, end),
    }
}

/// Where `stop` lands when `aw` grows backward over the unit at `idx`.
fn around_back(buf: &Buffer, idx: usize, classify_fn: Classifier) -> usize {
    let (start, _) = run_at(buf, idx, classify_fn);
    match class_at(buf, idx, classify_fn) {
        Some(CharClass::Blank) => {
            if start > 0 && class_at(buf, start - 1, classify_fn).is_some_and(CharClass::is_token) {
                run_at(buf, start - 1, classify_fn).0
            } else {
                start
            }
        }
        Some(CharClass::Word | CharClass::Punctuation) => {
            if start > 0 && class_at(buf, start - 1, classify_fn) == Some(CharClass::Blank) {
                run_at(buf, start - 1, classify_fn).0
            } else {
                start
            }
        }
        Some(CharClass::Newline) | None => start,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::mode::VisualKind;
    use crate::position::{Position, Span};

    fn p(line: usize, col: usize) -> Position {
        Position::new(line, col)
    }

    fn s(sl: usize, sc: usize, el: usize, ec: usize) -> Span {
        Span::new(p(sl, sc), p(el, ec))
    }

    fn span_of(object: WordObject, text: &str, state: SelectionState) -> Span {
        let buf = Buffer::from_text(text);
        object.resolve(&buf, &state, &Options::default()).span()
    }

    fn at(object: WordObject, text: &str, col: usize) -> Span {
        span_of(object, text, SelectionState::at(p(0, col)))
    }

    // -- iw -----------------------------------------------------------------

    #[test]
    fn iw_on_word() {
        assert_eq!(at(WordObject::INNER, "hello world", 0), s(0, 0, 0, 4));
        assert_eq!(at(WordObject::INNER, "hello world", 2), s(0, 0, 0, 4));
        assert_eq!(at(WordObject::INNER, "hello world", 6), s(0, 6, 0, 10));
    }

    #[test]
    fn iw_contains_cursor_on_every_word_char() {
        let text = "let foo_bar = baz(qux, 42);";
        let buf = Buffer::from_text(text);
        for (col, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let span = WordObject::INNER
                .resolve(&buf, &SelectionState::at(p(0, col)), &Options::default())
                .span();
            assert!(span.start <= p(0, col) && p(0, col) <= span.stop, "{col}");
        }
    }

    #[test]
    fn iw_on_punctuation_run() {
        assert_eq!(at(WordObject::INNER, "a::b", 1), s(0, 1, 0, 2));
        assert_eq!(at(WordObject::INNER, "hello.world", 5), s(0, 5, 0, 5));
    }

    #[test]
    fn iw_on_whitespace() {
        assert_eq!(at(WordObject::INNER, "hello   world", 6), s(0, 5, 0, 7));
    }

    #[test]
    fn iw_on_empty_line_is_a_point() {
        let span = span_of(
            WordObject::INNER,
            "hello\n\nworld",
            SelectionState::at(p(1, 0)),
        );
        assert_eq!(span, Span::point(p(1, 0)));
    }

    #[test]
    fn iw_empty_buffer_is_a_point() {
        assert_eq!(at(WordObject::INNER, "", 0), Span::point(p(0, 0)));
    }

    #[test]
    fn iw_with_count_takes_blank_runs_as_units() {
        let state = SelectionState::at(p(0, 0)).with_count(3);
        assert_eq!(span_of(WordObject::INNER, "one two three", state), s(0, 0, 0, 6));
    }

    #[test]
    fn iw_big_includes_punctuation() {
        assert_eq!(at(WordObject::INNER_BIG, "hello.world next", 3), s(0, 0, 0, 10));
        assert_eq!(at(WordObject::INNER_BIG, "x=y+z next", 2), s(0, 0, 0, 4));
    }

    // -- aw -----------------------------------------------------------------

    #[test]
    fn aw_takes_trailing_blanks() {
        assert_eq!(at(WordObject::AROUND, "hello world", 2), s(0, 0, 0, 5));
        assert_eq!(at(WordObject::AROUND, "one   two   three", 7), s(0, 6, 0, 11));
    }

    #[test]
    fn aw_last_word_takes_leading_blanks() {
        assert_eq!(at(WordObject::AROUND, "hello world", 7), s(0, 5, 0, 10));
    }

    #[test]
    fn aw_before_punctuation_takes_leading_blanks() {
        assert_eq!(at(WordObject::AROUND, "call foo(x)", 6), s(0, 4, 0, 7));
    }

    #[test]
    fn aw_with_count_does_not_take_leading_blanks() {
        let state = SelectionState::at(p(0, 6)).with_count(1);
        assert_eq!(span_of(WordObject::AROUND, "hello world", state), s(0, 6, 0, 10));
    }

    #[test]
    fn aw_no_surrounding_blanks() {
        assert_eq!(at(WordObject::AROUND, "hello", 2), s(0, 0, 0, 4));
        assert_eq!(at(WordObject::AROUND, "hello.world", 5), s(0, 5, 0, 5));
    }

    #[test]
    fn aw_on_blank_takes_next_word() {
        assert_eq!(at(WordObject::AROUND, "hello   world", 6), s(0, 5, 0, 12));
    }

    #[test]
    fn aw_on_trailing_blank_stays_on_line() {
        let span = span_of(
            WordObject::AROUND,
            "foo  \nbar",
            SelectionState::at(p(0, 4)),
        );
        assert_eq!(span, s(0, 3, 0, 4));
    }

    #[test]
    fn aw_word_at_end_of_line_does_not_cross() {
        let span = span_of(
            WordObject::AROUND,
            "foo bar\nbaz",
            SelectionState::at(p(0, 5)),
        );
        assert_eq!(span, s(0, 3, 0, 6));
    }

    #[test]
    fn aw_with_count() {
        let state = SelectionState::at(p(0, 0)).with_count(2);
        assert_eq!(span_of(WordObject::AROUND, "foo bar baz", state), s(0, 0, 0, 7));
    }

    #[test]
    fn aw_repeated_consumes_whole_line() {
        let text = "foo bar baz";
        let buf = Buffer::from_text(text);
        let opts = Options::default();

        let first = WordObject::AROUND
            .resolve(&buf, &SelectionState::at(p(0, 0)), &opts)
            .span();
        assert_eq!(first, s(0, 0, 0, 3));

        let state = SelectionState::visual(first.start, first.stop, VisualKind::Char);
        let second = WordObject::AROUND.resolve(&buf, &state, &opts).span();
        assert_eq!(second, s(0, 0, 0, 7));

        let state = SelectionState::visual(second.start, second.stop, VisualKind::Char);
        let third = WordObject::AROUND.resolve(&buf, &state, &opts).span();
        assert_eq!(third, s(0, 0, 0, 10));
    }

    #[test]
    fn aw_from_next_position_never_empty() {
        let text = "a  b.c d\n\n e";
        let buf = Buffer::from_text(text);
        let opts = Options::default();
        let mut pos = p(0, 0);
        while pos < buf.end_position() {
            let span = WordObject::AROUND
                .resolve(&buf, &SelectionState::at(pos), &opts)
                .span();
            assert!(span.start <= span.stop, "{pos}");
            assert!(span.stop >= pos, "{pos}");
            pos = buf.step_right(span.stop);
        }
    }

    #[test]
    fn aw_reversed_visual_grows_backward() {
        let text = "one two three";
        // From "three": the blank and "two" before it.
        let state = SelectionState::visual(p(0, 12), p(0, 8), VisualKind::Char);
        assert_eq!(span_of(WordObject::AROUND, text, state), s(0, 12, 0, 4));

        // From the blank: "two" and its leading blank.
        let state = SelectionState::visual(p(0, 12), p(0, 7), VisualKind::Char);
        assert_eq!(span_of(WordObject::AROUND, text, state), s(0, 12, 0, 3));
    }

    #[test]
    fn iw_reversed_visual_grows_one_run() {
        let text = "one two three";
        let state = SelectionState::visual(p(0, 12), p(0, 8), VisualKind::Char);
        assert_eq!(span_of(WordObject::INNER, text, state), s(0, 12, 0, 7));
    }

    #[test]
    fn aw_big_takes_trailing_blanks() {
        assert_eq!(at(WordObject::AROUND_BIG, "hello.world next", 3), s(0, 0, 0, 11));
    }

    #[test]
    fn names() {
        assert_eq!(WordObject::INNER.name(), "iw");
        assert_eq!(WordObject::AROUND.name(), "aw");
        assert_eq!(WordObject::INNER_BIG.name(), "iW");
        assert_eq!(WordObject::AROUND_BIG.name(), "aW");
    }
}

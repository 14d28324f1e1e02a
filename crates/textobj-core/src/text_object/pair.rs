//! Delimiter-pair objects: quotes, brackets and tags.
//!
//! Each pair type implements [`DelimitedObject`], which only locates the
//! opening and closing delimiters around a char index. [`PairObject`] turns
//! that into the inner/around text object, and the expanding selection
//! (`af`) runs every pair type at once.
//!
//! | Pair       | Keys                  | Scope                                 |
//! |------------|-----------------------|---------------------------------------|
//! | [`Quote`]  | `i"` `a'` `` i` `` .. | current line, quotes paired left to right |
//! | [`Bracket`]| `i(` `a[` `i{` `a<` ..| whole buffer, nesting counted         |
//! | [`Tag`]    | `it` `at`             | whole buffer, innermost `<x>..</x>`   |

use std::sync::OnceLock;

use regex::Regex;

use crate::buffer::Buffer;
use crate::options::Options;
use crate::position::Span;
use crate::selection::SelectionState;
use crate::text_object::{Resolution, Resolved, TextObject};

/// Inclusive char-index bounds of a matched pair's two delimiters.
///
/// Quotes and brackets are one char wide; tags span the whole `<...>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairBounds {
    pub open: (usize, usize),
    pub close: (usize, usize),
}

impl PairBounds {
    /// Everything between the delimiters. For an empty pair `stop` sits one
    /// char before `start`.
    #[must_use]
    pub fn inner(self, buf: &Buffer) -> Span {
        Span::new(
            buf.idx_to_pos(self.open.1 + 1),
            buf.idx_to_pos(self.close.0.saturating_sub(1)),
        )
    }

    /// The delimiters and everything between them.
    #[must_use]
    pub fn around(self, buf: &Buffer) -> Span {
        Span::new(buf.idx_to_pos(self.open.0), buf.idx_to_pos(self.close.1))
    }
}

/// Something that can find the pair of delimiters enclosing a char index.
pub trait DelimitedObject {
    /// Keys of the inner object (`i(`).
    fn inner_name(&self) -> &'static str;

    /// Keys of the around object (`a(`).
    fn around_name(&self) -> &'static str;

    /// The pair around char `idx`, if any.
    fn find(&self, buf: &Buffer, idx: usize) -> Option<PairBounds>;

    /// The next pair of the same type strictly around `inner`, if any.
    fn enclosing(&self, buf: &Buffer, inner: PairBounds) -> Option<PairBounds>;
}

/// Inner or around object over any [`DelimitedObject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairObject<D> {
    delim: D,
    around: bool,
}

impl<D: DelimitedObject> PairObject<D> {
    #[must_use]
    pub const fn new(delim: D, around: bool) -> Self {
        Self { delim, around }
    }
}

impl<D: DelimitedObject> TextObject for PairObject<D> {
    fn name(&self) -> &'static str {
        if self.around {
            self.delim.around_name()
        } else {
            self.delim.inner_name()
        }
    }

    fn resolve(&self, buf: &Buffer, state: &SelectionState, _options: &Options) -> Resolution {
        let Some(bounds) = find_at_cursor(&self.delim, buf, state) else {
            return Resolution::failed(state);
        };
        let span = if self.around {
            bounds.around(buf)
        } else {
            bounds.inner(buf)
        };
        Resolution::Found(Resolved::charwise(span))
    }
}

/// Run `delim` at the cursor of `state`.
pub(crate) fn find_at_cursor<D: DelimitedObject + ?Sized>(
    delim: &D,
    buf: &Buffer,
    state: &SelectionState,
) -> Option<PairBounds> {
    let total = buf.len_chars();
    if total == 0 {
        return None;
    }
    let idx = buf.clamped_idx(state.active).min(total - 1);
    delim.find(buf, idx)
}

// ---------------------------------------------------------------------------
// Quotes
// ---------------------------------------------------------------------------

/// A quote character. Quotes never span lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    ch: char,
    names: (&'static str, &'static str),
}

impl Quote {
    pub const DOUBLE: Self = Self {
        ch: '"',
        names: ("i\"", "a\""),
    };
    pub const SINGLE: Self = Self {
        ch: '\'',
        names: ("i'", "a'"),
    };
    pub const BACKTICK: Self = Self {
        ch: '`',
        names: ("i`", "a`"),
    };

    /// The quote type for a key character.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '"' => Some(Self::DOUBLE),
            '\'' => Some(Self::SINGLE),
            '`' => Some(Self::BACKTICK),
            _ => None,
        }
    }
}

impl DelimitedObject for Quote {
    fn inner_name(&self) -> &'static str {
        self.names.0
    }

    fn around_name(&self) -> &'static str {
        self.names.1
    }

    /// The quotes of the cursor's line are paired left to right (1st with
    /// 2nd, 3rd with 4th...). A pair containing the cursor wins; otherwise
    /// the first pair after it.
    fn find(&self, buf: &Buffer, idx: usize) -> Option<PairBounds> {
        let rope = buf.rope();
        let line = rope.char_to_line(idx);
        let line_start = rope.line_to_char(line);

        let quotes: Vec<usize> = rope
            .line(line)
            .chars()
            .take_while(|&c| c != '\n' && c != '\r')
            .enumerate()
            .filter(|&(_, c)| c == self.ch)
            .map(|(i, _)| line_start + i)
            .collect();

        let pairs = quotes.chunks_exact(2).map(|pair| (pair[0], pair[1]));
        let (open, close) = pairs
            .clone()
            .find(|&(open, close)| open <= idx && idx <= close)
            .or_else(|| pairs.clone().find(|&(open, _)| open > idx))?;

        Some(PairBounds {
            open: (open, open),
            close: (close, close),
        })
    }

    /// Quotes do not nest.
    fn enclosing(&self, _buf: &Buffer, _inner: PairBounds) -> Option<PairBounds> {
        None
    }
}

// ---------------------------------------------------------------------------
// Brackets
// ---------------------------------------------------------------------------

/// A bracket pair. Brackets nest and may span lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    pub open: char,
    pub close: char,
    names: (&'static str, &'static str),
}

impl Bracket {
    pub const PAREN: Self = Self {
        open: '(',
        close: ')',
        names: ("i(", "a("),
    };
    pub const SQUARE: Self = Self {
        open: '[',
        close: ']',
        names: ("i[", "a["),
    };
    pub const CURLY: Self = Self {
        open: '{',
        close: '}',
        names: ("i{", "a{"),
    };
    pub const ANGLE: Self = Self {
        open: '<',
        close: '>',
        names: ("i<", "a<"),
    };

    /// Search backward from `start` (exclusive) for an unmatched opening
    /// bracket.
    fn find_opening(self, buf: &Buffer, start: usize) -> Option<usize> {
        let rope = buf.rope();
        let mut depth = 0usize;
        for i in (0..start).rev() {
            let ch = rope.char(i);
            if ch == self.close {
                depth += 1;
            } else if ch == self.open {
                if depth == 0 {
                    return Some(i);
                }
                depth -= 1;
            }
        }
        None
    }

    /// Search forward from `start` (exclusive) for the matching closing
    /// bracket.
    fn find_closing(self, buf: &Buffer, start: usize) -> Option<usize> {
        let rope = buf.rope();
        let mut depth = 0usize;
        for i in (start + 1)..rope.len_chars() {
            let ch = rope.char(i);
            if ch == self.open {
                depth += 1;
            } else if ch == self.close {
                if depth == 0 {
                    return Some(i);
                }
                depth -= 1;
            }
        }
        None
    }
}

impl DelimitedObject for Bracket {
    fn inner_name(&self) -> &'static str {
        self.names.0
    }

    fn around_name(&self) -> &'static str {
        self.names.1
    }

    fn find(&self, buf: &Buffer, idx: usize) -> Option<PairBounds> {
        let cursor_char = buf.char_at_idx(idx)?;

        let (open, close) = if cursor_char == self.open {
            (idx, self.find_closing(buf, idx)?)
        } else if cursor_char == self.close {
            (self.find_opening(buf, idx)?, idx)
        } else {
            let open = self.find_opening(buf, idx)?;
            (open, self.find_closing(buf, open)?)
        };

        if idx < open || idx > close {
            return None;
        }
        Some(PairBounds {
            open: (open, open),
            close: (close, close),
        })
    }

    fn enclosing(&self, buf: &Buffer, inner: PairBounds) -> Option<PairBounds> {
        let open = self.find_opening(buf, inner.open.0)?;
        let close = self.find_closing(buf, open)?;
        (close > inner.close.1).then_some(PairBounds {
            open: (open, open),
            close: (close, close),
        })
    }
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// An XML/HTML element: `<name ...>` up to the matching `</name>`.
/// Self-closing tags (`<br/>`) are not pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tag;

/// Captures: 1 = `/` of a closing tag, 2 = name, 3 = `/` of a self-closing
/// tag.
fn tag_regex() -> Option<&'static Regex> {
    static TAG: OnceLock<Option<Regex>> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<(/)?([A-Za-z][\w:.-]*)[^<>]*?(/)?>").ok())
        .as_ref()
}

impl Tag {
    /// Every matched element in the buffer, in closing order.
    fn pairs(buf: &Buffer) -> Vec<PairBounds> {
        let Some(re) = tag_regex() else {
            return Vec::new();
        };
        let rope = buf.rope();
        let text = buf.contents();

        let mut open_tags: Vec<(&str, (usize, usize))> = Vec::new();
        let mut pairs = Vec::new();
        for caps in re.captures_iter(&text) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(2)) else {
                continue;
            };
            let bounds = (
                rope.byte_to_char(whole.start()),
                rope.byte_to_char(whole.end()) - 1,
            );
            if caps.get(3).is_some() {
                continue;
            }
            if caps.get(1).is_none() {
                open_tags.push((name.as_str(), bounds));
                continue;
            }
            // Unclosed tags between a closer and its opener are dropped.
            if let Some(depth) = open_tags.iter().rposition(|(n, _)| *n == name.as_str()) {
                let (_, open) = open_tags[depth];
                open_tags.truncate(depth);
                pairs.push(PairBounds {
                    open,
                    close: bounds,
                });
            }
        }
        pairs
    }
}

impl DelimitedObject for Tag {
    fn inner_name(&self) -> &'static str {
        "it"
    }

    fn around_name(&self) -> &'static str {
        "at"
    }

    fn find(&self, buf: &Buffer, idx: usize) -> Option<PairBounds> {
        Self::pairs(buf)
            .into_iter()
            .filter(|pair| pair.open.0 <= idx && idx <= pair.close.1)
            .max_by_key(|pair| pair.open.0)
    }

    fn enclosing(&self, buf: &Buffer, inner: PairBounds) -> Option<PairBounds> {
        Self::pairs(buf)
            .into_iter()
            .filter(|pair| pair.open.0 < inner.open.0 && pair.close.1 > inner.close.1)
            .max_by_key(|pair| pair.open.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::mode::Operator;
    use crate::position::Position;
    use crate::text_object::resolve_object;

    fn p(line: usize, col: usize) -> Position {
        Position::new(line, col)
    }

    fn s(sl: usize, sc: usize, el: usize, ec: usize) -> Span {
        Span::new(p(sl, sc), p(el, ec))
    }

    fn inner<D: DelimitedObject>(delim: D, text: &str, pos: Position) -> Option<Span> {
        resolve(PairObject::new(delim, false), text, pos)
    }

    fn around<D: DelimitedObject>(delim: D, text: &str, pos: Position) -> Option<Span> {
        resolve(PairObject::new(delim, true), text, pos)
    }

    fn resolve<D: DelimitedObject>(obj: PairObject<D>, text: &str, pos: Position) -> Option<Span> {
        let buf = Buffer::from_text(text);
        obj.resolve(&buf, &SelectionState::at(pos), &Options::default())
            .resolved()
            .map(|r| r.span)
    }

    // == Quotes ==============================================================

    #[test]
    fn iq_simple() {
        let text = "say \"hello\" now";
        assert_eq!(inner(Quote::DOUBLE, text, p(0, 6)), Some(s(0, 5, 0, 9)));
        assert_eq!(around(Quote::DOUBLE, text, p(0, 6)), Some(s(0, 4, 0, 10)));
    }

    #[test]
    fn iq_cursor_on_either_quote() {
        let text = "say \"hello\" now";
        assert_eq!(inner(Quote::DOUBLE, text, p(0, 4)), Some(s(0, 5, 0, 9)));
        assert_eq!(inner(Quote::DOUBLE, text, p(0, 10)), Some(s(0, 5, 0, 9)));
    }

    #[test]
    fn iq_cursor_before_quotes_selects_next_pair() {
        let text = "say \"hello\" now";
        assert_eq!(inner(Quote::DOUBLE, text, p(0, 1)), Some(s(0, 5, 0, 9)));
    }

    #[test]
    fn iq_cursor_between_pairs() {
        // Quotes at 0, 3, 7, 10. Pairs: (0,3), (7,10).
        let text = "\"aa\" x \"bb\"";
        assert_eq!(inner(Quote::DOUBLE, text, p(0, 5)), Some(s(0, 8, 0, 9)));
        assert_eq!(inner(Quote::DOUBLE, text, p(0, 1)), Some(s(0, 1, 0, 2)));
    }

    #[test]
    fn iq_empty_quotes() {
        let text = "say \"\" now";
        assert_eq!(inner(Quote::DOUBLE, text, p(0, 4)), Some(s(0, 5, 0, 4)));
        assert_eq!(around(Quote::DOUBLE, text, p(0, 4)), Some(s(0, 4, 0, 5)));
    }

    #[test]
    fn iq_no_pair() {
        assert_eq!(inner(Quote::DOUBLE, "no quotes here", p(0, 5)), None);
        assert_eq!(inner(Quote::DOUBLE, "just one \" here", p(0, 5)), None);
        assert_eq!(inner(Quote::DOUBLE, "\"a\" after", p(0, 6)), None);
    }

    #[test]
    fn iq_stays_on_cursor_line() {
        let text = "first line\n\"second\" line";
        assert_eq!(inner(Quote::DOUBLE, text, p(0, 3)), None);
        assert_eq!(inner(Quote::DOUBLE, text, p(1, 3)), Some(s(1, 1, 1, 6)));
    }

    #[test]
    fn single_and_backtick_quotes() {
        assert_eq!(inner(Quote::SINGLE, "say 'hello' now", p(0, 6)), Some(s(0, 5, 0, 9)));
        assert_eq!(around(Quote::BACKTICK, "use `code` here", p(0, 6)), Some(s(0, 4, 0, 9)));
    }

    #[test]
    fn quote_from_char() {
        assert_eq!(Quote::from_char('\''), Some(Quote::SINGLE));
        assert_eq!(Quote::from_char('x'), None);
    }

    // == Brackets ============================================================

    #[test]
    fn ib_simple() {
        assert_eq!(inner(Bracket::PAREN, "f(hello)", p(0, 3)), Some(s(0, 2, 0, 6)));
        assert_eq!(around(Bracket::PAREN, "f(hello)", p(0, 3)), Some(s(0, 1, 0, 7)));
    }

    #[test]
    fn ib_cursor_on_brackets() {
        assert_eq!(inner(Bracket::PAREN, "(hello)", p(0, 0)), Some(s(0, 1, 0, 5)));
        assert_eq!(inner(Bracket::PAREN, "(hello)", p(0, 6)), Some(s(0, 1, 0, 5)));
    }

    #[test]
    fn ib_empty_becomes_empty_range_for_operator() {
        assert_eq!(inner(Bracket::PAREN, "f()", p(0, 1)), Some(s(0, 2, 0, 1)));

        let buf = Buffer::from_text("f()");
        let state = SelectionState::operator_pending(p(0, 1), Operator::Delete);
        let obj = PairObject::new(Bracket::PAREN, false);
        let res = resolve_object(&obj, &buf, &state, &Options::default());
        assert_eq!(res.span(), Span::point(p(0, 2)));
    }

    #[test]
    fn ib_nested() {
        let text = "(a(b(c)d)e)";
        assert_eq!(inner(Bracket::PAREN, text, p(0, 5)), Some(s(0, 5, 0, 5)));
        assert_eq!(inner(Bracket::PAREN, text, p(0, 3)), Some(s(0, 3, 0, 7)));
        assert_eq!(inner(Bracket::PAREN, text, p(0, 1)), Some(s(0, 1, 0, 9)));
    }

    #[test]
    fn ib_cursor_on_nested_close() {
        let text = "f(a(b)c)";
        assert_eq!(inner(Bracket::PAREN, text, p(0, 5)), Some(s(0, 4, 0, 4)));
        assert_eq!(inner(Bracket::PAREN, text, p(0, 7)), Some(s(0, 2, 0, 6)));
    }

    #[test]
    fn ib_multiline() {
        let text = "f(\n  hello\n)";
        assert_eq!(inner(Bracket::PAREN, text, p(1, 2)), Some(s(0, 2, 1, 7)));
        assert_eq!(around(Bracket::PAREN, text, p(1, 2)), Some(s(0, 1, 2, 0)));
    }

    #[test]
    fn ib_unmatched() {
        assert_eq!(inner(Bracket::PAREN, "hello world", p(0, 3)), None);
        assert_eq!(inner(Bracket::PAREN, "f(hello", p(0, 3)), None);
        assert_eq!(inner(Bracket::PAREN, "hello)", p(0, 3)), None);
        assert_eq!(inner(Bracket::PAREN, "hello)", p(0, 5)), None);
    }

    #[test]
    fn other_brackets() {
        assert_eq!(around(Bracket::SQUARE, "arr[42]", p(0, 4)), Some(s(0, 3, 0, 6)));
        assert_eq!(inner(Bracket::CURLY, "{ body }", p(0, 3)), Some(s(0, 1, 0, 6)));
        assert_eq!(inner(Bracket::ANGLE, "Vec<Option<i32>>", p(0, 11)), Some(s(0, 11, 0, 13)));
        assert_eq!(inner(Bracket::ANGLE, "Vec<Option<i32>>", p(0, 4)), Some(s(0, 4, 0, 14)));
    }

    // == Tags ================================================================

    #[test]
    fn it_selects_innermost_element() {
        // <a>: 0..=2, <b>: 3..=5, x: 6, </b>: 7..=10, </a>: 11..=14
        let text = "<a><b>x</b></a>";
        assert_eq!(inner(Tag, text, p(0, 6)), Some(s(0, 6, 0, 6)));
        assert_eq!(around(Tag, text, p(0, 6)), Some(s(0, 3, 0, 10)));
        assert_eq!(around(Tag, text, p(0, 12)), Some(s(0, 0, 0, 14)));
    }

    #[test]
    fn it_with_attributes_and_lines() {
        let text = "<div class=\"x\">\n  hi\n</div>";
        assert_eq!(around(Tag, text, p(1, 2)), Some(s(0, 0, 2, 5)));
        assert_eq!(inner(Tag, text, p(1, 2)), Some(s(0, 15, 1, 4)));
    }

    #[test]
    fn it_ignores_self_closing_and_unclosed_tags() {
        let text = "<p>a<br/>b<i>c</p>";
        assert_eq!(around(Tag, text, p(0, 9)), Some(s(0, 0, 0, 17)));
        assert_eq!(inner(Tag, "<br/> text", p(0, 7)), None);
    }

    #[test]
    fn it_on_same_name_nesting() {
        // <a>: 0..=2, <a>: 3..=5, x: 6, </a>: 7..=10, </a>: 11..=14
        let text = "<a><a>x</a></a>";
        assert_eq!(around(Tag, text, p(0, 6)), Some(s(0, 3, 0, 10)));
        assert_eq!(around(Tag, text, p(0, 1)), Some(s(0, 0, 0, 14)));
    }

    // == Enclosing pairs =====================================================

    #[test]
    fn bracket_enclosing_walks_outward() {
        let buf = Buffer::from_text("((x) (y))");
        let inner = Bracket::PAREN.find(&buf, 2).unwrap();
        assert_eq!(inner.around(&buf), s(0, 1, 0, 3));

        let outer = Bracket::PAREN.enclosing(&buf, inner).unwrap();
        assert_eq!(outer.around(&buf), s(0, 0, 0, 8));
        assert_eq!(Bracket::PAREN.enclosing(&buf, outer), None);
    }

    #[test]
    fn bracket_enclosing_skips_sibling_pairs() {
        let buf = Buffer::from_text("[[1, 2], [3]]");
        let inner = Bracket::SQUARE.find(&buf, 10).unwrap();
        assert_eq!(inner.around(&buf), s(0, 9, 0, 11));
        let outer = Bracket::SQUARE.enclosing(&buf, inner).unwrap();
        assert_eq!(outer.around(&buf), s(0, 0, 0, 12));
    }

    #[test]
    fn bracket_enclosing_unbalanced() {
        let buf = Buffer::from_text("f((x)");
        let inner = Bracket::PAREN.find(&buf, 3).unwrap();
        assert_eq!(Bracket::PAREN.enclosing(&buf, inner), None);
    }

    #[test]
    fn tag_enclosing_walks_outward() {
        let buf = Buffer::from_text("<a><a>x</a></a>");
        let inner = Tag.find(&buf, 6).unwrap();
        let outer = Tag.enclosing(&buf, inner).unwrap();
        assert_eq!(outer.around(&buf), s(0, 0, 0, 14));
        assert_eq!(Tag.enclosing(&buf, outer), None);
    }

    #[test]
    fn quotes_have_no_enclosing_pair() {
        let buf = Buffer::from_text("\"a \"b\" c\"");
        let inner = Quote::DOUBLE.find(&buf, 1).unwrap();
        assert_eq!(Quote::DOUBLE.enclosing(&buf, inner), None);
    }

    #[test]
    fn names() {
        assert_eq!(PairObject::new(Quote::DOUBLE, false).name(), "i\"");
        assert_eq!(PairObject::new(Bracket::CURLY, true).name(), "a{");
        assert_eq!(PairObject::new(Tag, true).name(), "at");
    }
}

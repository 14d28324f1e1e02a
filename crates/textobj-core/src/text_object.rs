//! Text objects: Vim-style text selection by structure.
//!
//! Text objects define regions of text by structure rather than cursor motion.
//! Combined with operators (`d`, `c`, `y`), they form Vim's composable grammar:
//!
//! ```text
//! operator + text-object = action
//! d        + iw          = delete inner word
//! c        + ia          = change inner argument
//! y        + ap          = yank around paragraph
//! ```
//!
//! Every object implements [`TextObject`]: given a buffer, the caller's
//! [`SelectionState`] and the [`Options`], it returns a [`Resolution`]. A
//! resolver never mutates anything. Changes it wants made to the caller's
//! anchor or pending cursor travel back in [`Resolved`] and are applied with
//! [`SelectionState::apply`].
//!
//! # Supported text objects
//!
//! | Inner    | Around        | Description                          |
//! |----------|---------------|--------------------------------------|
//! | `iw`     | `aw`          | word (letters, digits, `_`)          |
//! | `iW`     | `aW`          | WORD (non-blank characters)          |
//! | `is`     | `as`          | sentence                             |
//! | `ip`     | `ap`          | paragraph (line-wise)                |
//! | `ii`     | `ai` / `aI`   | indentation block (+ line above / + both) |
//! | `ia`     | `aa`          | function-call argument               |
//! | `i"`     | `a"`          | double-quoted string                 |
//! | `i'`     | `a'`          | single-quoted string                 |
//! | `` i` `` | `` a` ``      | backtick-quoted string               |
//! | `i(` `ib`| `a(` `ab`     | parenthesized block                  |
//! | `i[`     | `a[`          | square-bracketed block               |
//! | `i{` `iB`| `a{` `aB`     | curly-braced block                   |
//! | `i<`     | `a<`          | angle-bracketed block                |
//! | `it`     | `at`          | XML/HTML tag block                   |
//! |          | `af`          | smallest enclosing pair, grows on repeat |
//!
//! # Operator adjustment
//!
//! Resolved spans are inclusive. When an operator is pending, [`resolve_object`]
//! moves `stop` one character to the right (across line breaks) so the span
//! can be used as a half-open range by the operator. The indentation objects
//! already produce exact ranges and opt out.

pub mod argument;
pub mod expand;
pub mod indent;
pub mod pair;
pub mod paragraph;
pub mod sentence;
pub mod word;

use thiserror::Error;

use crate::buffer::Buffer;
use crate::mode::Mode;
use crate::options::Options;
use crate::position::{Position, Span};
use crate::selection::SelectionState;

use self::argument::ArgumentObject;
use self::expand::ExpandObject;
use self::indent::IndentObject;
use self::pair::{Bracket, PairObject, Quote, Tag};
use self::paragraph::ParagraphObject;
use self::sentence::SentenceObject;
use self::word::WordObject;

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// How the caller should treat a resolved span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextObjectKind {
    /// Exact character range.
    Charwise,
    /// Whole lines; the selection switches to line-wise mode.
    Linewise,
}

/// A successfully resolved text object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    /// Inclusive span: anchor lands on `start`, cursor on `stop`.
    pub span: Span,
    pub kind: TextObjectKind,
    /// Where the caller's selection anchor must move, when it differs from
    /// `span.start`.
    pub new_anchor: Option<Position>,
    /// Where a pending operator's cursor must snap to.
    pub cursor_correction: Option<Position>,
}

impl Resolved {
    /// A character-wise span with no side effects.
    #[must_use]
    pub const fn charwise(span: Span) -> Self {
        Self {
            span,
            kind: TextObjectKind::Charwise,
            new_anchor: None,
            cursor_correction: None,
        }
    }

    /// A line-wise span with no side effects.
    #[must_use]
    pub const fn linewise(span: Span) -> Self {
        Self {
            span,
            kind: TextObjectKind::Linewise,
            new_anchor: None,
            cursor_correction: None,
        }
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: Position) -> Self {
        self.new_anchor = Some(anchor);
        self
    }

    #[must_use]
    pub const fn with_cursor_correction(mut self, pos: Position) -> Self {
        self.cursor_correction = Some(pos);
        self
    }
}

/// The outcome of resolving a text object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Found(Resolved),
    /// Nothing to select. The caller keeps `fallback`, its current selection.
    Failed { fallback: Span },
}

impl Resolution {
    /// A failure that leaves the selection of `state` untouched.
    #[must_use]
    pub const fn failed(state: &SelectionState) -> Self {
        Self::Failed {
            fallback: state.span(),
        }
    }

    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The resolved object, if any.
    #[must_use]
    pub const fn resolved(&self) -> Option<&Resolved> {
        match self {
            Self::Found(resolved) => Some(resolved),
            Self::Failed { .. } => None,
        }
    }

    /// The span the caller ends up with: the object, or the fallback.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Found(resolved) => resolved.span,
            Self::Failed { fallback } => *fallback,
        }
    }
}

// ---------------------------------------------------------------------------
// TextObject
// ---------------------------------------------------------------------------

/// A resolvable text object.
pub trait TextObject {
    /// The key sequence that invokes the object (`aw`, `ii`, ...).
    fn name(&self) -> &'static str;

    /// Resolve against a read-only buffer. Spans are inclusive and not yet
    /// adjusted for a pending operator.
    fn resolve(&self, buf: &Buffer, state: &SelectionState, options: &Options) -> Resolution;

    /// Whether [`resolve_object`] shifts `stop` right for a pending operator.
    fn adjusts_for_operator(&self) -> bool {
        true
    }
}

/// The key sequence did not name a text object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown text object: {0}")]
pub struct UnknownTextObject(pub String);

/// Look up the text object for a key sequence.
#[must_use]
pub fn lookup(keys: &str) -> Option<Box<dyn TextObject>> {
    let object: Box<dyn TextObject> = match keys {
        "iw" => Box::new(WordObject::INNER),
        "aw" => Box::new(WordObject::AROUND),
        "iW" => Box::new(WordObject::INNER_BIG),
        "aW" => Box::new(WordObject::AROUND_BIG),
        "is" => Box::new(SentenceObject { around: false }),
        "as" => Box::new(SentenceObject { around: true }),
        "ip" => Box::new(ParagraphObject { around: false }),
        "ap" => Box::new(ParagraphObject { around: true }),
        "ii" => Box::new(IndentObject::INNER),
        "ai" => Box::new(IndentObject::AROUND_ABOVE),
        "aI" => Box::new(IndentObject::AROUND_BOTH),
        "ia" => Box::new(ArgumentObject { around: false }),
        "aa" => Box::new(ArgumentObject { around: true }),
        "af" => Box::new(ExpandObject::new()),
        _ => return lookup_pair(keys),
    };
    Some(object)
}

fn lookup_pair(keys: &str) -> Option<Box<dyn TextObject>> {
    let mut chars = keys.chars();
    let around = match chars.next()? {
        'i' => false,
        'a' => true,
        _ => return None,
    };
    let delim = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if let Some(quote) = Quote::from_char(delim) {
        return Some(Box::new(PairObject::new(quote, around)));
    }
    let object: Box<dyn TextObject> = match delim {
        '(' | ')' | 'b' => Box::new(PairObject::new(Bracket::PAREN, around)),
        '[' | ']' => Box::new(PairObject::new(Bracket::SQUARE, around)),
        '{' | '}' | 'B' => Box::new(PairObject::new(Bracket::CURLY, around)),
        '<' | '>' => Box::new(PairObject::new(Bracket::ANGLE, around)),
        't' => Box::new(PairObject::new(Tag, around)),
        _ => return None,
    };
    Some(object)
}

/// Resolve `object`, applying the operator adjustment when an operator is
/// pending.
#[must_use]
pub fn resolve_object(
    object: &dyn TextObject,
    buf: &Buffer,
    state: &SelectionState,
    options: &Options,
) -> Resolution {
    let resolution = object.resolve(buf, state, options);
    match resolution {
        Resolution::Found(mut resolved) => {
            if matches!(state.mode, Mode::OperatorPending(_)) && object.adjusts_for_operator() {
                resolved.span.stop = buf.step_right(resolved.span.stop);
            }
            tracing::trace!(object = object.name(), span = %resolved.span, kind = ?resolved.kind, "resolved");
            Resolution::Found(resolved)
        }
        Resolution::Failed { .. } => {
            tracing::debug!(object = object.name(), cursor = %state.active, "no match");
            resolution
        }
    }
}

/// Resolve the text object named by `keys`.
///
/// # Errors
///
/// [`UnknownTextObject`] when `keys` names no text object.
pub fn resolve_keys(
    keys: &str,
    buf: &Buffer,
    state: &SelectionState,
    options: &Options,
) -> Result<Resolution, UnknownTextObject> {
    let object = lookup(keys).ok_or_else(|| UnknownTextObject(keys.to_string()))?;
    Ok(resolve_object(object.as_ref(), buf, state, options))
}

// ---------------------------------------------------------------------------
// Growth
// ---------------------------------------------------------------------------

/// Resolve a repeatable character-wise unit under the selection rules shared
/// by word and sentence objects.
///
/// `forward(idx)` gives the inclusive char bounds of the unit at `idx`.
/// `backward(idx)` gives where `stop` lands when growing backward over the
/// unit at `idx`.
///
/// | State                   | Result                                          |
/// |-------------------------|-------------------------------------------------|
/// | point                   | unit at the cursor, `count - 1` more appended   |
/// | extending, forward      | anchor ..= end of `count` units after `active`  |
/// | extending, reversed     | anchor ..= start of `count` units before `active` |
pub(crate) fn grow_charwise(
    buf: &Buffer,
    state: &SelectionState,
    forward: impl Fn(usize) -> (usize, usize),
    backward: impl Fn(usize) -> usize,
) -> Span {
    let total = buf.len_chars();
    if total == 0 {
        return Span::point(Position::ZERO);
    }
    let count = state.count_or_one();
    let active = buf.clamped_idx(state.active);

    if state.is_extending() {
        let mut stop = active;
        for _ in 0..count {
            if state.is_reversed() {
                if stop == 0 {
                    break;
                }
                stop = backward(stop - 1);
            } else {
                if stop + 1 >= total {
                    break;
                }
                stop = forward(stop + 1).1;
            }
        }
        return Span::new(state.anchor, buf.idx_to_pos(stop));
    }

    if active >= total {
        return Span::point(buf.idx_to_pos(active));
    }
    let (start, mut stop) = forward(active);
    for _ in 1..count {
        if stop + 1 >= total {
            break;
        }
        stop = forward(stop + 1).1;
    }
    Span::new(buf.idx_to_pos(start), buf.idx_to_pos(stop))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

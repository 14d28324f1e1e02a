//! Text position, range and span types.
//!
//! All coordinates are **0-indexed**. Line 0 is the first line, column 0 is the
//! first character. Columns count Unicode scalar values (chars), not bytes or
//! grapheme clusters. This matches how `ropey` indexes text and gives O(log n)
//! access through the rope's internal tree.
//!
//! Two range flavours live here:
//!
//! - [`Range`] is half-open `[start, end)`: what an operator consumes.
//! - [`Span`] is inclusive `start..=stop`: what a text object resolves to, with
//!   `start` being where the selection anchor lands and `stop` where the cursor
//!   lands.
//!
//! Display layers (CLI output) convert to 1-indexed: that conversion never
//! belongs here.

use std::fmt;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A position in a text buffer: (line, column), both 0-indexed.
///
/// `col` is the char offset from the start of the line, **not** a byte offset.
/// For the line `"café\n"`, column 3 is `'é'` and column 4 is past the last
/// visible character (the cursor-after-last-char position used in insert mode).
///
/// # Ordering
///
/// Positions are ordered lexicographically: line first, then column. This means
/// `Position { line: 0, col: 5 }` < `Position { line: 1, col: 0 }`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    /// The origin: line 0, column 0.
    pub const ZERO: Self = Self { line: 0, col: 0 };

    /// Create a new position.
    #[inline]
    #[must_use]
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

// Natural ordering: line first, then column.
impl Ord for Position {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.line
            .cmp(&other.line)
            .then(self.col.cmp(&other.col))
    }
}

impl PartialOrd for Position {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pos({}:{})", self.line, self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1-indexed for human display, matching Vim's `line:col` status.
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open range in a text buffer: `[start, end)`.
///
/// What an operator consumes, and what [`Buffer::slice`] takes. An empty
/// range has `start == end`.
///
/// [`Buffer::slice`]: crate::buffer::Buffer::slice
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// Create a range. Panics in debug if `start > end`.
    #[inline]
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        debug_assert!(
            start.line < end.line || (start.line == end.line && start.col <= end.col),
            "Range::new requires start <= end"
        );
        Self { start, end }
    }
}

impl fmt::Debug for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Range({}:{} .. {}:{})",
            self.start.line, self.start.col, self.end.line, self.end.col
        )
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1-indexed for humans.
        write!(f, "{}-{}", self.start, self.end)
    }
}

// ---------------------------------------------------------------------------
// Span
// ---------------------------------------------------------------------------

/// An inclusive span `start..=stop` produced by a text object.
///
/// `start` is the end the selection anchor moves to, `stop` is the end the
/// cursor moves to. Normally `start <= stop`. `stop` comes first when a visual
/// selection grows backward from its anchor, and for the degenerate empty
/// inner-argument case where `stop` sits one character before `start`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub stop: Position,
}

impl Span {
    /// Create a span. No ordering is enforced.
    #[inline]
    #[must_use]
    pub const fn new(start: Position, stop: Position) -> Self {
        Self { start, stop }
    }

    /// A one-position span.
    #[inline]
    #[must_use]
    pub const fn point(pos: Position) -> Self {
        Self {
            start: pos,
            stop: pos,
        }
    }

    /// True when `stop` comes before `start`.
    #[inline]
    #[must_use]
    pub fn is_reversed(self) -> bool {
        self.stop < self.start
    }

    /// The same span with its ends ordered so that `start <= stop`.
    #[inline]
    #[must_use]
    pub fn ordered(self) -> Self {
        if self.is_reversed() {
            Self {
                start: self.stop,
                stop: self.start,
            }
        } else {
            self
        }
    }

    /// The first position covered, regardless of direction.
    #[inline]
    #[must_use]
    pub fn first(self) -> Position {
        self.ordered().start
    }

    /// The last position covered, regardless of direction.
    #[inline]
    #[must_use]
    pub fn last(self) -> Position {
        self.ordered().stop
    }

    /// True when `self` covers `other` on both ends, strictly.
    #[must_use]
    pub fn strictly_contains(self, other: Self) -> bool {
        self.first() < other.first() && self.last() > other.last()
    }

    /// True when `self` covers `other`, ends may coincide.
    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        self.first() <= other.first() && self.last() >= other.last()
    }

    /// True when both spans start and stop on the same lines, ignoring
    /// columns. Line-wise visual mode compares selections this way.
    #[must_use]
    pub fn same_lines(self, other: Self) -> bool {
        self.first().line == other.first().line && self.last().line == other.last().line
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Span({}:{} ..= {}:{})",
            self.start.line, self.start.col, self.stop.line, self.stop.col
        )
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.stop)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

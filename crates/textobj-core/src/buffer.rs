//! Text buffer: the read-only text snapshot every text object resolves over.
//!
//! A `Buffer` wraps a [`ropey::Rope`] with coordinate conversion between
//! `Position` (line, col) and rope char indices, line classification, and
//! single-step navigation through line breaks.
//!
//! # Design choices
//!
//! - **ropey** provides O(log n) char and line indexing and battle-tested
//!   Unicode handling. Text objects walk the rope char by char, so cheap
//!   random access matters more than anything else here.
//!
//! - **Columns are char offsets**, not byte offsets. This means column 3 of
//!   `"café"` is `'é'`, not a byte in the middle of its UTF-8 encoding. Byte
//!   offsets never leak into the public API.
//!
//! - **Read-only.** Resolution never edits text; whoever consumes a resolved
//!   range owns editing, undo and saving.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ropey::{Rope, RopeSlice};

use crate::position::{Position, Range, Span};

// ---------------------------------------------------------------------------
// Line classification
// ---------------------------------------------------------------------------

/// Derived, read-only facts about one line.
///
/// Lengths and columns exclude the line ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineInfo {
    /// Content length in chars.
    pub len: usize,
    /// Column of the first char that is not a space or tab. Equals `len` for
    /// blank lines.
    pub first_non_blank: usize,
    /// True when the line holds nothing but spaces and tabs (or nothing).
    pub is_blank: bool,
}

/// True for in-line whitespace: anything `char::is_whitespace` accepts except
/// line breaks.
#[inline]
pub(crate) fn is_blank_char(ch: char) -> bool {
    ch != '\n' && ch != '\r' && ch.is_whitespace()
}

// ---------------------------------------------------------------------------
// Buffer
// ---------------------------------------------------------------------------

/// A text buffer backed by a rope.
///
/// # Coordinate system
///
/// All positions are 0-indexed `(line, col)` pairs. Columns count Unicode
/// scalar values (chars). Use [`pos_to_char_idx`](Self::pos_to_char_idx) and
/// [`char_idx_to_pos`](Self::char_idx_to_pos) for conversion to rope-native
/// char indices.
pub struct Buffer {
    rope: Rope,
    path: Option<PathBuf>,
}

impl Buffer {
    // -- Construction -------------------------------------------------------

    /// Create an empty buffer with no file path.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            path: None,
        }
    }

    /// Create a buffer from a string.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            path: None,
        }
    }

    /// Load a buffer from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid UTF-8.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self {
            rope: Rope::from_str(&text),
            path: Some(path.to_path_buf()),
        })
    }

    // -- Text access --------------------------------------------------------

    /// The underlying rope.
    #[inline]
    #[must_use]
    pub const fn rope(&self) -> &Rope {
        &self.rope
    }

    /// The file path this buffer was loaded from, if any.
    #[inline]
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Total number of lines. An empty buffer has 1 line (the empty line).
    /// A buffer ending with `\n` has a trailing empty line.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Index of the last line.
    #[inline]
    #[must_use]
    pub fn last_line(&self) -> usize {
        self.rope.len_lines().saturating_sub(1)
    }

    /// Total character count (Unicode scalar values, not bytes).
    #[inline]
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// True when the buffer contains no text.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Get a line by 0-indexed line number, including its trailing line
    /// ending (if any). Returns `None` if `line >= line_count()`.
    #[inline]
    #[must_use]
    pub fn line(&self, line: usize) -> Option<RopeSlice<'_>> {
        if line < self.rope.len_lines() {
            Some(self.rope.line(line))
        } else {
            None
        }
    }

    /// Number of chars in a line **excluding** any trailing line ending
    /// (`\n`, `\r\n`, `\r`).
    ///
    /// Returns `None` if the line doesn't exist.
    #[must_use]
    pub fn line_content_len(&self, line: usize) -> Option<usize> {
        self.line(line).map(|rope_line| {
            let total = rope_line.len_chars();
            if total == 0 {
                return 0;
            }
            let last = rope_line.char(total - 1);
            if last == '\n' {
                // Could be \r\n: check char before.
                if total >= 2 && rope_line.char(total - 2) == '\r' {
                    total - 2
                } else {
                    total - 1
                }
            } else if last == '\r' {
                total - 1
            } else {
                // Last line with no trailing newline.
                total
            }
        })
    }

    /// Classify a line. Returns `None` if the line doesn't exist.
    #[must_use]
    pub fn line_info(&self, line: usize) -> Option<LineInfo> {
        let len = self.line_content_len(line)?;
        let first_non_blank = self
            .rope
            .line(line)
            .chars()
            .take(len)
            .take_while(|&ch| is_blank_char(ch))
            .count();
        Some(LineInfo {
            len,
            first_non_blank,
            is_blank: first_non_blank == len,
        })
    }

    /// True when the line exists and is blank. Lines past the end are not
    /// blank: they don't exist.
    #[must_use]
    pub fn is_blank_line(&self, line: usize) -> bool {
        self.line_info(line).is_some_and(|info| info.is_blank)
    }

    /// Get the character at a position. Returns `None` if the position is
    /// out of bounds.
    #[must_use]
    pub fn char_at(&self, pos: Position) -> Option<char> {
        self.pos_to_char_idx(pos)
            .and_then(|idx| self.char_at_idx(idx))
    }

    /// Get the character at a char index. Returns `None` at or past the end.
    #[inline]
    #[must_use]
    pub fn char_at_idx(&self, idx: usize) -> Option<char> {
        (idx < self.rope.len_chars()).then(|| self.rope.char(idx))
    }

    /// Get a slice of text for the given range. Returns `None` if either
    /// endpoint is out of bounds.
    #[must_use]
    pub fn slice(&self, range: Range) -> Option<RopeSlice<'_>> {
        let start = self.pos_to_char_idx(range.start)?;
        let end = self.pos_to_char_idx(range.end)?;
        Some(self.rope.slice(start..end))
    }

    /// Collect all text into a `String`.
    #[must_use]
    pub fn contents(&self) -> String {
        self.rope.to_string()
    }

    // -- Coordinate conversion ----------------------------------------------

    /// Convert a `Position` (line, col) to an absolute char index in the rope.
    ///
    /// Returns `None` if the line is out of bounds or the column exceeds the
    /// line's total char count (including line ending). A column exactly equal
    /// to the line's char count is valid: it represents the position just past
    /// the last character.
    #[must_use]
    pub fn pos_to_char_idx(&self, pos: Position) -> Option<usize> {
        if pos.line >= self.rope.len_lines() {
            return None;
        }
        let line_start = self.rope.line_to_char(pos.line);
        let line_len = self.rope.line(pos.line).len_chars();
        if pos.col > line_len {
            return None;
        }
        Some(line_start + pos.col)
    }

    /// Convert an absolute char index to a `Position` (line, col).
    ///
    /// Returns `None` if `char_idx > len_chars()`. An index equal to
    /// `len_chars()` returns the position just past the last character.
    #[must_use]
    pub fn char_idx_to_pos(&self, char_idx: usize) -> Option<Position> {
        if char_idx > self.rope.len_chars() {
            return None;
        }
        let line = self.rope.char_to_line(char_idx);
        let line_start = self.rope.line_to_char(line);
        Some(Position::new(line, char_idx - line_start))
    }

    /// Convert a char index to a Position, clamping indices past the end to
    /// the end-of-buffer position. Never fails.
    #[must_use]
    pub fn idx_to_pos(&self, idx: usize) -> Position {
        let total = self.rope.len_chars();
        if total == 0 {
            return Position::ZERO;
        }
        if idx >= total {
            let last_line = self.last_line();
            let line_start = self.rope.line_to_char(last_line);
            Position::new(last_line, total - line_start)
        } else {
            self.char_idx_to_pos(idx).unwrap_or(Position::ZERO)
        }
    }

    /// Convert a position to a char index, clamping out-of-range positions
    /// first. Never fails.
    #[must_use]
    pub fn clamped_idx(&self, pos: Position) -> usize {
        self.pos_to_char_idx(pos)
            .or_else(|| self.pos_to_char_idx(self.clamp_position(pos)))
            .unwrap_or(0)
    }

    /// Clamp a position to the nearest valid position in the buffer.
    ///
    /// - If `line >= line_count()`, clamps to the last line.
    /// - If `col > line_content_len()`, clamps to `line_content_len()`.
    #[must_use]
    pub fn clamp_position(&self, pos: Position) -> Position {
        if self.is_empty() {
            return Position::ZERO;
        }

        let line = pos.line.min(self.last_line());
        let max_col = self.line_content_len(line).unwrap_or(0);
        let col = pos.col.min(max_col);

        Position::new(line, col)
    }

    /// The position just past the last character.
    #[must_use]
    pub fn end_position(&self) -> Position {
        self.idx_to_pos(self.rope.len_chars())
    }

    // -- Navigation ---------------------------------------------------------

    /// One char to the right, crossing line breaks, clamped to the
    /// end-of-buffer position.
    #[must_use]
    pub fn step_right(&self, pos: Position) -> Position {
        let idx = self.clamped_idx(pos);
        self.idx_to_pos(idx + 1)
    }

    /// The half-open range covering both ends of an inclusive span, clamped
    /// to the buffer.
    #[must_use]
    pub fn span_to_range(&self, span: Span) -> Range {
        Range::new(span.first(), self.step_right(span.last()))
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("lines", &self.line_count())
            .field("chars", &self.len_chars())
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Character classes for word and WORD objects.
//!
//! A **word** is a sequence of word characters (letters, digits, underscore) or
//! a sequence of other non-blank characters (punctuation). Boundaries exist
//! between classes: `hello.world` contains three words (`hello`, `.`, `world`).
//!
//! A **WORD** is a sequence of non-blank characters. Only whitespace separates
//! WORDs: `hello.world` is one WORD.
//!
//! `run_at` finds the run of one class around a char; the `aw`/`iw`
//! objects grow a selection run by run.

use crate::buffer::Buffer;

// ---------------------------------------------------------------------------
// Character classification
// ---------------------------------------------------------------------------

/// Character class for word boundary detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Letters, digits, underscore.
    Word,
    /// Non-blank, non-word characters (operators, brackets, etc.).
    Punctuation,
    /// Whitespace within a line (space, tab).
    Blank,
    /// Line ending (`\n`, `\r`).
    Newline,
}

impl CharClass {
    /// True for the classes that make up a token (word or punctuation).
    #[inline]
    #[must_use]
    pub const fn is_token(self) -> bool {
        matches!(self, Self::Word | Self::Punctuation)
    }
}

/// A classifier: [`classify`] for words, [`classify_big`] for WORDs.
pub type Classifier = fn(char) -> CharClass;

/// Classify a character for word objects (`aw`/`iw`).
#[must_use]
pub fn classify(ch: char) -> CharClass {
    if ch == '\n' || ch == '\r' {
        CharClass::Newline
    } else if ch.is_whitespace() {
        CharClass::Blank
    } else if ch.is_alphanumeric() || ch == '_' {
        CharClass::Word
    } else {
        CharClass::Punctuation
    }
}

/// Classify a character for WORD objects (`aW`/`iW`).
/// Only blank vs non-blank matters; all non-blank chars are one class.
#[must_use]
pub fn classify_big(ch: char) -> CharClass {
    if ch == '\n' || ch == '\r' {
        CharClass::Newline
    } else if ch.is_whitespace() {
        CharClass::Blank
    } else {
        CharClass::Word
    }
}

/// Inclusive char-index bounds of the run of same-class chars around `idx`.
///
/// A line break is always a run of its own, so blank runs never span lines.
/// `idx` must be a valid char index.
pub(crate) fn run_at(buf: &Buffer, idx: usize, classify_fn: Classifier) -> (usize, usize) {
    let rope = buf.rope();
    let total = rope.len_chars();
    let class = classify_fn(rope.char(idx));
    if class == CharClass::Newline {
        return (idx, idx);
    }

    let mut start = idx;
    while start > 0 && classify_fn(rope.char(start - 1)) == class {
        start -= 1;
    }
    let mut end = idx;
    while end + 1 < total && classify_fn(rope.char(end + 1)) == class {
        end += 1;
    }
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Classification -----------------------------------------------------

    #[test]
    fn classify_word_chars() {
        assert_eq!(classify('a'), CharClass::Word);
        assert_eq!(classify('Z'), CharClass::Word);
        assert_eq!(classify('0'), CharClass::Word);
        assert_eq!(classify('9'), CharClass::Word);
        assert_eq!(classify('_'), CharClass::Word);
    }

    #[test]
    fn classify_punctuation_chars() {
        assert_eq!(classify('.'), CharClass::Punctuation);
        assert_eq!(classify(','), CharClass::Punctuation);
        assert_eq!(classify('!'), CharClass::Punctuation);
        assert_eq!(classify('+'), CharClass::Punctuation);
        assert_eq!(classify('='), CharClass::Punctuation);
        assert_eq!(classify('('), CharClass::Punctuation);
    }

    #[test]
    fn classify_blank_chars() {
        assert_eq!(classify(' '), CharClass::Blank);
        assert_eq!(classify('\t'), CharClass::Blank);
    }

    #[test]
    fn classify_newline_chars() {
        assert_eq!(classify('\n'), CharClass::Newline);
        assert_eq!(classify('\r'), CharClass::Newline);
    }

    #[test]
    fn classify_unicode_letters_are_word() {
        assert_eq!(classify('é'), CharClass::Word);
        assert_eq!(classify('ñ'), CharClass::Word);
        assert_eq!(classify('中'), CharClass::Word);
        assert_eq!(classify('ü'), CharClass::Word);
    }

    #[test]
    fn classify_big_merges_punct_into_word() {
        assert_eq!(classify_big('.'), CharClass::Word);
        assert_eq!(classify_big('!'), CharClass::Word);
        assert_eq!(classify_big('a'), CharClass::Word);
        assert_eq!(classify_big(' '), CharClass::Blank);
        assert_eq!(classify_big('\n'), CharClass::Newline);
    }

    // -- run_at -------------------------------------------------------------

    #[test]
    fn run_at_finds_same_class_run() {
        let buf = Buffer::from_text("foo::bar  baz");
        assert_eq!(run_at(&buf, 1, classify), (0, 2));
        assert_eq!(run_at(&buf, 3, classify), (3, 4));
        assert_eq!(run_at(&buf, 3, classify_big), (0, 7));
        assert_eq!(run_at(&buf, 8, classify), (8, 9));
    }

    #[test]
    fn run_at_line_break_is_its_own_run() {
        let buf = Buffer::from_text("a  \n  b");
        assert_eq!(run_at(&buf, 1, classify), (1, 2));
        assert_eq!(run_at(&buf, 3, classify), (3, 3));
        assert_eq!(run_at(&buf, 4, classify), (4, 5));
    }
}

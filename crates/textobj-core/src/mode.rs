//! The editing mode a text object is resolved under.
//!
//! Resolution only cares about three situations:
//!
//! | Mode              | Example       | Effect on resolution                          |
//! |-------------------|---------------|-----------------------------------------------|
//! | Normal            | point query   | Resolve from a single point                   |
//! | Operator-pending  | `daw`, `cii`  | Stop is shifted right for the operator        |
//! | Visual            | `aw` in `v`   | An existing anchored selection is extended    |

use std::fmt;

// ---------------------------------------------------------------------------
// VisualKind
// ---------------------------------------------------------------------------

/// The sub-mode of visual selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualKind {
    /// `v`: character-wise selection.
    Char,
    /// `V`: line-wise selection (always selects full lines).
    Line,
    /// `Ctrl-V`: block (column) selection.
    Block,
}

impl fmt::Display for VisualKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char => f.write_str("VISUAL"),
            Self::Line => f.write_str("VISUAL LINE"),
            Self::Block => f.write_str("VISUAL BLOCK"),
        }
    }
}

// ---------------------------------------------------------------------------
// Operator
// ---------------------------------------------------------------------------

/// The edit operator waiting for a text object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `d`
    Delete,
    /// `c`
    Change,
    /// `y`
    Yank,
    /// `>`
    Indent,
    /// `<`
    Outdent,
    /// `gq`
    Format,
}

impl Operator {
    /// Parse the operator's key sequence.
    #[must_use]
    pub fn from_keys(keys: &str) -> Option<Self> {
        match keys {
            "d" => Some(Self::Delete),
            "c" => Some(Self::Change),
            "y" => Some(Self::Yank),
            ">" => Some(Self::Indent),
            "<" => Some(Self::Outdent),
            "gq" => Some(Self::Format),
            _ => None,
        }
    }

    /// True for operators that delete the text and enter insert mode.
    #[inline]
    #[must_use]
    pub const fn is_change(self) -> bool {
        matches!(self, Self::Change)
    }
}

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// The mode a text object is invoked from.
///
/// This is a pure data type: which keys led here is the caller's business.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// No selection; resolve from the cursor.
    #[default]
    Normal,
    /// An operator is waiting for the object (`d`, `c`, `y`, ...).
    OperatorPending(Operator),
    /// An anchored selection exists and must be extended, not replaced.
    Visual(VisualKind),
}

impl Mode {
    /// Human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::OperatorPending(_) => "O-PENDING",
            Self::Visual(kind) => match kind {
                VisualKind::Char => "VISUAL",
                VisualKind::Line => "VISUAL LINE",
                VisualKind::Block => "VISUAL BLOCK",
            },
        }
    }

    /// True if we're in any visual sub-mode.
    #[inline]
    #[must_use]
    pub const fn is_visual(self) -> bool {
        matches!(self, Self::Visual(_))
    }

    /// True only for `V`.
    #[inline]
    #[must_use]
    pub const fn is_linewise_visual(self) -> bool {
        matches!(self, Self::Visual(VisualKind::Line))
    }

    /// The pending operator, if any.
    #[inline]
    #[must_use]
    pub const fn operator(self) -> Option<Operator> {
        match self {
            Self::OperatorPending(op) => Some(op),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

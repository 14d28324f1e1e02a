//! Selection state: the caller-visible anchor/cursor pair.
//!
//! A text object is always resolved against a `SelectionState`: where the
//! cursor is, where the selection anchor is, how many units were asked for
//! (`3aw`), and which mode the request came from.
//!
//! The state is a plain value. Resolvers never touch it; they report the
//! changes they want (new anchor, cursor correction) in their
//! [`Resolved`](crate::text_object::Resolved) result and the caller folds them
//! back in with [`SelectionState::apply`].

use crate::mode::{Mode, Operator, VisualKind};
use crate::position::{Position, Span};
use crate::text_object::Resolved;

/// Anchor + active end + repeat count + mode.
///
/// Outside visual mode `anchor == active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionState {
    /// The fixed end of the selection.
    pub anchor: Position,
    /// The cursor: the end that moves.
    pub active: Position,
    /// Repeat count typed before the object, `None` when no digits were
    /// pressed. `Some(1)` is different from `None` for `aw`.
    pub count: Option<usize>,
    pub mode: Mode,
}

impl SelectionState {
    /// A normal-mode cursor at `pos`.
    #[must_use]
    pub const fn at(pos: Position) -> Self {
        Self {
            anchor: pos,
            active: pos,
            count: None,
            mode: Mode::Normal,
        }
    }

    /// An operator waiting for a text object with the cursor at `pos`.
    #[must_use]
    pub const fn operator_pending(pos: Position, op: Operator) -> Self {
        Self {
            anchor: pos,
            active: pos,
            count: None,
            mode: Mode::OperatorPending(op),
        }
    }

    /// A visual selection from `anchor` to `active`.
    #[must_use]
    pub const fn visual(anchor: Position, active: Position, kind: VisualKind) -> Self {
        Self {
            anchor,
            active,
            count: None,
            mode: Mode::Visual(kind),
        }
    }

    /// The same state with a repeat count.
    #[must_use]
    pub const fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// The repeat count, defaulting to 1.
    #[inline]
    #[must_use]
    pub fn count_or_one(&self) -> usize {
        self.count.unwrap_or(1).max(1)
    }

    /// True when a visual selection spans more than one point and must be
    /// extended rather than replaced.
    #[inline]
    #[must_use]
    pub fn is_extending(&self) -> bool {
        self.mode.is_visual() && self.anchor != self.active
    }

    /// True when the cursor sits before the anchor.
    #[inline]
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.active < self.anchor
    }

    /// The current selection as a span (anchor → active).
    #[inline]
    #[must_use]
    pub const fn span(&self) -> Span {
        Span::new(self.anchor, self.active)
    }

    /// Fold a resolution's declared side effects back into the state.
    ///
    /// The anchor moves to `new_anchor` (or the span start) and the cursor to
    /// the span stop. A cursor correction wins over the span stop while an
    /// operator is pending, since the operator's cursor must land on the
    /// corrected start.
    pub fn apply(&mut self, resolved: &Resolved) {
        self.anchor = resolved.new_anchor.unwrap_or(resolved.span.start);
        self.active = resolved.span.stop;
        if let (Some(pos), Mode::OperatorPending(_)) = (resolved.cursor_correction, self.mode) {
            self.active = pos;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_object::TextObjectKind;

    fn p(line: usize, col: usize) -> Position {
        Position::new(line, col)
    }

    #[test]
    fn normal_state_is_a_point() {
        let s = SelectionState::at(p(1, 2));
        assert_eq!(s.anchor, s.active);
        assert!(!s.is_extending());
        assert_eq!(s.count_or_one(), 1);
    }

    #[test]
    fn visual_point_is_not_extending() {
        let s = SelectionState::visual(p(0, 3), p(0, 3), VisualKind::Char);
        assert!(!s.is_extending());
        let s = SelectionState::visual(p(0, 3), p(0, 5), VisualKind::Char);
        assert!(s.is_extending());
        assert!(!s.is_reversed());
    }

    #[test]
    fn reversed_when_active_before_anchor() {
        let s = SelectionState::visual(p(2, 0), p(1, 9), VisualKind::Char);
        assert!(s.is_reversed());
        assert_eq!(s.span(), Span::new(p(2, 0), p(1, 9)));
    }

    #[test]
    fn count_zero_counts_as_one() {
        let s = SelectionState::at(p(0, 0)).with_count(0);
        assert_eq!(s.count, Some(0));
        assert_eq!(s.count_or_one(), 1);
        assert_eq!(SelectionState::at(p(0, 0)).with_count(3).count_or_one(), 3);
    }

    #[test]
    fn apply_moves_anchor_and_cursor() {
        let mut s = SelectionState::visual(p(0, 0), p(0, 0), VisualKind::Char);
        let resolved = Resolved {
            span: Span::new(p(0, 4), p(0, 8)),
            kind: TextObjectKind::Charwise,
            new_anchor: None,
            cursor_correction: None,
        };
        s.apply(&resolved);
        assert_eq!(s.anchor, p(0, 4));
        assert_eq!(s.active, p(0, 8));
    }

    #[test]
    fn apply_honours_declared_anchor() {
        let mut s = SelectionState::at(p(0, 6));
        let resolved = Resolved {
            span: Span::new(p(0, 4), p(0, 8)),
            kind: TextObjectKind::Charwise,
            new_anchor: Some(p(0, 2)),
            cursor_correction: None,
        };
        s.apply(&resolved);
        assert_eq!(s.anchor, p(0, 2));
    }

    #[test]
    fn cursor_correction_only_while_operator_pending() {
        let resolved = Resolved {
            span: Span::new(p(0, 4), p(0, 8)),
            kind: TextObjectKind::Charwise,
            new_anchor: Some(p(0, 4)),
            cursor_correction: Some(p(0, 4)),
        };

        let mut pending = SelectionState::operator_pending(p(0, 1), Operator::Delete);
        pending.apply(&resolved);
        assert_eq!(pending.active, p(0, 4));

        let mut normal = SelectionState::at(p(0, 1));
        normal.apply(&resolved);
        assert_eq!(normal.active, p(0, 8));
    }
}

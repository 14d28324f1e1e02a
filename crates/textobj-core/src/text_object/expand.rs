//! Expanding selection: `af`.
//!
//! Every around-pair resolver (quotes, brackets, tags) is tried at the
//! cursor and the smallest result that encloses the current selection wins.
//! A pair type whose innermost pair is already covered is walked outward
//! to its next enclosing pair.
//! Invoking `af` again from the result selects the next enclosing pair:
//!
//! ```text
//! ( [ "x" ] )
//!     ^^^         1st af
//!   ^^^^^^^       2nd af
//! ^^^^^^^^^^^     3rd af
//! ```

use crate::buffer::Buffer;
use crate::options::Options;
use crate::position::Span;
use crate::selection::SelectionState;
use crate::text_object::pair::{find_at_cursor, Bracket, DelimitedObject, Quote, Tag};
use crate::text_object::{Resolution, Resolved, TextObject};

/// `af`: grow to the next enclosing delimiter pair.
pub struct ExpandObject {
    candidates: Vec<Box<dyn DelimitedObject>>,
}

impl ExpandObject {
    /// Quotes, the four bracket types and tags.
    #[must_use]
    pub fn new() -> Self {
        Self::with_candidates(vec![
            Box::new(Quote::DOUBLE),
            Box::new(Quote::SINGLE),
            Box::new(Quote::BACKTICK),
            Box::new(Bracket::PAREN),
            Box::new(Bracket::SQUARE),
            Box::new(Bracket::CURLY),
            Box::new(Bracket::ANGLE),
            Box::new(Tag),
        ])
    }

    /// Expand over a custom set of pair types.
    #[must_use]
    pub fn with_candidates(candidates: Vec<Box<dyn DelimitedObject>>) -> Self {
        Self { candidates }
    }
}

impl Default for ExpandObject {
    fn default() -> Self {
        Self::new()
    }
}

impl TextObject for ExpandObject {
    fn name(&self) -> &'static str {
        "af"
    }

    fn resolve(&self, buf: &Buffer, state: &SelectionState, _options: &Options) -> Resolution {
        let current = if state.is_extending() {
            state.span()
        } else {
            Span::point(buf.clamp_position(state.active))
        };
        let linewise = state.mode.is_linewise_visual();

        let mut any_found = false;
        let mut found = Vec::new();
        for delim in &self.candidates {
            let Some(mut bounds) = find_at_cursor(delim.as_ref(), buf, state) else {
                continue;
            };
            any_found = true;
            // Walk out past pairs of the same type the selection already covers.
            loop {
                let around = bounds.around(buf);
                if encloses(around, current, linewise) {
                    found.push(around);
                    break;
                }
                match delim.enclosing(buf, bounds) {
                    Some(outer) => bounds = outer,
                    None => break,
                }
            }
        }
        if !any_found {
            return Resolution::failed(state);
        }

        let span = smallest_enclosing(found, current, linewise).unwrap_or_else(|| current.ordered());
        tracing::trace!(%current, %span, "expand");
        Resolution::Found(Resolved::charwise(span).with_anchor(span.start))
    }
}

/// Whether `candidate` encloses `current` and differs from it.
///
/// A point only needs to be covered. A wider selection must be strictly
/// inside on both ends, and with `linewise` a candidate on the same lines
/// counts as equal.
fn encloses(candidate: Span, current: Span, linewise: bool) -> bool {
    let candidate = candidate.ordered();
    if current.first() == current.last() {
        candidate.contains(current) && candidate != current.ordered()
    } else {
        candidate.strictly_contains(current) && !(linewise && candidate.same_lines(current))
    }
}

/// The smallest of `candidates` that encloses `current` and differs from it.
///
/// Candidates are assumed to all cover the cursor, so the smallest is the
/// one starting last, then stopping first.
pub fn smallest_enclosing(
    candidates: impl IntoIterator<Item = Span>,
    current: Span,
    linewise: bool,
) -> Option<Span> {
    candidates
        .into_iter()
        .map(Span::ordered)
        .filter(|&candidate| encloses(candidate, current, linewise))
        .min_by(|a, b| b.start.cmp(&a.start).then(a.stop.cmp(&b.stop)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Single-invocation entry point: extract the prefix, (re)collect, cycle, and report the edit.

use crate::collect::collect_with_index;
use crate::cycle::{CycleDirection, CycleState};
use crate::text::{CharIndex, prefix_with_index};

/// One invocation of the completion command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionRequest<'a> {
    /// Caret position (character offset). Clamped to the document length.
    pub cursor: usize,
    /// Full document text.
    pub text: &'a str,
    /// Cycle direction for repeated invocations.
    pub direction: CycleDirection,
    /// Text inserted verbatim when there is no word before the caret (e.g. a tab).
    pub default_text: &'a str,
}

impl<'a> CompletionRequest<'a> {
    /// Create a forward request with no default insertion text.
    pub fn new(text: &'a str, cursor: usize) -> Self {
        Self {
            cursor,
            text,
            direction: CycleDirection::Next,
            default_text: "",
        }
    }

    /// Set the cycle direction.
    pub fn with_direction(mut self, direction: CycleDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the fallback insertion text.
    pub fn with_default_text(mut self, default_text: &'a str) -> Self {
        self.default_text = default_text;
        self
    }
}

/// A replacement the host should apply to the document.
///
/// `start..end` is a half-open character range; an empty range is a pure insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMutation {
    /// Inclusive start character offset.
    pub start: usize,
    /// Exclusive end character offset.
    pub end: usize,
    /// Text that replaces the range.
    pub replacement: String,
}

impl TextMutation {
    /// Returns `true` if the mutation inserts without removing anything.
    pub fn is_insertion(&self) -> bool {
        self.start >= self.end
    }

    /// Character offset just after the inserted text, once applied.
    pub fn end_after_apply(&self) -> usize {
        self.start + self.replacement.chars().count()
    }

    /// Change in document length (in characters) caused by applying the mutation.
    pub fn len_delta(&self) -> isize {
        self.replacement.chars().count() as isize - self.end.saturating_sub(self.start) as isize
    }
}

/// Run one completion step.
///
/// - No word before the caret: returns an insertion of `default_text` at the caret (or `None`
///   if it is empty). `state` is left untouched.
/// - A prefix that does not continue the active cycle (see [`CycleState::continues_with`])
///   causes candidates to be recollected from `text` and `static_words`.
/// - With candidates available, the prefix span is replaced by the next candidate in
///   `request.direction`; with none, nothing is changed.
pub fn run_completion<S: AsRef<str>>(
    request: &CompletionRequest<'_>,
    static_words: &[S],
    state: &mut CycleState,
) -> Option<TextMutation> {
    let index = CharIndex::new(request.text);
    let cursor = request.cursor.min(index.char_count());

    let Some(prefix) = prefix_with_index(request.text, &index, cursor) else {
        if request.default_text.is_empty() {
            return None;
        }
        tracing::debug!(cursor, "no prefix before caret; inserting default text");
        return Some(TextMutation {
            start: cursor,
            end: cursor,
            replacement: request.default_text.to_string(),
        });
    };

    let mut next_state = if state.continues_with(&prefix.text) {
        state.clone()
    } else {
        let candidates = collect_with_index(&prefix, cursor, request.text, &index, static_words);
        tracing::debug!(
            prefix = %prefix.text,
            count = candidates.len(),
            "collected completion candidates"
        );
        CycleState::with_candidates(candidates)
    };

    let chosen = next_state.advance(request.direction);
    *state = next_state;

    let replacement = chosen?;
    tracing::debug!(
        prefix = %prefix.text,
        completion = %replacement,
        direction = request.direction.as_str(),
        "completing"
    );
    Some(TextMutation {
        start: prefix.start,
        end: prefix.end,
        replacement,
    })
}

//! Running completion against a rope buffer with one or more cursors.

use crate::args::CompletionArgs;
use ropey::Rope;
use word_complete::{
    CompletionRequest, CycleState, TextMutation, WordSpan, prefix_at, run_completion,
};

/// Apply `mutation` to `rope`. Offsets past the end are clamped.
pub fn apply_mutation(rope: &mut Rope, mutation: &TextMutation) {
    let len = rope.len_chars();
    let start = mutation.start.min(len);
    let end = mutation.end.clamp(start, len);
    if start < end {
        rope.remove(start..end);
    }
    if !mutation.replacement.is_empty() {
        rope.insert(start, &mutation.replacement);
    }
}

/// The completion command of one view.
///
/// Owns the cycle state, so repeated invocations in the same view cycle through candidates
/// while other views keep their own position.
#[derive(Debug, Clone, Default)]
pub struct CompletionCommand {
    state: CycleState,
}

impl CompletionCommand {
    /// Create a command with no cycle in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current cycle state.
    pub fn state(&self) -> &CycleState {
        &self.state
    }

    /// Forget the current cycle (e.g. after the buffer was replaced).
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Complete at every cursor in `cursors` (character offsets) and edit `rope` in place.
    ///
    /// The cycle advances once per call, at the primary cursor: the last cursor (highest
    /// offset) with a word before it. The chosen text then replaces the prefix of every cursor
    /// whose prefix is the same word, so all cursors cycle together. Cursors with a different
    /// prefix are left alone; cursors with no word before them get `args.default` inserted.
    ///
    /// Edits are applied from last to first against one snapshot of the text. Duplicate
    /// cursors and edits overlapping one already applied are skipped. Returns the new cursor
    /// positions in the order given: after the inserted text for edited cursors, shifted by
    /// preceding edits for the others.
    pub fn run<S: AsRef<str>>(
        &mut self,
        rope: &mut Rope,
        cursors: &[usize],
        args: &CompletionArgs,
        static_words: &[S],
    ) -> Vec<usize> {
        let text = rope.to_string();
        let len = rope.len_chars();
        let prefixes: Vec<Option<WordSpan>> =
            cursors.iter().map(|&cursor| prefix_at(&text, cursor)).collect();

        let primary = (0..cursors.len())
            .filter(|&i| prefixes[i].is_some())
            .max_by_key(|&i| cursors[i]);
        let chosen = primary.and_then(|i| {
            let request = CompletionRequest::new(&text, cursors[i]).with_direction(args.cycle);
            let mutation = run_completion(&request, static_words, &mut self.state)?;
            let typed = prefixes[i].as_ref()?.text.clone();
            Some((typed, mutation.replacement))
        });

        let mut planned: Vec<Option<TextMutation>> = cursors
            .iter()
            .zip(&prefixes)
            .map(|(&cursor, prefix)| match prefix {
                Some(span) => {
                    let (typed, replacement) = chosen.as_ref()?;
                    if *typed != span.text {
                        tracing::debug!(
                            cursor,
                            prefix = %span.text,
                            "prefix differs from the primary cursor's"
                        );
                        return None;
                    }
                    Some(TextMutation {
                        start: span.start,
                        end: span.end,
                        replacement: replacement.clone(),
                    })
                }
                None if !args.default.is_empty() => Some(TextMutation {
                    start: cursor.min(len),
                    end: cursor.min(len),
                    replacement: args.default.clone(),
                }),
                None => None,
            })
            .collect();

        let mut order: Vec<usize> = (0..cursors.len()).collect();
        order.sort_by_key(|&i| cursors[i]);

        let mut edits: Vec<Option<TextMutation>> = vec![None; cursors.len()];
        let mut applied_floor = usize::MAX;
        let mut last_cursor = None;

        for &i in order.iter().rev() {
            let cursor = cursors[i];
            if last_cursor == Some(cursor) {
                continue;
            }
            last_cursor = Some(cursor);

            let Some(mutation) = planned[i].take() else {
                continue;
            };
            if mutation.end > applied_floor {
                tracing::debug!(cursor, "skipping completion overlapping a later cursor's edit");
                continue;
            }
            apply_mutation(rope, &mutation);
            applied_floor = mutation.start;
            edits[i] = Some(mutation);
        }

        cursors
            .iter()
            .zip(&edits)
            .enumerate()
            .map(|(i, (&cursor, edit))| match edit {
                Some(edit) => shift(edit.end_after_apply(), edit.start, Some(i), &edits),
                None => shift(cursor, cursor, None, &edits),
            })
            .collect()
    }
}

/// Offset `pos` by the length change of every applied edit (other than `own`) that ends at or
/// before `limit`.
fn shift(pos: usize, limit: usize, own: Option<usize>, edits: &[Option<TextMutation>]) -> usize {
    let delta: isize = edits
        .iter()
        .enumerate()
        .filter(|(j, _)| Some(*j) != own)
        .filter_map(|(_, e)| e.as_ref())
        .filter(|e| e.end <= limit)
        .map(TextMutation::len_delta)
        .sum();
    pos.saturating_add_signed(delta)
}

#![warn(missing_docs)]
//! `word-complete` - headless word completion for text editors.
//!
//! # Overview
//!
//! Given the document text and a caret position, the crate proposes a word that completes the
//! partial word before the caret, and cycles through alternatives on repeated invocation:
//!
//! 1. the **prefix** (the word characters ending at the caret) is extracted
//! 2. **candidates** are collected from the document (fuzzy subsequence match, ranked by
//!    distance from the caret) and from host-supplied static words (exact prefix match)
//! 3. a caller-owned [`CycleState`] picks the next candidate, wrapping around; the typed prefix
//!    is always the last entry so cycling can return to it
//!
//! The crate never touches an editor buffer. [`run_completion`] returns a [`TextMutation`] the
//! host applies however it stores text.
//!
//! # Quick Start
//!
//! ```rust
//! use word_complete::{CompletionRequest, CycleState, run_completion};
//!
//! let mut state = CycleState::new();
//! let text = "let counter = 0;\ncou";
//! let request = CompletionRequest::new(text, text.chars().count());
//!
//! let edit = run_completion(&request, &["const", "continue"], &mut state).unwrap();
//! assert_eq!(edit.replacement, "counter");
//! assert_eq!((edit.start, edit.end), (17, 20));
//! ```
//!
//! # Offsets
//!
//! Every position in the public API is a **character offset** (Unicode scalar values), never a
//! byte offset.

pub mod collect;
pub mod cycle;
pub mod fuzzy;
pub mod session;
pub mod text;

pub use collect::{
    Candidate, CandidateList, MAX_STATIC_CANDIDATES, collect_candidates, in_buffer_candidates,
    rank_candidates, static_candidates,
};
pub use cycle::{CycleDirection, CycleState};
pub use fuzzy::fuzzy_match;
pub use session::{CompletionRequest, TextMutation, run_completion};
pub use text::{WordSpan, current_word, prefix_at};

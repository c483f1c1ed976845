#![warn(missing_docs)]
//! `word-complete-rope` - apply `word-complete` completions to a [`ropey::Rope`].
//!
//! Hosts keep one [`CompletionCommand`] per view, parse key-binding arguments into
//! [`CompletionArgs`], and feed in static words (for example from
//! `word-complete-settings`):
//!
//! ```rust
//! use ropey::Rope;
//! use word_complete_rope::{CompletionArgs, CompletionCommand};
//!
//! let mut rope = Rope::from_str("counter += 1\nco");
//! let mut command = CompletionCommand::new();
//!
//! let cursors = command.run(&mut rope, &[15], &CompletionArgs::new(), &["const"]);
//! assert_eq!(rope.to_string(), "counter += 1\ncounter");
//! assert_eq!(cursors, vec![20]);
//! ```

mod args;
mod command;

pub use args::CompletionArgs;
pub use command::{CompletionCommand, apply_mutation};

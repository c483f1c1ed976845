#![warn(missing_docs)]
//! `word-complete-settings` - per-language static completion words.
//!
//! Words live in Sublime-style settings documents:
//!
//! - one shared **default** document mapping each language either to a word list or to the
//!   name of another language whose list it reuses, plus an optional `merge` table
//! - optional **per-language** documents with an `autocomplete` list and their own `merge`
//!
//! [`SettingsStore::static_candidates`] resolves all of that into a flat word list for a
//! language. Unresolvable or malformed configuration yields no words rather than an error.
//!
//! JSON documents may contain `//` and `/* */` comments and trailing commas, as Sublime Text
//! settings files usually do.

mod definition;
mod error;
mod jsonc;
mod store;

pub use definition::{ConfigEntry, DefaultSettings, UserSettings};
pub use error::SettingsError;
pub use store::{DEFAULT_SETTINGS_STEM, SettingsFormat, SettingsStore, language_from_syntax};

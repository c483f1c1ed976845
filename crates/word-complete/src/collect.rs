//! Candidate collection and ranking.
//!
//! Candidates come from two places:
//!
//! - **in-buffer** words that start with the prefix's first character (case-insensitive) and
//!   fuzzy-match the whole prefix, ranked by their distance from the caret
//! - **static** words supplied by the host (typically per-language configuration), which must
//!   start with the prefix exactly (case-sensitive)
//!
//! The two sources deliberately use different match rules: static lists are usually large
//! keyword dumps, so they only contribute words the user is literally spelling out.

use crate::fuzzy::fuzzy_match;
use crate::text::{CharIndex, WordSpan};
use regex::RegexBuilder;
use std::collections::HashSet;

/// Maximum number of static candidates considered per collection.
pub const MAX_STATIC_CANDIDATES: usize = 100;

/// A proposed completion together with its ranking key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The word to insert.
    pub text: String,
    /// Character distance between the candidate's occurrence and the caret.
    ///
    /// Static candidates use the document length, ranking them after every in-buffer word.
    pub distance: usize,
}

impl Candidate {
    /// Create a candidate.
    pub fn new(text: impl Into<String>, distance: usize) -> Self {
        Self {
            text: text.into(),
            distance,
        }
    }
}

/// A ranked, duplicate-free list of completion texts.
///
/// When non-empty, the typed prefix is always the final entry so cycling can return to what
/// the user originally wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateList {
    items: Vec<String>,
}

impl CandidateList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no completion is available.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entry at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    /// Index of the entry equal to `text`.
    pub fn position(&self, text: &str) -> Option<usize> {
        self.items.iter().position(|item| item == text)
    }

    /// Returns `true` if `text` is one of the entries.
    pub fn contains(&self, text: &str) -> bool {
        self.position(text).is_some()
    }

    /// Iterate over the entries in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Borrow the entries as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    fn remove(&mut self, text: &str) {
        if let Some(idx) = self.position(text) {
            self.items.remove(idx);
        }
    }
}

impl From<Vec<String>> for CandidateList {
    /// Build a list from already-ranked entries, dropping later duplicates.
    fn from(items: Vec<String>) -> Self {
        Self { items: uniq(items) }
    }
}

impl<'a> IntoIterator for &'a CandidateList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn uniq(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Scan `text` for words that could complete `prefix`, with their distance from `cursor`.
///
/// A word qualifies when it starts at a word boundary with the prefix's first character
/// (case-insensitive), is at least two characters long, is not the prefix itself, and
/// [fuzzy-matches](fuzzy_match) the prefix. The word the caret currently sits inside is
/// skipped. Results are returned in document order.
pub fn in_buffer_candidates(prefix: &str, cursor: usize, text: &str) -> Vec<Candidate> {
    let index = CharIndex::new(text);
    in_buffer_with_index(prefix, cursor.min(index.char_count()), text, &index)
}

fn in_buffer_with_index(
    prefix: &str,
    cursor: usize,
    text: &str,
    index: &CharIndex,
) -> Vec<Candidate> {
    let Some(first) = prefix.chars().next() else {
        return Vec::new();
    };

    let pattern = format!(r"\b{}\w+", regex::escape(first.encode_utf8(&mut [0; 4])));
    let re = match RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .multi_line(true)
        .build()
    {
        Ok(re) => re,
        Err(err) => {
            tracing::warn!("word scan regex {pattern:?} failed to compile: {err}");
            return Vec::new();
        }
    };

    let mut out = Vec::new();
    for m in re.find_iter(text) {
        let start = index.byte_to_char(m.start());
        let end = index.byte_to_char(m.end());
        if start < cursor && cursor < end {
            continue;
        }

        let location = if end < cursor { end } else { start };
        let word = m.as_str();
        if word != prefix && fuzzy_match(prefix, word) {
            out.push(Candidate::new(word, cursor.abs_diff(location)));
        }
    }
    out
}

/// Select the static words usable for `prefix` and rank them as "farthest" candidates.
///
/// Only words that start with `prefix` exactly (case-sensitive) and differ from it are kept.
/// Every kept word gets `document_len` as its distance, and at most
/// [`MAX_STATIC_CANDIDATES`] are returned, in supply order.
pub fn static_candidates<I, S>(prefix: &str, words: I, document_len: usize) -> Vec<Candidate>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = Vec::new();
    for word in words {
        let word: &str = word.as_ref();
        if word.starts_with(prefix) && word != prefix {
            out.push(Candidate::new(word, document_len));
        }
    }
    out.sort_by_key(|c| c.distance);
    out.truncate(MAX_STATIC_CANDIDATES);
    out
}

/// Merge in-buffer and static candidates into the final ranked list for `prefix`.
///
/// The result is sorted by `(distance, discovery order)`, de-duplicated by text (first
/// occurrence wins) and terminated by the prefix itself. `current_word` (the full word under
/// the caret) is removed unless it is the prefix. A list that would only offer the prefix back
/// is returned empty.
pub fn rank_candidates(
    prefix: &str,
    in_buffer: Vec<Candidate>,
    statics: Vec<Candidate>,
    current_word: Option<&str>,
) -> CandidateList {
    let mut merged = in_buffer;
    for candidate in statics {
        if !merged.iter().any(|c| c.text == candidate.text) {
            merged.push(candidate);
        }
    }
    merged.sort_by_key(|c| c.distance);

    let mut texts: Vec<String> = merged.into_iter().map(|c| c.text).collect();
    if !texts.is_empty() {
        texts.push(prefix.to_string());
    }

    let mut list = CandidateList::from(texts);
    if let Some(word) = current_word.filter(|w| *w != prefix) {
        list.remove(word);
    }
    if list.len() == 1 && list.get(0) == Some(prefix) {
        return CandidateList::new();
    }
    list
}

/// Collect the ranked candidate list for the prefix ending at `prefix.end`.
///
/// `cursor` is the caret position (normally `prefix.end`), `static_words` the host-supplied
/// language words. See [`in_buffer_candidates`], [`static_candidates`] and
/// [`rank_candidates`] for the individual steps.
pub fn collect_candidates<S: AsRef<str>>(
    prefix: &WordSpan,
    cursor: usize,
    text: &str,
    static_words: &[S],
) -> CandidateList {
    let index = CharIndex::new(text);
    collect_with_index(prefix, cursor, text, &index, static_words)
}

pub(crate) fn collect_with_index<S: AsRef<str>>(
    prefix: &WordSpan,
    cursor: usize,
    text: &str,
    index: &CharIndex,
    static_words: &[S],
) -> CandidateList {
    let cursor = cursor.min(index.char_count());
    let statics = static_candidates(&prefix.text, static_words, index.char_count());
    let in_buffer = in_buffer_with_index(&prefix.text, cursor, text, index);
    let current = crate::text::current_word_with_index(text, index, prefix);
    rank_candidates(&prefix.text, in_buffer, statics, Some(&current))
}

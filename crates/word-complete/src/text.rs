//! Word extraction around a caret.
//!
//! All public positions are **character offsets** into the document, mirroring how editor
//! buffers address text. Byte offsets only exist inside this module.

use regex::Regex;
use std::sync::LazyLock;

static TRAILING_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+\z").expect("valid trailing word regex"));

static LEADING_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A\w+").expect("valid leading word regex"));

/// A run of word characters, expressed as a half-open character range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSpan {
    /// Inclusive start character offset.
    pub start: usize,
    /// Exclusive end character offset.
    pub end: usize,
    /// The word itself.
    pub text: String,
}

impl WordSpan {
    /// Returns the length of the span in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the span covers no characters.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

#[derive(Debug)]
pub(crate) struct CharIndex {
    char_to_byte: Vec<usize>,
    text_len: usize,
}

impl CharIndex {
    pub(crate) fn new(text: &str) -> Self {
        let mut char_to_byte: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        char_to_byte.push(text.len());
        Self {
            char_to_byte,
            text_len: text.len(),
        }
    }

    pub(crate) fn char_count(&self) -> usize {
        self.char_to_byte.len().saturating_sub(1)
    }

    pub(crate) fn char_to_byte(&self, char_offset: usize) -> usize {
        let clamped = char_offset.min(self.char_count());
        self.char_to_byte
            .get(clamped)
            .copied()
            .unwrap_or(self.text_len)
    }

    pub(crate) fn byte_to_char(&self, byte_offset: usize) -> usize {
        let clamped = byte_offset.min(self.text_len);
        match self.char_to_byte.binary_search(&clamped) {
            Ok(idx) => idx,
            Err(idx) => idx,
        }
    }
}

/// Returns the word being typed: the run of word characters ending exactly at `cursor`.
///
/// A cursor past the end of `text` is clamped to the document length. Returns `None` when the
/// character before the cursor is not a word character (or the cursor is at offset 0).
pub fn prefix_at(text: &str, cursor: usize) -> Option<WordSpan> {
    let index = CharIndex::new(text);
    prefix_with_index(text, &index, cursor)
}

pub(crate) fn prefix_with_index(text: &str, index: &CharIndex, cursor: usize) -> Option<WordSpan> {
    let cursor_byte = index.char_to_byte(cursor);
    let m = TRAILING_WORD.find(&text[..cursor_byte])?;
    Some(WordSpan {
        start: index.byte_to_char(m.start()),
        end: index.byte_to_char(m.end()),
        text: m.as_str().to_string(),
    })
}

/// Returns the whole word that begins at `prefix.start`, including any word characters to the
/// right of the caret.
///
/// When the caret sits at the end of a word this is the prefix itself.
pub fn current_word(text: &str, prefix: &WordSpan) -> String {
    let index = CharIndex::new(text);
    current_word_with_index(text, &index, prefix)
}

pub(crate) fn current_word_with_index(text: &str, index: &CharIndex, prefix: &WordSpan) -> String {
    let start_byte = index.char_to_byte(prefix.start);
    LEADING_WORD
        .find(&text[start_byte..])
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| prefix.text.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_at_end_of_word() {
        let span = prefix_at("let foo = fo", 12).unwrap();
        assert_eq!((span.start, span.end), (10, 12));
        assert_eq!(span.text, "fo");
    }

    #[test]
    fn test_prefix_requires_word_char_before_cursor() {
        assert_eq!(prefix_at("foo ", 4), None);
        assert_eq!(prefix_at("", 0), None);
        assert_eq!(prefix_at("foo", 0), None);
    }

    #[test]
    fn test_prefix_uses_char_offsets() {
        // "é" is two bytes but one character.
        let span = prefix_at("café crè", 8).unwrap();
        assert_eq!((span.start, span.end), (5, 8));
        assert_eq!(span.text, "crè");
    }

    #[test]
    fn test_cursor_is_clamped() {
        let span = prefix_at("abc", 99).unwrap();
        assert_eq!(span.text, "abc");
        assert_eq!(span.end, 3);
    }

    #[test]
    fn test_current_word_extends_past_cursor() {
        let text = "call foobar()";
        let span = prefix_at(text, 8).unwrap();
        assert_eq!(span.text, "foo");
        assert_eq!(current_word(text, &span), "foobar");
    }

    #[test]
    fn test_current_word_at_word_end_is_prefix() {
        let text = "call foo()";
        let span = prefix_at(text, 8).unwrap();
        assert_eq!(current_word(text, &span), "foo");
    }
}

//! Subsequence ("fuzzy") matching between a typed prefix and a candidate word.

/// Returns `true` if every character of `prefix` occurs in `word`, in order.
///
/// Matching is case-insensitive and does not require the characters to be contiguous: each
/// prefix character must be found strictly after the position matched by the previous one.
///
/// An empty prefix trivially matches. [`run_completion`](crate::run_completion) never asks
/// about an empty prefix, because a prefix always contains at least one word character.
pub fn fuzzy_match(prefix: &str, word: &str) -> bool {
    let mut word_chars = word.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|wanted| word_chars.any(|c| c == wanted))
}

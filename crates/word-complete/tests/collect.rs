use pretty_assertions::assert_eq;
use word_complete::{CandidateList, collect_candidates, prefix_at};

fn collect(text: &str, cursor: usize, statics: &[&str]) -> Vec<String> {
    let prefix = prefix_at(text, cursor).expect("prefix before caret");
    let list: CandidateList = collect_candidates(&prefix, cursor, text, statics);
    list.iter().map(str::to_string).collect()
}

#[test]
fn test_prefix_is_last_entry() {
    let text = "foobar food\nfoo";
    let got = collect(text, text.chars().count(), &[]);
    assert_eq!(got, vec!["food", "foobar", "foo"]);
}

#[test]
fn test_nearest_word_ranks_first() {
    // Words after the caret measure from their start, words before it from their end.
    let text = "alpha_far x\nal\nalpha_near";
    let got = collect(text, 14, &[]);
    assert_eq!(got, vec!["alpha_near", "alpha_far", "al"]);
}

#[test]
fn test_fuzzy_in_buffer_matches() {
    let text = "HashMap hash_set hmac\nhm";
    let got = collect(text, text.chars().count(), &[]);
    assert_eq!(got, vec!["hmac", "HashMap", "hm"]);
}

#[test]
fn test_static_words_rank_after_buffer_words() {
    let text = "printer\npr";
    let got = collect(text, text.chars().count(), &["print", "private", "Process"]);
    assert_eq!(got, vec!["printer", "print", "private", "pr"]);
}

#[test]
fn test_duplicate_from_buffer_and_static_list_appears_once() {
    let text = "return 1\nre";
    let got = collect(text, text.chars().count(), &["return", "repeat"]);
    assert_eq!(got, vec!["return", "repeat", "re"]);
}

#[test]
fn test_static_words_are_not_fuzzy_matched() {
    let text = "x\nrt";
    let got = collect(text, text.chars().count(), &["return", "rtrim"]);
    assert_eq!(got, vec!["rtrim", "rt"]);
}

#[test]
fn test_word_under_caret_is_not_offered() {
    // Caret inside "foobar": prefix is "foo", the full word "foobar" is already there.
    let text = "foobar fooqux";
    let got = collect(text, 3, &[]);
    assert_eq!(got, vec!["fooqux", "foo"]);
}

#[test]
fn test_no_candidates_yields_empty_list() {
    let text = "zebra\nqu";
    let got = collect(text, text.chars().count(), &["Quit"]);
    assert!(got.is_empty());
}

#[test]
fn test_unicode_words_use_char_distances() {
    let text = "über überall\nüb";
    let got = collect(text, text.chars().count(), &[]);
    assert_eq!(got, vec!["überall", "über", "üb"]);
}

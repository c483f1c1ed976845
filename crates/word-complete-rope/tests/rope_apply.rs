use pretty_assertions::assert_eq;
use ropey::Rope;
use serde_json::json;
use word_complete::{CycleDirection, TextMutation};
use word_complete_rope::{CompletionArgs, CompletionCommand, apply_mutation};

const NO_STATICS: &[&str] = &[];

fn args(cycle: CycleDirection) -> CompletionArgs {
    CompletionArgs {
        cycle,
        default: String::new(),
    }
}

#[test]
fn test_apply_mutation_replaces_and_inserts() {
    let mut rope = Rope::from_str("let fo = 1;");
    apply_mutation(
        &mut rope,
        &TextMutation {
            start: 4,
            end: 6,
            replacement: "foobar".to_string(),
        },
    );
    assert_eq!(rope.to_string(), "let foobar = 1;");

    apply_mutation(
        &mut rope,
        &TextMutation {
            start: 0,
            end: 0,
            replacement: "\t".to_string(),
        },
    );
    assert_eq!(rope.to_string(), "\tlet foobar = 1;");
}

#[test]
fn test_apply_mutation_clamps_out_of_range() {
    let mut rope = Rope::from_str("abc");
    apply_mutation(
        &mut rope,
        &TextMutation {
            start: 2,
            end: 99,
            replacement: "Z".to_string(),
        },
    );
    assert_eq!(rope.to_string(), "abZ");
}

#[test]
fn test_repeated_runs_cycle_in_place() {
    let mut rope = Rope::from_str("bar baz\nba");
    let mut command = CompletionCommand::new();
    let mut cursors = vec![10];

    let mut lines = Vec::new();
    for _ in 0..4 {
        cursors = command.run(&mut rope, &cursors, &args(CycleDirection::Next), NO_STATICS);
        lines.push(rope.line(1).to_string());
    }
    assert_eq!(lines, vec!["baz", "bar", "ba", "baz"]);
    assert_eq!(cursors, vec![rope.len_chars()]);

    cursors = command.run(&mut rope, &cursors, &args(CycleDirection::Previous), NO_STATICS);
    assert_eq!(rope.line(1).to_string(), "ba");
    assert_eq!(cursors, vec![10]);
}

#[test]
fn test_default_text_inserted_without_prefix() {
    let mut rope = Rope::from_str("fn main() {\n}");
    let mut command = CompletionCommand::new();
    let args = CompletionArgs::from_json(&json!({ "default": "    " })).unwrap();

    let cursors = command.run(&mut rope, &[12], &args, NO_STATICS);
    assert_eq!(rope.to_string(), "fn main() {\n    }");
    assert_eq!(cursors, vec![16]);
}

#[test]
fn test_multiple_cursors_are_completed_and_shifted() {
    // Two cursors after "va", one cursor after a space (default text, empty => untouched).
    let mut rope = Rope::from_str("value\nva va x ");
    let mut command = CompletionCommand::new();

    let cursors = command.run(&mut rope, &[8, 11, 14], &args(CycleDirection::Next), NO_STATICS);
    assert_eq!(rope.to_string(), "value\nvalue value x ");
    assert_eq!(cursors, vec![11, 17, 20]);
}

#[test]
fn test_duplicate_cursors_edit_once() {
    let mut rope = Rope::from_str("value\nva");
    let mut command = CompletionCommand::new();

    let cursors = command.run(&mut rope, &[8, 8], &args(CycleDirection::Next), NO_STATICS);
    assert_eq!(rope.to_string(), "value\nvalue");
    assert_eq!(cursors, vec![11, 11]);
}

#[test]
fn test_static_words_complete_in_rope() {
    let mut rope = Rope::from_str("imp");
    let mut command = CompletionCommand::new();
    let statics = vec!["import".to_string(), "impl".to_string()];

    let cursors = command.run(&mut rope, &[3], &args(CycleDirection::Next), &statics);
    assert_eq!(rope.to_string(), "import");
    assert_eq!(cursors, vec![6]);
    assert_eq!(command.state().previous_completion(), Some("import"));

    command.reset();
    assert!(command.state().candidates().is_empty());
}

#[test]
fn test_multiple_cursors_cycle_together() {
    let mut rope = Rope::from_str("valid value\nva va");
    let mut command = CompletionCommand::new();
    let mut cursors = vec![14, 17];

    let mut lines = Vec::new();
    for _ in 0..4 {
        cursors = command.run(&mut rope, &cursors, &args(CycleDirection::Next), NO_STATICS);
        lines.push(rope.line(1).to_string());
    }

    assert_eq!(lines, vec!["value value", "valid valid", "va va", "value value"]);
    assert_eq!(cursors, vec![17, 23]);
    assert_eq!(command.state().previous_completion(), Some("value"));
}

#[test]
fn test_cursor_with_other_prefix_is_left_alone() {
    let mut rope = Rope::from_str("value\nva x zz");
    let mut command = CompletionCommand::new();

    let cursors = command.run(&mut rope, &[8, 13], &args(CycleDirection::Next), NO_STATICS);
    // The primary cursor (after "zz") has nothing to offer, so "va" is not touched either.
    assert_eq!(rope.to_string(), "value\nva x zz");
    assert_eq!(cursors, vec![8, 13]);

    let cursors = command.run(&mut rope, &[8, 11], &args(CycleDirection::Next), NO_STATICS);
    // Primary is now after "va"; the cursor after "x " has no word and no default text.
    assert_eq!(rope.to_string(), "value\nvalue x zz");
    assert_eq!(cursors, vec![11, 14]);
}

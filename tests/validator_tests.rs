// Bracket validator and command table tests

use tapewind::program::{match_brackets, Command, SyntaxError, COMMAND_CHARS};

fn chars(source: &str) -> Vec<char> {
    source.chars().collect()
}

#[test]
fn test_empty_program_is_valid() {
    let table = match_brackets(&chars("")).expect("empty program should validate");
    assert!(table.is_empty());
}

#[test]
fn test_non_bracket_characters_are_ignored() {
    let table = match_brackets(&chars("+->< hello ,.")).expect("should validate");
    assert!(table.is_empty());
}

#[test]
fn test_simple_pair() {
    let table = match_brackets(&chars("[]")).expect("should validate");
    assert_eq!(table.get(&0), Some(&1));
    assert_eq!(table.get(&1), Some(&0));
}

#[test]
fn test_nested_pairs() {
    let table = match_brackets(&chars("[[]]")).expect("should validate");
    assert_eq!(table.get(&0), Some(&3));
    assert_eq!(table.get(&3), Some(&0));
    assert_eq!(table.get(&1), Some(&2));
    assert_eq!(table.get(&2), Some(&1));
}

#[test]
fn test_pairs_interleaved_with_comments() {
    let table = match_brackets(&chars("a[b+[-]c]d")).expect("should validate");
    assert_eq!(table.get(&1), Some(&8));
    assert_eq!(table.get(&8), Some(&1));
    assert_eq!(table.get(&4), Some(&6));
    assert_eq!(table.get(&6), Some(&4));
}

#[test]
fn test_unmatched_open_reports_position() {
    let err = match_brackets(&chars("[+")).expect_err("should fail");
    assert_eq!(err, SyntaxError::UnmatchedOpenParen { position: 0 });
    assert_eq!(err.position(), 0);
}

#[test]
fn test_unmatched_close_reports_position() {
    let err = match_brackets(&chars("+]")).expect_err("should fail");
    assert_eq!(err, SyntaxError::UnmatchedCloseParen { position: 1 });
    assert_eq!(err.position(), 1);
}

#[test]
fn test_unmatched_open_reports_first_remaining() {
    // Both brackets at 0 and 1 are unmatched once the inner pair
    // resolves; the error must point at the outermost (first) one.
    let err = match_brackets(&chars("[[[]")).expect_err("should fail");
    assert_eq!(err, SyntaxError::UnmatchedOpenParen { position: 0 });
}

#[test]
fn test_close_before_open() {
    let err = match_brackets(&chars("][")).expect_err("should fail");
    assert_eq!(err, SyntaxError::UnmatchedCloseParen { position: 0 });
}

#[test]
fn test_command_table_round_trips() {
    // The highlight table and the decoder must agree exactly.
    for &c in &COMMAND_CHARS {
        let command = Command::from_char(c).expect("table entries are commands");
        assert_eq!(command.as_char(), c);
    }
    assert_eq!(Command::from_char('x'), None);
    assert_eq!(Command::from_char(' '), None);
}

#[test]
fn test_match_is_bidirectional_and_ordered() {
    let program = chars("+[>[-]<]+[]");
    let table = match_brackets(&program).expect("should validate");
    for (&from, &to) in &table {
        assert_eq!(table.get(&to), Some(&from));
        if program[from] == '[' {
            assert!(from < to);
        } else {
            assert!(to < from);
        }
    }
}

//! The grading engine: compare a submitted text against a reference answer
//! and produce a line- and word-level diff with an accuracy score.
//!
//! This is a total, pure function over any pair of strings. Lines are paired
//! by position after comment stripping and blank-line removal; a line scores
//! as correct when the two sides are equal ignoring whitespace and
//! double-vs-single quote style. Incorrect lines additionally get a token-level
//! diff computed on the *unnormalized* text, so whitespace differences that
//! were irrelevant to scoring still show up in the diff display.

use std::sync::LazyLock;

use regex::Regex;

use crate::comment::strip_comments;
use crate::model::{accuracy, GradingResult, LineDiff, WordDiff};

/// Pre-compiled matcher for whitespace runs, used by the tokenizer.
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Placeholder rendered for a token that is empty or missing on one side.
pub const MISSING_TOKEN: &str = "(missing)";

/// Split a text into comparable lines: strip comments from each
/// newline-delimited line, then drop lines that are blank after trimming.
#[must_use]
pub fn comparable_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(strip_comments)
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Normalize a line for equality scoring: remove all whitespace and replace
/// double quotes with single quotes. Never used for display.
#[must_use]
pub fn normalize(line: &str) -> String {
    line.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == '"' { '\'' } else { c })
        .collect()
}

/// Split a line into alternating word/whitespace tokens, retaining the
/// whitespace runs as their own tokens.
///
/// The sequence always starts and ends with a (possibly empty) word token:
/// `" a "` yields `["", " ", "a", " ", ""]` and `""` yields `[""]`. Keeping
/// the empty boundary tokens keeps indices stable when one side has leading
/// or trailing whitespace and the other does not.
#[must_use]
pub fn split_tokens(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for m in WS_RE.find_iter(line) {
        tokens.push(&line[last..m.start()]);
        tokens.push(m.as_str());
        last = m.end();
    }
    tokens.push(&line[last..]);

    tokens
}

/// Compute token-level diffs between two comment-stripped lines.
///
/// Tokens are compared pairwise by index up to the longer token list; a
/// missing token counts as empty. Only differing pairs are emitted, with
/// [`MISSING_TOKEN`] standing in for an empty or absent side.
#[must_use]
pub fn word_diffs(expected: &str, actual: &str) -> Vec<WordDiff> {
    let expected_tokens = split_tokens(expected);
    let actual_tokens = split_tokens(actual);
    let max_length = expected_tokens.len().max(actual_tokens.len());

    let mut diffs = Vec::new();

    for index in 0..max_length {
        let expected_token = expected_tokens.get(index).copied().unwrap_or("");
        let actual_token = actual_tokens.get(index).copied().unwrap_or("");

        if expected_token != actual_token {
            diffs.push(WordDiff {
                index: index as u32,
                expected: placeholder(expected_token),
                actual: placeholder(actual_token),
            });
        }
    }

    diffs
}

fn placeholder(token: &str) -> String {
    if token.is_empty() {
        MISSING_TOKEN.to_string()
    } else {
        token.to_string()
    }
}

/// Grade a submitted text against a reference text.
///
/// Comparable lines are paired by position; the shorter side is padded with
/// empty lines, so every line of the longer side produces a comparison slot.
/// This function has no error conditions: any inputs, including two empty
/// strings, yield a valid result (zero slots grade as 0% accuracy).
#[must_use]
pub fn grade(expected: &str, actual: &str) -> GradingResult {
    let expected_lines = comparable_lines(expected);
    let actual_lines = comparable_lines(actual);

    let total_lines = expected_lines.len().max(actual_lines.len());
    let mut line_diffs = Vec::with_capacity(total_lines);
    let mut correct_lines: u32 = 0;

    for i in 0..total_lines {
        let expected_line = expected_lines.get(i).copied().unwrap_or("");
        let actual_line = actual_lines.get(i).copied().unwrap_or("");

        let is_correct = normalize(expected_line) == normalize(actual_line);
        if is_correct {
            correct_lines += 1;
        }

        line_diffs.push(LineDiff {
            line_number: (i + 1) as u32,
            is_correct,
            expected: expected_line.to_string(),
            actual: actual_line.to_string(),
            word_diffs: if is_correct {
                None
            } else {
                Some(word_diffs(expected_line, actual_line))
            },
        });
    }

    let total_lines = total_lines as u32;

    GradingResult {
        total_lines,
        correct_lines,
        accuracy: accuracy(correct_lines, total_lines),
        line_diffs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- comparable_lines ----------------------------------------------------

    #[test]
    fn test_comparable_lines_drops_blank_and_comment_lines() {
        let text = "x = 1\n\n# comment\n   \ny = 2";
        assert_eq!(comparable_lines(text), vec!["x = 1", "y = 2"]);
    }

    #[test]
    fn test_comparable_lines_keeps_pre_comment_text() {
        let text = "x = 1 # set x\ny = 2";
        assert_eq!(comparable_lines(text), vec!["x = 1 ", "y = 2"]);
    }

    #[test]
    fn test_comparable_lines_drops_line_emptied_by_comment() {
        // "   # only" trims to a comment, "  // only" likewise
        let text = "   # only\n  // only\nz = 3";
        assert_eq!(comparable_lines(text), vec!["z = 3"]);
    }

    #[test]
    fn test_comparable_lines_empty_input() {
        assert!(comparable_lines("").is_empty());
    }

    // -- normalize -----------------------------------------------------------

    #[test]
    fn test_normalize_removes_whitespace() {
        assert_eq!(normalize("a  =\t 1"), "a=1");
    }

    #[test]
    fn test_normalize_rewrites_double_quotes() {
        assert_eq!(normalize("print(\"a\")"), "print('a')");
    }

    // -- split_tokens --------------------------------------------------------

    #[test]
    fn test_split_tokens_alternates() {
        assert_eq!(split_tokens("foo bar"), vec!["foo", " ", "bar"]);
    }

    #[test]
    fn test_split_tokens_leading_and_trailing_whitespace() {
        assert_eq!(split_tokens(" a "), vec!["", " ", "a", " ", ""]);
    }

    #[test]
    fn test_split_tokens_empty() {
        assert_eq!(split_tokens(""), vec![""]);
    }

    #[test]
    fn test_split_tokens_whitespace_runs() {
        assert_eq!(split_tokens("a \t b"), vec!["a", " \t ", "b"]);
    }

    // -- word_diffs ----------------------------------------------------------

    #[test]
    fn test_word_diffs_single_token_change() {
        let diffs = word_diffs("foo bar", "foo baz");
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].index, 2);
        assert_eq!(diffs[0].expected, "bar");
        assert_eq!(diffs[0].actual, "baz");
    }

    #[test]
    fn test_word_diffs_missing_side_uses_placeholder() {
        let diffs = word_diffs("foo bar", "foo");
        assert_eq!(diffs.len(), 2);
        assert_eq!(diffs[0].index, 1);
        assert_eq!(diffs[0].expected, " ");
        assert_eq!(diffs[0].actual, MISSING_TOKEN);
        assert_eq!(diffs[1].expected, "bar");
        assert_eq!(diffs[1].actual, MISSING_TOKEN);
    }

    #[test]
    fn test_word_diffs_whitespace_run_difference_surfaces() {
        // Scoring ignores whitespace, but the token diff does not.
        let diffs = word_diffs("a  =  1", "a = 1");
        assert_eq!(diffs.len(), 2);
        assert!(diffs.iter().all(|d| d.index % 2 == 1));
    }

    #[test]
    fn test_word_diffs_identical_lines_empty() {
        assert!(word_diffs("foo bar", "foo bar").is_empty());
    }

    // -- grade ---------------------------------------------------------------

    #[test]
    fn test_grade_identical_inputs() {
        let result = grade("x = 1\ny = 2", "x = 1\ny = 2");
        assert_eq!(result.total_lines, 2);
        assert_eq!(result.correct_lines, 2);
        assert_eq!(result.accuracy, 100.0);
        assert!(result.line_diffs.iter().all(|d| d.is_correct));
        assert!(result.line_diffs.iter().all(|d| d.word_diffs.is_none()));
    }

    #[test]
    fn test_grade_empty_inputs() {
        let result = grade("", "");
        assert_eq!(result.total_lines, 0);
        assert_eq!(result.correct_lines, 0);
        assert_eq!(result.accuracy, 0.0);
        assert!(result.line_diffs.is_empty());
    }

    #[test]
    fn test_grade_line_numbers_are_one_based() {
        let result = grade("a\nb\nc", "a\nb\nc");
        let numbers: Vec<u32> = result.line_diffs.iter().map(|d| d.line_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_grade_pads_shorter_side() {
        let result = grade("line1\nline2", "line1");
        assert_eq!(result.total_lines, 2);
        assert_eq!(result.correct_lines, 1);
        let slot = &result.line_diffs[1];
        assert!(!slot.is_correct);
        assert_eq!(slot.expected, "line2");
        assert_eq!(slot.actual, "");
    }

    #[test]
    fn test_grade_quote_style_is_scoring_irrelevant() {
        let result = grade("print(\"a\")", "print('a')");
        assert!(result.line_diffs[0].is_correct);
    }

    #[test]
    fn test_grade_whitespace_is_scoring_irrelevant_but_displayed() {
        let result = grade("a  =  1", "a=1");
        let slot = &result.line_diffs[0];
        assert!(slot.is_correct);
        assert_eq!(slot.expected, "a  =  1");
        assert_eq!(slot.actual, "a=1");
    }

    #[test]
    fn test_grade_comment_only_line_dropped_from_both_sides() {
        let result = grade("# full comment\nprint(1)", "print(1)");
        assert_eq!(result.total_lines, 1);
        assert_eq!(result.correct_lines, 1);
    }

    #[test]
    fn test_grade_incorrect_line_carries_word_diffs() {
        let result = grade("foo bar", "foo baz");
        let slot = &result.line_diffs[0];
        assert!(!slot.is_correct);
        let diffs = slot.word_diffs.as_ref().unwrap();
        assert!(!diffs.is_empty());
        assert!(diffs.iter().any(|d| d.expected == "bar" && d.actual == "baz"));
    }

    #[test]
    fn test_grade_rounds_accuracy() {
        let result = grade("a\nb\nc", "a\nx\ny");
        assert_eq!(result.total_lines, 3);
        assert_eq!(result.correct_lines, 1);
        assert_eq!(result.accuracy, 33.33);
    }
}

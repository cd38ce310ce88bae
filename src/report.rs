//! Output formatting for grading results.

use std::fmt::Write;

use crate::model::{GradingResult, LineDiff, WordDiff};

/// Trait for formatting grading results.
pub trait ReportFormatter {
    /// Format the result to a string.
    fn format(&self, result: &GradingResult) -> String;
}

impl GradingResult {
    /// Format using a specific formatter.
    #[must_use]
    pub fn format(&self, formatter: &dyn ReportFormatter) -> String {
        formatter.format(self)
    }
}

/// Render a line's word diffs as "`expected` → `actual`" pairs.
#[must_use]
pub fn format_word_diffs(diffs: &[WordDiff]) -> String {
    diffs
        .iter()
        .map(|d| format!("`{}` → `{}`", d.expected, d.actual))
        .collect::<Vec<_>>()
        .join(", ")
}

fn line_word_diffs(line: &LineDiff) -> &[WordDiff] {
    line.word_diffs.as_deref().unwrap_or(&[])
}

/// Plain text formatter.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, result: &GradingResult) -> String {
        let mut out = String::new();

        if result.total_lines == 0 {
            out.push_str("No comparable lines to grade.\n");
            return out;
        }

        let accuracy = result.accuracy;
        let correct = result.correct_lines;
        let total = result.total_lines;
        writeln!(out, "Score: {accuracy:.2}% ({correct}/{total} lines correct)").unwrap();

        if result.is_perfect() {
            out.push_str("All lines match.\n");
            return out;
        }

        for line in result.incorrect_lines() {
            let number = line.line_number;
            out.push('\n');
            writeln!(out, "Line {number}:").unwrap();
            writeln!(out, "  expected: {}", line.expected).unwrap();
            writeln!(out, "  actual:   {}", line.actual).unwrap();
            let diffs = line_word_diffs(line);
            if !diffs.is_empty() {
                writeln!(out, "  tokens:   {}", format_word_diffs(diffs)).unwrap();
            }
        }

        out
    }
}

/// Markdown formatter.
pub struct MarkdownFormatter;

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, result: &GradingResult) -> String {
        let mut md = String::new();

        if result.total_lines == 0 {
            md.push_str("No comparable lines to grade.\n");
            return md;
        }

        let accuracy = result.accuracy;
        writeln!(md, "### Score: {accuracy:.2}%\n").unwrap();

        let correct = result.correct_lines;
        let total = result.total_lines;
        writeln!(md, "**{correct}** of **{total}** lines correct").unwrap();

        if result.is_perfect() {
            md.push_str("\nAll lines match! 🎉\n");
            return md;
        }

        md.push_str("\n| Line | Expected | Actual |\n");
        md.push_str("|-----:|:---------|:-------|\n");

        for line in result.incorrect_lines() {
            let number = line.line_number;
            let expected = code_cell(&line.expected);
            let actual = code_cell(&line.actual);
            writeln!(md, "| {number} | {expected} | {actual} |").unwrap();
        }

        md.push_str("\n<details>\n<summary>Word diffs</summary>\n\n");

        for line in result.incorrect_lines() {
            let number = line.line_number;
            let diffs = format_word_diffs(line_word_diffs(line));
            writeln!(md, "**Line {number}**: {diffs}\n").unwrap();
        }

        md.push_str("</details>\n");

        md
    }
}

/// Wrap a cell value in a code span, leaving empty values blank.
fn code_cell(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("`{value}`")
    }
}

//! Value types produced by a grading run. These are constructed fresh on
//! every call to [`crate::grade::grade`] and serialize in camelCase, matching
//! the JSON envelope consumed by external stores.

use serde::Serialize;

/// Round to 2 decimal places (half-away-from-zero).
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute an accuracy percentage, returning 0.0 when the total is zero.
#[must_use]
pub fn accuracy(correct: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        round2(f64::from(correct) / f64::from(total) * 100.0)
    }
}

/// A single differing token pair within an incorrect line.
///
/// `index` is the 0-based position among alternating word/whitespace tokens.
/// A side whose token was empty or missing carries the placeholder from
/// [`crate::grade::MISSING_TOKEN`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordDiff {
    pub index: u32,
    pub expected: String,
    pub actual: String,
}

/// One line-comparison slot.
///
/// `expected` and `actual` are the comment-stripped but otherwise unnormalized
/// line texts, so whitespace and quote-style differences that did not affect
/// scoring are still visible to the reader. Either may be empty when that side
/// ran out of lines.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDiff {
    pub line_number: u32,
    pub is_correct: bool,
    pub expected: String,
    pub actual: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_diffs: Option<Vec<WordDiff>>,
}

/// The complete result of grading a submission against a reference answer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingResult {
    /// Number of line-comparison slots (the longer side's comparable-line count).
    pub total_lines: u32,
    /// Slots where the normalized forms matched exactly.
    pub correct_lines: u32,
    /// `correct_lines / total_lines * 100`, rounded to 2 decimals; 0 when empty.
    pub accuracy: f64,
    /// One entry per slot, in line order, 1-indexed.
    pub line_diffs: Vec<LineDiff>,
}

impl GradingResult {
    /// True when there was at least one comparable line and all matched.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.total_lines > 0 && self.correct_lines == self.total_lines
    }

    /// Iterate over the incorrect slots only.
    pub fn incorrect_lines(&self) -> impl Iterator<Item = &LineDiff> {
        self.line_diffs.iter().filter(|d| !d.is_correct)
    }
}

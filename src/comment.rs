//! Comment stripping for submitted and reference lines.
//!
//! Two comment conventions are recognized: `#` and `//`. A line that is
//! nothing but a comment is blanked out entirely (and later dropped by the
//! blank-line filter); a trailing comment keeps everything before the marker.

/// Strip comments from a single line.
///
/// If the trimmed line starts with `#` or `//` the whole line becomes empty.
/// Otherwise the line is truncated at the first `#`, and the result is then
/// truncated at its first `//`. The two passes run in that order and are
/// deliberately not a combined earliest-marker scan: a `#` inside text after a
/// `//` marker is found by the first pass, so `http://host # note` truncates
/// at the `#` before the `//` pass ever sees the line. Truncation only ever
/// shortens the string, so the second pass cannot reveal new occurrences.
#[must_use]
pub fn strip_comments(line: &str) -> &str {
    let trimmed = line.trim();
    if trimmed.starts_with('#') || trimmed.starts_with("//") {
        return "";
    }

    let mut result = line;

    if let Some(i) = result.find('#') {
        result = &result[..i];
    }

    if let Some(i) = result.find("//") {
        result = &result[..i];
    }

    result
}

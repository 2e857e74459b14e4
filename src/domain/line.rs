// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line splitting and classification.

use crate::domain::errors::{ConfigError, Result};

/// A classified document line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or whitespace-only.
    Blank,
    /// Starts with `#` after leading whitespace and has no `=`.
    Comment,
    /// A single `key = value` assignment. Both parts are trimmed.
    Assignment {
        /// The trimmed text before the `=`
        key: &'a str,
        /// The trimmed text after the `=`
        value: &'a str,
    },
}

/// Splits a document on `\n` and `\r\n`.
///
/// A bare `\r` is not a separator and stays part of its line.
///
/// # Examples
///
/// ```
/// use kvcfg::domain::split_lines;
///
/// let lines: Vec<&str> = split_lines("a=1\r\nb=2\nc=3\r4").collect();
/// assert_eq!(lines, ["a=1", "b=2", "c=3\r4"]);
/// ```
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Classifies one line of a document.
///
/// `index` is the zero-based line number, used only in errors.
pub fn classify_line(index: usize, raw: &str) -> Result<Line<'_>> {
    let line = raw.trim();
    if line.is_empty() {
        return Ok(Line::Blank);
    }

    // The number of `=` decides the case; `#` only marks a comment when there is none.
    let mut parts = line.split('=');
    let key = parts.next().unwrap_or_default();
    match (parts.next(), parts.next()) {
        (None, _) if line.starts_with('#') => Ok(Line::Comment),
        (None, _) => Err(ConfigError::malformed_line(index, line)),
        (Some(value), None) => Ok(Line::Assignment {
            key: key.trim(),
            value: value.trim(),
        }),
        (Some(_), Some(_)) => Err(ConfigError::chained_assignment(index, line)),
    }
}

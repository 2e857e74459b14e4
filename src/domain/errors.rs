// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the error types that can occur while reading, parsing and
//! accessing configuration documents. All errors use `thiserror` for proper error
//! handling and conversion.

use std::fmt;
use thiserror::Error;

/// Detail appended to a parse error for lines with more than one `=`.
pub const CHAINED_ASSIGNMENT_DETAIL: &str = " Cannot parse chained assignments.";

/// The main error type for configuration operations.
///
/// `Parse` and `DuplicateIndex` are raised while processing a document and always
/// abort it. The remaining variants come from the edges of the crate: typed value
/// access and document sources.
///
/// # Examples
///
/// ```
/// use kvcfg::domain::errors::{ConfigError, ErrorKind};
///
/// let error = ConfigError::DuplicateIndex {
///     line: 3,
///     key: "name".to_string(),
/// };
/// assert_eq!(error.kind(), ErrorKind::DuplicateIndex);
/// assert_eq!(
///     error.to_string(),
///     "Could not read configuration file. Duplicate index (name) on line 3."
/// );
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A line is neither blank, a comment, nor a single assignment.
    #[error(
        "Could not read configuration file. Error on line {line} : \"{content}\"{}",
        .detail.as_deref().unwrap_or("")
    )]
    Parse {
        /// Zero-based index of the offending line
        line: usize,
        /// The trimmed text of the offending line
        content: String,
        /// Optional clarifying suffix
        detail: Option<String>,
    },

    /// A key was assigned a second time.
    #[error("Could not read configuration file. Duplicate index ({key}) on line {line}.")]
    DuplicateIndex {
        /// Zero-based index of the line holding the second assignment
        line: usize,
        /// The repeated key
        key: String,
    },

    /// A stored value does not have the type the caller asked for.
    #[error("Configuration value for key '{key}' is a {found}, expected {expected}")]
    TypeConversion {
        /// The key being converted
        key: String,
        /// The requested type name
        expected: &'static str,
        /// The inferred type name of the stored value
        found: &'static str,
    },

    /// A document source failed to provide its text.
    #[error("Configuration source '{source_name}' error: {message}")]
    Source {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading a document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Discriminant of a [`ConfigError`], for matching at reporting boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`ConfigError::Parse`].
    Parse,
    /// See [`ConfigError::DuplicateIndex`].
    DuplicateIndex,
    /// See [`ConfigError::TypeConversion`].
    TypeConversion,
    /// See [`ConfigError::Source`].
    Source,
    /// See [`ConfigError::Io`].
    Io,
}

impl ConfigError {
    /// Creates a parse error for a line that is not a comment and has no `=`.
    pub fn malformed_line(line: usize, content: impl Into<String>) -> Self {
        ConfigError::Parse {
            line,
            content: content.into(),
            detail: None,
        }
    }

    /// Creates a parse error for a line with more than one `=`.
    pub fn chained_assignment(line: usize, content: impl Into<String>) -> Self {
        ConfigError::Parse {
            line,
            content: content.into(),
            detail: Some(CHAINED_ASSIGNMENT_DETAIL.to_string()),
        }
    }

    /// Returns the discriminant of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::Parse { .. } => ErrorKind::Parse,
            ConfigError::DuplicateIndex { .. } => ErrorKind::DuplicateIndex,
            ConfigError::TypeConversion { .. } => ErrorKind::TypeConversion,
            ConfigError::Source { .. } => ErrorKind::Source,
            ConfigError::Io(_) => ErrorKind::Io,
        }
    }

    /// Returns the zero-based line index for errors raised while processing a document.
    pub fn line(&self) -> Option<usize> {
        match self {
            ConfigError::Parse { line, .. } | ConfigError::DuplicateIndex { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Parse => "ParseError",
            ErrorKind::DuplicateIndex => "DuplicateIndex",
            ErrorKind::TypeConversion => "TypeConversion",
            ErrorKind::Source => "SourceError",
            ErrorKind::Io => "IoError",
        };
        f.write_str(name)
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

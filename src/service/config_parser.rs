// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration document parser.
//!
//! This module provides [`ConfigParser`], which turns a `key=value` document into
//! an insertion-ordered [`ConfigStore`] of inferred values, and the underlying
//! [`parse_document`] routine.

use crate::domain::{
    classify_line, infer_value, split_lines, ConfigEntry, ConfigError, ConfigStore, ConfigValue,
    Entries, Line, Result,
};
use crate::ports::DocumentSource;
use std::collections::HashMap;

/// Parses a whole document into a store.
///
/// Lines are processed in order and the first error aborts the parse; no store
/// is returned in that case. A leading byte-order mark is ignored.
///
/// # Examples
///
/// ```
/// use kvcfg::service::parse_document;
/// use kvcfg::domain::ConfigValue;
///
/// let store = parse_document("# config\nname = MyApp\ndebug=on\nretries = 3\n").unwrap();
/// assert_eq!(store.get("name"), Some(&ConfigValue::from("MyApp")));
/// assert_eq!(store.get("debug"), Some(&ConfigValue::Bool(true)));
/// assert_eq!(store.get("retries"), Some(&ConfigValue::from(3)));
/// ```
pub fn parse_document(text: &str) -> Result<ConfigStore> {
    let mut store = ConfigStore::new();
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    for (index, raw) in split_lines(text).enumerate() {
        match classify_line(index, raw)? {
            Line::Blank => {}
            Line::Comment => {
                tracing::trace!(line = index, "skipping comment");
            }
            Line::Assignment { key, value } => {
                // The first assignment of a key wins; the repeat is the error.
                if let Err(rejected) = store.insert(ConfigEntry::new(key, infer_value(value))) {
                    return Err(ConfigError::DuplicateIndex {
                        line: index,
                        key: rejected.key,
                    });
                }
                tracing::trace!(line = index, key, "parsed entry");
            }
        }
    }

    Ok(store)
}

/// A parsed configuration document.
///
/// The document text is supplied once at construction. With auto-processing
/// (the default) the text is parsed immediately and a malformed document makes
/// construction fail. Otherwise [`ConfigParser::process`] must be called before
/// lookups return anything.
///
/// Calling `process` again re-parses the original text from scratch. A failed
/// call leaves the previously committed entries untouched, so a parser never
/// exposes a partially parsed document.
///
/// # Examples
///
/// ```
/// use kvcfg::service::ConfigParser;
/// use kvcfg::domain::ConfigValue;
///
/// # fn main() -> kvcfg::domain::Result<()> {
/// let parser = ConfigParser::new("name = MyApp\ndebug = on\nretries = 3")?;
///
/// assert_eq!(parser.get("name"), Some(&ConfigValue::from("MyApp")));
/// assert_eq!(parser.get("debug").and_then(ConfigValue::as_bool), Some(true));
/// assert_eq!(parser.get("missing"), None);
///
/// let keys: Vec<&str> = parser.entries().map(|(key, _)| key).collect();
/// assert_eq!(keys, ["name", "debug", "retries"]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ConfigParser {
    /// The original document text
    text: String,
    /// Entries committed by the last successful `process`
    store: ConfigStore,
    /// Whether `process` has completed successfully
    processed: bool,
}

impl ConfigParser {
    /// Creates a parser and processes the document immediately.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        Self::with_auto_process(text, true)
    }

    /// Creates a parser, processing the document immediately if `auto_process`
    /// is `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kvcfg::service::ConfigParser;
    ///
    /// let mut parser = ConfigParser::with_auto_process("a = 1", false).unwrap();
    /// assert!(!parser.is_processed());
    /// assert_eq!(parser.get("a"), None);
    ///
    /// parser.process().unwrap();
    /// assert!(parser.get("a").is_some());
    /// ```
    pub fn with_auto_process(text: impl Into<String>, auto_process: bool) -> Result<Self> {
        let mut parser = Self {
            text: text.into(),
            store: ConfigStore::new(),
            processed: false,
        };
        if auto_process {
            parser.process()?;
        }
        Ok(parser)
    }

    /// Reads the document from `source` and creates a parser over it.
    pub fn from_source<S>(source: &S, auto_process: bool) -> Result<Self>
    where
        S: DocumentSource + ?Sized,
    {
        let text = source.read_document()?;
        tracing::debug!(
            "Loaded configuration document from source '{}' ({} bytes)",
            source.name(),
            text.len()
        );
        Self::with_auto_process(text, auto_process)
    }

    /// Parses the document and commits the resulting entries.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::Parse`] - a line is neither blank, a comment nor a single
    ///   assignment
    /// * [`ConfigError::DuplicateIndex`] - a key is assigned more than once
    pub fn process(&mut self) -> Result<()> {
        let store = parse_document(&self.text)?;
        tracing::debug!(entries = store.len(), "processed configuration document");
        self.store = store;
        self.processed = true;
        Ok(())
    }

    /// Returns `true` once `process` has succeeded.
    pub fn is_processed(&self) -> bool {
        self.processed
    }

    /// Returns the original document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the value for `key`, or `None` if it was never set.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.store.get(key)
    }

    /// Returns a lazy iterator over all entries in document order.
    pub fn entries(&self) -> Entries<'_> {
        self.store.iter()
    }

    /// Returns a snapshot of all entries as an owned map.
    pub fn to_object(&self) -> HashMap<String, ConfigValue> {
        self.store.to_map()
    }

    /// Returns a read-only view of the parsed entries.
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }
}

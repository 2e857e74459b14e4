// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory document source adapter.

use crate::domain::Result;
use crate::ports::DocumentSource;

/// Document source over text already held in memory, such as an embedded
/// literal or a string fetched elsewhere.
///
/// # Examples
///
/// ```rust
/// use kvcfg::adapters::TextSource;
/// use kvcfg::ports::DocumentSource;
///
/// let source = TextSource::new("debug = on").with_name("embedded");
/// assert_eq!(source.name(), "embedded");
/// assert_eq!(source.read_document().unwrap(), "debug = on");
/// ```
#[derive(Debug, Clone)]
pub struct TextSource {
    name: String,
    text: String,
}

impl TextSource {
    /// Creates a source named `"text"` over the given document.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            name: "text".to_string(),
            text: text.into(),
        }
    }

    /// Replaces the name reported by this source.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl From<&str> for TextSource {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextSource {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl DocumentSource for TextSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_document(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared test doubles for integration tests.

use kvcfg::domain::{ConfigError, Result};
use kvcfg::ports::DocumentSource;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A document source that serves fixed text or a fixed failure and counts reads.
#[derive(Debug)]
pub struct MockDocumentSource {
    name: String,
    text: Option<String>,
    reads: AtomicUsize,
}

impl MockDocumentSource {
    /// Creates a source that always returns `text`.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
            reads: AtomicUsize::new(0),
        }
    }

    /// Creates a source whose reads always fail.
    pub fn failing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
            reads: AtomicUsize::new(0),
        }
    }

    /// Returns how many times the document was read.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl DocumentSource for MockDocumentSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_document(&self) -> Result<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.text.clone().ok_or_else(|| ConfigError::Source {
            source_name: self.name.clone(),
            message: "Mock read failure".to_string(),
            source: None,
        })
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document source trait definition.
//!
//! This module defines the `DocumentSource` trait, the port through which the
//! raw text of a configuration document is obtained. Parsing never performs I/O
//! itself; anything that can produce a string (a file, an embedded literal, a
//! network fetch) implements this trait.

use crate::domain::Result;

/// A trait for providers of configuration document text.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a source can be shared between
/// threads that each build their own parser.
///
/// # Examples
///
/// ```rust
/// use kvcfg::ports::DocumentSource;
/// use kvcfg::domain::Result;
///
/// struct Fixed;
///
/// impl DocumentSource for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn read_document(&self) -> Result<String> {
///         Ok("retries = 3".to_string())
///     }
/// }
///
/// let source = Fixed;
/// assert_eq!(source.read_document().unwrap(), "retries = 3");
/// ```
pub trait DocumentSource: Send + Sync {
    /// Returns a short identifier for this source, used in logs and errors.
    fn name(&self) -> &str;

    /// Reads the full document text.
    ///
    /// Each call reads the document afresh; sources backed by mutable storage
    /// may return different text on different calls.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The document text
    /// * `Err(ConfigError)` - The source could not provide the text
    fn read_document(&self) -> Result<String>;
}

impl<T: DocumentSource + ?Sized> DocumentSource for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn read_document(&self) -> Result<String> {
        (**self).read_document()
    }
}

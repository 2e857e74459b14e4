// SPDX-License-Identifier: MIT OR Apache-2.0

//! A `key=value` configuration document parser with type inference.
//!
//! This crate parses line-oriented configuration documents into an insertion-ordered
//! store of typed values. Each value is inferred as a boolean, a number or a string,
//! and malformed or duplicate entries are rejected with the offending line index.
//!
//! # Document Format
//!
//! ```text
//! # comments start with '#'
//! name    = MyApp
//! debug   = on
//! retries = 3
//! ```
//!
//! - Lines are separated by `\n` or `\r\n`.
//! - Blank lines are skipped.
//! - A line without `=` must be a comment, starting with `#`.
//! - Any other line must contain exactly one `=`. Keys and values are trimmed.
//! - A key may only be assigned once.
//!
//! # Type Inference
//!
//! Values are resolved in order:
//!
//! 1. `yes`, `on`, `true`, `enabled`, `enable` are `true` and `no`, `off`, `false`,
//!    `disabled`, `disable` are `false`, ignoring case
//! 2. anything that parses as a number other than `NaN` is a number (blank values never are)
//! 3. everything else is kept as the trimmed string
//!
//! # Architecture
//!
//! - **Domain Layer**: Values, the ordered store, errors, line classification and inference
//! - **Ports**: The `DocumentSource` trait for obtaining document text
//! - **Adapters**: In-memory text and files
//! - **Service**: `ConfigParser`, which ties the pieces together
//!
//! # Feature Flags
//!
//! - `file`: Enable the file document source (default)
//!
//! # Quick Start
//!
//! ```rust
//! use kvcfg::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let parser = ConfigParser::new("# config\nname = MyApp\ndebug=on\nretries = 3\n")?;
//!
//! assert_eq!(parser.get("name"), Some(&ConfigValue::from("MyApp")));
//! assert_eq!(parser.get("debug"), Some(&ConfigValue::Bool(true)));
//! assert_eq!(parser.get("retries"), Some(&ConfigValue::from(3)));
//!
//! match ConfigParser::new("x = 1\nx = 2") {
//!     Err(e) => assert_eq!(e.kind(), ErrorKind::DuplicateIndex),
//!     Ok(_) => unreachable!(),
//! }
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{ConfigError, ConfigStore, ConfigValue, ErrorKind, Number, Result};
    pub use crate::ports::DocumentSource;
    pub use crate::service::{parse_document, ConfigParser};

    pub use crate::adapters::TextSource;
    // Re-export adapters based on feature flags
    #[cfg(feature = "file")]
    pub use crate::adapters::FileSource;
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and the parsing building blocks.
//!
//! This module holds the value model, the ordered store, the error taxonomy and
//! the two pure routines the parser is built from: line classification and
//! value type inference. Nothing here performs I/O.

pub mod config_value;
pub mod errors;
pub mod inference;
pub mod line;
pub mod store;

// Re-export commonly used types
pub use config_value::{ConfigValue, Number};
pub use errors::{ConfigError, ErrorKind, Result};
pub use inference::infer_value;
pub use line::{classify_line, split_lines, Line};
pub use store::{ConfigEntry, ConfigStore, Entries};

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration parser.
//!
//! This module contains [`ConfigParser`], the main entry point of the crate, which
//! drives line classification and type inference over a whole document.

pub mod config_parser;

// Re-export commonly used types
pub use config_parser::{parse_document, ConfigParser};

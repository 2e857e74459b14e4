// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) through which the parser
//! talks to the outside world. They are implemented by the adapters layer.

pub mod source;

// Re-export commonly used types
pub use source::DocumentSource;

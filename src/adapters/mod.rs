// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing document source implementations.
//!
//! This module contains concrete implementations of the [`DocumentSource`]
//! port. Each adapter supplies document text from one kind of storage.
//!
//! [`DocumentSource`]: crate::ports::DocumentSource

#[cfg(feature = "file")]
pub mod file;
pub mod text;

// Re-export adapters based on feature flags
#[cfg(feature = "file")]
pub use file::FileSource;
pub use text::TextSource;

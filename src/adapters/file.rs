// SPDX-License-Identifier: MIT OR Apache-2.0

//! File document source adapter.
//!
//! This module provides an adapter that reads configuration documents from files,
//! either at an explicit path or in the OS-appropriate configuration directory.

use crate::domain::{ConfigError, Result};
use crate::ports::DocumentSource;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed size for configuration documents (10MB)
const MAX_DOCUMENT_SIZE: u64 = 10 * 1024 * 1024;

/// File name looked up in the default configuration directory.
pub const DEFAULT_FILE_NAME: &str = "config.conf";

const SOURCE_NAME: &str = "file";

/// Document source backed by a file on disk.
///
/// The path is canonicalized when the source is created, so a missing file is
/// reported immediately. The file itself is read on every call to
/// [`DocumentSource::read_document`].
///
/// # Examples
///
/// ```rust,no_run
/// use kvcfg::adapters::FileSource;
/// use kvcfg::service::ConfigParser;
///
/// let source = FileSource::from_file("/etc/myapp/app.conf").unwrap();
/// let parser = ConfigParser::from_source(&source, true).unwrap();
///
/// // Or from the default OS location
/// let source = FileSource::from_default_location("myapp", "com.example").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileSource {
    /// Canonical path to the document
    file_path: PathBuf,
}

impl FileSource {
    /// Creates a source for a specific file path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref();
        let canonical_path = file_path
            .canonicalize()
            .map_err(|e| source_error(file_path, "Invalid or inaccessible path", e))?;

        Ok(Self {
            file_path: canonical_path,
        })
    }

    /// Creates a source for [`DEFAULT_FILE_NAME`] in the default configuration
    /// directory of `app_name`.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, DEFAULT_FILE_NAME)
    }

    /// Creates a source for a custom file name in the default configuration
    /// directory of `app_name`.
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::Source {
                source_name: SOURCE_NAME.to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Self::from_file(proj_dirs.config_dir().join(filename))
    }

    /// Returns the canonical path of the document.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl DocumentSource for FileSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn read_document(&self) -> Result<String> {
        let metadata = fs::metadata(&self.file_path)
            .map_err(|e| source_error(&self.file_path, "Failed to read file metadata", e))?;

        if metadata.len() > MAX_DOCUMENT_SIZE {
            return Err(ConfigError::Source {
                source_name: SOURCE_NAME.to_string(),
                message: format!(
                    "Configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_DOCUMENT_SIZE
                ),
                source: None,
            });
        }

        let text = fs::read_to_string(&self.file_path)
            .map_err(|e| source_error(&self.file_path, "Failed to read configuration file", e))?;

        tracing::debug!(
            "Read {} bytes from configuration file '{}'",
            text.len(),
            self.file_path.display()
        );
        Ok(text)
    }
}

/// Builds a source error that names only the file, not the full path.
fn source_error(path: &Path, what: &str, err: std::io::Error) -> ConfigError {
    ConfigError::Source {
        source_name: SOURCE_NAME.to_string(),
        message: format!(
            "{}: {}",
            what,
            path.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("<unknown>")
        ),
        source: Some(Box::new(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_file_source_reads_document() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "name = MyApp\nretries = 3\n").unwrap();

        let source = FileSource::from_file(temp_file.path()).unwrap();
        assert_eq!(source.name(), "file");
        assert_eq!(
            source.read_document().unwrap(),
            "name = MyApp\nretries = 3\n"
        );
    }

    #[test]
    fn test_file_source_rereads_on_each_call() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_path_buf();
        fs::write(&path, "key = initial\n").unwrap();

        let source = FileSource::from_file(&path).unwrap();
        assert_eq!(source.read_document().unwrap(), "key = initial\n");

        fs::write(&path, "key = updated\n").unwrap();
        assert_eq!(source.read_document().unwrap(), "key = updated\n");
    }

    #[test]
    fn test_file_source_path_is_canonical() {
        let temp_file = NamedTempFile::new().unwrap();
        let source = FileSource::from_file(temp_file.path()).unwrap();
        let expected = temp_file.path().canonicalize().unwrap();
        assert_eq!(source.file_path(), expected.as_path());
    }

    #[test]
    fn test_file_source_nonexistent_file() {
        let err = FileSource::from_file("/nonexistent/path/to/app.conf").unwrap_err();
        match err {
            ConfigError::Source {
                source_name,
                message,
                source,
            } => {
                assert_eq!(source_name, "file");
                assert_eq!(message, "Invalid or inaccessible path: app.conf");
                assert!(source.is_some());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_file_source_removed_after_creation() {
        let temp_file = NamedTempFile::new().unwrap();
        let source = FileSource::from_file(temp_file.path()).unwrap();
        drop(temp_file);

        assert!(source.read_document().is_err());
    }
}

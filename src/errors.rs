//! Defines application-specific error types.
//!
//! Fatal conditions (a missing repository root, an output file that already
//! exists, an unreadable pattern file) are represented here and abort the run.
//! Per-file read failures are *not* errors: the walker records them as skipped
//! entries in the [`RepoDocument`](crate::core_types::RepoDocument).

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while validating a [`Config`](crate::config::Config).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An option was given a value it cannot accept.
    #[error("Invalid value for {option}: {reason}")]
    InvalidValue {
        /// The offending option, e.g. `REPO_PATH`.
        option: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Errors that abort a `git2gpt` run.
#[derive(Error, Debug)]
pub enum Error {
    /// The repository root does not exist.
    #[error("Repository path not found: '{}'", .0.display())]
    RepoNotFound(PathBuf),

    /// The repository root exists but is not a directory.
    #[error("Repository path is not a directory: '{}'", .0.display())]
    NotADirectory(PathBuf),

    /// The requested output file is already present; it is never overwritten.
    #[error("output file {} already exists", .0.display())]
    OutputExists(PathBuf),

    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Error writing the rendered document.
    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),

    /// Error serializing the JSON document.
    #[error("Failed to serialize JSON document: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error.
///
/// # Returns
/// An `Error::Io` variant containing the path string and the source error.
pub fn io_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_with_path_helper() {
        let path = PathBuf::from("some/test/path.txt");
        let source_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = io_error_with_path(source_error, &path);

        match error {
            Error::Io {
                path: error_path,
                source,
            } => {
                assert!(error_path.contains("some/test/path.txt"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
                assert!(source.to_string().contains("File not found"));
            }
            _ => panic!("Expected Error::Io"),
        }

        let source_error_perm = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let error_perm = io_error_with_path(source_error_perm, "another/path");
        assert!(error_perm.to_string().contains("another/path"));
        assert!(error_perm.to_string().contains("Access denied"));
    }

    #[test]
    fn test_output_exists_message() {
        let err = Error::OutputExists(PathBuf::from("out.txt"));
        assert_eq!(err.to_string(), "output file out.txt already exists");
    }

    #[test]
    fn test_config_error_wraps() {
        let err: Error = ConfigError::InvalidValue {
            option: "REPO_PATH".to_string(),
            reason: "repository path cannot be empty".to_string(),
        }
        .into();
        assert!(err
            .to_string()
            .contains("Invalid value for REPO_PATH: repository path cannot be empty"));
    }
}

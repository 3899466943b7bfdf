//! Defines core data structures used throughout the application pipeline.
//!
//! The walker produces one [`FileRecord`] per included file and collects them
//! into a [`RepoDocument`], which is the only thing handed to the renderers.

use std::path::PathBuf;

/// What the walker learned about a file's content.
///
/// # Examples
///
/// ```
/// use git2gpt::core_types::FileContent;
///
/// let text = FileContent::Text("fn main() {}".to_string());
/// assert_eq!(text.as_text(), Some("fn main() {}"));
/// assert_eq!(FileContent::Binary.as_text(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// Decoded UTF-8 content.
    Text(String),
    /// Detected as binary; only metadata is kept.
    Binary,
    /// The file could not be read; the reason is shown in place of the content.
    Skipped {
        /// Human-readable failure reason.
        reason: String,
    },
}

impl FileContent {
    /// Returns the text if this is a text file.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FileContent::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// One included file in the assembled document.
///
/// # Examples
///
/// ```
/// use git2gpt::core_types::{FileContent, FileRecord};
///
/// let record = FileRecord {
///     path: "src/main.rs".to_string(),
///     size: 12,
///     content: FileContent::Text("fn main() {}".to_string()),
/// };
///
/// assert_eq!(record.extension(), "rs");
/// assert!(!record.is_binary());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path relative to the repository root, always `/`-separated.
    pub path: String,
    /// Size in bytes as reported by the filesystem (0 if unknown).
    pub size: u64,
    /// The file's content, or why it is absent.
    pub content: FileContent,
}

impl FileRecord {
    /// Whether the record was classified as binary.
    pub fn is_binary(&self) -> bool {
        matches!(self.content, FileContent::Binary)
    }

    /// The reason the file was skipped, if it was.
    pub fn skip_reason(&self) -> Option<&str> {
        match &self.content {
            FileContent::Skipped { reason } => Some(reason),
            _ => None,
        }
    }

    /// Extension of the file name (without the dot), or `""`.
    pub fn extension(&self) -> &str {
        let file_name = self.path.rsplit('/').next().unwrap_or(&self.path);
        match file_name.rfind('.') {
            Some(0) | None => "",
            Some(idx) => &file_name[idx + 1..],
        }
    }
}

/// The complete ordered set of included files for one repository.
///
/// Records appear in walker order (lexical, depth-first) and each relative
/// path appears at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoDocument {
    /// The repository root as it was given to the walker.
    pub root: PathBuf,
    /// Display name of the repository (the root directory's name).
    pub name: String,
    /// Included files in traversal order.
    pub files: Vec<FileRecord>,
}

impl RepoDocument {
    /// Relative paths of all records, in order.
    pub fn paths(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.path.as_str()).collect()
    }
}

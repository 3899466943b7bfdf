// src/output/json.rs

//! The structured (JSON) document.

use super::record_text;
use crate::core_types::RepoDocument;
use crate::errors::Result;
use serde::{Deserialize, Serialize};

/// Serializable form of a repository document.
///
/// The field names are part of the output format and stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonDocument {
    /// Repository name (the root directory's name).
    pub name: String,
    /// Repository root as given on the command line, `/`-separated.
    pub path: String,
    /// Number of entries in `files`.
    pub file_count: usize,
    /// Included files in walk order.
    pub files: Vec<JsonFile>,
}

/// One file entry of a [`JsonDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonFile {
    /// Path relative to the repository root.
    pub path: String,
    /// Text content; `null` for binary and skipped files.
    pub content: Option<String>,
    /// Whether the file was detected as binary.
    pub binary: bool,
    /// Size in bytes.
    pub size: u64,
    /// Why the file could not be read, if it could not.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_reason: Option<String>,
}

/// Builds the structured form of a [`RepoDocument`].
///
/// # Examples
///
/// ```
/// use git2gpt::core_types::{FileContent, FileRecord, RepoDocument};
/// use git2gpt::output::render_json;
/// use std::path::PathBuf;
///
/// let doc = RepoDocument {
///     root: PathBuf::from("demo"),
///     name: "demo".to_string(),
///     files: vec![FileRecord {
///         path: "logo.png".to_string(),
///         size: 512,
///         content: FileContent::Binary,
///     }],
/// };
///
/// let json = render_json(&doc, false);
/// assert_eq!(json.file_count, 1);
/// assert!(json.files[0].binary);
/// assert_eq!(json.files[0].content, None);
/// ```
pub fn render_json(document: &RepoDocument, scrub: bool) -> JsonDocument {
    let files: Vec<JsonFile> = document
        .files
        .iter()
        .map(|record| JsonFile {
            path: record.path.clone(),
            content: record_text(record, scrub).map(|text| text.into_owned()),
            binary: record.is_binary(),
            size: record.size,
            skip_reason: record.skip_reason().map(str::to_string),
        })
        .collect();

    JsonDocument {
        name: document.name.clone(),
        path: document.root.to_string_lossy().replace('\\', "/"),
        file_count: files.len(),
        files,
    }
}

/// Serializes a [`JsonDocument`] as pretty-printed JSON.
pub fn to_json_string(document: &JsonDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

// src/output/text.rs

//! The linear text document.
//!
//! Layout: an optional preamble line, then one section per file consisting of
//! a `----` separator line, the relative path on its own line and the content,
//! and finally the `--END--` marker.

use super::record_text;
use crate::constants::{DEFAULT_PREAMBLE, END_MARKER, SECTION_SEPARATOR};
use crate::core_types::{FileContent, RepoDocument};
use crate::errors::{io_error_with_path, Result};
use log::{debug, warn};
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

/// Renders a [`RepoDocument`] as a text document.
///
/// The output only depends on the arguments, so identical inputs give
/// byte-identical documents. Binary and skipped records are rendered as a
/// one-line placeholder instead of their content.
///
/// # Examples
///
/// ```
/// use git2gpt::core_types::{FileContent, FileRecord, RepoDocument};
/// use git2gpt::output::render_text;
/// use std::path::PathBuf;
///
/// let doc = RepoDocument {
///     root: PathBuf::from("demo"),
///     name: "demo".to_string(),
///     files: vec![FileRecord {
///         path: "main.go".to_string(),
///         size: 13,
///         content: FileContent::Text("package main\n".to_string()),
///     }],
/// };
///
/// let text = render_text(&doc, Some("Context:"), false);
/// assert_eq!(text, "Context:\n----\nmain.go\npackage main\n\n--END--");
/// ```
pub fn render_text(document: &RepoDocument, preamble: Option<&str>, scrub: bool) -> String {
    let mut out = String::new();

    if let Some(preamble) = preamble.filter(|p| !p.is_empty()) {
        out.push_str(preamble.trim_end_matches(['\r', '\n']));
        out.push('\n');
    }

    for record in &document.files {
        out.push_str(SECTION_SEPARATOR);
        out.push('\n');
        out.push_str(&record.path);
        out.push('\n');
        match &record.content {
            FileContent::Text(_) => {
                if let Some(text) = record_text(record, scrub) {
                    out.push_str(&text);
                }
            }
            FileContent::Binary => {
                // Writing to a String cannot fail.
                let _ = write!(out, "[binary file omitted: {} bytes]", record.size);
            }
            FileContent::Skipped { reason } => {
                let _ = write!(out, "[file omitted: {}]", reason);
            }
        }
        out.push('\n');
    }

    out.push_str(END_MARKER);
    debug!(
        "Rendered text document: {} files, {} bytes",
        document.files.len(),
        out.len()
    );
    out
}

/// Recovers the file paths from a rendered text document, in order.
///
/// Every line following a `----` separator is taken as a path. This cannot
/// tell a separator apart from a file whose content contains a bare `----`
/// line.
///
/// # Examples
///
/// ```
/// use git2gpt::output::parse_rendered_paths;
///
/// let text = "preamble\n----\na.go\nx\n----\nsrc/b.go\ny\n--END--";
/// assert_eq!(parse_rendered_paths(text), vec!["a.go", "src/b.go"]);
/// ```
pub fn parse_rendered_paths(text: &str) -> Vec<String> {
    let mut paths = Vec::new();
    let mut lines = text.lines();
    while let Some(line) = lines.next() {
        if line == SECTION_SEPARATOR {
            if let Some(path) = lines.next() {
                paths.push(path.to_string());
            }
        }
    }
    paths
}

/// Loads the preamble for text output.
///
/// Without a preamble file the built-in [`DEFAULT_PREAMBLE`] is used. A preamble
/// file that does not exist yields no preamble at all.
///
/// # Errors
/// Returns [`Error::Io`](crate::errors::Error::Io) if the file exists but cannot
/// be read.
pub fn load_preamble(preamble_file: Option<&Path>) -> Result<Option<String>> {
    let Some(path) = preamble_file else {
        return Ok(Some(DEFAULT_PREAMBLE.to_string()));
    };
    match fs::read_to_string(path) {
        Ok(text) => {
            debug!("Loaded preamble from {}", path.display());
            Ok(Some(text))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(
                "Preamble file '{}' not found, writing no preamble",
                path.display()
            );
            Ok(None)
        }
        Err(e) => Err(io_error_with_path(e, path)),
    }
}

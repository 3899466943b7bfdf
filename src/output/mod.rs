// src/output/mod.rs

//! Renders a [`RepoDocument`] and writes it out.

use crate::config::{OutputConfig, OutputFormat};
use crate::core_types::{FileRecord, RepoDocument};
use crate::errors::Result;
use crate::processing::scrub;
use log::debug;
use std::borrow::Cow;

pub mod json;
pub mod text;
pub mod writer;

pub use json::{render_json, to_json_string, JsonDocument, JsonFile};
pub use text::{load_preamble, parse_rendered_paths, render_text};

/// Renders the document in the configured format.
///
/// `preamble` is only used for text output.
pub fn render_document(
    document: &RepoDocument,
    config: &OutputConfig,
    preamble: Option<&str>,
) -> Result<String> {
    debug!(
        "Rendering {} files as {:?} (scrub comments: {})",
        document.files.len(),
        config.format,
        config.scrub_comments
    );
    match config.format {
        OutputFormat::Text => Ok(render_text(document, preamble, config.scrub_comments)),
        OutputFormat::Json => to_json_string(&render_json(document, config.scrub_comments)),
    }
}

/// The text of a record as it should be rendered, scrubbed if requested.
///
/// Returns `None` for binary and skipped records.
pub(crate) fn record_text(record: &FileRecord, scrub_comments: bool) -> Option<Cow<'_, str>> {
    let text = record.content.as_text()?;
    if scrub_comments {
        Some(Cow::Owned(scrub(text, record.extension())))
    } else {
        Some(Cow::Borrowed(text))
    }
}

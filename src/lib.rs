//! `git2gpt` is a library and command-line tool that flattens a Git repository
//! into a single document for use in a large-language-model prompt.
//!
//! As a library, it provides a small pipeline whose stages can also be used on
//! their own:
//! 1.  **Filter**: Build the Ignore Set and Select Set from `.gitignore`,
//!     `.gptignore`/`.gptselect` or explicit pattern files ([`build_filters`]).
//! 2.  **Walk**: Traverse the repository in deterministic order and read every
//!     included file, classifying it as text or binary ([`walk`]).
//! 3.  **Render**: Produce the text or JSON document, optionally with comments
//!     scrubbed ([`render`]), and estimate its token count.
//!
//! # Example: Library Usage
//!
//! ```
//! use git2gpt::{execute, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // 1. Set up a small repository.
//! let temp_dir = tempdir()?;
//! fs::write(temp_dir.path().join(".gitignore"), "b.go\n")?;
//! fs::write(temp_dir.path().join("a.go"), "package main // entry\n")?;
//! fs::write(temp_dir.path().join("b.go"), "package main\n")?;
//!
//! // 2. Describe the run.
//! let config = ConfigBuilder::new()
//!     .repo_path(temp_dir.path().to_string_lossy())
//!     .scrub_comments(true)
//!     .estimate_tokens(true)
//!     .build()?;
//!
//! // 3. Execute the pipeline without writing anything.
//! let result = execute(&config)?;
//!
//! assert_eq!(result.document.paths(), vec!["a.go"]);
//! assert!(result.rendered.contains("----\na.go\npackage main\n"));
//! assert!(result.rendered.ends_with("--END--"));
//! assert!(result.token_estimate.is_some());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod output;
pub mod prelude;
pub mod processing;

// Re-export key public types for easier use as a library
pub use config::{Config, ConfigBuilder, OutputDestination};
pub use core_types::{FileContent, FileRecord, RepoDocument};

use crate::config::OutputFormat;
use crate::errors::Result;
use crate::filtering::{build_ignore_set, build_select_set, Filters};
use crate::output::writer::{check_output_available, open_output, write_output};
use crate::output::{load_preamble, render_document};
use crate::processing::estimate_tokens;
use log::{debug, info};

/// The result of running the pipeline without writing output.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// The walked repository.
    pub document: RepoDocument,
    /// The rendered text or JSON document.
    pub rendered: String,
    /// Estimated token count of `rendered`, if requested.
    pub token_estimate: Option<usize>,
}

/// Builds the Ignore Set and Select Set described by `config`.
///
/// # Errors
/// Returns an error if a pattern file exists but cannot be read.
pub fn build_filters(config: &Config) -> Result<Filters> {
    let root = &config.repo_path;
    let ignore = build_ignore_set(
        root,
        config.filters.ignore_file.as_deref(),
        config.filters.use_gitignore,
    )?;
    let select = build_select_set(root, config.filters.select_file.as_deref())?;
    Ok(Filters { ignore, select })
}

/// Walks the configured repository using prepared filters.
///
/// # Errors
/// Returns an error if the repository root is missing, not a directory, or
/// cannot be enumerated.
pub fn walk(config: &Config, filters: &Filters) -> Result<RepoDocument> {
    discovery::walk_repository(&config.repo_path, filters)
}

/// Renders a walked repository according to `config`.
///
/// For text output the preamble is loaded here: the configured preamble file,
/// or the built-in preamble when none is configured.
pub fn render(document: &RepoDocument, config: &Config) -> Result<String> {
    let preamble = match config.output.format {
        OutputFormat::Text => load_preamble(config.output.preamble_file.as_deref())?,
        OutputFormat::Json => None,
    };
    render_document(document, &config.output, preamble.as_deref())
}

/// Executes the filter, walk and render stages without writing output.
///
/// # Errors
/// Returns the first fatal error from any stage. Unreadable individual files
/// are not errors; they show up as skipped records in the document.
pub fn execute(config: &Config) -> Result<RunOutput> {
    // The repository root is validated by the walk; pattern files under a
    // missing root are simply absent.
    let filters = build_filters(config)?;
    debug!(
        "Filters ready: {} ignore rules, {} select rules",
        filters.ignore.len(),
        filters.select.len()
    );

    let document = walk(config, &filters)?;
    info!(
        "Collected {} files from {}",
        document.files.len(),
        config.repo_path.display()
    );

    let rendered = render(&document, config)?;
    let token_estimate = config.estimate_tokens.then(|| estimate_tokens(&rendered));

    Ok(RunOutput {
        document,
        rendered,
        token_estimate,
    })
}

/// Runs the whole pipeline and writes the document to its destination.
///
/// An existing output file is rejected before the repository is walked.
/// Returns the token estimate if one was requested.
///
/// # Errors
/// Returns [`Error::OutputExists`](crate::errors::Error::OutputExists) if the
/// output file already exists, or any error from [`execute`].
pub fn run(config: &Config) -> Result<Option<usize>> {
    check_output_available(&config.output_destination)?;
    let result = execute(config)?;
    let writer = open_output(&config.output_destination)?;
    write_output(writer, &result.rendered)?;
    Ok(result.token_estimate)
}

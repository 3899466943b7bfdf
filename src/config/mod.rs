//! Defines the core `Config` struct and related types for application configuration.
//!
//! A `Config` is built once per run, either from the command line via
//! [`ConfigBuilder::from_cli`] or programmatically, and is read-only after that.
//! Nothing in the pipeline keeps process-wide state.

use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;

/// Where ignore and select patterns come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Explicit ignore file. When `None`, `<repo>/.gptignore` is used if present.
    pub ignore_file: Option<PathBuf>,
    /// Explicit select file. When `None`, `<repo>/.gptselect` is used if present.
    pub select_file: Option<PathBuf>,
    /// Whether the repository's root `.gitignore` contributes rules.
    pub use_gitignore: bool,
}

/// Shape of the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Preamble, `----` separated file sections and an `--END--` marker.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Configuration options related to rendering the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Text or JSON.
    pub format: OutputFormat,
    /// Strip comments from recognized languages before rendering.
    pub scrub_comments: bool,
    /// File whose content replaces the default preamble (text output only).
    pub preamble_file: Option<PathBuf>,
}

/// Represents the destination for the generated output.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum OutputDestination {
    /// Write to standard output.
    Stdout,
    /// Write to a file that must not exist yet.
    File(PathBuf),
    /// Render but do not write anywhere (debug mode).
    Discard,
}

/// Immutable settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root directory of the repository to convert.
    pub repo_path: PathBuf,
    /// Configuration for building the filter sets.
    pub filters: FilterConfig,
    /// Configuration for rendering.
    pub output: OutputConfig,
    /// Specifies where the final output should be written.
    pub output_destination: OutputDestination,
    /// Whether to estimate the token count of the rendered document.
    pub estimate_tokens: bool,
}

impl Config {
    /// Creates a default `Config` for testing purposes.
    ///
    /// This function is hidden from public documentation and is intended for
    /// use in tests and doc tests only.
    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self {
            repo_path: PathBuf::from("."),
            filters: FilterConfig {
                ignore_file: None,
                select_file: None,
                use_gitignore: true,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                scrub_comments: false,
                preamble_file: None,
            },
            output_destination: OutputDestination::Stdout,
            estimate_tokens: false,
        }
    }
}

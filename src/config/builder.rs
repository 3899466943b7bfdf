// src/config/builder.rs

use super::{Config, FilterConfig, OutputConfig, OutputDestination, OutputFormat};
use crate::cli::Cli;
use crate::errors::{ConfigError, Error, Result};
use log::{debug, warn};
use std::path::PathBuf;

/// A builder for creating a `Config` instance programmatically.
///
/// # Examples
///
/// ```
/// use git2gpt::config::{ConfigBuilder, OutputDestination, OutputFormat};
///
/// # fn main() -> git2gpt::errors::Result<()> {
/// let config = ConfigBuilder::new()
///     .repo_path("path/to/repo")
///     .json(true)
///     .scrub_comments(true)
///     .output_file("repo.json")
///     .build()?;
///
/// assert_eq!(config.output.format, OutputFormat::Json);
/// assert!(matches!(config.output_destination, OutputDestination::File(_)));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    repo_path: Option<String>,
    ignore_file: Option<String>,
    select_file: Option<String>,
    ignore_gitignore: Option<bool>,
    json: Option<bool>,
    scrub_comments: Option<bool>,
    preamble_file: Option<String>,
    output_file: Option<String>,
    discard_output: Option<bool>,
    estimate_tokens: Option<bool>,
}

impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-filled from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            repo_path: Some(cli.repo_path),
            ignore_file: cli.ignore,
            select_file: cli.select,
            ignore_gitignore: Some(cli.ignore_gitignore),
            json: Some(cli.json),
            scrub_comments: Some(cli.scrub_comments),
            preamble_file: cli.preamble,
            output_file: cli.output,
            discard_output: Some(cli.debug),
            estimate_tokens: Some(cli.estimate),
        }
    }

    /// Sets the repository root directory.
    pub fn repo_path(mut self, path: impl Into<String>) -> Self {
        self.repo_path = Some(path.into());
        self
    }

    /// Uses this file instead of `<repo>/.gptignore`.
    pub fn ignore_file(mut self, path: impl Into<String>) -> Self {
        self.ignore_file = Some(path.into());
        self
    }

    /// Uses this file instead of `<repo>/.gptselect`.
    pub fn select_file(mut self, path: impl Into<String>) -> Self {
        self.select_file = Some(path.into());
        self
    }

    /// Skips the repository's `.gitignore` when set.
    pub fn ignore_gitignore(mut self, ignore: bool) -> Self {
        self.ignore_gitignore = Some(ignore);
        self
    }

    /// Renders JSON instead of text.
    pub fn json(mut self, json: bool) -> Self {
        self.json = Some(json);
        self
    }

    /// Strips comments from recognized languages.
    pub fn scrub_comments(mut self, scrub: bool) -> Self {
        self.scrub_comments = Some(scrub);
        self
    }

    /// Replaces the default preamble with the content of this file.
    pub fn preamble_file(mut self, path: impl Into<String>) -> Self {
        self.preamble_file = Some(path.into());
        self
    }

    /// Writes the document to this file, which must not exist yet.
    pub fn output_file(mut self, path: impl Into<String>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Renders the document without printing it to stdout. An
    /// [`output_file`](Self::output_file) is still written.
    pub fn discard_output(mut self, discard: bool) -> Self {
        self.discard_output = Some(discard);
        self
    }

    /// Estimates the token count of the rendered document.
    pub fn estimate_tokens(mut self, estimate: bool) -> Self {
        self.estimate_tokens = Some(estimate);
        self
    }

    /// Validates the options and builds the `Config`.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the repository path is empty or if any given
    /// file path is empty. A preamble file combined with JSON output is
    /// accepted and has no effect.
    pub fn build(self) -> Result<Config> {
        let repo_path = self.repo_path.unwrap_or_else(|| ".".to_string());
        if repo_path.trim().is_empty() {
            return Err(invalid("REPO_PATH", "repository path cannot be empty"));
        }

        let json = self.json.unwrap_or(false);
        if json && self.preamble_file.is_some() {
            warn!("--preamble only applies to text output and is ignored with --json");
        }

        let ignore_file = optional_path(self.ignore_file, "--ignore")?;
        let select_file = optional_path(self.select_file, "--select")?;
        let preamble_file = optional_path(self.preamble_file, "--preamble")?;
        let output_file = optional_path(self.output_file, "--output")?;

        let output_destination = match output_file {
            Some(path) => OutputDestination::File(path),
            None if self.discard_output.unwrap_or(false) => OutputDestination::Discard,
            None => OutputDestination::Stdout,
        };

        let config = Config {
            repo_path: PathBuf::from(repo_path),
            filters: FilterConfig {
                ignore_file,
                select_file,
                use_gitignore: !self.ignore_gitignore.unwrap_or(false),
            },
            output: OutputConfig {
                format: if json {
                    OutputFormat::Json
                } else {
                    OutputFormat::Text
                },
                scrub_comments: self.scrub_comments.unwrap_or(false),
                preamble_file,
            },
            output_destination,
            estimate_tokens: self.estimate_tokens.unwrap_or(false),
        };
        debug!("Built config: {:?}", config);
        Ok(config)
    }
}

fn optional_path(value: Option<String>, option: &str) -> Result<Option<PathBuf>> {
    match value {
        Some(path) if path.trim().is_empty() => Err(invalid(option, "path cannot be empty")),
        Some(path) => Ok(Some(PathBuf::from(path))),
        None => Ok(None),
    }
}

fn invalid(option: &str, reason: &str) -> Error {
    ConfigError::InvalidValue {
        option: option.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

//! The `git2gpt` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types and functions from the
//! `git2gpt` library.
//!
//! # Example
//!
//! ```
//! use git2gpt::prelude::*;
//! # fn main() -> Result<()> {
//! let config = ConfigBuilder::new().repo_path(".").build()?;
//! let filters = build_filters(&config)?;
//! assert!(!filters.includes_file(".git/config"));
//!
//! let text = scrub("let x = 1; // one\n", "rs");
//! assert_eq!(text, "let x = 1;");
//! # Ok(())
//! # }
//! ```

pub use crate::config::{Config, ConfigBuilder, OutputDestination, OutputFormat};
pub use crate::core_types::{FileContent, FileRecord, RepoDocument};
pub use crate::errors::{Error, Result};
pub use crate::filtering::{
    build_ignore_set, build_select_set, decode_text, is_likely_binary, FilterSet, Filters, Pattern,
};
pub use crate::output::{parse_rendered_paths, render_document, render_json, render_text};
pub use crate::processing::{estimate_tokens, scrub};
pub use crate::{build_filters, execute, render, run, walk, RunOutput};

//! Walks a repository and assembles its [`RepoDocument`].
use crate::core_types::RepoDocument;
use crate::errors::{io_error_with_path, Error, Result};
use crate::filtering::Filters;
use log::debug;
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

mod content_reader;
mod entry_processor;
mod walker;

use content_reader::read_candidate;
use entry_processor::process_direntry;
use walker::build_walker;

/// Walks `root` and returns every included file in deterministic order.
///
/// The traversal is sequential and sorted by file name (lexical, depth-first).
/// Directories excluded by the Ignore Set are pruned without being entered,
/// unless a Select Set is active, in which case only selected files are kept.
/// File contents are then read in parallel; the results keep walk order.
///
/// Per-file read failures do not abort the walk: they appear in the document
/// as skipped records.
///
/// # Errors
/// Returns [`Error::RepoNotFound`] or [`Error::NotADirectory`] for an invalid
/// root, and [`Error::Io`] if the root cannot be enumerated.
///
/// # Examples
///
/// ```
/// use git2gpt::discovery::walk_repository;
/// use git2gpt::filtering::{FilterSet, Filters};
/// # use std::fs;
/// # use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempdir()?;
/// fs::write(temp.path().join("a.go"), "package main\n")?;
/// fs::write(temp.path().join("b.go"), "package main\n")?;
///
/// let filters = Filters {
///     ignore: FilterSet::from_lines(["b.go"]),
///     select: FilterSet::new(),
/// };
/// let doc = walk_repository(temp.path(), &filters)?;
/// assert_eq!(doc.paths(), vec!["a.go"]);
/// # Ok(())
/// # }
/// ```
pub fn walk_repository(root: &Path, filters: &Filters) -> Result<RepoDocument> {
    check_root(root)?;
    let canonical_root = root
        .canonicalize()
        .map_err(|e| io_error_with_path(e, root))?;

    let walker = build_walker(root, Arc::new(filters.clone()));
    let candidates: Vec<_> = walker
        .filter_map(|entry| process_direntry(entry, root, filters))
        .collect();
    debug!("Walk found {} candidate files", candidates.len());

    let files: Vec<_> = candidates
        .par_iter()
        .filter_map(|candidate| read_candidate(candidate, &canonical_root, filters))
        .collect();
    debug!("Read {} files", files.len());

    Ok(RepoDocument {
        name: repo_name(&canonical_root),
        root: root.to_path_buf(),
        files,
    })
}

fn check_root(root: &Path) -> Result<()> {
    let metadata = match fs::metadata(root) {
        Ok(md) => md,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::RepoNotFound(root.to_path_buf()))
        }
        Err(e) => return Err(io_error_with_path(e, root)),
    };
    if !metadata.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }
    fs::read_dir(root).map_err(|e| io_error_with_path(e, root))?;
    Ok(())
}

fn repo_name(canonical_root: &Path) -> String {
    canonical_root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| canonical_root.display().to_string())
}

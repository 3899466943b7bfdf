// src/discovery/entry_processor.rs

use crate::filtering::Filters;
use ignore::DirEntry;
use log::{debug, trace, warn};
use std::path::{Path, PathBuf};
use tracing::instrument;

/// How a walked file should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryKind {
    /// A regular file.
    File,
    /// A symbolic link; its target is checked before reading.
    Symlink,
}

/// A file that passed the filters and still has to be read.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub absolute_path: PathBuf,
    pub relative_path: String,
    pub kind: EntryKind,
}

/// Processes a single directory entry from the walk.
///
/// Returns `Some(Candidate)` if the entry is a file (or a link) that the
/// filters include. Directories, the root itself and filtered-out files yield
/// `None`. Walker errors are logged and skipped so one bad entry never stops
/// the traversal.
#[instrument(level = "trace", skip_all)]
pub(crate) fn process_direntry(
    entry_result: Result<DirEntry, ignore::Error>,
    root: &Path,
    filters: &Filters,
) -> Option<Candidate> {
    let entry = match entry_result {
        Ok(entry) => entry,
        Err(ignore_error) => {
            warn!("Walker error: {}", ignore_error);
            return None;
        }
    };

    if entry.depth() == 0 {
        return None;
    }

    let file_type = match entry.file_type() {
        Some(ft) => ft,
        None => {
            trace!("Skipping entry without file type: {}", entry.path().display());
            return None;
        }
    };

    let kind = if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        // Directories, sockets, fifos and devices never become records.
        return None;
    };

    let Some(relative_path) = relative_path_string(root, entry.path()) else {
        warn!(
            "Skipping '{}': path is not valid UTF-8",
            entry.path().display()
        );
        return None;
    };
    if !filters.includes_file(&relative_path) {
        debug!("Excluded by filters: {}", relative_path);
        return None;
    }

    trace!("Entry included: {}", relative_path);
    Some(Candidate {
        absolute_path: entry.path().to_path_buf(),
        relative_path,
        kind,
    })
}

/// Computes the `/`-separated path of `path` relative to `root`.
///
/// Returns `None` when the relative path is not valid UTF-8. A lossy
/// conversion could give two distinct files the same header, so such entries
/// are left out of the document instead. Falls back to the full path (with
/// normalized separators) if `path` is not below `root`.
pub(crate) fn relative_path_string(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).unwrap_or_else(|err| {
        warn!(
            "Failed to strip prefix '{}' from '{}': {}. Using full path.",
            root.display(),
            path.display(),
            err
        );
        path
    });
    relative.to_str().map(|s| s.replace('\\', "/"))
}

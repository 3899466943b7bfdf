// src/discovery/walker.rs

use super::entry_processor::relative_path_string;
use crate::filtering::Filters;
use ignore::WalkBuilder;
use log::{debug, trace, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Configures the `ignore::WalkBuilder` for a repository walk.
///
/// All of the crate's standard filters (hidden files, `.gitignore`, global
/// excludes) are disabled: inclusion is decided solely by `filters`. Entries
/// are sorted by file name so the walk is deterministic and depth-first, and
/// symbolic links are reported as links instead of being followed.
pub(super) fn build_walker(root: &Path, filters: Arc<Filters>) -> ignore::Walk {
    let mut walker_builder = WalkBuilder::new(root);
    walker_builder
        .standard_filters(false)
        .require_git(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));
    debug!("Configuring WalkBuilder: standard_filters disabled, links not followed.");

    let root: PathBuf = root.to_path_buf();
    walker_builder.filter_entry(move |entry| {
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        if !is_dir || entry.depth() == 0 {
            return true;
        }
        let Some(relative) = relative_path_string(&root, entry.path()) else {
            warn!(
                "Not descending into '{}': path is not valid UTF-8",
                entry.path().display()
            );
            return false;
        };
        let descend = filters.should_descend(&relative);
        if !descend {
            trace!("Pruning directory: {}", relative);
        }
        descend
    });

    walker_builder.build()
}

// src/filtering/mod.rs

//! Decides which repository paths are included.
//!
//! Patterns follow the git-ignore dialect and are collected into two ordered
//! [`FilterSet`]s per run: the Ignore Set and the Select Set. Both are built
//! once before the walk starts and never change afterwards. The binary
//! heuristic used by the walker lives here too.

mod builder;
mod filter_set;
mod pattern;
mod text_detection;

pub use builder::{build_ignore_set, build_select_set, read_pattern_file};
pub use filter_set::FilterSet;
pub use pattern::{Pattern, PatternError};
pub use text_detection::{decode_text, is_likely_binary};

/// The two filter sets consulted by the walker.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    /// Paths matched here are excluded, unless a select list is active.
    pub ignore: FilterSet,
    /// When non-empty, only paths matched here are included.
    pub select: FilterSet,
}

impl Filters {
    /// Whether the select list replaces ignore-based inclusion.
    pub fn select_active(&self) -> bool {
        !self.select.is_empty()
    }

    /// Whether the walker should descend into a directory.
    ///
    /// Pinned directories are always pruned. Ignored directories are pruned
    /// only when no select list is active, since a select rule may still pick
    /// files below them.
    pub fn should_descend(&self, relative_dir: &str) -> bool {
        if self.ignore.is_pinned(relative_dir, true) {
            return false;
        }
        self.select_active() || !self.ignore.matches(relative_dir, true)
    }

    /// Whether a file belongs in the document.
    ///
    /// # Examples
    ///
    /// ```
    /// use git2gpt::filtering::{FilterSet, Filters};
    ///
    /// let filters = Filters {
    ///     ignore: FilterSet::from_lines(["src/"]),
    ///     select: FilterSet::from_lines(["src/**"]),
    /// };
    /// assert!(filters.includes_file("src/a.go"));
    /// assert!(!filters.includes_file("README.md"));
    /// ```
    pub fn includes_file(&self, relative_path: &str) -> bool {
        if self.ignore.is_pinned(relative_path, false) {
            return false;
        }
        if self.select_active() {
            self.select.matches(relative_path, false)
        } else {
            !self.ignore.matches(relative_path, false)
        }
    }
}

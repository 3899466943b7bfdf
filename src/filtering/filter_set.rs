// src/filtering/filter_set.rs

//! An ordered list of patterns evaluated last-match-wins.

use super::pattern::Pattern;
use log::{debug, warn};

/// Ordered set of [`Pattern`]s with git-ignore evaluation.
///
/// The set holds two kinds of rules:
/// - *pinned* rules, which always match and cannot be negated (used for the
///   VCS metadata directory), and
/// - ordinary rules, evaluated in order where the last matching rule decides;
///   a negated rule (`!pattern`) that matches last un-matches the path.
///
/// A path also counts as matched when one of its ancestor directories is
/// matched. Once an ancestor directory is matched, nothing beneath it can be
/// re-included, so pruning a matched directory during the walk gives the same
/// result as testing every file below it.
///
/// # Examples
///
/// ```
/// use git2gpt::filtering::FilterSet;
///
/// let set = FilterSet::from_lines(["*.log", "!keep.log"]);
/// assert!(set.matches("x.log", false));
/// assert!(!set.matches("keep.log", false));
/// assert!(!set.matches("main.go", false));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    pinned: Vec<Pattern>,
    rules: Vec<Pattern>,
}

impl FilterSet {
    /// Creates an empty set that matches nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from pattern lines, skipping blanks, comments and invalid globs.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        set.extend_from_lines(lines, "<inline>");
        set
    }

    /// Appends a rule. Later rules take precedence over earlier ones.
    pub fn push(&mut self, pattern: Pattern) {
        self.rules.push(pattern);
    }

    /// Adds a rule that always matches and is never overridden by negation.
    pub fn pin(&mut self, pattern: Pattern) {
        self.pinned.push(pattern);
    }

    /// Parses and appends pattern lines. Invalid patterns are logged and skipped.
    ///
    /// `origin` names the source of the lines for log messages.
    pub fn extend_from_lines<I, S>(&mut self, lines: I, origin: &str)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            match Pattern::parse(line.as_ref()) {
                Ok(Some(pattern)) => {
                    debug!("Added pattern '{}' from {}", pattern, origin);
                    self.rules.push(pattern);
                }
                Ok(None) => {}
                Err(e) => warn!("Skipping {} in {}", e, origin),
            }
        }
    }

    /// True when the set holds no ordinary rules.
    ///
    /// Pinned rules do not count: an empty select set means "no select list".
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of ordinary rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// The ordinary rules, in evaluation order.
    pub fn patterns(&self) -> &[Pattern] {
        &self.rules
    }

    /// Tests a `/`-separated path relative to the repository root.
    pub fn matches(&self, relative_path: &str, is_dir: bool) -> bool {
        let relative_path = relative_path.trim_matches('/');
        if relative_path.is_empty() {
            return false;
        }

        if self.is_pinned(relative_path, is_dir) {
            return true;
        }

        for ancestor in ancestors(relative_path) {
            if self.last_match(ancestor, true) == Some(true) {
                return true;
            }
        }

        self.last_match(relative_path, is_dir).unwrap_or(false)
    }

    /// True if a pinned rule matches the path or one of its ancestors.
    pub fn is_pinned(&self, relative_path: &str, is_dir: bool) -> bool {
        if self.pinned.is_empty() {
            return false;
        }
        ancestors(relative_path).any(|a| self.pinned.iter().any(|p| p.test(a, true)))
            || self.pinned.iter().any(|p| p.test(relative_path, is_dir))
    }

    /// Outcome of the last ordinary rule matching exactly this path.
    fn last_match(&self, path: &str, is_dir: bool) -> Option<bool> {
        self.rules
            .iter()
            .rev()
            .find(|p| p.test(path, is_dir))
            .map(|p| !p.is_negated())
    }
}

/// Proper ancestor directories of a relative path, shallowest first.
fn ancestors(relative_path: &str) -> impl Iterator<Item = &str> {
    relative_path
        .match_indices('/')
        .map(move |(idx, _)| &relative_path[..idx])
}

// src/filtering/builder.rs

//! Assembles the Ignore Set and Select Set for one run.

use super::filter_set::FilterSet;
use super::pattern::Pattern;
use crate::constants::{DEFAULT_IGNORE_FILE, DEFAULT_SELECT_FILE, REPO_IGNORE_FILE, VCS_DIR};
use crate::errors::{io_error_with_path, Result};
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Control files excluded by default. Unlike [`VCS_DIR`], these can be re-included.
const BASELINE_IGNORES: &[&str] = &[REPO_IGNORE_FILE, DEFAULT_IGNORE_FILE, DEFAULT_SELECT_FILE];

/// Builds the Ignore Set for a repository.
///
/// Rules are layered in this order, later rules winning:
/// 1. the baseline (`.git` pinned at any depth, plus the tool's control files),
/// 2. the repository's root `.gitignore`, when `use_repo_ignore` is set,
/// 3. `explicit_ignore`, or `<repo>/.gptignore` if no explicit file is given.
///
/// # Errors
/// Returns [`Error::Io`](crate::errors::Error::Io) if a pattern file exists but
/// cannot be read. Absent files contribute no rules.
///
/// # Examples
///
/// ```
/// # use std::fs;
/// # use git2gpt::filtering::build_ignore_set;
/// # use tempfile::tempdir;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempdir()?;
/// fs::write(temp.path().join(".gitignore"), "b.go\n")?;
///
/// let set = build_ignore_set(temp.path(), None, true)?;
/// assert!(set.matches("b.go", false));
/// assert!(set.matches(".git", true));
/// assert!(!set.matches("a.go", false));
///
/// let without_gitignore = build_ignore_set(temp.path(), None, false)?;
/// assert!(!without_gitignore.matches("b.go", false));
/// # Ok(())
/// # }
/// ```
pub fn build_ignore_set(
    repo_root: &Path,
    explicit_ignore: Option<&Path>,
    use_repo_ignore: bool,
) -> Result<FilterSet> {
    let mut set = FilterSet::new();
    match Pattern::compile(&format!("**/{}", VCS_DIR)) {
        Ok(pattern) => set.pin(pattern),
        Err(e) => warn!("Could not compile VCS pattern: {}", e),
    }
    set.extend_from_lines(BASELINE_IGNORES.iter().copied(), "baseline");

    if use_repo_ignore {
        append_pattern_file(&mut set, &repo_root.join(REPO_IGNORE_FILE), false)?;
    } else {
        debug!("Skipping {} as requested", REPO_IGNORE_FILE);
    }

    let (ignore_path, explicit) =
        resolve_pattern_file(repo_root, explicit_ignore, DEFAULT_IGNORE_FILE);
    append_pattern_file(&mut set, &ignore_path, explicit)?;

    debug!("Ignore set holds {} rules", set.len());
    Ok(set)
}

/// Builds the Select Set for a repository.
///
/// Reads `explicit_select`, or `<repo>/.gptselect` when none is given. An empty
/// result means "no allow-list"; the walker then falls back to ignore rules.
///
/// # Errors
/// Returns [`Error::Io`](crate::errors::Error::Io) if the select file exists but
/// cannot be read.
pub fn build_select_set(repo_root: &Path, explicit_select: Option<&Path>) -> Result<FilterSet> {
    let mut set = FilterSet::new();
    let (select_path, explicit) =
        resolve_pattern_file(repo_root, explicit_select, DEFAULT_SELECT_FILE);
    append_pattern_file(&mut set, &select_path, explicit)?;
    debug!("Select set holds {} rules", set.len());
    Ok(set)
}

/// Reads the raw lines of a pattern file.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_pattern_file(path: &Path) -> Result<Option<Vec<String>>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text.lines().map(str::to_string).collect())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(io_error_with_path(e, path)),
    }
}

fn resolve_pattern_file(
    repo_root: &Path,
    explicit: Option<&Path>,
    default_name: &str,
) -> (PathBuf, bool) {
    match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => (repo_root.join(default_name), false),
    }
}

fn append_pattern_file(set: &mut FilterSet, path: &Path, explicit: bool) -> Result<()> {
    match read_pattern_file(path)? {
        Some(lines) => {
            debug!("Reading patterns from {}", path.display());
            set.extend_from_lines(lines, &path.display().to_string());
        }
        None if explicit => warn!(
            "Pattern file '{}' not found, treating it as empty",
            path.display()
        ),
        None => debug!("No pattern file at {}", path.display()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_baseline_only() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let temp = tempdir()?;
        let set = build_ignore_set(temp.path(), None, true)?;
        assert!(set.matches(".git", true));
        assert!(set.matches(".git/HEAD", false));
        assert!(set.matches(".gitignore", false));
        assert!(set.matches(".gptignore", false));
        assert!(set.matches(".gptselect", false));
        assert!(!set.matches("main.go", false));
        assert!(!set.matches("sub/.gitignore", false));
        // Nested repositories are excluded as well.
        assert!(set.is_pinned("vendor/lib/.git", true));
        assert!(set.matches("vendor/lib/.git/HEAD", false));
        assert!(!set.matches(".github/workflows/ci.yml", false));
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_explicit_file_overrides_gitignore() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let temp = tempdir()?;
        fs::write(temp.path().join(".gitignore"), "*.log\n")?;
        let ignore = temp.path().join("custom-ignore");
        fs::write(&ignore, "# keep this one\n!keep.log\n")?;

        let set = build_ignore_set(temp.path(), Some(&ignore), true)?;
        assert!(set.matches("x.log", false));
        assert!(!set.matches("keep.log", false));
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_control_files_can_be_reincluded() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let temp = tempdir()?;
        fs::write(temp.path().join(".gptignore"), "!.gitignore\n!.git\n")?;
        let set = build_ignore_set(temp.path(), None, true)?;
        assert!(!set.matches(".gitignore", false));
        assert!(set.matches(".git", true));
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_default_gptignore_replaced_by_explicit() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let temp = tempdir()?;
        fs::write(temp.path().join(".gptignore"), "docs/\n")?;
        let explicit = temp.path().join("other");
        fs::write(&explicit, "tmp/\n")?;

        let set = build_ignore_set(temp.path(), Some(&explicit), false)?;
        assert!(!set.matches("docs", true));
        assert!(set.matches("tmp", true));
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_missing_explicit_file_is_empty() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let temp = tempdir()?;
        let missing = temp.path().join("nope");
        let select = build_select_set(temp.path(), Some(&missing))?;
        assert!(select.is_empty());
        let ignore = build_ignore_set(temp.path(), Some(&missing), true)?;
        assert!(!ignore.matches("anything", false));
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_default_select_file() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let temp = tempdir()?;
        fs::write(temp.path().join(".gptselect"), "src/**\n")?;
        let select = build_select_set(temp.path(), None)?;
        assert_eq!(select.len(), 1);
        assert!(select.matches("src/a.go", false));
        assert!(!select.matches("README.md", false));
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_unreadable_pattern_file_is_fatal() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let temp = tempdir()?;
        // A directory cannot be read as a file.
        let dir = temp.path().join("ignore-dir");
        fs::create_dir(&dir)?;
        let result = build_ignore_set(temp.path(), Some(&dir), false);
        assert!(matches!(result, Err(crate::errors::Error::Io { .. })));
        temp.close()?;
        Ok(())
    }
}

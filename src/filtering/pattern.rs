// src/filtering/pattern.rs

//! A single ignore/select rule in git-ignore syntax.
//!
//! Patterns are anchored at the repository root unless they begin with `**/`.
//! `*` and `?` stay inside one path segment, `**` spans segments, a trailing
//! `/` restricts the rule to directories and a leading `!` negates it.

use glob::MatchOptions;
use log::trace;
use std::fmt;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Error produced when a pattern line is not a valid glob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternError {
    /// The offending pattern text.
    pub pattern: String,
    /// Description from the glob compiler.
    pub message: String,
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid pattern '{}': {}", self.pattern, self.message)
    }
}

impl std::error::Error for PatternError {}

/// A compiled ignore/select rule.
///
/// # Examples
///
/// ```
/// use git2gpt::filtering::Pattern;
///
/// let logs = Pattern::compile("*.log").unwrap();
/// assert!(logs.test("debug.log", false));
/// assert!(!logs.test("nested/debug.log", false)); // anchored at the root
///
/// let anywhere = Pattern::compile("**/*.log").unwrap();
/// assert!(anywhere.test("nested/debug.log", false));
/// assert!(anywhere.test("debug.log", false));
///
/// let keep = Pattern::compile("!keep.log").unwrap();
/// assert!(keep.is_negated());
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    glob: glob::Pattern,
    // Root-level form of a `**/x` pattern, so it also matches `x` itself.
    root_glob: Option<glob::Pattern>,
    negated: bool,
    dir_only: bool,
}

impl Pattern {
    /// Parses one line of a pattern file.
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments, which are dropped
    /// at parse time and never matched.
    pub fn parse(line: &str) -> Result<Option<Pattern>, PatternError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }
        Self::compile(trimmed).map(Some)
    }

    /// Compiles a single pattern string.
    pub fn compile(pattern: &str) -> Result<Pattern, PatternError> {
        let source = pattern.to_string();
        let mut body = pattern.trim();

        let negated = body.starts_with('!');
        if negated {
            body = &body[1..];
        } else if body.starts_with("\\!") || body.starts_with("\\#") {
            body = &body[1..];
        }

        let dir_only = body.len() > 1 && body.ends_with('/');
        let body = body.trim_end_matches('/');
        let body = body.strip_prefix('/').unwrap_or(body);

        if body.is_empty() {
            return Err(PatternError {
                pattern: source,
                message: "pattern matches nothing".to_string(),
            });
        }

        let compile = |text: &str| {
            glob::Pattern::new(text).map_err(|e| PatternError {
                pattern: source.clone(),
                message: e.to_string(),
            })
        };

        let glob = compile(body)?;
        let root_glob = match body.strip_prefix("**/") {
            Some(rest) if !rest.is_empty() => Some(compile(rest)?),
            _ => None,
        };

        trace!(
            "Compiled pattern '{}' (negated: {}, dir_only: {})",
            source,
            negated,
            dir_only
        );

        Ok(Pattern {
            source,
            glob,
            root_glob,
            negated,
            dir_only,
        })
    }

    /// Tests a `/`-separated path relative to the repository root.
    ///
    /// `is_dir` must be true when the path names a directory; directory-only
    /// patterns never match files. Negation is not applied here, see
    /// [`FilterSet`](crate::filtering::FilterSet).
    pub fn test(&self, relative_path: &str, is_dir: bool) -> bool {
        if self.dir_only && !is_dir {
            return false;
        }
        self.glob.matches_with(relative_path, MATCH_OPTIONS)
            || self
                .root_glob
                .as_ref()
                .is_some_and(|g| g.matches_with(relative_path, MATCH_OPTIONS))
    }

    /// Whether the pattern re-includes paths (`!` prefix).
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Whether the pattern only applies to directories (trailing `/`).
    pub fn is_dir_only(&self) -> bool {
        self.dir_only
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

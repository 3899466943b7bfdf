// src/processing/languages.rs

//! Comment syntax per language, keyed by file extension.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The comment and literal syntax the scrubber needs to know about a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentSyntax {
    /// Markers that start a comment running to the end of the line.
    pub line: &'static [&'static str],
    /// Opening and closing markers of block comments.
    pub block: &'static [(&'static str, &'static str)],
    /// Characters that open a string literal closed by the same character.
    pub quotes: &'static [char],
    /// Whether `'x'` denotes a character literal (as opposed to a lifetime or prime).
    pub char_literals: bool,
}

impl CommentSyntax {
    /// Returns the block comment pair opening at the start of `text`, if any.
    pub(crate) fn block_opening(&self, text: &str) -> Option<(&'static str, &'static str)> {
        self.block.iter().copied().find(|(open, _)| text.starts_with(open))
    }

    /// Returns the line comment marker at the start of `text`, if any.
    pub(crate) fn line_opening(&self, text: &str) -> Option<&'static str> {
        self.line.iter().copied().find(|marker| text.starts_with(marker))
    }
}

static C_LIKE: CommentSyntax = CommentSyntax {
    line: &["//"],
    block: &[("/*", "*/")],
    quotes: &['"'],
    char_literals: true,
};

static GO: CommentSyntax = CommentSyntax {
    line: &["//"],
    block: &[("/*", "*/")],
    quotes: &['"', '`'],
    char_literals: true,
};

static JAVASCRIPT: CommentSyntax = CommentSyntax {
    line: &["//"],
    block: &[("/*", "*/")],
    quotes: &['"', '\'', '`'],
    char_literals: false,
};

static CSS: CommentSyntax = CommentSyntax {
    line: &[],
    block: &[("/*", "*/")],
    quotes: &['"', '\''],
    char_literals: false,
};

static SCSS: CommentSyntax = CommentSyntax {
    line: &["//"],
    block: &[("/*", "*/")],
    quotes: &['"', '\''],
    char_literals: false,
};

static HASH: CommentSyntax = CommentSyntax {
    line: &["#"],
    block: &[],
    quotes: &['"', '\''],
    char_literals: false,
};

static NIX: CommentSyntax = CommentSyntax {
    line: &["#"],
    block: &[("/*", "*/")],
    quotes: &['"'],
    char_literals: false,
};

static SQL: CommentSyntax = CommentSyntax {
    line: &["--"],
    block: &[("/*", "*/")],
    quotes: &['\'', '"'],
    char_literals: false,
};

// `--[[` must be tried before `--`, which block-first matching guarantees.
static LUA: CommentSyntax = CommentSyntax {
    line: &["--"],
    block: &[("--[[", "]]")],
    quotes: &['"', '\''],
    char_literals: false,
};

static HASKELL: CommentSyntax = CommentSyntax {
    line: &["--"],
    block: &[("{-", "-}")],
    quotes: &['"'],
    char_literals: true,
};

static MARKUP: CommentSyntax = CommentSyntax {
    line: &[],
    block: &[("<!--", "-->")],
    quotes: &[],
    char_literals: false,
};

static PHP: CommentSyntax = CommentSyntax {
    line: &["//", "#"],
    block: &[("/*", "*/")],
    quotes: &['"', '\''],
    char_literals: false,
};

static EXTENSIONS: &[(&[&str], &CommentSyntax)] = &[
    (
        &[
            "c", "h", "cc", "cpp", "cxx", "hpp", "hh", "cs", "java", "rs", "swift", "kt", "kts",
            "scala", "dart", "m", "proto", "zig",
        ],
        &C_LIKE,
    ),
    (&["go"], &GO),
    (&["js", "jsx", "mjs", "cjs", "ts", "tsx"], &JAVASCRIPT),
    (&["css"], &CSS),
    (&["scss", "less"], &SCSS),
    (
        &[
            "py", "pyi", "rb", "sh", "bash", "zsh", "pl", "r", "yaml", "yml", "toml", "ps1", "mk",
            "cmake",
        ],
        &HASH,
    ),
    (&["nix"], &NIX),
    (&["sql"], &SQL),
    (&["lua"], &LUA),
    (&["hs"], &HASKELL),
    (&["html", "htm", "xml", "vue", "svelte", "md"], &MARKUP),
    (&["php"], &PHP),
];

static LANGUAGES: Lazy<HashMap<&'static str, &'static CommentSyntax>> = Lazy::new(|| {
    EXTENSIONS
        .iter()
        .flat_map(|&(extensions, syntax)| extensions.iter().map(move |&ext| (ext, syntax)))
        .collect()
});

/// Looks up the comment syntax for a file extension (without the dot).
///
/// The lookup is case-insensitive. Unknown extensions return `None`, in which
/// case the scrubber leaves content untouched.
///
/// # Examples
/// ```
/// use git2gpt::processing::syntax_for_extension;
///
/// assert!(syntax_for_extension("rs").is_some());
/// assert!(syntax_for_extension("PY").is_some());
/// assert!(syntax_for_extension("txt").is_none());
/// assert!(syntax_for_extension("").is_none());
/// ```
pub fn syntax_for_extension(extension: &str) -> Option<&'static CommentSyntax> {
    LANGUAGES
        .get(extension.to_ascii_lowercase().as_str())
        .copied()
}

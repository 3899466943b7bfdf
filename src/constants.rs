// src/constants.rs

/// Preamble written before the files in text mode when no preamble file is given.
pub const DEFAULT_PREAMBLE: &str = "The following text is a Git repository with code. \
The structure of the text are sections that begin with ----, followed by a single line \
containing the file path and file name, followed by a variable amount of lines containing \
the file contents. The text representing the Git repository ends when the symbols --END-- \
are encountered. Any further text beyond --END-- are meant to be interpreted as \
instructions using the aforementioned Git repository as context.";

/// Line that opens every file section in text mode.
pub const SECTION_SEPARATOR: &str = "----";

/// Marker terminating the text document.
pub const END_MARKER: &str = "--END--";

/// Version-control metadata directory. Always ignored at any depth; cannot be negated.
pub const VCS_DIR: &str = ".git";

/// The repository's own ignore file, read from the repository root.
pub const REPO_IGNORE_FILE: &str = ".gitignore";

/// Ignore file picked up from the repository root when none is given explicitly.
pub const DEFAULT_IGNORE_FILE: &str = ".gptignore";

/// Select file picked up from the repository root when none is given explicitly.
pub const DEFAULT_SELECT_FILE: &str = ".gptselect";

/// Number of leading bytes inspected by the binary heuristic.
pub const BINARY_SAMPLE_SIZE: usize = 8 * 1024;

/// Share of control bytes in the sample above which content counts as binary.
pub const BINARY_CONTROL_RATIO: f64 = 0.30;

// src/cli.rs

use clap::Parser;

/// Convert a Git repository into a single text or JSON document for LLM prompts.
///
/// git2gpt walks the repository, honours `.gitignore` together with the
/// optional `.gptignore` and `.gptselect` files, and prints every included file
/// under a `----` separated header, ending with `--END--`. Anything written
/// after that marker in a prompt can refer to the repository as context.
#[derive(Parser, Debug)]
#[command(name = "git2gpt", author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the repository root.
    #[arg(value_name = "REPO_PATH")]
    pub repo_path: String,

    /// Path to a preamble text file written before the repository (text output only).
    #[arg(short = 'p', long, value_name = "FILE")]
    pub preamble: Option<String>,

    /// Write the document to this file instead of stdout. The file must not exist.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<String>,

    /// Print an estimate of the document's token count to stderr.
    #[arg(short = 'e', long, action = clap::ArgAction::SetTrue)]
    pub estimate: bool,

    /// Path to an ignore file with git-ignore patterns (default: <REPO_PATH>/.gptignore).
    #[arg(short = 'i', long, value_name = "FILE")]
    pub ignore: Option<String>,

    /// Path to a select file; only matching files are included (default: <REPO_PATH>/.gptselect).
    #[arg(short = 's', long, value_name = "FILE")]
    pub select: Option<String>,

    /// Do not apply the repository's .gitignore.
    #[arg(short = 'g', long, action = clap::ArgAction::SetTrue)]
    pub ignore_gitignore: bool,

    /// Output JSON instead of text.
    #[arg(short = 'j', long, action = clap::ArgAction::SetTrue)]
    pub json: bool,

    /// Debug mode: do not print the document to stdout, with verbose logging.
    #[arg(short = 'd', long, action = clap::ArgAction::SetTrue)]
    pub debug: bool,

    /// Strip comments from source files of recognized languages.
    #[arg(short = 'c', long, action = clap::ArgAction::SetTrue)]
    pub scrub_comments: bool,
}

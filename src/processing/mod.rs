//! Content transforms applied after the walk.
//!
//! Comment scrubbing is lossy and keyed by file extension; token estimation
//! runs on the final rendered document.

mod comments;
mod languages;
mod tokens;

pub use comments::scrub;
pub use languages::{syntax_for_extension, CommentSyntax};
pub use tokens::estimate_tokens;

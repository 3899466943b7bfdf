// src/processing/tokens.rs

/// Estimates how many LLM tokens `text` will use.
///
/// The estimate is the larger of one token per four characters (rounded up)
/// and one token per whitespace-separated word. It does not model any
/// particular tokenizer. Both terms can only grow as text is appended, so the
/// estimate never decreases when content is added.
///
/// # Examples
///
/// ```
/// use git2gpt::processing::estimate_tokens;
///
/// assert_eq!(estimate_tokens(""), 0);
/// assert_eq!(estimate_tokens("abcd"), 1);
/// assert_eq!(estimate_tokens("abcde"), 2);
/// assert_eq!(estimate_tokens("a b c d e f"), 6);
/// ```
#[inline]
pub fn estimate_tokens(text: &str) -> usize {
    let characters = text.chars().count();
    let words = text.split_whitespace().count();
    characters.div_ceil(4).max(words)
}

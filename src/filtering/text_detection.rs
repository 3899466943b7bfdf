// src/filtering/text_detection.rs

use crate::constants::{BINARY_CONTROL_RATIO, BINARY_SAMPLE_SIZE};
use content_inspector::ContentType;

/// Decides whether a file's leading bytes look binary.
///
/// Only the first [`BINARY_SAMPLE_SIZE`] bytes are inspected. The sample is
/// binary when `content_inspector` classifies it as such (a null byte, or a
/// UTF-16/32 byte-order mark), or when more than [`BINARY_CONTROL_RATIO`] of
/// its bytes are control characters other than tab, newline, carriage return
/// and form feed. This is a heuristic and can misjudge unusual files.
///
/// # Examples
/// ```
/// use git2gpt::filtering::is_likely_binary;
///
/// assert!(!is_likely_binary(b"fn main() {}\n"));
/// assert!(is_likely_binary(b"ELF\0\x02\x01"));
/// assert!(is_likely_binary(&[0x01, 0x02, 0x03, b'a']));
/// assert!(!is_likely_binary(b""));
/// ```
pub fn is_likely_binary(bytes: &[u8]) -> bool {
    let sample = &bytes[..bytes.len().min(BINARY_SAMPLE_SIZE)];
    if sample.is_empty() {
        return false;
    }

    match content_inspector::inspect(sample) {
        ContentType::UTF_8 | ContentType::UTF_8_BOM => {}
        _ => return true,
    }

    let control = sample.iter().filter(|&&b| is_control_byte(b)).count();
    (control as f64) / (sample.len() as f64) > BINARY_CONTROL_RATIO
}

/// Decodes file bytes as text, returning `None` when they should be treated as binary.
///
/// A UTF-8 byte-order mark is dropped. Content that passes the sampling
/// heuristic but is not valid UTF-8 as a whole is also reported as binary, so
/// decoded text never contains replacement characters.
///
/// # Examples
/// ```
/// use git2gpt::filtering::decode_text;
///
/// assert_eq!(decode_text(b"hello".to_vec()).as_deref(), Some("hello"));
/// assert_eq!(decode_text(vec![0xEF, 0xBB, 0xBF, b'h', b'i']).as_deref(), Some("hi"));
/// assert_eq!(decode_text(vec![b'H', 0x80, b'o']), None);
/// ```
pub fn decode_text(bytes: Vec<u8>) -> Option<String> {
    if is_likely_binary(&bytes) {
        return None;
    }
    let mut text = String::from_utf8(bytes).ok()?;
    if text.starts_with('\u{feff}') {
        text.drain(..'\u{feff}'.len_utf8());
    }
    Some(text)
}

fn is_control_byte(byte: u8) -> bool {
    matches!(byte, 0x00..=0x08 | 0x0b | 0x0e..=0x1f | 0x7f)
}

//! Word-boundary tracking over a text buffer and caret offset.
//!
//! All offsets are character (Unicode scalar) offsets; out-of-range values
//! are clamped to the end of the buffer.

use crate::unicode::is_latin;

/// Byte offset of the `cursor`-th character, clamped to `buffer.len()`.
pub fn char_to_byte(buffer: &str, cursor: usize) -> usize {
    buffer
        .char_indices()
        .nth(cursor)
        .map(|(i, _)| i)
        .unwrap_or(buffer.len())
}

/// The trailing run of Latin letters being typed before `cursor`.
///
/// Takes the text before the caret, splits on whitespace and returns the last
/// segment if it is non-empty and made only of ASCII letters; a segment that
/// already contains Odia (or any other non-letter) yields `""`.
pub fn extract_current_word(buffer: &str, cursor: usize) -> &str {
    let before = &buffer[..char_to_byte(buffer, cursor)];
    let last = before.rsplit(char::is_whitespace).next().unwrap_or("");
    if !last.is_empty() && last.chars().all(is_latin) {
        last
    } else {
        ""
    }
}

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// True when `text` is non-empty and consists only of ASCII letters and
/// whitespace, i.e. it has not been transliterated yet.
pub fn is_latin_text(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| is_latin(c) || c.is_whitespace())
}

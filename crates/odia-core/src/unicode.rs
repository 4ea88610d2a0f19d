//! Character-level Unicode classification for Odia text.

/// Check the full Odia block (U+0B00..U+0B7F). Includes unassigned
/// codepoints, but block membership is what the script indicator needs.
pub fn is_odia(c: char) -> bool {
    ('\u{0B00}'..='\u{0B7F}').contains(&c)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// True iff any character of `text` is in the Odia block.
pub fn contains_odia(text: &str) -> bool {
    text.chars().any(is_odia)
}

//! Odia numeral conversion.
//!
//! Digit-wise mapping between ASCII `0`–`9` and the Odia digits `୦`–`୯`.

const ODIA_DIGITS: [char; 10] = ['୦', '୧', '୨', '୩', '୪', '୫', '୬', '୭', '୮', '୯'];

/// Map an ASCII digit to its Odia glyph.
pub fn odia_digit(c: char) -> Option<char> {
    c.to_digit(10).map(|d| ODIA_DIGITS[d as usize])
}

/// Map an Odia digit glyph back to ASCII.
pub fn ascii_digit(c: char) -> Option<char> {
    ODIA_DIGITS
        .iter()
        .position(|&d| d == c)
        .and_then(|i| char::from_digit(i as u32, 10))
}

/// Render `n` in decimal using Odia digits.
pub fn to_odia_numeral(n: u64) -> String {
    to_odia_digits(&n.to_string())
}

/// Replace every ASCII digit in `text` with its Odia glyph.
pub fn to_odia_digits(text: &str) -> String {
    text.chars().map(|c| odia_digit(c).unwrap_or(c)).collect()
}

/// Parse a number written with Odia (or ASCII) digits.
///
/// Odia digits are mapped to ASCII, then the leading run of digits after any
/// leading whitespace is parsed; trailing text is ignored. Returns `None` when
/// there is no leading digit or the value does not fit in a `u64`.
pub fn from_odia_numeral(s: &str) -> Option<u64> {
    let ascii: String = s.chars().map(|c| ascii_digit(c).unwrap_or(c)).collect();
    let trimmed = ascii.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    if end == 0 {
        return None;
    }
    trimmed[..end].parse().ok()
}

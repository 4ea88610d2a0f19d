use crate::grammar::Grammar;

/// Typing hint for the last letter of `input`, e.g. `"ka=କ, kh=ଖ, ksh=କ୍ଷ"`
/// after typing `k`.
pub fn typing_hint(input: &str) -> Option<&'static str> {
    hint_with(Grammar::global(), input)
}

pub fn hint_with<'g>(grammar: &'g Grammar, input: &str) -> Option<&'g str> {
    let last = input.chars().next_back()?;
    grammar.hint(last.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_for_last_letter() {
        assert_eq!(typing_hint("k"), Some("ka=କ, kh=ଖ, ksh=କ୍ଷ"));
        assert_eq!(typing_hint("namas"), Some("sa=ସ, sh=ଶ, Sh=ଷ"));
        assert_eq!(typing_hint("B"), Some("ba=ବ, bh=ଭ"));
    }

    #[test]
    fn test_no_hint() {
        assert_eq!(typing_hint(""), None);
        assert_eq!(typing_hint("a"), None);
        assert_eq!(typing_hint("ଓ"), None);
    }
}

use std::collections::BTreeMap;

use serde::Deserialize;

use super::MAX_PATTERN_LEN;

#[derive(Debug, Deserialize)]
pub(super) struct GrammarConfig {
    pub(super) halant: String,
    pub(super) halant_triggers: Vec<String>,
    pub(super) vowels: BTreeMap<String, String>,
    pub(super) vowel_signs: BTreeMap<String, String>,
    pub(super) consonants: BTreeMap<String, String>,
    pub(super) specials: BTreeMap<String, String>,
    pub(super) nasals: BTreeMap<String, String>,
    #[serde(default)]
    pub(super) hints: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(&'static str),
    #[error("non-ASCII pattern in [{table}]: {pattern}")]
    NonAsciiPattern { table: &'static str, pattern: String },
    #[error("pattern in [{table}] must be 1-{max} characters: {pattern}", max = MAX_PATTERN_LEN)]
    PatternLength { table: &'static str, pattern: String },
    #[error("empty glyph in [{table}] for pattern: {pattern}")]
    EmptyGlyph { table: &'static str, pattern: String },
    #[error("halant glyph is empty")]
    EmptyHalant,
    #[error("halant trigger must be a single ASCII punctuation character: {0:?}")]
    InvalidTrigger(String),
    #[error("hint key must be a single ASCII letter: {0:?}")]
    InvalidHintKey(String),
    #[error("grammar tables already initialized")]
    AlreadyInitialized,
}

/// Parse and validate grammar TOML.
pub(super) fn parse_grammar_config(toml_str: &str) -> Result<GrammarConfig, GrammarError> {
    let config: GrammarConfig =
        toml::from_str(toml_str).map_err(|e| GrammarError::Parse(e.to_string()))?;

    check_table("vowels", &config.vowels, false)?;
    check_table("vowel_signs", &config.vowel_signs, true)?;
    check_table("consonants", &config.consonants, false)?;
    check_table("specials", &config.specials, false)?;
    check_table("nasals", &config.nasals, false)?;

    if config.halant.is_empty() {
        return Err(GrammarError::EmptyHalant);
    }
    for trigger in &config.halant_triggers {
        let mut chars = trigger.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_punctuation() => {}
            _ => return Err(GrammarError::InvalidTrigger(trigger.clone())),
        }
    }
    for key in config.hints.keys() {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => {}
            _ => return Err(GrammarError::InvalidHintKey(key.clone())),
        }
    }

    Ok(config)
}

fn check_table(
    table: &'static str,
    map: &BTreeMap<String, String>,
    allow_empty_glyph: bool,
) -> Result<(), GrammarError> {
    if map.is_empty() {
        return Err(GrammarError::Empty(table));
    }
    for (pattern, glyph) in map {
        if !pattern.is_ascii() {
            return Err(GrammarError::NonAsciiPattern {
                table,
                pattern: pattern.clone(),
            });
        }
        if pattern.is_empty() || pattern.len() > MAX_PATTERN_LEN {
            return Err(GrammarError::PatternLength {
                table,
                pattern: pattern.clone(),
            });
        }
        if glyph.is_empty() && !allow_empty_glyph {
            return Err(GrammarError::EmptyGlyph {
                table,
                pattern: pattern.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
halant = "୍"
halant_triggers = ["_"]

[vowels]
a = "ଅ"

[vowel_signs]
a = ""
i = "ି"

[consonants]
k = "କ"

[specials]
"." = "।"

[nasals]
M = "ଂ"
"#;

    #[test]
    fn parse_minimal() {
        let config = parse_grammar_config(MINIMAL).unwrap();
        assert_eq!(config.consonants["k"], "କ");
        assert_eq!(config.vowel_signs["a"], "");
        assert!(config.hints.is_empty());
    }

    #[test]
    fn parse_default_toml() {
        let config = parse_grammar_config(super::super::DEFAULT_TOML).unwrap();
        assert_eq!(config.halant, "\u{0B4D}");
        assert_eq!(config.halant_triggers, vec!["_", "^"]);
        assert!(config.consonants.len() > 40);
        assert_eq!(config.hints.len(), 10);
    }

    #[test]
    fn error_empty_glyph_outside_vowel_signs() {
        let toml = MINIMAL.replace("k = \"କ\"", "k = \"\"");
        let err = parse_grammar_config(&toml).unwrap_err();
        assert!(matches!(
            err,
            GrammarError::EmptyGlyph {
                table: "consonants",
                ..
            }
        ));
    }

    #[test]
    fn error_pattern_too_long() {
        let toml = MINIMAL.replace("k = \"କ\"", "kshha = \"କ\"");
        let err = parse_grammar_config(&toml).unwrap_err();
        assert!(matches!(err, GrammarError::PatternLength { .. }));
        assert!(err.to_string().contains("kshha"));
    }

    #[test]
    fn error_non_ascii_pattern() {
        let toml = MINIMAL.replace("k = \"କ\"", "\"କ\" = \"କ\"");
        let err = parse_grammar_config(&toml).unwrap_err();
        assert!(matches!(err, GrammarError::NonAsciiPattern { .. }));
    }

    #[test]
    fn error_empty_table() {
        let toml = MINIMAL.replace("M = \"ଂ\"", "");
        let err = parse_grammar_config(&toml).unwrap_err();
        assert!(matches!(err, GrammarError::Empty("nasals")));
    }

    #[test]
    fn error_bad_trigger() {
        let toml = MINIMAL.replace("[\"_\"]", "[\"x\"]");
        let err = parse_grammar_config(&toml).unwrap_err();
        assert!(matches!(err, GrammarError::InvalidTrigger(_)));
    }

    #[test]
    fn error_bad_hint_key() {
        let toml = format!("{MINIMAL}\n[hints]\nkh = \"kh=ଖ\"\n");
        let err = parse_grammar_config(&toml).unwrap_err();
        assert!(matches!(err, GrammarError::InvalidHintKey(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_grammar_config("not valid toml {{{").unwrap_err();
        assert!(matches!(err, GrammarError::Parse(_)));
    }
}

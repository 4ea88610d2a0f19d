//! Phonetic grammar tables for Latin → Odia transliteration.
//!
//! Vowels, vowel signs, consonants, specials and nasals are loaded from an
//! embedded TOML table (or a custom one installed before first use) into an
//! immutable process-wide `Grammar`.

mod config;

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

pub use config::GrammarError;
use config::{parse_grammar_config, GrammarConfig};

pub(crate) const DEFAULT_TOML: &str = include_str!("default_grammar.toml");

/// Longest pattern in any family, in ASCII characters.
pub const MAX_PATTERN_LEN: usize = 4;

/// Longest vowel sign considered when looking past a consonant.
pub const VOWEL_SIGN_LOOKAHEAD: usize = 2;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Rule family. At equal pattern length families are tried in `SCAN_ORDER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Special,
    Nasal,
    Consonant,
    Vowel,
}

impl Family {
    pub const SCAN_ORDER: [Family; 4] = [
        Family::Special,
        Family::Nasal,
        Family::Consonant,
        Family::Vowel,
    ];
}

pub struct Grammar {
    vowels: HashMap<String, String>,
    vowel_signs: HashMap<String, String>,
    consonants: HashMap<String, String>,
    specials: HashMap<String, String>,
    nasals: HashMap<String, String>,
    halant: String,
    halant_triggers: Vec<char>,
    hints: HashMap<char, String>,
}

impl Grammar {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), GrammarError> {
        // Validate eagerly
        parse_grammar_config(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| GrammarError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Grammar {
        static INSTANCE: OnceLock<Grammar> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            Grammar::from_toml(toml_str).expect("grammar TOML must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, GrammarError> {
        let config = parse_grammar_config(toml_str)?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: GrammarConfig) -> Self {
        fn into_map(map: BTreeMap<String, String>) -> HashMap<String, String> {
            map.into_iter().collect()
        }
        Self {
            vowels: into_map(config.vowels),
            vowel_signs: into_map(config.vowel_signs),
            consonants: into_map(config.consonants),
            specials: into_map(config.specials),
            nasals: into_map(config.nasals),
            halant: config.halant,
            halant_triggers: config
                .halant_triggers
                .iter()
                .filter_map(|t| t.chars().next())
                .collect(),
            hints: config
                .hints
                .into_iter()
                .filter_map(|(k, v)| k.chars().next().map(|c| (c, v)))
                .collect(),
        }
    }

    /// Exact (case-sensitive) lookup in one family.
    pub fn lookup(&self, family: Family, pattern: &str) -> Option<&str> {
        self.table(family).get(pattern).map(String::as_str)
    }

    /// Number of patterns in one family.
    pub fn pattern_count(&self, family: Family) -> usize {
        self.table(family).len()
    }

    fn table(&self, family: Family) -> &HashMap<String, String> {
        match family {
            Family::Special => &self.specials,
            Family::Nasal => &self.nasals,
            Family::Consonant => &self.consonants,
            Family::Vowel => &self.vowels,
        }
    }

    /// Lookup that retries with the ASCII-lowercased pattern on a miss.
    pub fn lookup_folded(&self, family: Family, pattern: &str) -> Option<&str> {
        self.lookup(family, pattern).or_else(|| {
            let lower = pattern.to_ascii_lowercase();
            if lower == pattern {
                None
            } else {
                self.lookup(family, &lower)
            }
        })
    }

    /// Combining form of a vowel. The inherent vowel maps to `Some("")`.
    pub fn vowel_sign(&self, pattern: &str) -> Option<&str> {
        self.vowel_signs.get(pattern).map(String::as_str)
    }

    pub fn halant(&self) -> &str {
        &self.halant
    }

    pub fn is_halant_trigger(&self, c: char) -> bool {
        self.halant_triggers.contains(&c)
    }

    pub fn hint(&self, key: char) -> Option<&str> {
        self.hints.get(&key).map(String::as_str)
    }
}

/// Returns the embedded default grammar TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

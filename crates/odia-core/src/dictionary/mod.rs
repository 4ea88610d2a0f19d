//! Romanized word → canonical Odia spelling dictionary.
//!
//! Used both as a whole-word transliteration shortcut and as a suggestion
//! source. Entry order is the file order and is significant for ranking.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

pub(crate) const DEFAULT_TOML: &str = include_str!("default_dictionary.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

#[derive(Deserialize)]
struct DictionaryConfig {
    entries: Vec<(String, String)>,
}

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("entries list is empty")]
    Empty,
    #[error("key must be non-empty ASCII: {0:?}")]
    InvalidKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    #[error("dictionary already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictEntry {
    /// Lowercase Latin key.
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: Vec<DictEntry>,
    index: HashMap<String, usize>,
}

impl Dictionary {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), DictionaryError> {
        Dictionary::from_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| DictionaryError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Dictionary {
        static INSTANCE: OnceLock<Dictionary> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            Dictionary::from_toml(toml_str).expect("dictionary TOML must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, DictionaryError> {
        let config: DictionaryConfig =
            toml::from_str(toml_str).map_err(|e| DictionaryError::Parse(e.to_string()))?;
        if config.entries.is_empty() {
            return Err(DictionaryError::Empty);
        }
        Self::from_entries(config.entries)
    }

    /// Build from `(key, value)` pairs. Keys are lowercased; after that they
    /// must be unique.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut dict = Dictionary {
            entries: Vec::new(),
            index: HashMap::new(),
        };
        for (key, value) in entries {
            let key: String = key.into();
            let value: String = value.into();
            if key.is_empty() || !key.is_ascii() {
                return Err(DictionaryError::InvalidKey(key));
            }
            if value.is_empty() {
                return Err(DictionaryError::EmptyValue(key));
            }
            let key = key.to_ascii_lowercase();
            if dict.index.contains_key(&key) {
                return Err(DictionaryError::DuplicateKey(key));
            }
            dict.index.insert(key.clone(), dict.entries.len());
            dict.entries.push(DictEntry { key, value });
        }
        Ok(dict)
    }

    /// Case-insensitive whole-key lookup.
    pub fn get(&self, word: &str) -> Option<&str> {
        let key = word.to_lowercase();
        self.index
            .get(&key)
            .map(|&i| self.entries[i].value.as_str())
    }

    /// All entries in defined order.
    pub fn entries(&self) -> &[DictEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose key starts with `needle` (already lowercased), in order.
    pub fn prefix_matches<'a>(&'a self, needle: &'a str) -> impl Iterator<Item = &'a DictEntry> {
        self.entries.iter().filter(move |e| e.key.starts_with(needle))
    }

    /// Entries whose key contains `needle` somewhere other than at the start.
    pub fn infix_matches<'a>(&'a self, needle: &'a str) -> impl Iterator<Item = &'a DictEntry> {
        self.entries
            .iter()
            .filter(move |e| !e.key.starts_with(needle) && e.key.contains(needle))
    }
}

/// Returns the embedded default dictionary TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let dict = Dictionary::from_toml(DEFAULT_TOML).unwrap();
        assert_eq!(dict.len(), 81);
        assert_eq!(dict.entries()[0].key, "namaste");
        assert_eq!(dict.get("odia"), Some("ଓଡ଼ିଆ"));
    }

    #[test]
    fn get_is_case_insensitive() {
        let dict = Dictionary::global();
        assert_eq!(dict.get("Namaste"), Some("ନମସ୍ତେ"));
        assert_eq!(dict.get("NAMASTE"), Some("ନମସ୍ତେ"));
        assert_eq!(dict.get("aaTha"), Some("ଆଠ"));
        assert_eq!(dict.get("namast"), None);
    }

    #[test]
    fn keys_are_stored_lowercase() {
        let dict = Dictionary::from_entries([("AaTha", "ଆଠ")]).unwrap();
        assert_eq!(dict.entries()[0].key, "aatha");
    }

    #[test]
    fn prefix_and_infix_matches_keep_order() {
        let dict = Dictionary::global();
        let prefix: Vec<&str> = dict.prefix_matches("od").map(|e| e.key.as_str()).collect();
        assert_eq!(prefix, vec!["odisha", "odia"]);
        let infix: Vec<&str> = dict.infix_matches("od").map(|e| e.key.as_str()).collect();
        assert_eq!(infix, vec!["body"]);
    }

    #[test]
    fn error_duplicate_key_after_lowercasing() {
        let err = Dictionary::from_entries([("puri", "ପୁରୀ"), ("PURI", "ପୁରୀ")]).unwrap_err();
        assert!(matches!(err, DictionaryError::DuplicateKey(ref k) if k == "puri"));
    }

    #[test]
    fn error_non_ascii_key() {
        let err = Dictionary::from_entries([("ପୁରୀ", "ପୁରୀ")]).unwrap_err();
        assert!(matches!(err, DictionaryError::InvalidKey(_)));
    }

    #[test]
    fn error_empty_value() {
        let err = Dictionary::from_entries([("puri", "")]).unwrap_err();
        assert!(matches!(err, DictionaryError::EmptyValue(_)));
    }

    #[test]
    fn error_empty_entries() {
        let err = Dictionary::from_toml("entries = []").unwrap_err();
        assert!(matches!(err, DictionaryError::Empty));
    }

    #[test]
    fn error_invalid_toml() {
        let err = Dictionary::from_toml("entries = [[\"a\"]]").unwrap_err();
        assert!(matches!(err, DictionaryError::Parse(_)));
    }
}

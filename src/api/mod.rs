//! UniFFI export layer: type-safe host bindings for the Odia engine.
//!
//! Each public type here maps to a generated class, struct, or enum.

mod engine;
mod session;
mod types;

pub use engine::OdiaEngine;
pub use session::OdiaSession;
pub use types::{
    OdiaError, OdiaEvent, OdiaInputMode, OdiaKeyEvent, OdiaKeyResponse, OdiaStatus,
    OdiaSuggestion,
};

use std::path::Path;

use odia_core::dictionary::Dictionary;
use odia_core::grammar::Grammar;

use types::to_u32;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn transliterate(input: String) -> String {
    odia_core::transliterate(&input)
}

#[uniffi::export]
fn transliterate_if_latin(text: String) -> String {
    odia_core::transliterate_if_latin(&text)
}

#[uniffi::export]
fn suggestions(partial: String, limit: u32) -> Vec<OdiaSuggestion> {
    odia_core::ranked_suggestions(&partial, limit as usize)
        .into_iter()
        .map(|s| OdiaSuggestion {
            text: s.text,
            rank: to_u32(s.rank),
        })
        .collect()
}

#[uniffi::export]
fn extract_current_word(buffer: String, cursor: u32) -> String {
    odia_core::extract_current_word(&buffer, cursor as usize).to_string()
}

#[uniffi::export]
fn word_count(text: String) -> u32 {
    to_u32(odia_core::word_count(&text))
}

#[uniffi::export]
fn contains_odia(text: String) -> bool {
    odia_core::contains_odia(&text)
}

#[uniffi::export]
fn to_odia_numeral(n: u64) -> String {
    odia_core::to_odia_numeral(n)
}

#[uniffi::export]
fn from_odia_numeral(s: String) -> Option<u64> {
    odia_core::from_odia_numeral(&s)
}

#[uniffi::export]
fn to_odia_digits(text: String) -> String {
    odia_core::to_odia_digits(&text)
}

#[uniffi::export]
fn typing_hint(input: String) -> Option<String> {
    odia_core::typing_hint(&input).map(str::to_string)
}

fn read_config(path: &str) -> Result<String, OdiaError> {
    std::fs::read_to_string(path).map_err(|e| OdiaError::Io {
        msg: format!("{path}: {e}"),
    })
}

#[uniffi::export]
fn load_grammar_config(path: String) -> Result<(), OdiaError> {
    let content = read_config(&path)?;
    Grammar::init_custom(content).map_err(|e| OdiaError::InvalidData { msg: e.to_string() })
}

#[uniffi::export]
fn load_dictionary_config(path: String) -> Result<(), OdiaError> {
    let content = read_config(&path)?;
    Dictionary::init_custom(content).map_err(|e| OdiaError::InvalidData { msg: e.to_string() })
}

#[uniffi::export]
fn load_settings_config(path: String) -> Result<(), OdiaError> {
    let content = read_config(&path)?;
    odia_core::settings::init_custom(content)
        .map_err(|e| OdiaError::InvalidData { msg: e.to_string() })
}

#[uniffi::export]
fn grammar_default_config() -> String {
    odia_core::grammar::default_toml().to_string()
}

#[uniffi::export]
fn dictionary_default_config() -> String {
    odia_core::dictionary::default_toml().to_string()
}

#[uniffi::export]
fn settings_default_config() -> String {
    odia_core::settings::default_toml().to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_suggestions_ranked() {
        let list = suggestions("od".to_string(), 5);
        assert_eq!(list.len(), 4);
        assert_eq!(list[0].text, "ଓଡ");
        assert_eq!(list[3].rank, 3);
    }

    #[test]
    fn test_pure_wrappers() {
        assert_eq!(transliterate("namaste".to_string()), "ନମସ୍ତେ");
        assert_eq!(extract_current_word("ami od".to_string(), 6), "od");
        assert_eq!(word_count("ami odia".to_string()), 2);
        assert!(contains_odia("ଓ".to_string()));
        assert_eq!(to_odia_numeral(42), "୪୨");
        assert_eq!(from_odia_numeral("୪୨".to_string()), Some(42));
        assert_eq!(to_odia_digits("Q1.".to_string()), "Q୧.");
        assert_eq!(typing_hint("k".to_string()).as_deref(), Some("ka=କ, kh=ଖ, ksh=କ୍ଷ"));
        assert_eq!(transliterate_if_latin("ଓ k".to_string()), "ଓ k");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml").display().to_string();
        assert!(matches!(
            load_grammar_config(path.clone()),
            Err(OdiaError::Io { .. })
        ));
        assert!(matches!(
            load_dictionary_config(path.clone()),
            Err(OdiaError::Io { .. })
        ));
        assert!(matches!(
            load_settings_config(path),
            Err(OdiaError::Io { .. })
        ));
    }

    #[test]
    fn test_load_invalid_file_is_invalid_data() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "entries = []").unwrap();
        let path = file.path().display().to_string();
        // rejected before anything is installed
        assert!(matches!(
            load_dictionary_config(path.clone()),
            Err(OdiaError::InvalidData { .. })
        ));
        assert!(matches!(
            load_grammar_config(path.clone()),
            Err(OdiaError::InvalidData { .. })
        ));
        assert!(matches!(
            load_settings_config(path),
            Err(OdiaError::InvalidData { .. })
        ));
    }

    #[test]
    fn test_default_configs_round_trip() {
        assert!(Grammar::from_toml(&grammar_default_config()).is_ok());
        assert!(Dictionary::from_toml(&dictionary_default_config()).is_ok());
        assert!(odia_core::settings::parse_settings_toml(&settings_default_config()).is_ok());
    }
}

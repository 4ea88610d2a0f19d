//! Phonetic Latin → Odia transliteration and suggestion engine.

pub mod dictionary;
pub mod grammar;
pub mod hint;
pub mod numeric;
pub mod settings;
pub mod suggest;
pub mod translit;
pub mod unicode;
pub mod word;

pub use hint::typing_hint;
pub use numeric::{from_odia_numeral, to_odia_digits, to_odia_numeral};
pub use suggest::{ranked_suggestions, suggestions, Suggestion, SuggestionSource};
pub use translit::{transliterate, transliterate_if_latin, Transliterator};
pub use unicode::contains_odia;
pub use word::{extract_current_word, is_latin_text, word_count};

#[cfg(test)]
mod tests {
    use tracing::level_filters::{LevelFilter, STATIC_MAX_LEVEL};

    #[test]
    #[cfg(feature = "quiet")]
    fn test_tracing_compiled_out_by_default() {
        assert_eq!(STATIC_MAX_LEVEL, LevelFilter::OFF);
    }

    #[test]
    #[cfg(all(feature = "trace", not(feature = "quiet")))]
    fn test_trace_feature_enables_debug() {
        assert_eq!(STATIC_MAX_LEVEL, LevelFilter::DEBUG);
    }
}

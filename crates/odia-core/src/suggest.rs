//! Ranked completion suggestions for a partial Latin word.
//!
//! Order: the direct transliteration, then dictionary entries whose key
//! starts with the input, then entries whose key contains it elsewhere.
//! Within each tier dictionary order is kept; duplicates keep their first
//! position.

use std::collections::HashSet;

use tracing::{debug, debug_span};

use crate::settings::settings;
use crate::translit::Transliterator;

/// Where a suggestion came from, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SuggestionSource {
    Direct,
    Prefix,
    Infix,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub text: String,
    /// 0-based position in the final list.
    pub rank: usize,
    pub source: SuggestionSource,
}

/// Bounded, first-wins accumulator.
struct Ranked {
    out: Vec<Suggestion>,
    seen: HashSet<String>,
    limit: usize,
}

impl Ranked {
    fn new(limit: usize) -> Self {
        Self {
            out: Vec::with_capacity(limit),
            seen: HashSet::new(),
            limit,
        }
    }

    fn is_full(&self) -> bool {
        self.out.len() >= self.limit
    }

    fn push(&mut self, text: &str, source: SuggestionSource) {
        if !self.is_full() && self.seen.insert(text.to_string()) {
            self.out.push(Suggestion {
                text: text.to_string(),
                rank: self.out.len(),
                source,
            });
        }
    }
}

impl Transliterator<'_> {
    /// Up to `limit` ranked, de-duplicated suggestions for `partial`.
    pub fn ranked_suggestions(&self, partial: &str, limit: usize) -> Vec<Suggestion> {
        let _span = debug_span!("suggestions", partial, limit).entered();
        if partial.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut ranked = Ranked::new(limit);
        let direct = self.transliterate(partial);
        if !direct.is_empty() && direct != partial {
            ranked.push(&direct, SuggestionSource::Direct);
        }

        let needle = partial.to_lowercase();
        let dict = self.dictionary();
        for entry in dict.prefix_matches(&needle) {
            if ranked.is_full() {
                break;
            }
            ranked.push(&entry.value, SuggestionSource::Prefix);
        }
        for entry in dict.infix_matches(&needle) {
            if ranked.is_full() {
                break;
            }
            ranked.push(&entry.value, SuggestionSource::Infix);
        }
        debug!(count = ranked.out.len());
        ranked.out
    }

    pub fn suggestions(&self, partial: &str, limit: usize) -> Vec<String> {
        self.ranked_suggestions(partial, limit)
            .into_iter()
            .map(|s| s.text)
            .collect()
    }
}

/// Suggestions from the global tables.
pub fn suggestions(partial: &str, limit: usize) -> Vec<String> {
    Transliterator::global().suggestions(partial, limit)
}

pub fn ranked_suggestions(partial: &str, limit: usize) -> Vec<Suggestion> {
    Transliterator::global().ranked_suggestions(partial, limit)
}

/// Suggestions capped at the configured `suggestions.limit`.
pub fn default_suggestions(partial: &str) -> Vec<String> {
    suggestions(partial, settings().suggestions.limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::grammar::Grammar;

    #[test]
    fn test_ranking_for_od() {
        assert_eq!(
            suggestions("od", 5),
            vec!["ଓଡ", "ଓଡ଼ିଶା", "ଓଡ଼ିଆ", "ମୂଳ ବିଷୟ"]
        );
    }

    #[test]
    fn test_sources_and_ranks() {
        let ranked = ranked_suggestions("od", 5);
        let sources: Vec<_> = ranked.iter().map(|s| s.source).collect();
        assert_eq!(
            sources,
            vec![
                SuggestionSource::Direct,
                SuggestionSource::Prefix,
                SuggestionSource::Prefix,
                SuggestionSource::Infix,
            ]
        );
        assert!(ranked.iter().enumerate().all(|(i, s)| s.rank == i));
    }

    #[test]
    fn test_case_insensitive_input() {
        assert_eq!(suggestions("OD", 5), suggestions("od", 5));
    }

    #[test]
    fn test_limit_truncates() {
        assert_eq!(suggestions("od", 2), vec!["ଓଡ", "ଓଡ଼ିଶା"]);
        assert_eq!(suggestions("sa", 3), vec!["ସ", "ସମ୍ବଲପୁର", "ସରପଞ୍ଚ"]);
        assert!(suggestions("od", 0).is_empty());
    }

    #[test]
    fn test_prefix_then_infix() {
        assert_eq!(
            suggestions("an", 5),
            vec!["ଅନ", "ଅନେକ", "ଅଙ୍କ", "ଧନ୍ୟବାଦ", "ଭୁବନେଶ୍ୱର"]
        );
        assert_eq!(
            suggestions("ka", 5),
            vec!["କ", "କବି", "କାଲି", "ନମସ୍କାର", "ସରକାର"]
        );
    }

    #[test]
    fn test_dictionary_word_not_repeated() {
        assert_eq!(suggestions("namaste", 5), vec!["ନମସ୍ତେ"]);
        assert_eq!(suggestions("nama", 5), vec!["ନମ", "ନମସ୍ତେ", "ନମସ୍କାର"]);
    }

    #[test]
    fn test_duplicate_values_collapse() {
        // "prashan" and "prashna" share a spelling
        assert_eq!(suggestions("pra", 5), vec!["ପର", "ପ୍ରଶ୍ନ"]);
    }

    #[test]
    fn test_direct_skipped_when_unchanged() {
        assert_eq!(suggestions("q", 5), vec!["ବହୁ ବିକଳ୍ପ"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(suggestions("", 5).is_empty());
    }

    #[test]
    fn test_no_duplicates_and_bounded() {
        for partial in ["a", "k", "s", "bh", "o", "x", "zz"] {
            for limit in 0..8 {
                let list = suggestions(partial, limit);
                assert!(list.len() <= limit);
                let unique: HashSet<_> = list.iter().collect();
                assert_eq!(unique.len(), list.len(), "{partial:?}");
            }
        }
    }

    #[test]
    fn test_custom_dictionary() {
        let dict = Dictionary::from_entries([("puri", "ପୁରୀ"), ("jagannath", "ଜଗନ୍ନାଥ")]).unwrap();
        let tr = Transliterator::new(Grammar::global(), &dict);
        assert_eq!(tr.suggestions("pu", 5), vec!["ପୁ", "ପୁରୀ"]);
        assert_eq!(tr.suggestions("nna", 5), vec!["ନନ", "ଜଗନ୍ନାଥ"]);
    }

    #[test]
    fn test_default_limit() {
        assert!(default_suggestions("a").len() <= settings().suggestions.limit);
    }
}

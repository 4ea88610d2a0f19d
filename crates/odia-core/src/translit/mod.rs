//! Latin → Odia transliteration.
//!
//! Greedy longest-match scan over the grammar tables. At each position pattern
//! lengths are tried from `MAX_PATTERN_LEN` down to 1, and at each length the
//! families are tried in `Family::SCAN_ORDER`; the first hit is emitted. A
//! whole-input dictionary hit short-circuits the scan.

use tracing::{debug, debug_span};

use crate::dictionary::Dictionary;
use crate::grammar::{Family, Grammar, MAX_PATTERN_LEN, VOWEL_SIGN_LOOKAHEAD};
use crate::word::is_latin_text;


/// A grammar and dictionary pair used for transliteration and suggestions.
#[derive(Clone, Copy)]
pub struct Transliterator<'a> {
    grammar: &'a Grammar,
    dict: &'a Dictionary,
}

/// Output of one successful match at the scan position.
struct Match<'g> {
    glyph: &'g str,
    /// Vowel sign or halant attached to a consonant, otherwise empty.
    suffix: &'g str,
    /// Bytes of input consumed.
    advance: usize,
    /// Whether the emitted text ends in a consonant that can still take a
    /// vowel sign.
    consonant_pending: bool,
}

/// Per-call scan accumulator.
struct ScanState {
    pos: usize,
    out: String,
    last_was_consonant: bool,
}

impl ScanState {
    fn new(capacity: usize) -> Self {
        Self {
            pos: 0,
            out: String::with_capacity(capacity),
            last_was_consonant: false,
        }
    }

    fn apply(&mut self, m: Match<'_>) {
        self.out.push_str(m.glyph);
        self.out.push_str(m.suffix);
        self.pos += m.advance;
        self.last_was_consonant = m.consonant_pending;
    }

    /// Copy one unmatched character through unchanged.
    fn copy_verbatim(&mut self, input: &str) {
        if let Some(ch) = input[self.pos..].chars().next() {
            self.out.push(ch);
            self.pos += ch.len_utf8();
        }
        self.last_was_consonant = false;
    }
}

impl Transliterator<'static> {
    /// Transliterator over the process-wide grammar and dictionary.
    pub fn global() -> Self {
        Self::new(Grammar::global(), Dictionary::global())
    }
}

impl<'a> Transliterator<'a> {
    pub fn new(grammar: &'a Grammar, dict: &'a Dictionary) -> Self {
        Self { grammar, dict }
    }

    pub fn grammar(&self) -> &'a Grammar {
        self.grammar
    }

    pub fn dictionary(&self) -> &'a Dictionary {
        self.dict
    }

    /// Transliterate `input` into Odia script.
    ///
    /// Characters no rule covers (Odia text, punctuation other than `.`,
    /// letters like `q`) are copied through.
    pub fn transliterate(&self, input: &str) -> String {
        let _span = debug_span!("transliterate", input).entered();
        if input.is_empty() {
            return String::new();
        }
        if let Some(word) = self.dict.get(input) {
            debug!(word, "dictionary hit");
            return word.to_string();
        }

        let mut state = ScanState::new(input.len() * 3);
        while state.pos < input.len() {
            match self.match_at(input, &state) {
                Some(m) => state.apply(m),
                None => state.copy_verbatim(input),
            }
        }
        state.out
    }

    fn match_at(&self, input: &str, state: &ScanState) -> Option<Match<'a>> {
        for len in (1..=MAX_PATTERN_LEN).rev() {
            // `get` rejects ranges past the end or off a char boundary
            let Some(chunk) = input.get(state.pos..state.pos + len) else {
                continue;
            };
            for family in Family::SCAN_ORDER {
                let found = match family {
                    Family::Special | Family::Nasal => self.match_mark(family, chunk),
                    Family::Consonant => self.match_consonant(chunk, &input[state.pos + len..]),
                    Family::Vowel => self.match_vowel(chunk, state.last_was_consonant),
                };
                if found.is_some() {
                    return found;
                }
            }
        }
        None
    }

    fn match_mark(&self, family: Family, chunk: &str) -> Option<Match<'a>> {
        let glyph = self.grammar.lookup(family, chunk)?;
        Some(Match {
            glyph,
            suffix: "",
            advance: chunk.len(),
            consonant_pending: false,
        })
    }

    /// Consonant followed by a halant trigger, a vowel sign, or nothing.
    fn match_consonant(&self, chunk: &str, rest: &str) -> Option<Match<'a>> {
        let glyph = self.grammar.lookup_folded(Family::Consonant, chunk)?;

        if let Some(trigger) = rest
            .chars()
            .next()
            .filter(|&c| self.grammar.is_halant_trigger(c))
        {
            return Some(Match {
                glyph,
                suffix: self.grammar.halant(),
                advance: chunk.len() + trigger.len_utf8(),
                consonant_pending: true,
            });
        }

        for len in (1..=VOWEL_SIGN_LOOKAHEAD).rev() {
            if let Some(sign) = rest.get(..len).and_then(|v| self.grammar.vowel_sign(v)) {
                return Some(Match {
                    glyph,
                    suffix: sign,
                    advance: chunk.len() + len,
                    consonant_pending: false,
                });
            }
        }

        Some(Match {
            glyph,
            suffix: "",
            advance: chunk.len(),
            consonant_pending: true,
        })
    }

    /// Standalone vowel, or its sign when it directly follows a consonant.
    fn match_vowel(&self, chunk: &str, after_consonant: bool) -> Option<Match<'a>> {
        let standalone = self.grammar.lookup_folded(Family::Vowel, chunk)?;
        let glyph = match self.grammar.vowel_sign(chunk) {
            Some(sign) if after_consonant && !sign.is_empty() => sign,
            _ => standalone,
        };
        Some(Match {
            glyph,
            suffix: "",
            advance: chunk.len(),
            consonant_pending: false,
        })
    }
}

/// Transliterate with the global grammar and dictionary.
pub fn transliterate(input: &str) -> String {
    Transliterator::global().transliterate(input)
}

/// Transliterate only text that is still entirely Latin letters and
/// whitespace; anything else is returned unchanged.
pub fn transliterate_if_latin(text: &str) -> String {
    if is_latin_text(text) {
        transliterate(text)
    } else {
        text.to_string()
    }
}

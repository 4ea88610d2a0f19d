//! Stateful editing session: buffer, caret, typing mode and candidate panel.
//!
//! `EditorSession` owns the text being composed and processes each key,
//! returning responses that the host turns into buffer edits and candidate
//! panel updates.

mod candidate_gen;
mod commit;
mod key_handlers;
pub(crate) mod types;

#[cfg(test)]
mod tests;

use odia_core::translit::Transliterator;
use odia_core::{contains_odia, extract_current_word, word_count};

pub use types::{
    CandidateAction, InputMode, KeyEvent, KeyResponse, SessionConfig, SessionStatus, TextEdit,
};

use types::CandidatePanel;

pub struct EditorSession<'a> {
    engine: Transliterator<'a>,
    config: SessionConfig,

    buffer: String,
    /// Caret as a char offset, always `<= buffer.chars().count()`.
    cursor: usize,
    mode: InputMode,
    panel: CandidatePanel,
}

impl EditorSession<'static> {
    /// Session over the global grammar, dictionary and settings.
    pub fn with_defaults() -> Self {
        Self::new(Transliterator::global(), SessionConfig::default())
    }
}

impl<'a> EditorSession<'a> {
    pub fn new(engine: Transliterator<'a>, config: SessionConfig) -> Self {
        Self {
            engine,
            config,
            buffer: String::new(),
            cursor: 0,
            mode: InputMode::Odia,
            panel: CandidatePanel::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
        self.panel.clear();
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Latin word being typed before the caret, or `""`.
    pub fn current_word(&self) -> &str {
        extract_current_word(&self.buffer, self.cursor)
    }

    /// Candidates currently shown, empty when the panel is hidden.
    pub fn candidates(&self) -> &[String] {
        &self.panel.surfaces
    }

    pub fn selected_candidate(&self) -> Option<usize> {
        self.panel.is_visible().then_some(self.panel.selected)
    }

    /// Typing hint for the last letter of the current word.
    pub fn hint(&self) -> Option<&'a str> {
        if self.mode != InputMode::Odia {
            return None;
        }
        odia_core::hint::hint_with(self.engine.grammar(), self.current_word())
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            word_count: word_count(&self.buffer),
            odia_active: contains_odia(&self.buffer),
            mode: self.mode,
        }
    }

    /// Replace the whole buffer after an edit made by the host, and refresh
    /// the candidate panel for the new caret position.
    pub fn set_text(&mut self, text: &str, cursor: usize) -> KeyResponse {
        self.buffer = text.to_string();
        self.cursor = cursor.min(self.buffer.chars().count());
        let mut resp = KeyResponse::consumed();
        resp.candidates = self.refresh_candidates();
        resp
    }

    /// Move the caret (e.g. after a click). Hides the panel.
    pub fn set_cursor(&mut self, cursor: usize) -> KeyResponse {
        self.cursor = cursor.min(self.buffer.chars().count());
        self.panel.clear();
        let mut resp = KeyResponse::consumed();
        resp.candidates = CandidateAction::Hide;
        resp
    }

    /// Buffer text as it should be saved: a still-Latin buffer is
    /// transliterated, anything else is returned unchanged.
    pub fn finalize(&self) -> String {
        if odia_core::is_latin_text(&self.buffer) {
            self.engine.transliterate(&self.buffer)
        } else {
            self.buffer.clone()
        }
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.panel.clear();
    }
}

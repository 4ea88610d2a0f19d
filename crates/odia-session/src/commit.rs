use tracing::debug;

use odia_core::word::char_to_byte;

use super::types::{CandidateAction, KeyResponse, TextEdit};
use super::EditorSession;

impl EditorSession<'_> {
    /// Replace chars `start..end` with `text` and move the caret after it.
    pub(crate) fn apply_edit(&mut self, start: usize, end: usize, text: &str) -> TextEdit {
        let from = char_to_byte(&self.buffer, start);
        let to = char_to_byte(&self.buffer, end);
        self.buffer.replace_range(from..to, text);
        let edit = TextEdit {
            start,
            end,
            text: text.to_string(),
        };
        self.cursor = edit.caret_after();
        edit
    }

    pub(crate) fn insert_at_cursor(&mut self, text: &str) -> TextEdit {
        self.apply_edit(self.cursor, self.cursor, text)
    }

    /// Char range of the current word, ending at the caret.
    fn current_word_range(&self) -> (usize, usize) {
        let len = self.current_word().chars().count();
        (self.cursor - len, self.cursor)
    }

    /// Replace the current word with its transliteration followed by
    /// `terminator`. Returns `None` when there is no word before the caret.
    pub(crate) fn commit_word(&mut self, terminator: &str) -> Option<KeyResponse> {
        let word = self.current_word();
        if word.is_empty() {
            return None;
        }
        let mut text = self.engine.transliterate(word);
        debug!(word, %text, "commit word");
        text.push_str(terminator);
        let (start, end) = self.current_word_range();
        let mut resp = KeyResponse::consumed();
        resp.edit = Some(self.apply_edit(start, end, &text));
        resp.candidates = CandidateAction::Hide;
        self.panel.clear();
        Some(resp)
    }

    /// Replace the current word with candidate `index`, verbatim.
    pub(crate) fn commit_candidate(&mut self, index: usize) -> Option<KeyResponse> {
        let text = self.panel.surfaces.get(index)?.clone();
        debug!(index, %text, "commit candidate");
        let (start, end) = self.current_word_range();
        let mut resp = KeyResponse::consumed();
        resp.edit = Some(self.apply_edit(start, end, &text));
        resp.candidates = CandidateAction::Hide;
        self.panel.clear();
        Some(resp)
    }
}

use tracing::debug_span;

use super::types::{cyclic_index, quick_select_index, CandidateAction, InputMode, KeyEvent, KeyResponse};
use super::EditorSession;

impl EditorSession<'_> {
    /// Process a key event. Returns a KeyResponse describing what the host
    /// should do.
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyResponse {
        let _span = debug_span!("handle_key", ?event).entered();

        match event {
            KeyEvent::ToggleMode => {
                self.set_mode(self.mode.toggled());
                let mut r = KeyResponse::consumed();
                r.candidates = CandidateAction::Hide;
                r.mode_changed = Some(self.mode);
                r
            }

            KeyEvent::Backspace => self.handle_backspace(),

            // English mode: everything printable goes straight into the buffer
            KeyEvent::Text(ref text) if self.mode == InputMode::English => {
                self.insert_verbatim(text)
            }
            KeyEvent::Space if self.mode == InputMode::English => self.insert_verbatim(" "),
            KeyEvent::Enter if self.mode == InputMode::English => self.insert_verbatim("\n"),
            _ if self.mode == InputMode::English => KeyResponse::not_consumed(),

            KeyEvent::Text(text) => self.handle_text(&text),

            KeyEvent::Space => {
                let terminator = if self.config.append_space { " " } else { "" };
                self.commit_word(terminator)
                    .unwrap_or_else(|| self.insert_verbatim(" "))
            }

            KeyEvent::Enter => {
                if self.panel.is_visible() {
                    if let Some(r) = self.commit_candidate(self.panel.selected) {
                        return r;
                    }
                }
                // the line break is kept even when a word is committed
                self.commit_word("\n")
                    .unwrap_or_else(|| self.insert_verbatim("\n"))
            }

            KeyEvent::Select(index) => self
                .commit_candidate(index)
                .unwrap_or_else(KeyResponse::not_consumed),

            KeyEvent::ArrowDown => self.navigate_candidates(1),
            KeyEvent::ArrowUp => self.navigate_candidates(-1),

            KeyEvent::Escape => {
                if !self.panel.is_visible() {
                    return KeyResponse::not_consumed();
                }
                self.panel.clear();
                let mut r = KeyResponse::consumed();
                r.candidates = CandidateAction::Hide;
                r
            }
        }
    }

    fn handle_text(&mut self, text: &str) -> KeyResponse {
        if text.is_empty() {
            return KeyResponse::not_consumed();
        }
        if self.panel.is_visible() {
            if let Some(r) = quick_select_index(text, self.config.quick_select)
                .and_then(|i| self.commit_candidate(i))
            {
                return r;
            }
        }
        let mut r = KeyResponse::consumed();
        r.edit = Some(self.insert_at_cursor(text));
        r.candidates = self.refresh_candidates();
        r
    }

    /// Insert text without touching the current word. Hides the panel.
    fn insert_verbatim(&mut self, text: &str) -> KeyResponse {
        if text.is_empty() {
            return KeyResponse::not_consumed();
        }
        self.panel.clear();
        let mut r = KeyResponse::consumed();
        r.edit = Some(self.insert_at_cursor(text));
        r.candidates = CandidateAction::Hide;
        r
    }

    fn handle_backspace(&mut self) -> KeyResponse {
        if self.cursor == 0 {
            return KeyResponse::not_consumed();
        }
        let mut r = KeyResponse::consumed();
        r.edit = Some(self.apply_edit(self.cursor - 1, self.cursor, ""));
        r.candidates = self.refresh_candidates();
        r
    }

    /// Move the highlight by `delta` (1=next, -1=prev).
    fn navigate_candidates(&mut self, delta: i32) -> KeyResponse {
        if !self.panel.is_visible() {
            return KeyResponse::not_consumed();
        }
        self.panel.selected = cyclic_index(self.panel.selected, delta, self.panel.surfaces.len());
        let mut r = KeyResponse::consumed();
        r.candidates = self.panel.show_action();
        r
    }
}

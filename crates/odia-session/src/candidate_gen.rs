use tracing::debug;

use super::types::{CandidateAction, InputMode};
use super::EditorSession;

impl EditorSession<'_> {
    /// Recompute candidates for the word before the caret.
    pub(crate) fn refresh_candidates(&mut self) -> CandidateAction {
        self.panel.clear();
        if self.mode != InputMode::Odia {
            return CandidateAction::Hide;
        }
        let word = self.current_word();
        if word.is_empty() {
            return CandidateAction::Hide;
        }
        let surfaces = self.engine.suggestions(word, self.config.suggestion_limit);
        debug!(word, count = surfaces.len(), "candidates");
        self.panel.surfaces = surfaces;
        self.panel.show_action()
    }
}

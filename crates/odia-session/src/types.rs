/// Typing mode. In `English` keys are inserted verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Odia,
    English,
}

impl InputMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Odia => Self::English,
            Self::English => Self::Odia,
        }
    }
}

/// A key or pointer event delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// Printable text (usually a single character).
    Text(String),
    Space,
    Enter,
    Backspace,
    Escape,
    ArrowUp,
    ArrowDown,
    /// Click on the candidate at this index.
    Select(usize),
    ToggleMode,
}

impl KeyEvent {
    pub fn text(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Replace the characters `start..end` (char offsets into the buffer before
/// the edit) with `text`. The caret ends up after the inserted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl TextEdit {
    /// Caret position after applying the edit.
    pub fn caret_after(&self) -> usize {
        self.start + self.text.chars().count()
    }
}

/// Candidate panel action, exactly one of three states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateAction {
    /// Leave the panel as-is.
    Keep,
    /// Show or update the candidate panel with these surfaces.
    Show {
        surfaces: Vec<String>,
        selected: u32,
    },
    Hide,
}

/// Response from `handle_key`, returned to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    pub consumed: bool,
    pub edit: Option<TextEdit>,
    pub candidates: CandidateAction,
    pub mode_changed: Option<InputMode>,
}

impl KeyResponse {
    pub(crate) fn not_consumed() -> Self {
        Self {
            consumed: false,
            edit: None,
            candidates: CandidateAction::Keep,
            mode_changed: None,
        }
    }

    pub(crate) fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::not_consumed()
        }
    }
}

/// Word count and script indicator for the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStatus {
    pub word_count: usize,
    pub odia_active: bool,
    pub mode: InputMode,
}

/// Per-session knobs, taken from the global settings by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub suggestion_limit: usize,
    pub quick_select: usize,
    pub append_space: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let s = odia_core::settings::settings();
        Self {
            suggestion_limit: s.suggestions.limit,
            quick_select: s.session.quick_select,
            append_space: s.session.append_space,
        }
    }
}

/// Visible candidate list. Empty `surfaces` means the panel is hidden.
#[derive(Debug, Default)]
pub(crate) struct CandidatePanel {
    pub(crate) surfaces: Vec<String>,
    pub(crate) selected: usize,
}

impl CandidatePanel {
    pub(crate) fn is_visible(&self) -> bool {
        !self.surfaces.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.surfaces.clear();
        self.selected = 0;
    }

    pub(crate) fn show_action(&self) -> CandidateAction {
        if self.is_visible() {
            CandidateAction::Show {
                surfaces: self.surfaces.clone(),
                selected: self.selected as u32,
            }
        } else {
            CandidateAction::Hide
        }
    }
}

pub(crate) fn cyclic_index(current: usize, delta: i32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let c = current as i32;
    let n = count as i32;
    ((c + delta + n) % n) as usize
}

/// Index named by a quick-select digit key (`"1"` → 0), if within `max`.
pub(crate) fn quick_select_index(text: &str, max: usize) -> Option<usize> {
    let mut chars = text.chars();
    let digit = chars.next()?.to_digit(10)? as usize;
    if chars.next().is_some() || digit == 0 || digit > max {
        return None;
    }
    Some(digit - 1)
}

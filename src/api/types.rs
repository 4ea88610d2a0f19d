use odia_session::{CandidateAction, InputMode, KeyEvent, KeyResponse, SessionStatus};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum OdiaError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Record)]
pub struct OdiaSuggestion {
    pub text: String,
    /// 0-based; hosts label it `rank + 1` for quick select.
    pub rank: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Record)]
pub struct OdiaStatus {
    pub word_count: u32,
    pub odia_active: bool,
    pub mode: OdiaInputMode,
}

/// Event-driven response from handle_key / set_text / set_cursor.
#[derive(Debug, uniffi::Record)]
pub struct OdiaKeyResponse {
    pub consumed: bool,
    pub events: Vec<OdiaEvent>,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum OdiaInputMode {
    Odia,
    English,
}

#[derive(Clone, Debug, uniffi::Enum)]
pub enum OdiaKeyEvent {
    Text { text: String },
    Space,
    Enter,
    Backspace,
    Escape,
    ArrowUp,
    ArrowDown,
    Select { index: u32 },
    ToggleMode,
}

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum OdiaEvent {
    /// Replace chars `start..end` with `text`, then put the caret at `cursor`.
    ReplaceText {
        start: u32,
        end: u32,
        text: String,
        cursor: u32,
    },
    ShowCandidates {
        surfaces: Vec<String>,
        selected: u32,
    },
    HideCandidates,
    ModeChanged {
        mode: OdiaInputMode,
    },
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

pub(super) fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

impl From<InputMode> for OdiaInputMode {
    fn from(mode: InputMode) -> Self {
        match mode {
            InputMode::Odia => Self::Odia,
            InputMode::English => Self::English,
        }
    }
}

impl From<OdiaInputMode> for InputMode {
    fn from(mode: OdiaInputMode) -> Self {
        match mode {
            OdiaInputMode::Odia => Self::Odia,
            OdiaInputMode::English => Self::English,
        }
    }
}

impl From<OdiaKeyEvent> for KeyEvent {
    fn from(event: OdiaKeyEvent) -> Self {
        match event {
            OdiaKeyEvent::Text { text } => Self::Text(text),
            OdiaKeyEvent::Space => Self::Space,
            OdiaKeyEvent::Enter => Self::Enter,
            OdiaKeyEvent::Backspace => Self::Backspace,
            OdiaKeyEvent::Escape => Self::Escape,
            OdiaKeyEvent::ArrowUp => Self::ArrowUp,
            OdiaKeyEvent::ArrowDown => Self::ArrowDown,
            OdiaKeyEvent::Select { index } => Self::Select(index as usize),
            OdiaKeyEvent::ToggleMode => Self::ToggleMode,
        }
    }
}

impl From<SessionStatus> for OdiaStatus {
    fn from(status: SessionStatus) -> Self {
        Self {
            word_count: to_u32(status.word_count),
            odia_active: status.odia_active,
            mode: status.mode.into(),
        }
    }
}

pub(super) fn convert_to_events(resp: KeyResponse) -> OdiaKeyResponse {
    let mut events = Vec::new();

    // 1. Text edit
    if let Some(edit) = resp.edit {
        let cursor = edit.caret_after();
        events.push(OdiaEvent::ReplaceText {
            start: to_u32(edit.start),
            end: to_u32(edit.end),
            text: edit.text,
            cursor: to_u32(cursor),
        });
    }

    // 2. Candidates
    match resp.candidates {
        CandidateAction::Show { surfaces, selected } => {
            events.push(OdiaEvent::ShowCandidates { surfaces, selected });
        }
        CandidateAction::Hide => events.push(OdiaEvent::HideCandidates),
        CandidateAction::Keep => {}
    }

    // 3. Mode
    if let Some(mode) = resp.mode_changed {
        events.push(OdiaEvent::ModeChanged { mode: mode.into() });
    }

    OdiaKeyResponse {
        consumed: resp.consumed,
        events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use odia_session::TextEdit;

    #[test]
    fn test_events_in_order() {
        let resp = KeyResponse {
            consumed: true,
            edit: Some(TextEdit {
                start: 4,
                end: 6,
                text: "ଓଡ ".to_string(),
            }),
            candidates: CandidateAction::Hide,
            mode_changed: Some(InputMode::English),
        };
        let out = convert_to_events(resp);
        assert!(out.consumed);
        assert_eq!(
            out.events,
            vec![
                OdiaEvent::ReplaceText {
                    start: 4,
                    end: 6,
                    text: "ଓଡ ".to_string(),
                    cursor: 7,
                },
                OdiaEvent::HideCandidates,
                OdiaEvent::ModeChanged {
                    mode: OdiaInputMode::English,
                },
            ]
        );
    }

    #[test]
    fn test_keep_emits_nothing() {
        let resp = KeyResponse {
            consumed: false,
            edit: None,
            candidates: CandidateAction::Keep,
            mode_changed: None,
        };
        let out = convert_to_events(resp);
        assert!(!out.consumed);
        assert!(out.events.is_empty());
    }

    #[test]
    fn test_to_u32_saturates() {
        assert_eq!(to_u32(7), 7);
        assert_eq!(to_u32(usize::MAX), u32::MAX);
    }
}

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use odia_core::Transliterator;
use odia_session::{EditorSession, SessionConfig};

use super::types::{convert_to_events, to_u32};
use super::{OdiaInputMode, OdiaKeyEvent, OdiaKeyResponse, OdiaStatus};

#[derive(uniffi::Object)]
pub struct OdiaSession {
    session: Mutex<EditorSession<'static>>,
}

impl OdiaSession {
    pub(super) fn new(config: SessionConfig) -> Arc<Self> {
        Arc::new(Self {
            session: Mutex::new(EditorSession::new(Transliterator::global(), config)),
        })
    }

    // Poisoning is ignored: every edit leaves the session consistent.
    fn lock(&self) -> MutexGuard<'_, EditorSession<'static>> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[uniffi::export]
impl OdiaSession {
    fn handle_key(&self, event: OdiaKeyEvent) -> OdiaKeyResponse {
        let resp = self.lock().handle_key(event.into());
        convert_to_events(resp)
    }

    /// Re-sync after the host edited the text itself.
    fn set_text(&self, text: String, cursor: u32) -> OdiaKeyResponse {
        let resp = self.lock().set_text(&text, cursor as usize);
        convert_to_events(resp)
    }

    fn set_cursor(&self, cursor: u32) -> OdiaKeyResponse {
        let resp = self.lock().set_cursor(cursor as usize);
        convert_to_events(resp)
    }

    fn set_mode(&self, mode: OdiaInputMode) {
        self.lock().set_mode(mode.into());
    }

    fn text(&self) -> String {
        self.lock().text().to_string()
    }

    fn cursor(&self) -> u32 {
        to_u32(self.lock().cursor())
    }

    fn current_word(&self) -> String {
        self.lock().current_word().to_string()
    }

    fn hint(&self) -> Option<String> {
        self.lock().hint().map(str::to_string)
    }

    fn status(&self) -> OdiaStatus {
        self.lock().status().into()
    }

    /// Buffer text ready to save (a still-Latin buffer is transliterated).
    fn finalize(&self) -> String {
        self.lock().finalize()
    }

    fn reset(&self) {
        self.lock().reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::OdiaEvent;

    fn type_str(session: &OdiaSession, s: &str) -> OdiaKeyResponse {
        let mut last = None;
        for ch in s.chars() {
            last = Some(session.handle_key(OdiaKeyEvent::Text {
                text: ch.to_string(),
            }));
        }
        last.unwrap()
    }

    #[test]
    fn test_typing_then_space() {
        let session = OdiaSession::new(SessionConfig::default());
        let resp = type_str(&session, "od");
        assert!(matches!(
            resp.events.last(),
            Some(OdiaEvent::ShowCandidates { selected: 0, .. })
        ));

        let resp = session.handle_key(OdiaKeyEvent::Space);
        assert_eq!(
            resp.events,
            vec![
                OdiaEvent::ReplaceText {
                    start: 0,
                    end: 2,
                    text: "ଓଡ ".to_string(),
                    cursor: 3,
                },
                OdiaEvent::HideCandidates,
            ]
        );
        assert_eq!(session.text(), "ଓଡ ");
        assert_eq!(session.cursor(), 3);
    }

    #[test]
    fn test_namaste_round() {
        let session = OdiaSession::new(SessionConfig::default());
        type_str(&session, "namaste");
        session.handle_key(OdiaKeyEvent::Space);
        assert_eq!(session.text(), "ନମସ୍ତେ ");
        assert_eq!(session.cursor(), 7);
        let status = session.status();
        assert_eq!(status.word_count, 1);
        assert!(status.odia_active);
    }

    #[test]
    fn test_mode_toggle_event() {
        let session = OdiaSession::new(SessionConfig::default());
        let resp = session.handle_key(OdiaKeyEvent::ToggleMode);
        assert!(resp.events.contains(&OdiaEvent::ModeChanged {
            mode: OdiaInputMode::English,
        }));
        session.set_mode(OdiaInputMode::Odia);
        assert_eq!(session.status().mode, OdiaInputMode::Odia);
    }

    #[test]
    fn test_finalize_and_reset() {
        let session = OdiaSession::new(SessionConfig::default());
        session.set_text("odisha".to_string(), 6);
        assert_eq!(session.current_word(), "odisha");
        assert_eq!(session.finalize(), "ଓଡ଼ିଶା");
        session.reset();
        assert_eq!(session.text(), "");
    }
}


use super::{CandidateAction, EditorSession, KeyEvent, KeyResponse};

pub(super) fn make_session() -> EditorSession<'static> {
    EditorSession::with_defaults()
}

/// Type a string as individual character keys, returning the last response.
pub(super) fn type_string(session: &mut EditorSession<'_>, s: &str) -> Option<KeyResponse> {
    let mut last = None;
    for ch in s.chars() {
        last = Some(session.handle_key(KeyEvent::text(&ch.to_string())));
    }
    last
}

pub(super) fn shown(resp: &KeyResponse) -> Option<(&[String], u32)> {
    match &resp.candidates {
        CandidateAction::Show { surfaces, selected } => Some((surfaces, *selected)),
        _ => None,
    }
}

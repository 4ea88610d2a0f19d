//! Key-script notation used by `odiatool simulate`.
//!
//! Plain characters are typed as text, a literal space is the Space key and
//! a newline is Enter. Named keys go in angle brackets: `<space>`,
//! `<enter>`, `<bs>`, `<esc>`, `<up>`, `<down>`, `<mode>`, `<sel:N>`, and
//! `<lt>` for a literal `<`.

use odia_session::KeyEvent;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum KeyScriptError {
    #[error("unterminated key name starting at char {0}")]
    Unterminated(usize),
    #[error("unknown key <{0}>")]
    UnknownKey(String),
}

pub fn parse_keys(script: &str) -> Result<Vec<KeyEvent>, KeyScriptError> {
    let mut events = Vec::new();
    let mut chars = script.chars().enumerate();
    while let Some((pos, ch)) = chars.next() {
        let event = match ch {
            ' ' => KeyEvent::Space,
            '\n' => KeyEvent::Enter,
            '<' => {
                let mut name = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == '>' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }
                if !closed {
                    return Err(KeyScriptError::Unterminated(pos));
                }
                named_key(&name)?
            }
            c => KeyEvent::Text(c.to_string()),
        };
        events.push(event);
    }
    Ok(events)
}

fn named_key(name: &str) -> Result<KeyEvent, KeyScriptError> {
    let event = match name {
        "space" => KeyEvent::Space,
        "enter" => KeyEvent::Enter,
        "bs" => KeyEvent::Backspace,
        "esc" => KeyEvent::Escape,
        "up" => KeyEvent::ArrowUp,
        "down" => KeyEvent::ArrowDown,
        "mode" => KeyEvent::ToggleMode,
        "lt" => KeyEvent::text("<"),
        _ => {
            let index = name
                .strip_prefix("sel:")
                .and_then(|n| n.parse().ok())
                .ok_or_else(|| KeyScriptError::UnknownKey(name.to_string()))?;
            KeyEvent::Select(index)
        }
    };
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_and_space() {
        let events = parse_keys("ka ").unwrap();
        assert_eq!(
            events,
            vec![KeyEvent::text("k"), KeyEvent::text("a"), KeyEvent::Space]
        );
    }

    #[test]
    fn test_named_keys() {
        let events = parse_keys("od<down><enter><bs><esc><up><mode><sel:2><lt>").unwrap();
        assert_eq!(
            events,
            vec![
                KeyEvent::text("o"),
                KeyEvent::text("d"),
                KeyEvent::ArrowDown,
                KeyEvent::Enter,
                KeyEvent::Backspace,
                KeyEvent::Escape,
                KeyEvent::ArrowUp,
                KeyEvent::ToggleMode,
                KeyEvent::Select(2),
                KeyEvent::text("<"),
            ]
        );
    }

    #[test]
    fn test_newline_is_enter() {
        assert_eq!(parse_keys("\n").unwrap(), vec![KeyEvent::Enter]);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_keys("a<ent").unwrap_err(),
            KeyScriptError::Unterminated(1)
        );
        assert_eq!(
            parse_keys("<tab>").unwrap_err(),
            KeyScriptError::UnknownKey("tab".to_string())
        );
        assert_eq!(
            parse_keys("<sel:x>").unwrap_err(),
            KeyScriptError::UnknownKey("sel:x".to_string())
        );
    }
}

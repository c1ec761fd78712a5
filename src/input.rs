//! Keyboard mapping for the terminal driver.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input actions the driver understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Jump, or restart after a crash (Space, Up or Enter).
    PrimaryAction,
    /// Leave the game (Esc, q or Ctrl-C).
    Quit,
    /// Any other key.
    Other,
}

/// Translate a terminal key event. Key releases and repeats are ignored.
pub fn map_key(key: KeyEvent) -> GameInput {
    if key.kind != KeyEventKind::Press {
        return GameInput::Other;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => GameInput::Quit,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => GameInput::PrimaryAction,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => GameInput::Quit,
        _ => GameInput::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_primary_action_keys() {
        assert_eq!(map_key(press(KeyCode::Char(' '))), GameInput::PrimaryAction);
        assert_eq!(map_key(press(KeyCode::Up)), GameInput::PrimaryAction);
        assert_eq!(map_key(press(KeyCode::Enter)), GameInput::PrimaryAction);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Esc)), GameInput::Quit);
        assert_eq!(map_key(press(KeyCode::Char('q'))), GameInput::Quit);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            GameInput::Quit
        );
    }

    #[test]
    fn test_other_keys() {
        assert_eq!(map_key(press(KeyCode::Char('c'))), GameInput::Other);
        assert_eq!(map_key(press(KeyCode::Left)), GameInput::Other);
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), GameInput::Other);
    }
}

//! Keystroke bindings for the interactive terminal

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Operation requested from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Start or pause the countdown
    ToggleRun,
    /// Stop and go back to a full work phase
    Reset,
    /// Leave the interactive session
    Quit,
}

/// Map a key event to a timer operation, if it is bound to one
pub fn key_command(key: KeyEvent) -> Option<KeyCommand> {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char(' ') => Some(KeyCommand::ToggleRun),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyCommand::Reset),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyCommand::Quit)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(KeyCommand::Quit),
        _ => None,
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
    fn space_toggles_and_r_resets() {
        assert_eq!(key_command(press(KeyCode::Char(' '))), Some(KeyCommand::ToggleRun));
        assert_eq!(key_command(press(KeyCode::Char('r'))), Some(KeyCommand::Reset));
        assert_eq!(key_command(press(KeyCode::Char('R'))), Some(KeyCommand::Reset));
    }

    #[test]
    fn quit_bindings() {
        assert_eq!(key_command(press(KeyCode::Char('q'))), Some(KeyCommand::Quit));
        assert_eq!(key_command(press(KeyCode::Esc)), Some(KeyCommand::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_command(ctrl_c), Some(KeyCommand::Quit));
        assert_eq!(key_command(press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn releases_and_unbound_keys_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(key_command(release), None);
        assert_eq!(key_command(press(KeyCode::Enter)), None);
        assert_eq!(key_command(press(KeyCode::Char('x'))), None);
    }
}

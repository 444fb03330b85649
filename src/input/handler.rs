use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Action, Heading};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    GameAction(Action),
    Pause,
    Restart,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        let turn = |heading| KeyAction::GameAction(Action::Turn(heading));

        match key.code {
            KeyCode::Up => turn(Heading::Up),
            KeyCode::Down => turn(Heading::Down),
            KeyCode::Left => turn(Heading::Left),
            KeyCode::Right => turn(Heading::Right),

            KeyCode::Char('w') | KeyCode::Char('W') => turn(Heading::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => turn(Heading::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => turn(Heading::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => turn(Heading::Right),

            KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => KeyAction::Pause,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();
        let cases = [
            (KeyCode::Up, Heading::Up),
            (KeyCode::Down, Heading::Down),
            (KeyCode::Left, Heading::Left),
            (KeyCode::Right, Heading::Right),
        ];
        for (code, heading) in cases {
            assert_eq!(
                handler.handle_key_event(press(code)),
                KeyAction::GameAction(Action::Turn(heading))
            );
        }
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('w'))),
            KeyAction::GameAction(Action::Turn(Heading::Up))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('a'))),
            KeyAction::GameAction(Action::Turn(Heading::Left))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('s'))),
            KeyAction::GameAction(Action::Turn(Heading::Down))
        );

        let d_upper = KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(d_upper),
            KeyAction::GameAction(Action::Turn(Heading::Right))
        );
    }

    #[test]
    fn test_control_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(press(KeyCode::Char(' '))), KeyAction::Pause);
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('p'))), KeyAction::Pause);
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('r'))), KeyAction::Restart);
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handler.handle_key_event(press(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('x'))), KeyAction::None);
    }

    #[test]
    fn test_ctrl_c() {
        let handler = InputHandler::new();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }
}

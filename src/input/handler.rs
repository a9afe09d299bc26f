use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, Intent};

/// Maps raw key events to game intents
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Returns None for keys the game does not recognize
    pub fn intent_for(&self, key: KeyEvent) -> Option<Intent> {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Intent::Quit);
        }

        match key.code {
            // Steering - arrow keys or WASD
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                Some(Intent::SetDirection(Direction::Up))
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                Some(Intent::SetDirection(Direction::Down))
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                Some(Intent::SetDirection(Direction::Left))
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                Some(Intent::SetDirection(Direction::Right))
            }

            // Controls
            KeyCode::Char(' ') => Some(Intent::Start),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Intent::Quit),

            _ => None,
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
    fn test_arrow_keys_steer() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.intent_for(press(KeyCode::Up)),
            Some(Intent::SetDirection(Direction::Up))
        );
        assert_eq!(
            handler.intent_for(press(KeyCode::Down)),
            Some(Intent::SetDirection(Direction::Down))
        );
        assert_eq!(
            handler.intent_for(press(KeyCode::Left)),
            Some(Intent::SetDirection(Direction::Left))
        );
        assert_eq!(
            handler.intent_for(press(KeyCode::Right)),
            Some(Intent::SetDirection(Direction::Right))
        );
    }

    #[test]
    fn test_wasd_steers() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.intent_for(press(KeyCode::Char('w'))),
            Some(Intent::SetDirection(Direction::Up))
        );
        assert_eq!(
            handler.intent_for(press(KeyCode::Char('a'))),
            Some(Intent::SetDirection(Direction::Left))
        );
        assert_eq!(
            handler.intent_for(press(KeyCode::Char('s'))),
            Some(Intent::SetDirection(Direction::Down))
        );
        assert_eq!(
            handler.intent_for(press(KeyCode::Char('d'))),
            Some(Intent::SetDirection(Direction::Right))
        );

        let shifted = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.intent_for(shifted),
            Some(Intent::SetDirection(Direction::Up))
        );
    }

    #[test]
    fn test_space_starts() {
        let handler = InputHandler::new();
        assert_eq!(handler.intent_for(press(KeyCode::Char(' '))), Some(Intent::Start));
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.intent_for(press(KeyCode::Char('q'))), Some(Intent::Quit));
        assert_eq!(handler.intent_for(press(KeyCode::Esc)), Some(Intent::Quit));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.intent_for(ctrl_c), Some(Intent::Quit));
    }

    #[test]
    fn test_unknown_key_maps_to_nothing() {
        let handler = InputHandler::new();
        assert_eq!(handler.intent_for(press(KeyCode::Char('x'))), None);
        assert_eq!(handler.intent_for(press(KeyCode::Tab)), None);
    }
}

//! Input mapping for terminal environments.
//!
//! Translates crossterm key and mouse events into UI commands. The
//! keyboard cursor (arrows / WASD + Enter or Space) exists because many
//! terminals never report mouse events; both paths end in the same tap.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::types::{CursorDir, UiCommand};

/// Check if a key event should quit the game
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Map a key press to a UI command
pub fn map_key(key: KeyEvent) -> Option<UiCommand> {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(UiCommand::Restart),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(UiCommand::CursorMove(CursorDir::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(UiCommand::CursorMove(CursorDir::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(UiCommand::CursorMove(CursorDir::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(UiCommand::CursorMove(CursorDir::Right))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(UiCommand::TapCursor),
        _ => None,
    }
}

/// Map a mouse event to a tap position in terminal coordinates.
///
/// Only left-button presses tap; drags, releases, and scrolls are ignored.
pub fn map_mouse(mouse: MouseEvent) -> Option<(u16, u16)> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some((mouse.column, mouse.row)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(key(KeyCode::Char('q'))));
        assert!(should_quit(key(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));

        assert!(!should_quit(key(KeyCode::Char('c'))));
        assert!(!should_quit(key(KeyCode::Char('r'))));
    }

    #[test]
    fn test_restart_and_tap_keys() {
        assert_eq!(map_key(key(KeyCode::Char('r'))), Some(UiCommand::Restart));
        assert_eq!(map_key(key(KeyCode::Enter)), Some(UiCommand::TapCursor));
        assert_eq!(map_key(key(KeyCode::Char(' '))), Some(UiCommand::TapCursor));
        assert_eq!(map_key(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_cursor_keys_and_wasd_agree() {
        assert_eq!(
            map_key(key(KeyCode::Up)),
            Some(UiCommand::CursorMove(CursorDir::Up))
        );
        assert_eq!(map_key(key(KeyCode::Char('w'))), map_key(key(KeyCode::Up)));
        assert_eq!(
            map_key(key(KeyCode::Char('a'))),
            Some(UiCommand::CursorMove(CursorDir::Left))
        );
    }

    #[test]
    fn test_only_left_button_press_taps() {
        let press = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(map_mouse(press), Some((12, 7)));

        let release = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            ..press
        };
        assert_eq!(map_mouse(release), None);

        let right = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            ..press
        };
        assert_eq!(map_mouse(right), None);
    }
}

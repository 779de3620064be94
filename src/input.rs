//! Maps terminal events to game inputs.

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseEventKind};

/// UI-agnostic inputs the game loop understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Flap, or start a run from the start screen.
    Action,
    /// Restart after a crash.
    Reset,
    Quit,
}

pub fn map_key(code: KeyCode) -> Option<GameInput> {
    match code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter | KeyCode::Char('k') => {
            Some(GameInput::Action)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameInput::Reset),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}

/// Key presses and mouse clicks; releases and repeats are ignored.
pub fn map_event(event: &Event) -> Option<GameInput> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key.code),
        Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
            Some(GameInput::Action)
        }
        _ => None,
    }
}

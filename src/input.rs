use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::direction::Direction;
use crate::game::GameBoard;

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Restart,
    Quit,
}

/// Maps a key to a direction.
///
/// Arrow keys, WASD and the Dvorak home-row set (`,` up, `a` left, `o` down,
/// `e` right) are recognized; letters are case-insensitive.
#[must_use]
pub fn direction_for_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'a' => Some(Direction::Left),
            'd' | 'e' => Some(Direction::Right),
            'w' | ',' => Some(Direction::Up),
            's' | 'o' => Some(Direction::Down),
            _ => None,
        },
        _ => None,
    }
}

/// Translates one key press into a game input, ignoring unbound keys.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(GameInput::Quit)
        }
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(GameInput::Quit),
        KeyCode::Enter | KeyCode::Char('r' | 'R') => Some(GameInput::Restart),
        code => direction_for_key(code).map(GameInput::Direction),
    }
}

/// Waits up to `timeout` for one terminal event and maps it.
///
/// Returns `Ok(None)` on timeout and for events that are not bound keys.
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) => Ok(map_key(key)),
        _ => Ok(None),
    }
}

/// Single-slot mailbox holding the direction for the next tick.
///
/// Only commands the board accepts right now are stored; a newer accepted
/// command replaces an older one.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct CommandSlot {
    pending: Direction,
}

impl CommandSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `direction` if `game` would accept it. Returns whether it was stored.
    pub fn offer(&mut self, direction: Direction, game: &GameBoard) -> bool {
        if !game.can_change_direction(direction) {
            debug!(?direction, heading = ?game.snake().heading(), "direction rejected");
            return false;
        }

        self.pending = direction;
        true
    }

    /// Returns the pending command and resets the slot to `Unchanged`.
    pub fn take(&mut self) -> Direction {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn pending(&self) -> Direction {
        self.pending
    }
}

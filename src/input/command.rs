//! Key bindings for the puzzle.
//!
//! [`command_for_key`] is the whole keyboard contract: which keys the puzzle
//! handles, what they do, and whether the host should prevent the browser
//! default and stop propagation.

use bitflags::bitflags;

use crate::clue::Direction;
use crate::input::keyboard::{KeyCode, KeyEvent};

bitflags! {
    /// What the host should do with the native event after handling.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Propagation: u8 {
        /// Call `preventDefault()`.
        const PREVENT_DEFAULT = 0b01;
        /// Call `stopPropagation()`.
        const STOP_PROPAGATION = 0b10;
    }
}

/// A puzzle action triggered by a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Step through edit history; -1 undoes, +1 redoes.
    History(i32),
    /// Jump to the next (+1) or previous (-1) clue.
    FocusClueDiff(i32),
    FlipDirection,
    /// Clear the focused cell.
    Clear,
    /// Write an (upper-cased) letter into the focused cell.
    Type(char),
    /// Arrow movement along one axis.
    Move(Direction, i32),
}

/// Result of offering a key to the puzzle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    pub handled: bool,
    pub propagation: Propagation,
}

impl KeyOutcome {
    pub const IGNORED: Self = Self {
        handled: false,
        propagation: Propagation::empty(),
    };

    #[must_use]
    pub const fn handled(propagation: Propagation) -> Self {
        Self {
            handled: true,
            propagation,
        }
    }

    #[must_use]
    pub const fn prevent_default(&self) -> bool {
        self.propagation.contains(Propagation::PREVENT_DEFAULT)
    }

    #[must_use]
    pub const fn stop_propagation(&self) -> bool {
        self.propagation.contains(Propagation::STOP_PROPAGATION)
    }
}

/// Letters and parentheses are the only typeable characters.
#[must_use]
pub const fn is_typeable(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '(' || c == ')'
}

/// Map a key to its command and propagation policy.
///
/// Ctrl+Z undoes and Ctrl+Shift+Z redoes; every other Ctrl or Alt chord is
/// ignored.
#[must_use]
pub fn command_for_key(key: &KeyEvent) -> Option<(Command, Propagation)> {
    let consume = Propagation::PREVENT_DEFAULT | Propagation::STOP_PROPAGATION;

    if key.ctrl() {
        return match key.code {
            KeyCode::Char('z' | 'Z') => Some((
                Command::History(if key.shift() { 1 } else { -1 }),
                Propagation::empty(),
            )),
            _ => None,
        };
    }
    if key.alt() {
        return None;
    }

    let command = match key.code {
        KeyCode::Tab => (Command::FocusClueDiff(if key.shift() { -1 } else { 1 }), consume),
        KeyCode::BackTab => (Command::FocusClueDiff(-1), consume),
        KeyCode::Char(' ') => (Command::FlipDirection, consume),
        KeyCode::Delete | KeyCode::Backspace => (Command::Clear, Propagation::empty()),
        KeyCode::Char(c) if is_typeable(c) => {
            (Command::Type(c.to_ascii_uppercase()), Propagation::empty())
        }
        KeyCode::Left => (Command::Move(Direction::Across, -1), consume),
        KeyCode::Right => (Command::Move(Direction::Across, 1), consume),
        KeyCode::Up => (Command::Move(Direction::Down, -1), consume),
        KeyCode::Down => (Command::Move(Direction::Down, 1), consume),
        _ => return None,
    };
    Some(command)
}

//! Input events the puzzle reacts to.

use crate::clue::Direction;
use crate::input::keyboard::KeyEvent;
use crate::toolbar::ToolbarAction;

/// A user interaction routed to a puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Key pressed while the grid has focus.
    Key(KeyEvent),
    /// A grid cell was clicked.
    CellClick { index: usize },
    /// A clue in the clue list was clicked.
    ClueClick { number: u32, direction: Direction },
    /// A toolbar button was pressed.
    Toolbar(ToolbarAction),
}

impl Event {
    /// Get the key event if this is one.
    #[must_use]
    pub const fn key(&self) -> Option<&KeyEvent> {
        match self {
            Self::Key(e) => Some(e),
            _ => None,
        }
    }
}

impl From<KeyEvent> for Event {
    fn from(e: KeyEvent) -> Self {
        Self::Key(e)
    }
}

impl From<ToolbarAction> for Event {
    fn from(action: ToolbarAction) -> Self {
        Self::Toolbar(action)
    }
}

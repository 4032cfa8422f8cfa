//! Toolbar actions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::CrosswordOptions;

/// A toolbar button, dispatched to the puzzle as a named event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolbarAction {
    Reset,
    Reveal,
}

impl ToolbarAction {
    /// Event name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Reveal => "reveal",
        }
    }

    /// Parse an event name; unknown names are ignored by the puzzle.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "reset" => Some(Self::Reset),
            "reveal" => Some(Self::Reveal),
            _ => None,
        }
    }
}

impl fmt::Display for ToolbarAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Buttons to show, in display order.
#[must_use]
pub fn visible_actions(options: &CrosswordOptions) -> Vec<ToolbarAction> {
    let mut actions = Vec::with_capacity(2);
    if !options.hide_reset {
        actions.push(ToolbarAction::Reset);
    }
    if !options.hide_reveal {
        actions.push(ToolbarAction::Reveal);
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for action in [ToolbarAction::Reset, ToolbarAction::Reveal] {
            assert_eq!(ToolbarAction::parse(action.as_str()), Some(action));
        }
        assert_eq!(ToolbarAction::parse("solve"), None);
    }

    #[test]
    fn test_visible_actions() {
        let options = CrosswordOptions::default();
        assert_eq!(
            visible_actions(&options),
            vec![ToolbarAction::Reset, ToolbarAction::Reveal]
        );
        let options = CrosswordOptions {
            hide_reset: true,
            ..CrosswordOptions::default()
        };
        assert_eq!(visible_actions(&options), vec![ToolbarAction::Reveal]);
    }
}

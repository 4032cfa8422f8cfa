//! Shared puzzle fixtures for integration tests.

#![allow(dead_code)] // Each test binary uses a different subset
#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry

use crossword_rust::{ClueDefinition, CrosswordOptions, Direction, Puzzle};

/// A 3x3 puzzle with four words and one blocked square.
///
/// ```text
/// C A T      1 . 2
/// O # E      . # .
/// W O E      3 . .
/// ```
///
/// Cell indices, in reading order:
///
/// ```text
/// 0 1 2
/// 3 # 4
/// 5 6 7
/// ```
pub fn mini_clues() -> Vec<ClueDefinition> {
    vec![
        ClueDefinition::new("Pet that purrs", "cat", Direction::Across, 0, 0),
        ClueDefinition::new("Sorrow", "woe", Direction::Across, 0, 2),
        ClueDefinition::new("Dairy animal", "cow", Direction::Down, 0, 0),
        ClueDefinition::new("Golf peg", "tee", Direction::Down, 2, 0),
    ]
}

pub fn mini() -> Puzzle {
    Puzzle::new(&mini_clues(), CrosswordOptions::default())
}

/// A single across word `ABC`.
pub fn abc() -> Puzzle {
    Puzzle::new(
        &[ClueDefinition::new("First letters", "abc", Direction::Across, 0, 0)],
        CrosswordOptions::default(),
    )
}

/// Values of every cell, in index order.
pub fn values(puzzle: &Puzzle) -> Vec<String> {
    puzzle.grid().values()
}

/// The same puzzle as [`mini_clues`] as raw JSON, in the widget's input
/// format.
pub const MINI_JSON: &str = r#"[
    {"clue": "Pet that purrs", "answer": "cat", "direction": "across", "x": 0, "y": 0},
    {"clue": "Sorrow", "answer": "woe", "direction": "across", "x": 0, "y": 2},
    {"clue": "Dairy animal", "answer": "cow", "direction": "down", "x": 0, "y": 0},
    {"clue": "Golf peg", "answer": "tee", "direction": "down", "x": 2, "y": 0, "custom": "bonus"}
]"#;

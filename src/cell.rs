//! Grid coordinates and letter cells.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clue::Direction;

/// A grid coordinate.
///
/// Coordinates order by row first (`y`, then `x`), which is the reading order
/// used for clue numbering and cell indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

impl Coord {
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Coordinate `distance` steps from `self` along `direction`.
    #[must_use]
    pub const fn offset(self, direction: Direction, distance: u32) -> Self {
        match direction {
            Direction::Across => Self::new(self.x.saturating_add(distance), self.y),
            Direction::Down => Self::new(self.x, self.y.saturating_add(distance)),
        }
    }

    /// Position along the movement axis of `direction` (x for across, y for down).
    #[must_use]
    pub const fn along(self, direction: Direction) -> i64 {
        match direction {
            Direction::Across => self.x as i64,
            Direction::Down => self.y as i64,
        }
    }

    /// Position on the fixed axis of `direction` (the row for across, the column for down).
    #[must_use]
    pub const fn across(self, direction: Direction) -> u32 {
        match direction {
            Direction::Across => self.y,
            Direction::Down => self.x,
        }
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.x, self.y)
    }
}

/// Clue numbers of the (at most two) words passing through a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueNumbers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub across: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down: Option<u32>,
}

impl ClueNumbers {
    /// Numbers for a cell that belongs to a single clue.
    #[must_use]
    pub fn single(direction: Direction, number: u32) -> Self {
        let mut numbers = Self::default();
        numbers.set(direction, number);
        numbers
    }

    #[must_use]
    pub const fn get(&self, direction: Direction) -> Option<u32> {
        match direction {
            Direction::Across => self.across,
            Direction::Down => self.down,
        }
    }

    pub fn set(&mut self, direction: Direction, number: u32) {
        match direction {
            Direction::Across => self.across = Some(number),
            Direction::Down => self.down = Some(number),
        }
    }

    /// Fill in directions missing from `self` with values from `other`.
    ///
    /// Existing entries are kept.
    pub fn merge_missing(&mut self, other: Self) {
        self.across = self.across.or(other.across);
        self.down = self.down.or(other.down);
    }
}

/// One letter position in the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub id: Coord,
    /// Dense position in (y, x) order; stable for the lifetime of a puzzle.
    pub index: usize,
    pub x: u32,
    pub y: u32,
    /// Upper-cased solution letter.
    pub answer: String,
    /// User-entered letter, empty when unfilled.
    pub value: String,
    /// Clue number shown in the corner; set only on clue start cells.
    pub number: Option<u32>,
    pub clue_numbers: ClueNumbers,
    /// Space-separated custom class tags.
    pub custom: String,
}

impl Cell {
    #[must_use]
    pub fn new(id: Coord, answer: &str) -> Self {
        Self {
            id,
            index: 0,
            x: id.x,
            y: id.y,
            answer: answer.to_uppercase(),
            value: String::new(),
            number: None,
            clue_numbers: ClueNumbers::default(),
            custom: String::new(),
        }
    }

    #[must_use]
    pub fn is_filled(&self) -> bool {
        !self.value.is_empty()
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.value == self.answer
    }

    /// Add a custom tag unless it is empty or already present.
    pub fn add_custom(&mut self, tag: &str) {
        for part in tag.split_whitespace() {
            if self.custom.split_whitespace().any(|existing| existing == part) {
                continue;
            }
            if !self.custom.is_empty() {
                self.custom.push(' ');
            }
            self.custom.push_str(part);
        }
    }
}

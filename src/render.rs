//! Boundary between the puzzle model and a view layer.
//!
//! The puzzle never draws. It exposes per-cell and per-clue view data and
//! batches the cells touched by one input event into a [`RenderFrame`]. A
//! host drains one frame per event and redraws only what changed; a frame
//! marked `full` means every cell should be redrawn.

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::time::Duration;

use serde::Serialize;

use crate::clue::Direction;
use crate::puzzle::Puzzle;

/// Render data for one grid cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub index: usize,
    pub x: u32,
    pub y: u32,
    pub value: String,
    pub number: Option<u32>,
    pub custom: String,
    pub is_focused: bool,
    /// Part of the focused word.
    pub is_secondarily_focused: bool,
    /// Stagger delay for the value transition while a reveal pulse runs.
    pub change_delay: Duration,
}

/// Render data for one entry of the clue list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClueView {
    pub number: u32,
    pub direction: Direction,
    pub clue: String,
    pub custom: String,
    /// The focused cell belongs to this clue in this clue's direction.
    pub is_number_focused: bool,
    /// The focus direction matches this clue's list.
    pub is_direction_focused: bool,
}

/// Cells to redraw after one logical input event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderFrame {
    pub full: bool,
    /// Dirty cell indices, ascending. Empty when `full` is set.
    pub dirty_cells: Vec<usize>,
}

/// Collects dirty cells between frames.
#[derive(Clone, Debug, Default)]
pub struct RenderScheduler {
    dirty: BTreeSet<usize>,
    full: bool,
}

impl RenderScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_cell(&mut self, index: usize) {
        if !self.full {
            self.dirty.insert(index);
        }
    }

    pub fn mark_cells(&mut self, indices: impl IntoIterator<Item = usize>) {
        if !self.full {
            self.dirty.extend(indices);
        }
    }

    pub fn mark_all(&mut self) {
        self.full = true;
        self.dirty.clear();
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.full || !self.dirty.is_empty()
    }

    /// Drain everything marked since the last frame.
    pub fn take_frame(&mut self) -> Option<RenderFrame> {
        if !self.is_pending() {
            return None;
        }
        let frame = RenderFrame {
            full: self.full,
            dirty_cells: std::mem::take(&mut self.dirty).into_iter().collect(),
        };
        self.full = false;
        Some(frame)
    }
}

/// A view layer that can draw a puzzle.
pub trait GridRenderer {
    /// Draw the cells named by `frame` (or all cells for a full frame).
    fn render(&mut self, puzzle: &Puzzle, frame: &RenderFrame);
}

/// Plain-text grid drawing, one three-column slot per grid position.
///
/// `[A]` is the focused cell, `(A)` a cell of the focused word, ` A ` any
/// other cell, ` . ` an empty value and ` # ` a blocked square.
#[derive(Clone, Debug, Default)]
pub struct TextRenderer {
    output: String,
    frames: usize,
}

impl TextRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the last rendered frame.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Number of frames rendered.
    #[must_use]
    pub const fn frames(&self) -> usize {
        self.frames
    }

    /// Draw the whole grid.
    #[must_use]
    pub fn render_to_string(puzzle: &Puzzle) -> String {
        let (width, height) = puzzle.grid().dimensions();
        let views = puzzle.cell_views();
        let mut out = String::new();
        for y in 0..height {
            let mut line = String::new();
            for x in 0..width {
                let view = puzzle
                    .grid()
                    .index_of(crate::cell::Coord::new(x, y))
                    .and_then(|index| views.get(index));
                let Some(view) = view else {
                    line.push_str(" # ");
                    continue;
                };
                let letter = view.value.chars().next().unwrap_or('.');
                let (open, close) = if view.is_focused {
                    ('[', ']')
                } else if view.is_secondarily_focused {
                    ('(', ')')
                } else {
                    (' ', ' ')
                };
                let _ = write!(line, "{open}{letter}{close}");
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

impl GridRenderer for TextRenderer {
    fn render(&mut self, puzzle: &Puzzle, _frame: &RenderFrame) {
        self.output = Self::render_to_string(puzzle);
        self.frames += 1;
    }
}

//! Cell grid construction.
//!
//! Every clue answer is expanded into one entry per letter. Across and down
//! answers that cross share a single [`Cell`], which carries both clue
//! numbers. Cells are indexed densely in reading order.

use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

use crate::cell::{Cell, ClueNumbers, Coord};
use crate::clue::NumberedClue;

/// Expand numbered clues into deduplicated, indexed cells.
///
/// Malformed clues never fail here; they simply produce odd grids.
#[must_use]
pub fn build_cells(clues: &[NumberedClue]) -> Vec<Cell> {
    let mut entries: Vec<Cell> = clues
        .iter()
        .flat_map(|clue| {
            let direction = clue.direction();
            let custom = clue.definition.custom.as_deref().unwrap_or_default();
            clue.answer()
                .graphemes(true)
                .enumerate()
                .map(move |(i, letter)| {
                    let id = clue
                        .start()
                        .offset(direction, u32::try_from(i).unwrap_or(u32::MAX));
                    let mut cell = Cell::new(id, letter);
                    cell.number = (i == 0).then_some(clue.number);
                    cell.clue_numbers = ClueNumbers::single(direction, clue.number);
                    cell.add_custom(custom);
                    cell
                })
        })
        .collect();

    // Numbered entries first at each coordinate so the canonical cell keeps
    // its number.
    entries.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| b.number.cmp(&a.number)));

    let mut canonical: Vec<Cell> = Vec::with_capacity(entries.len());
    let mut seen: HashMap<Coord, usize> = HashMap::with_capacity(entries.len());
    for entry in entries {
        if let Some(&slot) = seen.get(&entry.id) {
            let cell = &mut canonical[slot];
            cell.clue_numbers.merge_missing(entry.clue_numbers);
            cell.add_custom(&entry.custom);
        } else {
            seen.insert(entry.id, canonical.len());
            canonical.push(entry);
        }
    }

    canonical.sort_by_key(|cell| cell.id);
    for (index, cell) in canonical.iter_mut().enumerate() {
        cell.index = index;
    }
    canonical
}

/// The built cells of a puzzle plus a coordinate lookup.
#[derive(Clone, Debug, Default)]
pub struct Grid {
    cells: Vec<Cell>,
    index_map: HashMap<Coord, usize>,
    width: u32,
    height: u32,
}

impl Grid {
    /// Build the grid for a numbered clue list.
    #[must_use]
    pub fn new(clues: &[NumberedClue]) -> Self {
        Self::from_cells(build_cells(clues))
    }

    /// Wrap prebuilt cells.
    ///
    /// Each cell's `index` is reset to its position in `cells`, which is the
    /// index every grid lookup uses.
    #[must_use]
    pub fn from_cells(mut cells: Vec<Cell>) -> Self {
        for (position, cell) in cells.iter_mut().enumerate() {
            cell.index = position;
        }
        let index_map = cells.iter().map(|cell| (cell.id, cell.index)).collect();
        let width = cells.iter().map(|cell| cell.x + 1).max().unwrap_or(0);
        let height = cells.iter().map(|cell| cell.y + 1).max().unwrap_or(0);
        Self {
            cells,
            index_map,
            width,
            height,
        }
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Index of the cell at `coord`, if there is one.
    #[must_use]
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        self.index_map.get(&coord).copied()
    }

    #[must_use]
    pub fn cell_at(&self, coord: Coord) -> Option<&Cell> {
        self.index_of(coord).and_then(|index| self.cells.get(index))
    }

    /// Bounding box as (width, height).
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Set one cell's value. Returns false for an unknown index.
    pub fn set_value(&mut self, index: usize, value: &str) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) => {
                cell.value = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Current values in index order.
    #[must_use]
    pub fn values(&self) -> Vec<String> {
        self.cells.iter().map(|cell| cell.value.clone()).collect()
    }

    /// Restore values captured by [`Grid::values`].
    pub fn set_values(&mut self, values: &[String]) {
        for (cell, value) in self.cells.iter_mut().zip(values) {
            cell.value.clone_from(value);
        }
    }

    /// Empty every cell.
    pub fn clear_values(&mut self) {
        for cell in &mut self.cells {
            cell.value.clear();
        }
    }

    /// Fill every cell with its answer.
    pub fn fill_answers(&mut self) {
        for cell in &mut self.cells {
            cell.value.clone_from(&cell.answer);
        }
    }
}

//! Focus navigation over a built grid.
//!
//! All functions here are pure: they take the current cells and focus and
//! return indices. Missing cells and exhausted rows yield empty results or
//! `None`; the caller keeps its current focus in that case.

use crate::cell::Cell;
use crate::clue::Direction;

/// Cells of the word containing `focused`, for secondary highlighting.
///
/// Candidates are the cells in the focused row (across) or column (down).
/// The word is the longest run of consecutive positions around the focused
/// cell; a missing position (a blocked square) ends the run even when more
/// cells follow on the same line. Indices are returned in position order.
#[must_use]
pub fn secondarily_focused_cells(cells: &[Cell], focused: &Cell, direction: Direction) -> Vec<usize> {
    let line = focused.id.across(direction);
    let start = focused.id.along(direction);

    let mut with_distance: Vec<(i64, usize)> = cells
        .iter()
        .filter(|cell| cell.id.across(direction) == line)
        .map(|cell| (cell.id.along(direction) - start, cell.index))
        .collect();
    with_distance.sort_unstable();

    let Some(origin) = with_distance.iter().position(|&(distance, _)| distance == 0) else {
        return Vec::new();
    };

    let mut first = origin;
    while first > 0 && with_distance[first - 1].0 + 1 == with_distance[first].0 {
        first -= 1;
    }
    let mut last = origin;
    while last + 1 < with_distance.len() && with_distance[last].0 + 1 == with_distance[last + 1].0 {
        last += 1;
    }

    with_distance[first..=last]
        .iter()
        .map(|&(_, index)| index)
        .collect()
}

/// Target of a directional move of `diff` steps from `focused`.
///
/// Looks only at cells on the same line, strictly past `focused` in the sign
/// of `diff`, nearest first, and returns the `|diff|`-th one. Gaps are
/// skipped: with cells at distances 1, 2 and 4, a move of +2 lands on 2 and a
/// move of +3 on 4.
#[must_use]
pub fn cell_after_diff<'a>(
    cells: &'a [Cell],
    focused: &Cell,
    direction: Direction,
    diff: i32,
) -> Option<&'a Cell> {
    if diff == 0 {
        return None;
    }
    let line = focused.id.across(direction);
    let start = focused.id.along(direction);
    let forward = diff > 0;

    let mut ahead: Vec<(u64, &Cell)> = cells
        .iter()
        .filter(|cell| cell.id.across(direction) == line)
        .filter_map(|cell| {
            let distance = cell.id.along(direction) - start;
            let beyond = if forward { distance > 0 } else { distance < 0 };
            beyond.then_some((distance.unsigned_abs(), cell))
        })
        .collect();
    ahead.sort_by_key(|&(distance, _)| distance);

    ahead
        .get(diff.unsigned_abs() as usize - 1)
        .map(|&(_, cell)| cell)
}

/// Cells in typing order for `direction`.
///
/// Across walks rows top to bottom, left to right; down walks columns left to
/// right, top to bottom.
fn typing_order(cells: &[Cell], direction: Direction) -> Vec<&Cell> {
    let mut order: Vec<&Cell> = cells.iter().collect();
    match direction {
        Direction::Across => order.sort_by_key(|cell| (cell.y, cell.x)),
        Direction::Down => order.sort_by_key(|cell| (cell.x, cell.y)),
    }
    order
}

/// All cell indices in typing order for `direction`.
#[must_use]
pub fn direction_order(cells: &[Cell], direction: Direction) -> Vec<usize> {
    typing_order(cells, direction)
        .into_iter()
        .map(|cell| cell.index)
        .collect()
}

/// Where focus goes after typing into the focused cell.
///
/// Walks [`direction_order`] by `diff` from the cell whose index is
/// `focused`. Unless `replace_filled` is set (the edited cell already had a
/// letter), filled cells are skipped so typing flows into the next blank.
/// `cells` must hold the values from before the edit.
#[must_use]
pub fn advance_target(
    cells: &[Cell],
    focused: usize,
    direction: Direction,
    diff: i32,
    replace_filled: bool,
) -> Option<usize> {
    if diff == 0 {
        return None;
    }
    let candidates: Vec<usize> = typing_order(cells, direction)
        .into_iter()
        .filter(|cell| replace_filled || cell.index == focused || !cell.is_filled())
        .map(|cell| cell.index)
        .collect();
    let position = candidates.iter().position(|&index| index == focused)?;
    let target = position.checked_add_signed(diff as isize)?;
    candidates.get(target).copied()
}

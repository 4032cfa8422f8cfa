//! Interactive puzzle state.
//!
//! [`Puzzle`] owns everything that changes while someone solves: cell
//! values, focus, edit history and the reveal pulse. All operations are
//! synchronous and infallible; an index that does not exist, a clue that
//! cannot be found or an exhausted history leaves the state unchanged.
//!
//! # Examples
//!
//! ```
//! use crossword_rust::{ClueDefinition, CrosswordOptions, Direction, KeyEvent, Puzzle};
//!
//! let clues = vec![
//!     ClueDefinition::new("Feline", "cat", Direction::Across, 0, 0),
//!     ClueDefinition::new("Taxi", "cab", Direction::Down, 0, 0),
//! ];
//! let mut puzzle = Puzzle::new(&clues, CrosswordOptions::default());
//!
//! for c in ['c', 'a', 't'] {
//!     puzzle.handle_key(KeyEvent::char(c));
//! }
//! assert_eq!(puzzle.grid().values()[..3], ["C", "A", "T"]);
//! assert!(!puzzle.is_complete());
//!
//! puzzle.reveal();
//! assert!(puzzle.is_complete());
//! assert!(puzzle.revealed());
//! ```

use std::time::Instant;

use serde_json::Value;
use tracing::debug;

use crate::cell::Cell;
use crate::clue::{ClueDefinition, Direction, NumberedClue, number_clues};
use crate::config::CrosswordOptions;
use crate::error::Result;
use crate::event::WidgetEvent;
use crate::focus;
use crate::grid::Grid;
use crate::history::{History, Snapshot};
use crate::input::{Command, Event, KeyEvent, KeyOutcome, Propagation, command_for_key};
use crate::render::{CellView, ClueView, GridRenderer, RenderFrame, RenderScheduler};
use crate::reveal::{RevealPulse, change_delay};
use crate::toolbar::{ToolbarAction, visible_actions};
use crate::validate::{Validation, validate_clues};

/// A crossword being solved.
#[derive(Clone, Debug)]
pub struct Puzzle {
    clues: Vec<NumberedClue>,
    grid: Grid,
    options: CrosswordOptions,
    validation: Validation,
    focused_cell_index: usize,
    focused_direction: Direction,
    /// Indices of the focused word, kept in sync with focus.
    secondary: Vec<usize>,
    history: History,
    pulse: RevealPulse,
    revealed: bool,
    /// Last observed value of `show_completion`.
    completion_shown: bool,
    /// Widget events not yet drained by the host.
    events: Vec<WidgetEvent>,
    scheduler: RenderScheduler,
}

impl Puzzle {
    /// Build a puzzle from typed clue definitions.
    #[must_use]
    pub fn new(clues: &[ClueDefinition], options: CrosswordOptions) -> Self {
        Self::build(clues, options, Validation::default())
    }

    /// Build a puzzle from raw clue records.
    ///
    /// Records are validated first; failures are logged and kept in
    /// [`Puzzle::validation`], and the puzzle is built from a lossy
    /// conversion of every record regardless.
    #[must_use]
    pub fn from_values(records: &[Value], options: CrosswordOptions) -> Self {
        let validation = validate_clues(records);
        let clues: Vec<ClueDefinition> = records
            .iter()
            .map(ClueDefinition::from_value_lossy)
            .collect();
        Self::build(&clues, options, validation)
    }

    /// Parse a JSON array of clue records and build a puzzle from it.
    ///
    /// Only unparseable JSON is an error; malformed records go through
    /// [`Puzzle::from_values`].
    pub fn from_json(json: &str, options: CrosswordOptions) -> Result<Self> {
        let records: Vec<Value> = serde_json::from_str(json)?;
        Ok(Self::from_values(&records, options))
    }

    fn build(clues: &[ClueDefinition], options: CrosswordOptions, validation: Validation) -> Self {
        let clues = number_clues(clues);
        let grid = Grid::new(&clues);
        debug!(
            clues = clues.len(),
            cells = grid.len(),
            valid = validation.is_valid(),
            "puzzle built"
        );
        let mut puzzle = Self {
            clues,
            grid,
            options,
            validation,
            focused_cell_index: 0,
            focused_direction: Direction::Across,
            secondary: Vec::new(),
            history: History::new(),
            pulse: RevealPulse::new(),
            revealed: false,
            completion_shown: false,
            events: Vec::new(),
            scheduler: RenderScheduler::new(),
        };
        if puzzle.options.revealed {
            puzzle.grid.fill_answers();
            puzzle.revealed = true;
        }
        puzzle.completion_shown = puzzle.show_completion();
        puzzle.refresh_secondary();
        puzzle.scheduler.mark_all();
        puzzle
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Numbered clues, in number order.
    #[must_use]
    pub fn clues(&self) -> &[NumberedClue] {
        &self.clues
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        self.grid.cells()
    }

    #[must_use]
    pub const fn options(&self) -> &CrosswordOptions {
        &self.options
    }

    /// Result of validating the records the puzzle was built from.
    #[must_use]
    pub const fn validation(&self) -> &Validation {
        &self.validation
    }

    #[must_use]
    pub const fn focused_cell_index(&self) -> usize {
        self.focused_cell_index
    }

    #[must_use]
    pub fn focused_cell(&self) -> Option<&Cell> {
        self.grid.cell(self.focused_cell_index)
    }

    #[must_use]
    pub const fn focused_direction(&self) -> Direction {
        self.focused_direction
    }

    /// Cells of the focused word.
    #[must_use]
    pub fn secondarily_focused_cells(&self) -> &[usize] {
        &self.secondary
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// A reveal pulse is running.
    #[must_use]
    pub const fn is_revealing(&self) -> bool {
        self.pulse.is_active()
    }

    /// The last reset/reveal was a reveal.
    #[must_use]
    pub const fn revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn theme_class(&self) -> String {
        self.options.theme_class()
    }

    /// Toolbar buttons to show.
    #[must_use]
    pub fn toolbar_actions(&self) -> Vec<ToolbarAction> {
        visible_actions(&self.options)
    }

    /// Share of cells whose value matches the answer; 0 for an empty grid.
    #[must_use]
    pub fn percent_correct(&self) -> f64 {
        let total = self.grid.len();
        if total == 0 {
            return 0.0;
        }
        let correct = self.cells().iter().filter(|cell| cell.is_correct()).count();
        correct as f64 / total as f64
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.grid.is_empty() && self.cells().iter().all(Cell::is_correct)
    }

    /// Whether the view should show the completion overlay.
    #[must_use]
    pub fn show_completion(&self) -> bool {
        self.is_complete() && !self.is_revealing()
    }

    // ------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------

    /// Write `value` into cell `index` and move focus by `advance_by`.
    ///
    /// The new grid is recorded in the history. Focus advances through the
    /// cells in typing order; when the cell was empty before the edit, cells
    /// that already hold a letter are skipped. An `advance_by` of 0 keeps
    /// focus in place.
    pub fn update(&mut self, index: usize, value: &str, advance_by: i32) {
        let Some(cell) = self.grid.cell(index) else {
            return;
        };
        let replace_filled = cell.is_filled();
        let target = focus::advance_target(
            self.grid.cells(),
            self.focused_cell_index,
            self.focused_direction,
            advance_by,
            replace_filled,
        );

        self.grid.set_value(index, value);
        self.scheduler.mark_cell(index);
        debug!(index, value, replace_filled, "cell updated");

        if let Some(target) = target {
            self.focus_cell(target);
        }
        self.history.push(Snapshot {
            values: self.grid.values(),
            focused_cell_index: self.focused_cell_index,
        });
        self.check_completion();
    }

    /// Step through edit history: -1 undoes, +1 redoes.
    ///
    /// Restores both the cell values and the focused cell. Returns false
    /// when there is nothing in that direction.
    pub fn undo(&mut self, diff: i32) -> bool {
        let focus = match self.history.step(diff) {
            Some(snapshot) => {
                self.grid.set_values(&snapshot.values);
                snapshot.focused_cell_index
            }
            None => return false,
        };
        debug!(diff, cursor = self.history.cursor(), "history step");
        self.scheduler.mark_all();
        if self.grid.cell(focus).is_some() {
            self.set_focus(focus);
        }
        self.check_completion();
        true
    }

    /// Clear every cell and start the reveal pulse.
    pub fn reset(&mut self) {
        self.reset_at(Instant::now());
    }

    pub fn reset_at(&mut self, now: Instant) {
        self.grid.clear_values();
        self.revealed = false;
        self.start_pulse(now);
        debug!("puzzle reset");
    }

    /// Fill every cell with its answer and start the reveal pulse.
    pub fn reveal(&mut self) {
        self.reveal_at(Instant::now());
    }

    pub fn reveal_at(&mut self, now: Instant) {
        self.grid.fill_answers();
        self.revealed = true;
        self.start_pulse(now);
        debug!("puzzle revealed");
    }

    /// Set the externally bound revealed flag.
    ///
    /// Turning it on reveals the puzzle; turning it off only clears the flag.
    pub fn set_revealed(&mut self, revealed: bool) {
        if revealed && !self.revealed {
            self.reveal();
        } else {
            self.revealed = revealed;
        }
    }

    /// Advance timers. Returns true when the reveal pulse ended.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.pulse.poll(now) {
            self.scheduler.mark_all();
            self.check_completion();
            return true;
        }
        false
    }

    fn start_pulse(&mut self, now: Instant) {
        self.pulse.start(now, self.options.reveal_duration);
        self.scheduler.mark_all();
        self.check_completion();
    }

    fn check_completion(&mut self) {
        let shown = self.show_completion();
        if shown && !self.completion_shown {
            self.push_event(WidgetEvent::Complete);
        }
        self.completion_shown = shown;
    }

    // ------------------------------------------------------------------
    // Focus
    // ------------------------------------------------------------------

    /// Focus cell `index`; focusing the focused cell flips direction.
    pub fn focus_cell(&mut self, index: usize) {
        if self.grid.cell(index).is_none() {
            return;
        }
        if index == self.focused_cell_index {
            self.flip_direction();
        } else {
            self.set_focus(index);
        }
    }

    /// Jump `diff` clues forward or back in the focused direction.
    ///
    /// Past the last clue, direction flips and focus goes to the first clue
    /// of the new direction.
    pub fn focus_clue_diff(&mut self, diff: i32) {
        if diff == 0 {
            return;
        }
        let direction = self.focused_direction;
        let current = self
            .focused_cell()
            .and_then(|cell| cell.clue_numbers.get(direction));

        let mut candidates: Vec<&NumberedClue> = match current {
            Some(current) => self
                .clues
                .iter()
                .filter(|clue| clue.direction() == direction)
                .filter(|clue| {
                    if diff > 0 {
                        clue.number > current
                    } else {
                        clue.number < current
                    }
                })
                .collect(),
            None => Vec::new(),
        };
        if diff < 0 {
            candidates.reverse();
        }

        let next = candidates
            .get(diff.unsigned_abs() as usize - 1)
            .map(|clue| clue.start());
        let start = match next {
            Some(start) => Some(start),
            None => {
                let flipped = direction.flipped();
                self.set_direction(flipped);
                self.clues
                    .iter()
                    .find(|clue| clue.direction() == flipped)
                    .map(NumberedClue::start)
            }
        };
        if let Some(index) = start.and_then(|coord| self.grid.index_of(coord)) {
            self.set_focus(index);
        }
    }

    /// Focus a clue from the clue list: take its direction and its start cell.
    pub fn focus_clue(&mut self, number: u32, direction: Direction) {
        let Some(start) = self
            .clues
            .iter()
            .find(|clue| clue.number == number && clue.direction() == direction)
            .map(NumberedClue::start)
        else {
            return;
        };
        self.set_direction(direction);
        let index = self.grid.index_of(start).unwrap_or(0);
        self.set_focus(index);
    }

    /// Arrow-key movement.
    ///
    /// Moving along the other axis only switches direction; moving along the
    /// focused axis goes `diff` cells over, skipping blocked squares.
    pub fn move_focus(&mut self, direction: Direction, diff: i32) {
        if direction != self.focused_direction {
            self.set_direction(direction);
            return;
        }
        let target = self.focused_cell().and_then(|focused| {
            focus::cell_after_diff(self.grid.cells(), focused, direction, diff).map(|cell| cell.index)
        });
        if let Some(target) = target {
            self.focus_cell(target);
        }
    }

    /// Swap between across and down in place.
    pub fn flip_direction(&mut self) {
        self.set_direction(self.focused_direction.flipped());
    }

    fn set_focus(&mut self, index: usize) {
        if index == self.focused_cell_index {
            return;
        }
        debug!(from = self.focused_cell_index, to = index, "focus moved");
        self.scheduler.mark_cell(self.focused_cell_index);
        self.focused_cell_index = index;
        self.scheduler.mark_cell(index);
        self.refresh_secondary();
    }

    fn set_direction(&mut self, direction: Direction) {
        if direction == self.focused_direction {
            return;
        }
        debug!(direction = %direction, "direction changed");
        self.focused_direction = direction;
        self.refresh_secondary();
    }

    fn refresh_secondary(&mut self) {
        let previous = std::mem::take(&mut self.secondary);
        self.scheduler.mark_cells(previous);
        if let Some(focused) = self.grid.cell(self.focused_cell_index) {
            self.secondary =
                focus::secondarily_focused_cells(self.grid.cells(), focused, self.focused_direction);
        }
        self.scheduler.mark_cells(self.secondary.iter().copied());
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Handle a key pressed while the grid has focus.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        let Some((command, propagation)) = command_for_key(&key) else {
            return KeyOutcome::IGNORED;
        };
        self.apply(command);
        KeyOutcome::handled(propagation)
    }

    /// Handle any input event.
    pub fn handle_event(&mut self, event: Event) -> KeyOutcome {
        match event {
            Event::Key(key) => return self.handle_key(key),
            Event::CellClick { index } => self.focus_cell(index),
            Event::ClueClick { number, direction } => self.focus_clue(number, direction),
            Event::Toolbar(action) => self.dispatch_toolbar(action),
        }
        KeyOutcome::handled(Propagation::empty())
    }

    /// Run a toolbar action and announce it as a named event.
    pub fn dispatch_toolbar(&mut self, action: ToolbarAction) {
        match action {
            ToolbarAction::Reset => {
                self.push_event(WidgetEvent::Reset);
                self.reset();
            }
            ToolbarAction::Reveal => {
                self.push_event(WidgetEvent::Reveal);
                self.reveal();
            }
        }
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::History(diff) => {
                self.undo(diff);
            }
            Command::FocusClueDiff(diff) => self.focus_clue_diff(diff),
            Command::FlipDirection => self.flip_direction(),
            Command::Clear => self.update(self.focused_cell_index, "", 0),
            Command::Type(c) => {
                let mut buf = [0u8; 4];
                self.update(self.focused_cell_index, c.encode_utf8(&mut buf), 1);
            }
            Command::Move(direction, diff) => self.move_focus(direction, diff),
        }
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// View data for every cell, in index order.
    #[must_use]
    pub fn cell_views(&self) -> Vec<CellView> {
        let revealing = self.is_revealing();
        let count = self.grid.len();
        self.cells()
            .iter()
            .map(|cell| CellView {
                index: cell.index,
                x: cell.x,
                y: cell.y,
                value: cell.value.clone(),
                number: cell.number,
                custom: cell.custom.clone(),
                is_focused: cell.index == self.focused_cell_index,
                is_secondarily_focused: self.secondary.contains(&cell.index),
                change_delay: if revealing {
                    change_delay(self.options.reveal_duration, count, cell.index)
                } else {
                    std::time::Duration::ZERO
                },
            })
            .collect()
    }

    /// View data for the clue list of one direction.
    #[must_use]
    pub fn clue_views(&self, direction: Direction) -> Vec<ClueView> {
        let focused_number = self
            .focused_cell()
            .and_then(|cell| cell.clue_numbers.get(direction));
        self.clues
            .iter()
            .filter(|clue| clue.direction() == direction)
            .map(|clue| ClueView {
                number: clue.number,
                direction,
                clue: clue.clue().to_string(),
                custom: clue.definition.custom.clone().unwrap_or_default(),
                is_number_focused: focused_number == Some(clue.number),
                is_direction_focused: self.focused_direction == direction,
            })
            .collect()
    }

    /// Drain the widget events raised since the last call, oldest first.
    pub fn take_events(&mut self) -> Vec<WidgetEvent> {
        std::mem::take(&mut self.events)
    }

    fn push_event(&mut self, event: WidgetEvent) {
        debug!(event = %event, "widget event");
        self.events.push(event);
    }

    /// Drain the changes since the last frame.
    pub fn take_frame(&mut self) -> Option<RenderFrame> {
        self.scheduler.take_frame()
    }

    /// Render pending changes, if any. Returns true when a frame was drawn.
    pub fn render_with<R: GridRenderer>(&mut self, renderer: &mut R) -> bool {
        match self.take_frame() {
            Some(frame) => {
                renderer.render(self, &frame);
                true
            }
            None => false,
        }
    }
}

//! Bounded undo/redo history of grid snapshots.
//!
//! Each edit records the full set of cell values together with the focused
//! cell index. The newest snapshot is at position 0 and the cursor points at
//! the snapshot currently shown; stepping back (undo) moves the cursor to
//! older entries, stepping forward (redo) to newer ones. A new edit while
//! the cursor is not at 0 discards the newer entries.

use std::collections::VecDeque;

/// Default number of snapshots kept.
pub const DEFAULT_MAX_HISTORY_DEPTH: usize = 10;

/// Cell values and focus at one point in time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub values: Vec<String>,
    pub focused_cell_index: usize,
}

/// Snapshot ring with a movable cursor.
#[derive(Clone, Debug)]
pub struct History {
    entries: VecDeque<Snapshot>,
    cursor: usize,
    /// Oldest entries are dropped beyond this length.
    max_depth: usize,
}

impl Default for History {
    fn default() -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: 0,
            max_depth: DEFAULT_MAX_HISTORY_DEPTH,
        }
    }
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history with a custom maximum depth.
    #[must_use]
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: max_depth.max(1),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Record a new snapshot, dropping any redo entries.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.drain(..self.cursor.min(self.entries.len()));
        self.entries.push_front(snapshot);
        self.entries.truncate(self.max_depth);
        self.cursor = 0;
    }

    /// Move `diff` steps in time (negative is undo) and return the snapshot
    /// there. Out of range leaves the cursor where it was.
    pub fn step(&mut self, diff: i32) -> Option<&Snapshot> {
        let target = self.cursor.checked_add_signed(-(diff as isize))?;
        if target == self.cursor || target >= self.entries.len() {
            return None;
        }
        self.cursor = target;
        self.entries.get(target)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    #[must_use]
    pub const fn can_redo(&self) -> bool {
        self.cursor > 0
    }

    /// Position of the shown snapshot; 0 is the newest.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(tag: &str, focus: usize) -> Snapshot {
        Snapshot {
            values: vec![tag.to_string()],
            focused_cell_index: focus,
        }
    }

    #[test]
    fn test_undo_redo() {
        let mut history = History::new();
        history.push(snap("a", 1));
        history.push(snap("b", 2));
        history.push(snap("c", 3));

        assert_eq!(history.step(-1), Some(&snap("b", 2)));
        assert_eq!(history.step(-1), Some(&snap("a", 1)));
        assert!(history.step(-1).is_none());
        assert_eq!(history.cursor(), 2);

        assert_eq!(history.step(1), Some(&snap("b", 2)));
        assert_eq!(history.step(1), Some(&snap("c", 3)));
        assert!(history.step(1).is_none());
        assert!(history.step(0).is_none());
    }

    #[test]
    fn test_push_discards_redo_entries() {
        let mut history = History::new();
        history.push(snap("a", 0));
        history.push(snap("b", 0));
        history.push(snap("c", 0));
        history.step(-2);
        history.push(snap("d", 0));

        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), 0);
        assert!(!history.can_redo());
        assert_eq!(history.step(-1), Some(&snap("a", 0)));
    }

    #[test]
    fn test_history_depth_limit() {
        let mut history = History::new();
        for i in 0..25 {
            history.push(snap(&i.to_string(), i));
        }
        assert_eq!(history.len(), DEFAULT_MAX_HISTORY_DEPTH);

        let mut oldest = None;
        while let Some(s) = history.step(-1) {
            oldest = Some(s.clone());
        }
        assert_eq!(oldest, Some(snap("15", 15)));
        assert!(!history.can_undo());
    }

    #[test]
    fn test_custom_depth_and_clear() {
        let mut history = History::with_max_depth(2);
        history.push(snap("a", 0));
        history.push(snap("b", 0));
        history.push(snap("c", 0));
        assert_eq!(history.len(), 2);
        assert_eq!(history.max_depth(), 2);
        history.clear();
        assert!(history.is_empty());
        assert!(!history.can_undo());
    }
}

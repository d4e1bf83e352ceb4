//! Post-append focus transfer.
//!
//! Appending a row should leave the caret in the new row's first editable
//! cell, but the editor for that cell only exists after the next render has
//! mounted it. The [`Coordinator`] records the intent when the row is
//! appended and resolves it exactly once after the following render, using a
//! registry of mounted cell editors keyed by position.
//!
//! Any other table mutation cancels a pending intent, so an edit or a
//! removal landing between the append and the render never moves focus.

use super::columns::FIRST_EDITABLE_COLUMN;
use std::collections::HashMap;
use tracing::trace;

/// A cell position in the grid: row index and column index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    /// Row index.
    pub row: usize,
    /// Column index into the column model.
    pub col: usize,
}

impl CellPos {
    /// Creates a position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Handle of a mounted cell editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub usize);

/// Whether a focus transfer is waiting for the next render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusIntent {
    /// Nothing to do after render.
    #[default]
    Idle,
    /// Focus the last row's first editable cell after the next render.
    PendingFocus,
}

/// Mounted cell editors by position. Holds nothing for unmounted cells.
#[derive(Debug, Clone, Default)]
struct Registry {
    entries: HashMap<CellPos, ElementId>,
}

impl Registry {
    fn mount(&mut self, pos: CellPos, id: ElementId) {
        self.entries.insert(pos, id);
    }

    fn unmount(&mut self, pos: CellPos) {
        self.entries.remove(&pos);
    }

    fn lookup(&self, pos: CellPos) -> Option<ElementId> {
        self.entries.get(&pos).copied()
    }
}

/// Tracks the focus intent and the editor registry it resolves against.
#[derive(Debug, Clone, Default)]
pub struct Coordinator {
    intent: FocusIntent,
    registry: Registry,
}

impl Coordinator {
    /// A coordinator with no pending intent and nothing mounted.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current intent.
    pub fn intent(&self) -> FocusIntent {
        self.intent
    }

    /// Records that the next render should move focus to the new last row.
    pub fn request(&mut self) {
        self.intent = FocusIntent::PendingFocus;
    }

    /// Drops any pending intent.
    pub fn cancel(&mut self) {
        if self.intent == FocusIntent::PendingFocus {
            trace!("pending focus cancelled");
        }
        self.intent = FocusIntent::Idle;
    }

    /// Notes that an editor was mounted at `pos`.
    pub fn mounted(&mut self, pos: CellPos, id: ElementId) {
        trace!(row = pos.row, col = pos.col, id = id.0, "editor mounted");
        self.registry.mount(pos, id);
    }

    /// Notes that the editor at `pos` went away.
    pub fn unmounted(&mut self, pos: CellPos) {
        trace!(row = pos.row, col = pos.col, "editor unmounted");
        self.registry.unmount(pos);
    }

    /// Number of mounted editors.
    pub fn mounted_count(&self) -> usize {
        self.registry.entries.len()
    }

    /// Resolves the intent after a render of a table with `len` rows.
    ///
    /// Returns the editor to focus when a transfer was pending and the target
    /// cell is mounted. The intent is back to [`FocusIntent::Idle`]
    /// afterwards either way.
    pub fn after_render(&mut self, len: usize) -> Option<ElementId> {
        if std::mem::take(&mut self.intent) == FocusIntent::Idle {
            return None;
        }
        let last = len.checked_sub(1)?;
        let target = self
            .registry
            .lookup(CellPos::new(last, FIRST_EDITABLE_COLUMN));
        if target.is_none() {
            trace!(row = last, "focus target not mounted");
        }
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted(rows: usize) -> Coordinator {
        let mut c = Coordinator::new();
        for row in 0..rows {
            for col in 0..3 {
                c.mounted(CellPos::new(row, col), ElementId(row * 10 + col));
            }
        }
        c
    }

    #[test]
    fn test_idle_does_nothing() {
        let mut c = mounted(2);
        assert_eq!(c.intent(), FocusIntent::Idle);
        assert_eq!(c.after_render(2), None);
    }

    #[test]
    fn test_pending_resolves_once() {
        let mut c = mounted(3);
        c.request();
        assert_eq!(c.intent(), FocusIntent::PendingFocus);
        assert_eq!(c.after_render(3), Some(ElementId(20)));
        assert_eq!(c.intent(), FocusIntent::Idle);
        assert_eq!(c.after_render(3), None);
    }

    #[test]
    fn test_cancel_drops_intent() {
        let mut c = mounted(3);
        c.request();
        c.cancel();
        assert_eq!(c.after_render(3), None);
    }

    #[test]
    fn test_missing_target_goes_idle() {
        let mut c = mounted(2);
        c.request();
        assert_eq!(c.after_render(3), None);
        assert_eq!(c.intent(), FocusIntent::Idle);

        c.request();
        assert_eq!(c.after_render(0), None);
        assert_eq!(c.intent(), FocusIntent::Idle);
    }

    #[test]
    fn test_unmount_removes_entry() {
        let mut c = mounted(2);
        assert_eq!(c.mounted_count(), 6);
        for col in 0..3 {
            c.unmounted(CellPos::new(1, col));
        }
        assert_eq!(c.mounted_count(), 3);
        c.request();
        assert_eq!(c.after_render(2), None);
    }
}

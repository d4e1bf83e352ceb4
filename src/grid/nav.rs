//! Keyboard focus targets and how focus moves between them.
//!
//! Focus order is row-major: the three editable cells of a row, then its
//! remove control, then the next row. The add control comes last. Moving
//! past either end wraps around.

use super::columns::{ColumnKind, COLUMNS};
use super::focus::CellPos;

/// An element that can hold keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// An editable cell.
    Cell(CellPos),
    /// The remove control of a row.
    Remove(usize),
    /// The add-row control in the footer.
    Add,
}

impl Target {
    /// The row this target belongs to, if any.
    pub fn row(self) -> Option<usize> {
        match self {
            Target::Cell(pos) => Some(pos.row),
            Target::Remove(row) => Some(row),
            Target::Add => None,
        }
    }

    /// Whether the target still exists in a table of `len` rows.
    pub fn exists(self, len: usize) -> bool {
        self.row().map_or(true, |row| row < len)
    }
}

fn targets_in_row(row: usize) -> impl Iterator<Item = Target> {
    COLUMNS.iter().enumerate().map(move |(col, column)| match column.kind {
        ColumnKind::Data(_) => Target::Cell(CellPos::new(row, col)),
        ColumnKind::Remove => Target::Remove(row),
    })
}

/// Every focusable target for a table of `len` rows, in tab order.
pub fn order(len: usize) -> Vec<Target> {
    (0..len)
        .flat_map(targets_in_row)
        .chain(std::iter::once(Target::Add))
        .collect()
}

/// The target after `current`; the first target when nothing is focused.
pub fn next(current: Option<Target>, len: usize) -> Target {
    let order = order(len);
    let idx = current
        .and_then(|t| order.iter().position(|o| *o == t))
        .map_or(0, |i| (i + 1) % order.len());
    order[idx]
}

/// The target before `current`; the last target when nothing is focused.
pub fn prev(current: Option<Target>, len: usize) -> Target {
    let order = order(len);
    let idx = current
        .and_then(|t| order.iter().position(|o| *o == t))
        .map_or(order.len() - 1, |i| (i + order.len() - 1) % order.len());
    order[idx]
}

/// The same column one row up. The add control goes to the last row's
/// remove control.
pub fn up(current: Target, len: usize) -> Target {
    match current {
        Target::Cell(pos) if pos.row > 0 => Target::Cell(CellPos::new(pos.row - 1, pos.col)),
        Target::Remove(row) if row > 0 => Target::Remove(row - 1),
        Target::Add if len > 0 => Target::Remove(len - 1),
        other => other,
    }
}

/// The same column one row down. Moving down from the last row reaches the
/// add control.
pub fn down(current: Target, len: usize) -> Target {
    match current {
        Target::Cell(pos) if pos.row + 1 < len => Target::Cell(CellPos::new(pos.row + 1, pos.col)),
        Target::Remove(row) if row + 1 < len => Target::Remove(row + 1),
        _ => Target::Add,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: usize, col: usize) -> Target {
        Target::Cell(CellPos::new(row, col))
    }

    #[test]
    fn test_order() {
        assert_eq!(order(0), vec![Target::Add]);
        assert_eq!(
            order(1),
            vec![cell(0, 0), cell(0, 1), cell(0, 2), Target::Remove(0), Target::Add]
        );
        assert_eq!(order(2).len(), 9);
    }

    #[test]
    fn test_next_and_prev_wrap() {
        assert_eq!(next(None, 2), cell(0, 0));
        assert_eq!(next(Some(cell(0, 2)), 2), Target::Remove(0));
        assert_eq!(next(Some(Target::Remove(0)), 2), cell(1, 0));
        assert_eq!(next(Some(Target::Add), 2), cell(0, 0));

        assert_eq!(prev(None, 2), Target::Add);
        assert_eq!(prev(Some(cell(0, 0)), 2), Target::Add);
        assert_eq!(prev(Some(Target::Add), 2), Target::Remove(1));
    }

    #[test]
    fn test_next_from_stale_target_restarts() {
        assert_eq!(next(Some(cell(5, 0)), 2), cell(0, 0));
    }

    #[test]
    fn test_up_and_down() {
        assert_eq!(up(cell(1, 2), 2), cell(0, 2));
        assert_eq!(up(cell(0, 2), 2), cell(0, 2));
        assert_eq!(up(Target::Add, 2), Target::Remove(1));
        assert_eq!(up(Target::Add, 0), Target::Add);

        assert_eq!(down(cell(0, 1), 2), cell(1, 1));
        assert_eq!(down(cell(1, 1), 2), Target::Add);
        assert_eq!(down(Target::Remove(1), 2), Target::Add);
        assert_eq!(down(Target::Add, 2), Target::Add);
    }

    #[test]
    fn test_target_exists() {
        assert!(Target::Add.exists(0));
        assert!(cell(1, 0).exists(2));
        assert!(!Target::Remove(2).exists(2));
    }
}

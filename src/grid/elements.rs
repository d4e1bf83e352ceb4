//! Cell editors mounted for the rows currently on screen.
//!
//! Editors are matched to rows by position. After a removal the editors of
//! later rows stay where they are and pick up the shifted values through
//! [`input::Model::sync`]; only the trailing editors are dropped.

use super::focus::{CellPos, ElementId};
use super::render::{CellView, GridView, Layout};
use crate::input;

/// Change to the set of mounted editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountEvent {
    /// An editor appeared at a position.
    Mounted(CellPos, ElementId),
    /// The editor at a position went away.
    Unmounted(CellPos),
}

#[derive(Debug, Clone, Default)]
struct MountedRow {
    cells: Vec<(usize, input::Model)>,
}

/// Mounted editors, one row of editors per table row.
#[derive(Debug, Clone, Default)]
pub struct Editors {
    rows: Vec<MountedRow>,
}

impl Editors {
    /// Number of mounted rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether nothing is mounted.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The editor at `pos`.
    pub fn get(&self, pos: CellPos) -> Option<&input::Model> {
        self.rows
            .get(pos.row)?
            .cells
            .iter()
            .find(|(col, _)| *col == pos.col)
            .map(|(_, cell)| cell)
    }

    /// The editor at `pos`, mutably.
    pub fn get_mut(&mut self, pos: CellPos) -> Option<&mut input::Model> {
        self.rows
            .get_mut(pos.row)?
            .cells
            .iter_mut()
            .find(|(col, _)| *col == pos.col)
            .map(|(_, cell)| cell)
    }

    /// Where the editor with `id` is mounted.
    pub fn find(&self, id: ElementId) -> Option<CellPos> {
        self.rows.iter().enumerate().find_map(|(row, mounted)| {
            mounted
                .cells
                .iter()
                .find(|(_, cell)| cell.id() == id.0)
                .map(|(col, _)| CellPos::new(row, *col))
        })
    }

    /// Brings the mounted editors in line with a freshly derived view.
    ///
    /// Returns the mounts and unmounts that happened, in order.
    pub fn reconcile(&mut self, view: &GridView, layout: &Layout) -> Vec<MountEvent> {
        let mut events = Vec::new();

        while self.rows.len() > view.body.len() {
            let row = self.rows.len() - 1;
            if let Some(gone) = self.rows.pop() {
                events.extend(
                    gone.cells
                        .iter()
                        .map(|(col, _)| MountEvent::Unmounted(CellPos::new(row, *col))),
                );
            }
        }

        for (row, row_view) in view.body.iter().enumerate() {
            if row == self.rows.len() {
                self.rows.push(MountedRow::default());
            }
            let mounted = &mut self.rows[row];
            for cell in &row_view.cells {
                let CellView::Input { pos, value, .. } = cell else {
                    continue;
                };
                let width = layout.width(pos.col);
                match mounted.cells.iter().position(|(col, _)| *col == pos.col) {
                    Some(i) => {
                        let editor = &mut mounted.cells[i].1;
                        editor.sync(value);
                        editor.set_width(width);
                    }
                    None => {
                        let mut editor = input::new(value.as_str());
                        editor.set_width(width);
                        events.push(MountEvent::Mounted(*pos, ElementId(editor.id())));
                        mounted.cells.push((pos.col, editor));
                    }
                }
            }
        }

        events
    }
}
